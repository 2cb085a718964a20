//! # Error Types
//!
//! This module defines error types used throughout the estampa library.

use thiserror::Error;

/// Main error type for estampa operations
#[derive(Debug, Error)]
pub enum EstampaError {
    /// A page cannot hold the requested lines
    #[error("Capacity error: {0}")]
    Capacity(String),

    /// 1-based line lookup outside the page
    #[error("Line number [{line_number}] is out of range (page has {number_of_lines} lines)")]
    Range {
        line_number: usize,
        number_of_lines: usize,
    },

    /// Unrecognized or malformed setting value
    #[error("Invalid setting: {0}")]
    Validation(String),

    /// Template document could not be parsed
    #[error("Template error: {0}")]
    Template(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for EstampaError {
    fn from(e: serde_json::Error) -> Self {
        EstampaError::Template(e.to_string())
    }
}

//! # ESC/P Protocol Implementation
//!
//! This module provides the command builders for the Epson ESC/P protocol
//! used by dot-matrix printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: Control codes and single ESC/P commands
//! - [`format`]: Page setup builder producing the payload prefix
//!
//! ## Usage Example
//!
//! ```
//! use estampa::protocol::{commands, format::PageFormat};
//!
//! let mut data = PageFormat::new().page_length(66).build()?;
//! data.extend(b"INVOICE\r\n");
//! data.push(commands::FF);
//! # Ok::<(), estampa::EstampaError>(())
//! ```
//!
//! ## Protocol Reference
//!
//! This implementation is based on the "ESC/P Reference Manual"
//! by Seiko Epson Corporation.

pub mod commands;
pub mod format;

//! # Estampa - ESC/P Template Rendering
//!
//! Estampa turns text templates into print jobs for dot-matrix printers
//! speaking Epson's ESC/P protocol. It provides:
//!
//! - **Protocol implementation**: ESC/P command builders and a page format
//!   builder producing the job prefix
//! - **Page model**: pages with header, content and footer, capacity checks
//!   and 1-based line addressing
//! - **Templates**: `${name}` placeholder scanning and substitution, JSON
//!   template documents
//! - **Reports**: pagination and the final printer payload
//!
//! ## Quick Start
//!
//! ```
//! use std::collections::HashMap;
//! use estampa::template::Template;
//!
//! let template = Template::from_json(r#"{
//!     "pageFormat": {"pageLength": 10, "autoFormFeed": false},
//!     "template": ["Your id is ${id}, Mr. ${nickname}."]
//! }"#)?;
//!
//! let values = HashMap::from([
//!     ("id".to_string(), "7".to_string()),
//!     ("nickname".to_string(), "Smith".to_string()),
//! ]);
//!
//! let payload = template.fill(&values)?.render()?;
//! assert_eq!(payload, b"\x1b@\x1bC\x0aYour id is 7, Mr. Smith.\r\n".to_vec());
//!
//! // Write `payload` to the printer device or a spool file...
//! # Ok::<(), estampa::error::EstampaError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | ESC/P command builders |
//! | [`page`] | Pages and lines |
//! | [`template`] | Placeholders and JSON templates |
//! | [`report`] | Pagination and payload rendering |
//! | [`error`] | Error types |

pub mod error;
pub mod page;
pub mod protocol;
pub mod report;
pub mod template;

// Re-exports for convenience
pub use error::EstampaError;
pub use page::{Line, Page, TextLine};
pub use protocol::format::PageFormat;
pub use report::Report;
pub use template::Template;

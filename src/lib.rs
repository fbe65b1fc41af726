// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # PDF Scanner
//!
//! Keyword scanning for paginated documents, with highlight geometry
//! reconstructed from the text fragments a page decoder produces.
//!
//! ## Core Features
//!
//! - **Page Index**: joins a page's fragments into one search string and keeps
//!   a per-character map back to the fragment and offset each character came from
//! - **Highlight Geometry**: turns a match in that string into one rectangle
//!   per touched fragment, split at fragment boundaries
//! - **Pluggable Matching**: literal, case-insensitive keyword search by
//!   default, any [`search::KeywordMatcher`] otherwise
//! - **Document Scanning**: per-page keyword hits with context snippets and
//!   raster-image page flags, aggregated into a [`scanner::ScanReport`]
//!
//! Decoding documents into fragments is left to a [`document::PageSource`]
//! implementation. Drawing highlights and exporting reports are left to the host.
//!
//! ## Quick Start
//!
//! ```
//! use pdf_scanner::config::ScanConfig;
//! use pdf_scanner::document::{MemoryDocument, PageContent};
//! use pdf_scanner::layout::TextFragment;
//! use pdf_scanner::scanner::DocumentScanner;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = MemoryDocument::new(vec![PageContent::new(vec![
//!     TextFragment::new("tibet is", 0.0, 100.0, 80.0, 10.0),
//!     TextFragment::new("remote", 90.0, 100.0, 60.0, 10.0),
//! ])]);
//!
//! let report = DocumentScanner::new(ScanConfig::default()).scan(&doc)?;
//! for hit in report.keyword_hits() {
//!     println!("'{}' on page {}: {:?}", hit.matched.keyword, hit.matched.page, hit.rects);
//! }
//! println!("{}", report.summary());
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Page input
pub mod geometry;
pub mod layout;

// Keyword search and highlight geometry
pub mod search;

// Document scanning
pub mod config;
pub mod document;
pub mod scanner;

// Re-exports
pub use config::{KeywordList, ScanConfig};
pub use document::{MemoryDocument, PageContent, PageSource};
pub use error::{Error, Result};
pub use geometry::Rect;
pub use layout::TextFragment;
pub use scanner::{DocumentScanner, Finding, ScanReport, ScanSummary};
pub use search::{build_page_index, resolve_match_rects, PageIndex, PositionEntry};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

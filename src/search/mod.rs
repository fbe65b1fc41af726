//! Keyword search with highlight geometry.
//!
//! The pieces, leaf first:
//! - [`build_page_index`]: joins a page's fragments into one search string and
//!   maps every character back to its fragment
//! - [`resolve_match_rects`]: turns a character range of that string into
//!   highlight rectangles, split at fragment boundaries
//! - [`KeywordMatcher`]: pluggable matching engine, [`RegexMatcher`] by default
//! - [`TextSearcher`]: runs the above for every keyword on one page
//!
//! ## Example
//!
//! ```
//! use pdf_scanner::layout::TextFragment;
//! use pdf_scanner::search::{RegexMatcher, SearchOptions, TextSearcher};
//!
//! let fragments = vec![
//!     TextFragment::new("tibet is", 0.0, 100.0, 80.0, 10.0),
//!     TextFragment::new("remote", 90.0, 100.0, 60.0, 10.0),
//! ];
//! let matcher = RegexMatcher::new(SearchOptions::default());
//! let result = TextSearcher::search_page(1, &fragments, &["is remote"], &matcher, 60).unwrap();
//!
//! assert_eq!(result.hits.len(), 1);
//! assert_eq!(result.hits[0].rects.len(), 2);
//! ```

mod geometry_resolver;
mod matcher;
mod page_index;
mod text_search;

pub use geometry_resolver::resolve_match_rects;
pub use matcher::{KeywordMatcher, RegexMatcher, SearchOptions, TextMatch};
pub use page_index::{build_page_index, PageIndex, PositionEntry, FRAGMENT_SEPARATOR};
pub use text_search::{KeywordHit, Match, PageSearchResult, TextSearcher, CONTEXT_ELLIPSIS};

//! Flat search text for a page with a per-character map back to fragments.
//!
//! Keyword search runs over a single string, but highlights have to be drawn
//! on the fragments the string was assembled from. [`build_page_index`] joins
//! the fragments with one synthetic space between neighbours and records, for
//! every character of the joined string, where it came from.

use crate::layout::TextFragment;
use serde::{Deserialize, Serialize};

/// Character inserted between consecutive fragments.
pub const FRAGMENT_SEPARATOR: char = ' ';

/// Origin of one character of the page text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionEntry {
    /// Synthetic separator with no backing fragment
    Separator,
    /// Character `char_offset` of fragment `fragment_index`
    Fragment {
        /// Index into the page's fragment list
        fragment_index: usize,
        /// Character offset within the fragment's text
        char_offset: usize,
    },
}

impl PositionEntry {
    /// Whether this entry is a synthetic separator.
    pub fn is_separator(&self) -> bool {
        matches!(self, PositionEntry::Separator)
    }

    /// Index of the backing fragment, if any.
    pub fn fragment_index(&self) -> Option<usize> {
        match *self {
            PositionEntry::Fragment { fragment_index, .. } => Some(fragment_index),
            PositionEntry::Separator => None,
        }
    }
}

/// Searchable text of a page plus its position map.
///
/// `page_text().chars().count() == positions().len()` always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageIndex {
    page_text: String,
    positions: Vec<PositionEntry>,
}

impl PageIndex {
    /// Concatenated page text.
    pub fn page_text(&self) -> &str {
        &self.page_text
    }

    /// One entry per character of [`page_text`](Self::page_text).
    pub fn positions(&self) -> &[PositionEntry] {
        &self.positions
    }

    /// Number of characters in the page text.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the page produced no text at all.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Split into the page text and position map.
    pub fn into_parts(self) -> (String, Vec<PositionEntry>) {
        (self.page_text, self.positions)
    }
}

/// Build the search text and position map for a page.
///
/// # Examples
///
/// ```
/// use pdf_scanner::layout::TextFragment;
/// use pdf_scanner::search::{build_page_index, PositionEntry};
///
/// let fragments = vec![
///     TextFragment::new("tibet is", 0.0, 100.0, 80.0, 10.0),
///     TextFragment::new("remote", 90.0, 100.0, 60.0, 10.0),
/// ];
/// let index = build_page_index(&fragments);
///
/// assert_eq!(index.page_text(), "tibet is remote");
/// assert_eq!(index.positions()[8], PositionEntry::Separator);
/// ```
pub fn build_page_index(fragments: &[TextFragment]) -> PageIndex {
    let capacity: usize = fragments.iter().map(|f| f.text.len() + 1).sum();
    let mut page_text = String::with_capacity(capacity);
    let mut positions = Vec::with_capacity(capacity);

    for (fragment_index, fragment) in fragments.iter().enumerate() {
        if fragment_index > 0 {
            page_text.push(FRAGMENT_SEPARATOR);
            positions.push(PositionEntry::Separator);
        }
        for (char_offset, ch) in fragment.text.chars().enumerate() {
            page_text.push(ch);
            positions.push(PositionEntry::Fragment {
                fragment_index,
                char_offset,
            });
        }
    }

    PageIndex {
        page_text,
        positions,
    }
}

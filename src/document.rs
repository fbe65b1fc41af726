//! Page sources.
//!
//! Decoding a document into text fragments is done elsewhere. The scanner sees
//! a document only through [`PageSource`]: a page count, the fragments of each
//! page, and whether a page paints raster images.

use crate::error::{Error, Result};
use crate::layout::TextFragment;
use serde::{Deserialize, Serialize};

/// Access to the decoded pages of a document.
///
/// Page numbers are 1-indexed.
pub trait PageSource: Send + Sync {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Text fragments of a page, in decoder order.
    fn text_fragments(&self, page: usize) -> Result<Vec<TextFragment>>;

    /// Whether the page paints at least one raster image.
    fn has_raster_images(&self, page: usize) -> Result<bool>;
}

/// Pre-extracted content of one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
    /// Text fragments in decoder order
    #[serde(default)]
    pub fragments: Vec<TextFragment>,
    /// Page paints raster images
    #[serde(default)]
    pub has_images: bool,
}

impl PageContent {
    /// Page with text only.
    pub fn new(fragments: Vec<TextFragment>) -> Self {
        Self {
            fragments,
            has_images: false,
        }
    }

    /// Mark the page as containing raster images.
    pub fn with_images(mut self, has_images: bool) -> Self {
        self.has_images = has_images;
        self
    }
}

/// In-memory document built from already extracted pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryDocument {
    pages: Vec<PageContent>,
}

impl MemoryDocument {
    /// Create a document from its pages, first page first.
    pub fn new(pages: Vec<PageContent>) -> Self {
        Self { pages }
    }

    /// Parse a page dump: a JSON array of page objects.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_scanner::document::{MemoryDocument, PageSource};
    ///
    /// let json = r#"[
    ///     {"fragments": [{"text": "tibet", "originX": 0, "originY": 100, "width": 50, "height": 10}]},
    ///     {"hasImages": true}
    /// ]"#;
    /// let doc = MemoryDocument::from_json(json).unwrap();
    /// assert_eq!(doc.page_count(), 2);
    /// assert!(doc.has_raster_images(2).unwrap());
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let pages: Vec<PageContent> = serde_json::from_str(json)?;
        Ok(Self::new(pages))
    }

    /// Append a page.
    pub fn push_page(&mut self, page: PageContent) {
        self.pages.push(page);
    }

    fn page(&self, page: usize) -> Result<&PageContent> {
        page.checked_sub(1)
            .and_then(|idx| self.pages.get(idx))
            .ok_or(Error::PageOutOfRange {
                page,
                page_count: self.pages.len(),
            })
    }
}

impl PageSource for MemoryDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn text_fragments(&self, page: usize) -> Result<Vec<TextFragment>> {
        Ok(self.page(page)?.fragments.clone())
    }

    fn has_raster_images(&self, page: usize) -> Result<bool> {
        Ok(self.page(page)?.has_images)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MemoryDocument {
        MemoryDocument::new(vec![
            PageContent::new(vec![TextFragment::new("soviet", 0.0, 0.0, 60.0, 10.0)]),
            PageContent::default().with_images(true),
        ])
    }

    #[test]
    fn test_pages_are_one_indexed() {
        let doc = sample();
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.text_fragments(1).unwrap()[0].text, "soviet");
        assert!(doc.text_fragments(2).unwrap().is_empty());
        assert!(!doc.has_raster_images(1).unwrap());
        assert!(doc.has_raster_images(2).unwrap());
    }

    #[test]
    fn test_page_zero_out_of_range() {
        let err = sample().text_fragments(0).unwrap_err();
        assert!(matches!(
            err,
            Error::PageOutOfRange {
                page: 0,
                page_count: 2
            }
        ));
    }

    #[test]
    fn test_page_past_end_out_of_range() {
        assert!(sample().has_raster_images(3).is_err());
    }

    #[test]
    fn test_from_json_malformed() {
        let err = MemoryDocument::from_json("[{").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_push_page() {
        let mut doc = MemoryDocument::default();
        doc.push_page(PageContent::default());
        assert_eq!(doc.page_count(), 1);
    }
}

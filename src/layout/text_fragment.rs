//! Positioned text fragments as supplied by a page decoder.

use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

/// One atomic run of text as laid out on a page.
///
/// This is what a text extraction service hands over per text-showing
/// operation: the decoded string plus the origin and size of its bounding box.
/// Glyph advances are not available, so the box width is assumed to be spread
/// evenly over the characters of `text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFragment {
    /// Decoded text of the run
    pub text: String,
    /// X coordinate of the run origin
    pub origin_x: f32,
    /// Y coordinate of the run origin
    pub origin_y: f32,
    /// Width of the run's bounding box
    pub width: f32,
    /// Height of the run's bounding box
    pub height: f32,
}

impl TextFragment {
    /// Create a new fragment.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_scanner::layout::TextFragment;
    ///
    /// let fragment = TextFragment::new("tibet is", 0.0, 100.0, 80.0, 10.0);
    /// assert_eq!(fragment.char_count(), 8);
    /// assert_eq!(fragment.char_width(), 10.0);
    /// ```
    pub fn new(
        text: impl Into<String>,
        origin_x: f32,
        origin_y: f32,
        width: f32,
        height: f32,
    ) -> Self {
        Self {
            text: text.into(),
            origin_x,
            origin_y,
            width,
            height,
        }
    }

    /// Number of characters (Unicode scalar values) in the run.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Approximate advance of a single character.
    ///
    /// Empty runs are treated as one character wide so the division is always
    /// defined.
    pub fn char_width(&self) -> f32 {
        self.width / self.char_count().max(1) as f32
    }

    /// Bounding box of the whole run.
    pub fn bbox(&self) -> Rect {
        Rect::new(self.origin_x, self.origin_y, self.width, self.height)
    }
}

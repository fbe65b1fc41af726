//! Geometric primitives for highlight output.
//!
//! Rectangles live in the same coordinate space as the text fragments they are
//! computed from (page units, origin as reported by the page decoder).

use serde::{Deserialize, Serialize};

/// A rectangle in page space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X coordinate of the origin corner
    pub x: f32,
    /// Y coordinate of the origin corner
    pub y: f32,
    /// Width of rectangle
    pub width: f32,
    /// Height of rectangle
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle from position and dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_scanner::geometry::Rect;
    ///
    /// let rect = Rect::new(0.0, 100.0, 50.0, 10.0);
    /// assert_eq!(rect.width, 50.0);
    /// assert_eq!(rect.height, 10.0);
    /// ```
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from two corner points.
    pub fn from_points(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        }
    }

    /// Get the right edge x-coordinate.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the far edge y-coordinate.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Whether this rectangle has no drawable area.
    ///
    /// The geometry resolver does not filter these out; rendering consumers
    /// should skip them.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_scanner::geometry::Rect;
    ///
    /// assert!(Rect::new(10.0, 10.0, 0.0, 12.0).is_degenerate());
    /// assert!(Rect::new(10.0, 10.0, 5.0, -1.0).is_degenerate());
    /// assert!(!Rect::new(10.0, 10.0, 5.0, 12.0).is_degenerate());
    /// ```
    pub fn is_degenerate(&self) -> bool {
        // NaN compares false, so negate the positive check
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Compute the union of this rectangle with another.
    ///
    /// Returns the smallest rectangle that contains both rectangles.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_scanner::geometry::Rect;
    ///
    /// let r1 = Rect::new(0.0, 0.0, 50.0, 50.0);
    /// let r2 = Rect::new(25.0, 25.0, 50.0, 50.0);
    /// let union = r1.union(&r2);
    ///
    /// assert_eq!(union.x, 0.0);
    /// assert_eq!(union.right(), 75.0);
    /// assert_eq!(union.bottom(), 75.0);
    /// ```
    pub fn union(&self, other: &Rect) -> Rect {
        let x0 = self.x.min(other.x);
        let y0 = self.y.min(other.y);
        let x1 = self.right().max(other.right());
        let y1 = self.bottom().max(other.bottom());
        Rect::from_points(x0, y0, x1, y1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_creation() {
        let r = Rect::new(5.0, 10.0, 100.0, 50.0);
        assert_eq!(r.x, 5.0);
        assert_eq!(r.y, 10.0);
        assert_eq!(r.width, 100.0);
        assert_eq!(r.height, 50.0);
    }

    #[test]
    fn test_rect_from_points() {
        let r = Rect::from_points(10.0, 20.0, 110.0, 70.0);
        assert_eq!(r, Rect::new(10.0, 20.0, 100.0, 50.0));
    }

    #[test]
    fn test_rect_degenerate() {
        assert!(Rect::new(0.0, 0.0, 0.0, 0.0).is_degenerate());
        assert!(Rect::new(0.0, 0.0, -3.0, 10.0).is_degenerate());
        assert!(Rect::new(0.0, 0.0, 3.0, f32::NAN).is_degenerate());
        assert!(!Rect::new(-5.0, -5.0, 1.0, 1.0).is_degenerate());
    }

    #[test]
    fn test_rect_union_disjoint() {
        let r1 = Rect::new(0.0, 100.0, 20.0, 10.0);
        let r2 = Rect::new(90.0, 80.0, 60.0, 10.0);
        let union = r1.union(&r2);

        assert_eq!(union.x, 0.0);
        assert_eq!(union.y, 80.0);
        assert_eq!(union.right(), 150.0);
        assert_eq!(union.bottom(), 110.0);
    }
}

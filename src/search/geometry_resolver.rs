//! Highlight rectangles for a match in the page text.
//!
//! A match is a character range of the joined page text. Using the position
//! map from [`build_page_index`](super::build_page_index), the range is traced
//! back to the fragments it covers and converted to one rectangle per fragment.
//! Character positions inside a fragment are approximated by dividing the
//! fragment width evenly over its characters.

use crate::geometry::Rect;
use crate::layout::TextFragment;

use super::page_index::PositionEntry;

/// Resolve a match to the rectangles that cover it on the page.
///
/// `start_offset` and `length` are character offsets into the page text the
/// `positions` map was built for. `length` is the logical match length; for a
/// match inside one fragment it sets the rectangle width even when the range
/// runs past the end of the indexed text.
///
/// Returns an empty vector when the match cannot be drawn: empty map, zero
/// length, or a match that starts or ends on a separator. Matches spanning
/// several fragments produce one rectangle per fragment in the order they are
/// encountered, never merged.
///
/// # Examples
///
/// ```
/// use pdf_scanner::geometry::Rect;
/// use pdf_scanner::layout::TextFragment;
/// use pdf_scanner::search::{build_page_index, resolve_match_rects};
///
/// let fragments = vec![
///     TextFragment::new("tibet is", 0.0, 100.0, 80.0, 10.0),
///     TextFragment::new("remote", 90.0, 100.0, 60.0, 10.0),
/// ];
/// let index = build_page_index(&fragments);
///
/// let rects = resolve_match_rects(index.positions(), &fragments, 0, 5);
/// assert_eq!(rects, vec![Rect::new(0.0, 100.0, 50.0, 10.0)]);
/// ```
pub fn resolve_match_rects(
    positions: &[PositionEntry],
    fragments: &[TextFragment],
    start_offset: usize,
    length: usize,
) -> Vec<Rect> {
    if positions.is_empty() || length == 0 {
        return Vec::new();
    }

    let last = positions.len() - 1;
    let start = start_offset.min(last);
    let end = start_offset.saturating_add(length - 1).min(last);

    let (start_fragment, start_char) = match endpoint(positions[start], fragments) {
        Some(resolved) => resolved,
        None => return Vec::new(),
    };
    let (end_fragment, end_char) = match endpoint(positions[end], fragments) {
        Some(resolved) => resolved,
        None => return Vec::new(),
    };

    if start_fragment == end_fragment {
        let fragment = &fragments[start_fragment];
        let char_width = fragment.char_width();
        return vec![Rect::new(
            fragment.origin_x + start_char as f32 * char_width,
            fragment.origin_y,
            length as f32 * char_width,
            fragment.height,
        )];
    }

    let mut touched: Vec<usize> = Vec::new();
    for entry in &positions[start..=end] {
        if let Some(index) = entry.fragment_index() {
            if index < fragments.len() && !touched.contains(&index) {
                touched.push(index);
            }
        }
    }

    touched
        .into_iter()
        .map(|index| {
            let fragment = &fragments[index];
            let char_width = fragment.char_width();

            if index == start_fragment {
                let x_offset = start_char as f32 * char_width;
                Rect::new(
                    fragment.origin_x + x_offset,
                    fragment.origin_y,
                    fragment.width - x_offset,
                    fragment.height,
                )
            } else if index == end_fragment {
                Rect::new(
                    fragment.origin_x,
                    fragment.origin_y,
                    (end_char + 1) as f32 * char_width,
                    fragment.height,
                )
            } else {
                fragment.bbox()
            }
        })
        .collect()
}

/// Fragment index and char offset of a match endpoint.
///
/// Separators and entries pointing past the fragment list cannot anchor a
/// rectangle.
fn endpoint(entry: PositionEntry, fragments: &[TextFragment]) -> Option<(usize, usize)> {
    match entry {
        PositionEntry::Fragment {
            fragment_index,
            char_offset,
        } if fragment_index < fragments.len() => Some((fragment_index, char_offset)),
        _ => {
            log::trace!("Match endpoint {:?} has no backing fragment, dropping", entry);
            None
        },
    }
}

//! Per-page keyword search with highlight geometry.
//!
//! Builds the page index once, runs every keyword through a
//! [`KeywordMatcher`], and attaches a context snippet and highlight
//! rectangles to each hit.

use crate::error::Result;
use crate::geometry::Rect;
use crate::layout::TextFragment;
use serde::{Deserialize, Serialize};

use super::geometry_resolver::resolve_match_rects;
use super::matcher::KeywordMatcher;
use super::page_index::build_page_index;

/// Marker prepended or appended to a truncated context snippet.
pub const CONTEXT_ELLIPSIS: char = '…';

/// A keyword occurrence on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Keyword that produced the match
    pub keyword: String,
    /// Page number (1-indexed)
    pub page: usize,
    /// Character offset into the page text
    pub start_offset: usize,
    /// Number of matched characters
    pub length: usize,
}

/// A match with its surrounding text and highlight geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordHit {
    /// The match itself
    #[serde(flatten)]
    pub matched: Match,
    /// Page text around the match
    pub context: String,
    /// Highlight rectangles, one per fragment the match touches
    pub rects: Vec<Rect>,
}

impl KeywordHit {
    /// Smallest rectangle containing every highlight rectangle.
    pub fn bbox(&self) -> Option<Rect> {
        self.rects.iter().copied().reduce(|acc, r| acc.union(&r))
    }
}

/// Everything found on one page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageSearchResult {
    /// Page number (1-indexed)
    pub page: usize,
    /// Joined page text the offsets refer to
    pub page_text: String,
    /// Keyword hits, grouped by keyword in keyword order
    pub hits: Vec<KeywordHit>,
}

/// Keyword searcher for a single page of fragments.
pub struct TextSearcher;

impl TextSearcher {
    /// Search a page for every keyword.
    ///
    /// # Arguments
    ///
    /// * `page` - Page number (1-indexed), copied into each match
    /// * `fragments` - The page's text fragments in decoder order
    /// * `keywords` - Keywords to search for, in reporting order
    /// * `matcher` - Matching engine
    /// * `context_chars` - Characters of context on each side of a hit
    ///
    /// # Returns
    ///
    /// All hits on the page. Matches that cannot be drawn keep an empty
    /// `rects` list and are still reported.
    pub fn search_page<S: AsRef<str>>(
        page: usize,
        fragments: &[TextFragment],
        keywords: &[S],
        matcher: &dyn KeywordMatcher,
        context_chars: usize,
    ) -> Result<PageSearchResult> {
        let index = build_page_index(fragments);
        let chars: Vec<char> = index.page_text().chars().collect();

        let mut hits = Vec::new();
        for keyword in keywords {
            let keyword = keyword.as_ref();
            if keyword.is_empty() {
                log::warn!("Skipping empty keyword on page {}", page);
                continue;
            }
            let keyword_len = keyword.chars().count();

            for found in matcher.find_matches(index.page_text(), keyword)? {
                let rects = resolve_match_rects(
                    index.positions(),
                    fragments,
                    found.start_offset,
                    found.length,
                );
                if rects.is_empty() {
                    log::trace!(
                        "No geometry for '{}' at offset {} on page {}",
                        keyword,
                        found.start_offset,
                        page
                    );
                }

                hits.push(KeywordHit {
                    matched: Match {
                        keyword: keyword.to_string(),
                        page,
                        start_offset: found.start_offset,
                        length: found.length,
                    },
                    context: Self::context_snippet(
                        &chars,
                        found.start_offset,
                        keyword_len,
                        context_chars,
                    ),
                    rects,
                });
            }
        }

        log::debug!(
            "Page {}: {} fragments, {} chars, {} hits",
            page,
            fragments.len(),
            index.len(),
            hits.len()
        );

        Ok(PageSearchResult {
            page,
            page_text: index.into_parts().0,
            hits,
        })
    }

    /// Cut a context window around a match.
    ///
    /// The window spans `radius` characters before the match start and after
    /// `start + keyword_len`, clamped to the text. Whitespace at the window
    /// edges is trimmed and an ellipsis marks each side that was cut.
    fn context_snippet(chars: &[char], start: usize, keyword_len: usize, radius: usize) -> String {
        let from = start.saturating_sub(radius).min(chars.len());
        let to = start
            .saturating_add(keyword_len)
            .saturating_add(radius)
            .min(chars.len());

        let window: String = chars[from..to.max(from)].iter().collect();
        let mut context = String::with_capacity(window.len() + 8);
        if from > 0 {
            context.push(CONTEXT_ELLIPSIS);
        }
        context.push_str(window.trim());
        if to < chars.len() {
            context.push(CONTEXT_ELLIPSIS);
        }
        context
    }
}

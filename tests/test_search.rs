//! Tests for the per-page keyword search functionality.

use pdf_scanner::geometry::Rect;
use pdf_scanner::layout::TextFragment;
use pdf_scanner::search::{
    build_page_index, resolve_match_rects, KeywordMatcher, RegexMatcher, SearchOptions,
    TextMatch, TextSearcher,
};

/// Lay out texts left to right on one line, 10 units per character with a
/// 10 unit gap between fragments.
fn line_of_fragments(texts: &[&str], y: f32) -> Vec<TextFragment> {
    let mut x = 0.0;
    texts
        .iter()
        .map(|text| {
            let width = 10.0 * text.chars().count() as f32;
            let fragment = TextFragment::new(*text, x, y, width, 12.0);
            x += width + 10.0;
            fragment
        })
        .collect()
}

mod scenario {
    use super::*;

    fn fragments() -> Vec<TextFragment> {
        vec![
            TextFragment::new("tibet is", 0.0, 100.0, 80.0, 10.0),
            TextFragment::new("remote", 90.0, 100.0, 60.0, 10.0),
        ]
    }

    #[test]
    fn test_page_text_and_separator() {
        let index = build_page_index(&fragments());
        assert_eq!(index.page_text(), "tibet is remote");
        assert!(index.positions()[8].is_separator());
    }

    #[test]
    fn test_single_fragment_keyword() {
        let fragments = fragments();
        let index = build_page_index(&fragments);
        let rects = resolve_match_rects(index.positions(), &fragments, 0, 5);
        assert_eq!(rects, vec![Rect::new(0.0, 100.0, 50.0, 10.0)]);
    }

    #[test]
    fn test_keyword_across_fragments() {
        let fragments = fragments();
        let index = build_page_index(&fragments);
        let rects = resolve_match_rects(index.positions(), &fragments, 6, 9);

        assert_eq!(rects.len(), 2);
        // fragment 0 from offset 6 to its end
        assert_eq!(rects[0], Rect::new(60.0, 100.0, 20.0, 10.0));
        // fragment 1 from its start through offset 5
        assert_eq!(rects[1], Rect::new(90.0, 100.0, 60.0, 10.0));
    }

    #[test]
    fn test_search_page_end_to_end() {
        let fragments = fragments();
        let matcher = RegexMatcher::default();
        let result =
            TextSearcher::search_page(1, &fragments, &["TIBET", "is remote"], &matcher, 60)
                .expect("Search failed");

        assert_eq!(result.hits.len(), 2);
        assert_eq!(result.hits[0].rects, vec![Rect::new(0.0, 100.0, 50.0, 10.0)]);
        assert_eq!(result.hits[1].matched.start_offset, 6);
        assert_eq!(result.hits[1].matched.length, 9);
        assert_eq!(result.hits[1].rects.len(), 2);
    }
}

mod text_search {
    use super::*;

    #[test]
    fn test_case_insensitive_search() {
        let fragments = line_of_fragments(&["Hong Kong and", "HONG KONG"], 500.0);
        let matcher = RegexMatcher::new(SearchOptions::default());
        let result =
            TextSearcher::search_page(1, &fragments, &["hong kong"], &matcher, 60).unwrap();
        assert_eq!(result.hits.len(), 2);
    }

    #[test]
    fn test_case_sensitive_search() {
        let fragments = line_of_fragments(&["Hong Kong and", "hong kong"], 500.0);
        let matcher = RegexMatcher::new(SearchOptions::new().with_case_insensitive(false));
        let result =
            TextSearcher::search_page(1, &fragments, &["hong kong"], &matcher, 60).unwrap();
        assert_eq!(result.hits.len(), 1);
        assert_eq!(result.hits[0].matched.start_offset, 14);
    }

    #[test]
    fn test_regex_search() {
        let fragments = line_of_fragments(&["Item 1, Item 2,", "Item 3"], 0.0);
        let matcher = RegexMatcher::new(SearchOptions::regex());
        let result = TextSearcher::search_page(1, &fragments, &[r"Item \d"], &matcher, 60).unwrap();
        assert_eq!(result.hits.len(), 3);
        assert!(result.hits.iter().all(|h| h.matched.length == 6));
    }

    #[test]
    fn test_whole_word_search() {
        let fragments = line_of_fragments(&["communists and communism"], 0.0);
        let matcher = RegexMatcher::new(SearchOptions::new().with_whole_word(true));
        let result =
            TextSearcher::search_page(1, &fragments, &["communist", "communism"], &matcher, 60)
                .unwrap();
        assert_eq!(result.hits.len(), 1);
        assert_eq!(result.hits[0].matched.keyword, "communism");
    }

    #[test]
    fn test_no_matches() {
        let fragments = line_of_fragments(&["nothing to see here"], 0.0);
        let matcher = RegexMatcher::default();
        let result =
            TextSearcher::search_page(1, &fragments, &["zoroastrianism"], &matcher, 60).unwrap();
        assert!(result.hits.is_empty());
    }

    #[test]
    fn test_empty_page() {
        let matcher = RegexMatcher::default();
        let result = TextSearcher::search_page(2, &[], &["tibet"], &matcher, 60).unwrap();
        assert_eq!(result.page, 2);
        assert!(result.page_text.is_empty());
        assert!(result.hits.is_empty());
    }

    #[test]
    fn test_context_snippet_window() {
        let long_prefix = "x".repeat(100);
        let fragments = line_of_fragments(&[long_prefix.as_str(), "soviet", "tail"], 0.0);
        let matcher = RegexMatcher::default();
        let result = TextSearcher::search_page(1, &fragments, &["soviet"], &matcher, 5).unwrap();

        assert_eq!(result.hits[0].context, "…xxxx soviet tail");
    }
}

mod custom_matcher {
    use super::*;

    /// Reports a fixed range regardless of the keyword.
    struct FixedMatcher(TextMatch);

    impl KeywordMatcher for FixedMatcher {
        fn find_matches(
            &self,
            _text: &str,
            _keyword: &str,
        ) -> pdf_scanner::Result<Vec<TextMatch>> {
            Ok(vec![self.0])
        }

        fn name(&self) -> &'static str {
            "FixedMatcher"
        }
    }

    #[test]
    fn test_geometry_independent_of_engine() {
        let fragments = line_of_fragments(&["abc", "def", "ghi"], 40.0);
        let matcher = FixedMatcher(TextMatch {
            start_offset: 1,
            length: 9,
        });
        let result = TextSearcher::search_page(1, &fragments, &["any"], &matcher, 60).unwrap();

        // "bc def gh": start in 0, through 1, end in 2
        assert_eq!(
            result.hits[0].rects,
            vec![
                Rect::new(10.0, 40.0, 20.0, 12.0),
                Rect::new(40.0, 40.0, 30.0, 12.0),
                Rect::new(80.0, 40.0, 20.0, 12.0),
            ]
        );
    }

    #[test]
    fn test_match_past_text_end() {
        let fragments = line_of_fragments(&["wicca"], 0.0);
        let matcher = FixedMatcher(TextMatch {
            start_offset: 3,
            length: 4,
        });
        let result = TextSearcher::search_page(1, &fragments, &["any"], &matcher, 60).unwrap();

        // logical length wins over the clamped span
        assert_eq!(result.hits[0].rects, vec![Rect::new(30.0, 0.0, 40.0, 12.0)]);
    }
}

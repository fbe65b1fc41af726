//! Configuration for document scanning.

use crate::search::SearchOptions;
use serde::{Deserialize, Serialize};

/// Keywords scanned for when no list is configured.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "tibet",
    "dalai lama",
    "communism",
    "communist",
    "soviet",
    "hong kong",
    "taiwan",
    "christianity",
    "judaism",
    "mormon church",
    "jehovah's witnesses",
    "hinduism",
    "sikhism",
    "jainism",
    "bahá'í faith",
    "zoroastrianism",
    "manichaeism",
    "shinto",
    "cheondoism",
    "caidaism",
    "wicca",
];

/// Default number of context characters on each side of a hit.
pub const DEFAULT_CONTEXT_CHARS: usize = 60;

/// Ordered keyword list without duplicates.
///
/// Keywords are trimmed and lowercased on the way in, including when the list
/// is deserialized. Serializes as a plain JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct KeywordList {
    keywords: Vec<String>,
}

impl Default for KeywordList {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl KeywordList {
    /// A list with no keywords.
    pub fn empty() -> Self {
        Self {
            keywords: Vec::new(),
        }
    }

    /// Add a keyword.
    ///
    /// Returns `false` if the normalized keyword is empty or already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_scanner::config::KeywordList;
    ///
    /// let mut list = KeywordList::empty();
    /// assert!(list.add("  Falun Gong "));
    /// assert!(!list.add("falun gong"));
    /// assert_eq!(list.as_slice(), ["falun gong"]);
    /// ```
    pub fn add(&mut self, keyword: &str) -> bool {
        let normalized = keyword.trim().to_lowercase();
        if normalized.is_empty() || self.contains(&normalized) {
            return false;
        }
        self.keywords.push(normalized);
        true
    }

    /// Remove a keyword. Returns `false` if it was not present.
    pub fn remove(&mut self, keyword: &str) -> bool {
        let before = self.keywords.len();
        self.keywords.retain(|k| k != keyword);
        self.keywords.len() != before
    }

    /// Whether the exact keyword is in the list.
    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }

    /// Keywords in insertion order.
    pub fn as_slice(&self) -> &[String] {
        &self.keywords
    }

    /// Iterate keywords in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    /// Number of keywords.
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeywordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::empty();
        for keyword in iter {
            list.add(keyword.as_ref());
        }
        list
    }
}

impl From<Vec<String>> for KeywordList {
    fn from(keywords: Vec<String>) -> Self {
        keywords.into_iter().collect()
    }
}

impl From<KeywordList> for Vec<String> {
    fn from(list: KeywordList) -> Self {
        list.keywords
    }
}

/// Document scan configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Keywords to scan for
    pub keywords: KeywordList,

    /// Matching options
    pub search: SearchOptions,

    /// Characters of context kept on each side of a hit
    pub context_chars: usize,

    /// Flag pages that contain raster images
    pub detect_images: bool,

    /// Maximum number of keyword findings (0 = unlimited)
    pub max_results: usize,

    /// Pages to scan, inclusive and 1-indexed (None = all pages)
    pub page_range: Option<(usize, usize)>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            keywords: KeywordList::default(),
            search: SearchOptions::default(),
            context_chars: DEFAULT_CONTEXT_CHARS,
            detect_images: true,
            max_results: 0,
            page_range: None,
        }
    }

    /// Replace the keyword list.
    pub fn with_keywords(mut self, keywords: KeywordList) -> Self {
        self.keywords = keywords;
        self
    }

    /// Set matching options.
    pub fn with_search_options(mut self, search: SearchOptions) -> Self {
        self.search = search;
        self
    }

    /// Set context width.
    pub fn with_context_chars(mut self, chars: usize) -> Self {
        self.context_chars = chars;
        self
    }

    /// Enable image page detection.
    pub fn with_detect_images(mut self, enable: bool) -> Self {
        self.detect_images = enable;
        self
    }

    /// Limit the number of keyword findings.
    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = max;
        self
    }

    /// Scan only within a page range (inclusive, 1-indexed).
    pub fn with_page_range(mut self, start: usize, end: usize) -> Self {
        self.page_range = Some((start, end));
        self
    }
}

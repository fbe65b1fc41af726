//! Keyword matching over page text.
//!
//! The geometry side only needs character ranges, so matching engines are
//! plugged in through [`KeywordMatcher`]. [`RegexMatcher`] is the default
//! engine: literal, case-insensitive keyword search.

use crate::error::{Error, Result};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// A keyword occurrence in a text, in character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextMatch {
    /// Character offset of the first matched character
    pub start_offset: usize,
    /// Number of matched characters
    pub length: usize,
}

/// Finds keyword occurrences in a text.
pub trait KeywordMatcher: Send + Sync {
    /// Return every non-overlapping occurrence of `keyword` in `text`, in
    /// ascending order of start offset.
    fn find_matches(&self, text: &str, keyword: &str) -> Result<Vec<TextMatch>>;

    /// Return the name of this matcher for debugging.
    fn name(&self) -> &'static str;
}

/// Options for keyword matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Case insensitive search
    pub case_insensitive: bool,
    /// Treat keywords as literal text (not regex)
    pub literal: bool,
    /// Match whole words only
    pub whole_word: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            case_insensitive: true,
            literal: true,
            whole_word: false,
        }
    }
}

impl SearchOptions {
    /// Create new default search options (literal, case-insensitive).
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact, case-sensitive regular expression search.
    pub fn regex() -> Self {
        Self {
            case_insensitive: false,
            literal: false,
            whole_word: false,
        }
    }

    /// Set case sensitivity.
    pub fn with_case_insensitive(mut self, value: bool) -> Self {
        self.case_insensitive = value;
        self
    }

    /// Treat keywords as literal text (escape regex special characters).
    pub fn with_literal(mut self, value: bool) -> Self {
        self.literal = value;
        self
    }

    /// Match whole words only.
    pub fn with_whole_word(mut self, value: bool) -> Self {
        self.whole_word = value;
        self
    }
}

/// Regex-backed keyword matcher.
///
/// Each keyword is compiled once and reused for every page it is matched
/// against.
#[derive(Debug, Default)]
pub struct RegexMatcher {
    options: SearchOptions,
    compiled: RwLock<HashMap<String, Regex>>,
}

impl Clone for RegexMatcher {
    fn clone(&self) -> Self {
        let compiled = self
            .compiled
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        Self {
            options: self.options.clone(),
            compiled: RwLock::new(compiled),
        }
    }
}

impl RegexMatcher {
    /// Create a matcher with the given options.
    pub fn new(options: SearchOptions) -> Self {
        Self {
            options,
            compiled: RwLock::new(HashMap::new()),
        }
    }

    /// Options this matcher was built with.
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Build regex from keyword and options.
    pub fn build_regex(&self, keyword: &str) -> Result<Regex> {
        let mut pattern = if self.options.literal {
            regex::escape(keyword)
        } else {
            keyword.to_string()
        };

        if self.options.whole_word {
            pattern = format!(r"\b(?:{})\b", pattern);
        }

        RegexBuilder::new(&pattern)
            .case_insensitive(self.options.case_insensitive)
            .build()
            .map_err(|e| Error::InvalidPattern(format!("'{}': {}", keyword, e)))
    }

    /// Compiled regex for `keyword`, built on first use.
    fn compiled_regex(&self, keyword: &str) -> Result<Regex> {
        if let Some(regex) = self
            .compiled
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(keyword)
        {
            return Ok(regex.clone());
        }

        let regex = self.build_regex(keyword)?;
        log::trace!("Compiled pattern for keyword '{}'", keyword);
        self.compiled
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(keyword.to_string())
            .or_insert_with(|| regex.clone());
        Ok(regex)
    }

    /// Number of keywords with a compiled regex.
    #[cfg(test)]
    pub(crate) fn compiled_count(&self) -> usize {
        self.compiled
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl KeywordMatcher for RegexMatcher {
    fn find_matches(&self, text: &str, keyword: &str) -> Result<Vec<TextMatch>> {
        let regex = self.compiled_regex(keyword)?;

        // Byte offsets from the regex engine are walked forward into char
        // offsets; matches come back in ascending order.
        let mut matches = Vec::new();
        let mut byte_pos = 0;
        let mut char_pos = 0;
        for mat in regex.find_iter(text) {
            if mat.start() == mat.end() {
                continue;
            }
            char_pos += text[byte_pos..mat.start()].chars().count();
            let length = mat.as_str().chars().count();
            matches.push(TextMatch {
                start_offset: char_pos,
                length,
            });
            char_pos += length;
            byte_pos = mat.end();
        }

        Ok(matches)
    }

    fn name(&self) -> &'static str {
        "RegexMatcher"
    }
}

//! Document-level keyword scanning.
//!
//! [`DocumentScanner`] walks the pages of a [`PageSource`], searches each page
//! for the configured keywords, and flags pages that paint raster images. The
//! result is a [`ScanReport`] listing findings in the order they were found.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use crate::config::ScanConfig;
use crate::document::PageSource;
use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::search::{KeywordHit, KeywordMatcher, RegexMatcher, TextSearcher};
use serde::{Deserialize, Serialize};

/// Keyword label used for image findings.
pub const IMAGE_FINDING_LABEL: &str = "[image]";

/// Context text used for image findings.
pub const IMAGE_FINDING_CONTEXT: &str =
    "Page contains one or more embedded images — review manually for maps";

/// One entry of a scan report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Finding {
    /// A keyword occurrence
    Keyword(KeywordHit),
    /// A page that paints raster images
    Image {
        /// Page number (1-indexed)
        page: usize,
    },
}

impl Finding {
    /// Page the finding is on.
    pub fn page(&self) -> usize {
        match self {
            Finding::Keyword(hit) => hit.matched.page,
            Finding::Image { page } => *page,
        }
    }

    /// Keyword, or [`IMAGE_FINDING_LABEL`] for image pages.
    pub fn keyword(&self) -> &str {
        match self {
            Finding::Keyword(hit) => &hit.matched.keyword,
            Finding::Image { .. } => IMAGE_FINDING_LABEL,
        }
    }

    /// Context snippet, or [`IMAGE_FINDING_CONTEXT`] for image pages.
    pub fn context(&self) -> &str {
        match self {
            Finding::Keyword(hit) => &hit.context,
            Finding::Image { .. } => IMAGE_FINDING_CONTEXT,
        }
    }
}

/// Finding counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanSummary {
    /// Number of keyword findings
    pub keyword_matches: usize,
    /// Number of pages flagged for images
    pub image_pages: usize,
}

impl fmt::Display for ScanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} keyword match{} · {} page{} with images",
            self.keyword_matches,
            if self.keyword_matches == 1 { "" } else { "es" },
            self.image_pages,
            if self.image_pages == 1 { "" } else { "s" },
        )
    }
}

/// Result of scanning a document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScanReport {
    /// Findings in discovery order
    pub findings: Vec<Finding>,
    /// Number of pages visited
    pub pages_scanned: usize,
}

impl ScanReport {
    /// Keyword findings only.
    pub fn keyword_hits(&self) -> impl Iterator<Item = &KeywordHit> {
        self.findings.iter().filter_map(|f| match f {
            Finding::Keyword(hit) => Some(hit),
            Finding::Image { .. } => None,
        })
    }

    /// Pages flagged for images, in scan order.
    pub fn image_pages(&self) -> Vec<usize> {
        self.findings
            .iter()
            .filter_map(|f| match f {
                Finding::Image { page } => Some(*page),
                Finding::Keyword(_) => None,
            })
            .collect()
    }

    /// Count keyword and image findings.
    pub fn summary(&self) -> ScanSummary {
        self.findings
            .iter()
            .fold(ScanSummary::default(), |mut summary, f| {
                match f {
                    Finding::Keyword(_) => summary.keyword_matches += 1,
                    Finding::Image { .. } => summary.image_pages += 1,
                }
                summary
            })
    }

    /// Drawable highlight rectangles grouped by page.
    ///
    /// Degenerate rectangles are left out, and pages without any drawable
    /// rectangle are absent.
    pub fn highlights_by_page(&self) -> BTreeMap<usize, Vec<Rect>> {
        let mut by_page: BTreeMap<usize, Vec<Rect>> = BTreeMap::new();
        for hit in self.keyword_hits() {
            let drawable: Vec<Rect> = hit
                .rects
                .iter()
                .copied()
                .filter(|r| !r.is_degenerate())
                .collect();
            if !drawable.is_empty() {
                by_page.entry(hit.matched.page).or_default().extend(drawable);
            }
        }
        by_page
    }

    /// Serialize the report as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Scans documents for keywords and image pages.
pub struct DocumentScanner {
    config: ScanConfig,
    matcher: Box<dyn KeywordMatcher>,
}

impl DocumentScanner {
    /// Create a scanner using the regex matcher configured by
    /// `config.search`.
    pub fn new(config: ScanConfig) -> Self {
        let matcher = Box::new(RegexMatcher::new(config.search.clone()));
        Self { config, matcher }
    }

    /// Create a scanner with a custom matching engine.
    ///
    /// `config.search` is ignored; the matcher carries its own options.
    pub fn with_matcher(config: ScanConfig, matcher: Box<dyn KeywordMatcher>) -> Self {
        Self { config, matcher }
    }

    /// Configuration this scanner runs with.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan a document.
    ///
    /// Fails before any page is read if the keyword list is empty or a keyword
    /// is rejected by the matcher. A page that cannot be decoded aborts the
    /// scan with the page source's error.
    pub fn scan(&self, source: &dyn PageSource) -> Result<ScanReport> {
        self.validate_keywords()?;

        let page_count = source.page_count();
        let (first, last) = match self.config.page_range {
            Some((start, end)) => (start.max(1), end.min(page_count)),
            None => (1, page_count),
        };

        log::info!(
            "Scanning pages {}..={} of {} for {} keywords using {}",
            first,
            last,
            page_count,
            self.config.keywords.len(),
            self.matcher.name()
        );

        let mut report = ScanReport::default();
        let mut flagged_image_pages: HashSet<usize> = HashSet::new();
        let mut keyword_count = 0;

        for page in first..=last {
            let fragments = source.text_fragments(page)?;
            let result = TextSearcher::search_page(
                page,
                &fragments,
                self.config.keywords.as_slice(),
                self.matcher.as_ref(),
                self.config.context_chars,
            )?;
            report.pages_scanned += 1;

            let limit = self.config.max_results;
            for hit in result.hits {
                if limit > 0 && keyword_count >= limit {
                    break;
                }
                report.findings.push(Finding::Keyword(hit));
                keyword_count += 1;
            }

            if self.config.detect_images
                && !flagged_image_pages.contains(&page)
                && source.has_raster_images(page)?
            {
                flagged_image_pages.insert(page);
                report.findings.push(Finding::Image { page });
            }

            if limit > 0 && keyword_count >= limit {
                log::debug!("Result limit {} reached on page {}", limit, page);
                break;
            }
        }

        log::info!("Scan complete: {}", report.summary());
        Ok(report)
    }

    fn validate_keywords(&self) -> Result<()> {
        if self.config.keywords.is_empty() {
            return Err(Error::InvalidPattern("no keywords configured".to_string()));
        }
        for keyword in self.config.keywords.iter() {
            self.matcher.find_matches("", keyword)?;
        }
        Ok(())
    }
}

//! Error types for the scanner.
//!
//! The fragment index and geometry resolver never fail; these errors come from
//! the host-facing layers (keyword compilation, page sources, page dumps).

/// Result type alias for scanner operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while scanning a document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Keyword could not be turned into a matcher
    #[error("Invalid keyword pattern: {0}")]
    InvalidPattern(String),

    /// Page source failed to decode a page
    #[error("Failed to decode page {page}: {reason}")]
    PageDecode {
        /// Page number (1-indexed)
        page: usize,
        /// Reason reported by the page source
        reason: String,
    },

    /// Requested page does not exist
    #[error("Page {page} out of range (document has {page_count} pages)")]
    PageOutOfRange {
        /// Requested page number (1-indexed)
        page: usize,
        /// Number of pages in the document
        page_count: usize,
    },

    /// Malformed serialized page data
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_error() {
        let err = Error::InvalidPattern("unclosed group".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("Invalid keyword pattern"));
        assert!(msg.contains("unclosed group"));
    }

    #[test]
    fn test_page_decode_error() {
        let err = Error::PageDecode {
            page: 7,
            reason: "corrupt content stream".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("page 7"));
        assert!(msg.contains("corrupt content stream"));
    }

    #[test]
    fn test_page_out_of_range_error() {
        let err = Error::PageOutOfRange {
            page: 12,
            page_count: 3,
        };
        assert_eq!(format!("{}", err), "Page 12 out of range (document has 3 pages)");
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_err = serde_json::from_str::<Vec<u32>>("[1, 2").unwrap_err();
        let err: Error = parse_err.into();
        assert!(format!("{}", err).starts_with("JSON error"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}

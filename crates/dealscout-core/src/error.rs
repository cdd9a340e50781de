//! Search error types.

use thiserror::Error;

/// Errors that can occur while talking to the search service.
///
/// Every variant takes the same path in the UI — a generic failure that
/// keeps the previous results on screen. The distinctions exist for
/// diagnostics only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The search service could not be reached at all.
    #[error("search request failed: {0}")]
    Transport(String),

    /// The search service answered with a non-success status code.
    #[error("search service returned status {0}")]
    Status(u16),

    /// The response body did not match the expected shape.
    #[error("malformed search response: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for SearchError {
    fn from(e: serde_json::Error) -> Self {
        SearchError::Malformed(e.to_string())
    }
}

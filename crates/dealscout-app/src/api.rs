//! HTTP client for the remote search service.

use dealscout_core::api::{SearchRequest, SearchResponse, DEFAULT_SEARCH_ENDPOINT};
use dealscout_core::error::SearchError;

/// Client for the search collaborator.
///
/// Thin wrapper over `reqwest` that maps every failure mode — transport
/// error, non-2xx status, malformed body — into [`SearchError`]. No local
/// timeout is enforced; the transport layer's own policy applies.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    endpoint: String,
}

impl Default for SearchClient {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_ENDPOINT)
    }
}

impl SearchClient {
    /// Create a client for the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Endpoint this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issue one search request and settle with the parsed response.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        response
            .json::<SearchResponse>()
            .await
            .map_err(|e| SearchError::Malformed(e.to_string()))
    }
}

//! Wire contract of the remote search service.
//!
//! One POST endpoint, request body `{"query": ...}`, response body
//! `{"products": [...], "message"?: ...}`. Shape violations on receipt are
//! routed into [`SearchError::Malformed`](crate::error::SearchError) by the
//! caller; nothing here is lenient beyond the fields the service itself
//! treats as optional.

use crate::product::Product;
use serde::{Deserialize, Serialize};

/// Default path of the search endpoint.
pub const DEFAULT_SEARCH_ENDPOINT: &str = "/api/products/search";

/// Outbound search request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SearchRequest {
    /// Free-text query. May be empty; the server decides what that means.
    pub query: String,

    /// Optional marketplace filter (wire name `websites`). Omitted from the
    /// payload entirely when unset, so the default body is exactly
    /// `{"query": ...}`.
    #[serde(
        rename = "websites",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub marketplaces: Option<Vec<String>>,
}

impl SearchRequest {
    /// Build a request for a plain query across all marketplaces.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            marketplaces: None,
        }
    }

    /// Restrict the search to the given marketplaces.
    pub fn with_marketplaces(mut self, marketplaces: Vec<String>) -> Self {
        self.marketplaces = Some(marketplaces);
        self
    }
}

/// Successful search response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SearchResponse {
    /// Ranked product list, in server order. The renderer must not re-sort.
    pub products: Vec<Product>,

    /// Server-supplied advisory text (e.g. "No results for ...").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request_body_is_query_only() {
        let request = SearchRequest::new("oversized tshirt");
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, serde_json::json!({ "query": "oversized tshirt" }));
    }

    #[test]
    fn test_marketplace_filter_uses_wire_name() {
        let request = SearchRequest::new("kurta")
            .with_marketplaces(vec!["myntra".into(), "ajio".into()]);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "query": "kurta", "websites": ["myntra", "ajio"] })
        );
    }

    #[test]
    fn test_empty_query_is_allowed() {
        let request = SearchRequest::new("");
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, serde_json::json!({ "query": "" }));
    }

    #[test]
    fn test_response_message_is_optional() {
        let response: SearchResponse =
            serde_json::from_str(r#"{ "products": [] }"#).unwrap();
        assert!(response.products.is_empty());
        assert_eq!(response.message, None);

        let response: SearchResponse = serde_json::from_str(
            r#"{ "products": [], "message": "No results for previous query" }"#,
        )
        .unwrap();
        assert_eq!(
            response.message.as_deref(),
            Some("No results for previous query")
        );
    }

    #[test]
    fn test_missing_products_is_malformed() {
        let result: Result<SearchResponse, _> =
            serde_json::from_str(r#"{ "message": "hello" }"#);
        assert!(result.is_err());
    }
}

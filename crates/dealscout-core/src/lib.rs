//! Domain types and search session logic for DealScout.
//!
//! DealScout lets a user type a free-text query and browse matching products
//! aggregated from multiple e-commerce marketplaces. This crate holds the
//! parts with real behavioral rules, kept free of any UI or I/O so they can
//! be unit tested directly:
//!
//! - **Session**: the search interaction state machine (request lifecycle,
//!   message invalidation, stale-response guard)
//! - **Grid**: the rendering contract of the product grid (skeletons,
//!   per-tile presentation mapping)
//! - **Product / Marketplace**: the value objects returned by the search
//!   service and their source branding
//! - **Api**: the wire DTOs of the search endpoint
//! - **Price**: rupee formatting with Indian digit grouping
//!
//! # Example
//!
//! ```
//! use dealscout_core::prelude::*;
//!
//! let mut session = SearchSession::new();
//! session.set_query("oversized tshirt");
//!
//! let token = session.begin_search();
//! assert_eq!(session.status(), SearchStatus::Searching);
//!
//! // ... request settles ...
//! session.on_search_succeeded(token, vec![], Some("No exact matches".into()));
//! assert_eq!(session.status(), SearchStatus::Succeeded);
//! ```

pub mod api;
pub mod error;
pub mod grid;
pub mod marketplace;
pub mod price;
pub mod product;
pub mod session;

pub use error::SearchError;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::api::{SearchRequest, SearchResponse, DEFAULT_SEARCH_ENDPOINT};
    pub use crate::error::SearchError;
    pub use crate::grid::{GridView, ProductTile, SKELETON_TILES};
    pub use crate::marketplace::Marketplace;
    pub use crate::price::format_rupees;
    pub use crate::product::Product;
    pub use crate::session::{RequestToken, SearchSession, SearchStatus};
}

//! Rendering contract of the product grid.
//!
//! The grid is stateless across renders: what it shows is a pure function
//! of the `searching` flag and the current result list. [`plan`] computes
//! that content as data so the contract can be tested without a DOM; the
//! view layer only walks the result.

use crate::price::format_rupees;
use crate::product::Product;

/// Number of skeleton tiles shown while a search is outstanding.
pub const SKELETON_TILES: usize = 8;

/// What the grid renders for one state of the world.
#[derive(Debug, Clone, PartialEq)]
pub enum GridView {
    /// A search is outstanding: a fixed row of skeleton tiles, regardless
    /// of any stale results the session still holds.
    Loading { placeholders: usize },
    /// Settled state: one tile per product, in server order. An empty list
    /// renders an empty grid; any "no results" text is the session
    /// message's job, not the grid's.
    Tiles(Vec<ProductTile>),
}

/// Display-ready fields for a single product tile.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductTile {
    /// Single-line title; the stylesheet truncates overflow with an
    /// ellipsis.
    pub title: String,
    /// Marketplace listing both buy affordances link to.
    pub detail_url: String,
    /// Image source, already defaulted to the placeholder asset.
    pub image_src: String,
    /// `"{n}% OFF"`, present only when the product is discounted.
    pub discount_badge: Option<String>,
    /// Formatted sale price, always shown.
    pub sale_price_display: String,
    /// Formatted strike-through reference price, present only when
    /// discounted.
    pub list_price_display: Option<String>,
    /// Badge asset of the originating marketplace (generic for unknown
    /// sources).
    pub logo_asset: &'static str,
    /// Raw source name, used for alt text.
    pub source: String,
}

impl ProductTile {
    /// Map one product to its display fields.
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.name.clone(),
            detail_url: product.detail_url.clone(),
            image_src: product.image_or_placeholder().to_string(),
            discount_badge: product.discount_badge(),
            sale_price_display: format_rupees(product.sale_price),
            list_price_display: product
                .has_discount()
                .then(|| format_rupees(product.list_price)),
            logo_asset: product.marketplace().logo_asset(),
            source: product.source.clone(),
        }
    }
}

/// Compute the grid content for the given inputs.
///
/// Loading takes precedence over any result content, stale or not.
pub fn plan(searching: bool, products: &[Product]) -> GridView {
    if searching {
        return GridView::Loading {
            placeholders: SKELETON_TILES,
        };
    }
    GridView::Tiles(products.iter().map(ProductTile::from_product).collect())
}

//! Product value object as returned by the search service.

use crate::marketplace::Marketplace;
use serde::{Deserialize, Serialize};

/// Image shown when a listing carries no usable image URL.
pub const PLACEHOLDER_IMAGE_ASSET: &str = "/assets/product-placeholder.svg";

/// A single product listing, immutable once received.
///
/// Field names on the wire are the search service's snake_case names
/// (`product_name`, `maximum_retail_price`, ...); the struct uses the
/// display-oriented names the rest of the crate speaks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Display title. Never empty when present.
    #[serde(rename = "product_name")]
    pub name: String,

    /// Absolute URL of the original marketplace listing.
    #[serde(rename = "product_url")]
    pub detail_url: String,

    /// Absolute image URL. Listings scraped without an image omit it.
    #[serde(
        rename = "product_image_url",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,

    /// Reference ("strike-through") price in whole rupees.
    #[serde(rename = "maximum_retail_price")]
    pub list_price: i64,

    /// Discount in percent. 0 means no badge and no strike-through.
    #[serde(rename = "discount_percentage", default)]
    pub discount_percent: u8,

    /// The actually payable price in whole rupees.
    #[serde(rename = "selling_price")]
    pub sale_price: i64,

    /// Originating marketplace. Open set; unknown values are fine.
    #[serde(rename = "sourced_from")]
    pub source: String,
}

impl Product {
    /// Resolve the source string to a marketplace for branding.
    pub fn marketplace(&self) -> Marketplace {
        Marketplace::from_source(&self.source)
    }

    /// Whether the listing carries a discount worth showing.
    pub fn has_discount(&self) -> bool {
        self.discount_percent > 0
    }

    /// Image URL to render. An absent or empty URL falls back to the
    /// placeholder asset.
    pub fn image_or_placeholder(&self) -> &str {
        match self.image_url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => PLACEHOLDER_IMAGE_ASSET,
        }
    }

    /// Badge text (`"60% OFF"`), present only when discounted.
    pub fn discount_badge(&self) -> Option<String> {
        self.has_discount()
            .then(|| format!("{}% OFF", self.discount_percent))
    }
}

//! Marketplace identification and source branding.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Badge asset shown for sources without branded artwork.
pub const GENERIC_BADGE_ASSET: &str = "/assets/logos/marketplace.svg";

/// An e-commerce marketplace a product was sourced from.
///
/// The set of sources on the wire is open: the service may start returning
/// listings from platforms this client has never heard of. Anything that
/// does not match a branded marketplace case-insensitively falls back to
/// [`Marketplace::Other`] and renders a generic badge — never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Marketplace {
    Myntra,
    Meesho,
    Flipkart,
    Ajio,
    /// Unrecognized source.
    #[default]
    Other,
}

impl Marketplace {
    /// Map a wire `sourced_from` value to a marketplace.
    ///
    /// Exact case-insensitive match; unmapped values become
    /// [`Marketplace::Other`].
    pub fn from_source(source: &str) -> Self {
        match source.to_ascii_lowercase().as_str() {
            "myntra" => Marketplace::Myntra,
            "meesho" => Marketplace::Meesho,
            "flipkart" => Marketplace::Flipkart,
            "ajio" => Marketplace::Ajio,
            _ => Marketplace::Other,
        }
    }

    /// Canonical lowercase name of the marketplace.
    pub fn as_str(&self) -> &'static str {
        match self {
            Marketplace::Myntra => "myntra",
            Marketplace::Meesho => "meesho",
            Marketplace::Flipkart => "flipkart",
            Marketplace::Ajio => "ajio",
            Marketplace::Other => "other",
        }
    }

    /// Path of the badge asset for this marketplace.
    pub fn logo_asset(&self) -> &'static str {
        match self {
            Marketplace::Myntra => "/assets/logos/myntra.png",
            Marketplace::Meesho => "/assets/logos/meesho.png",
            Marketplace::Flipkart => "/assets/logos/flipkart.png",
            Marketplace::Ajio => "/assets/logos/ajio.png",
            Marketplace::Other => GENERIC_BADGE_ASSET,
        }
    }
}

impl fmt::Display for Marketplace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

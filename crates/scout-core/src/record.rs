//! Product records returned by the remote search service.

use serde::{Deserialize, Serialize};

/// One product/offer entry in a result set.
///
/// Records come from heterogeneous marketplaces, so most fields are
/// optional. Presence is checked explicitly; a legitimate `0` rating or an
/// empty string is never silently treated as absent by the type itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    /// Stable identifier, unique within one result set.
    pub id: u64,
    pub name: String,
    pub brand: String,
    /// Current price. Required and non-negative.
    pub price: f64,
    /// Pre-discount baseline, when the offer is discounted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    /// Advertised discount percentage, taken verbatim from the source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Review count backing the rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u64>,
    /// Origin marketplace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping: Option<String>,
    #[serde(default)]
    pub trending: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buy_link: Option<String>,
}

impl ResultRecord {
    /// Create a record with only the required fields set.
    pub fn new(id: u64, name: impl Into<String>, brand: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            brand: brand.into(),
            price,
            original_price: None,
            discount: None,
            rating: None,
            reviews: None,
            source: None,
            shipping: None,
            trending: false,
            buy_link: None,
        }
    }

    /// True when the record carries a discount baseline above the price.
    pub fn has_discount(&self) -> bool {
        matches!(self.original_price, Some(original) if original > self.price)
    }

    /// The buy link, when present and non-empty.
    pub fn purchase_url(&self) -> Option<&str> {
        self.buy_link.as_deref().filter(|link| !link.is_empty())
    }
}

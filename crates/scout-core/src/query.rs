//! Search query and filter specs.

use serde::{Deserialize, Serialize};

use crate::SessionError;

/// Optional filter constraints attached to a search.
///
/// The remote boundary encodes an unconstrained field as an empty string,
/// so serialization always writes a string and deserialization folds empty
/// or whitespace-only values back to `None`. Absent means "unconstrained",
/// never zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSpecs {
    #[serde(default, with = "wire_opt")]
    pub price_min: Option<String>,
    #[serde(default, with = "wire_opt")]
    pub price_max: Option<String>,
    #[serde(default, with = "wire_opt")]
    pub brand: Option<String>,
    #[serde(default, with = "wire_opt")]
    pub country: Option<String>,
    #[serde(default, with = "wire_opt")]
    pub delivery: Option<String>,
}

impl SearchSpecs {
    /// True when no field constrains the search.
    pub fn is_unconstrained(&self) -> bool {
        self.price_min.is_none()
            && self.price_max.is_none()
            && self.brand.is_none()
            && self.country.is_none()
            && self.delivery.is_none()
    }
}

/// Empty-string-on-the-wire encoding for optional spec fields.
mod wire_opt {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(value.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        Ok(raw.filter(|v| !v.trim().is_empty()))
    }
}

/// A validated search request: non-empty trimmed query plus specs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub query: String,
    pub specs: SearchSpecs,
}

impl SearchQuery {
    /// Build a query, trimming whitespace and rejecting empty input.
    ///
    /// A session may only enter the searching stage through this guard.
    pub fn new(raw: &str, specs: SearchSpecs) -> Result<Self, SessionError> {
        let query = raw.trim();
        if query.is_empty() {
            return Err(SessionError::Validation(
                "Please enter a search query".to_string(),
            ));
        }
        Ok(Self {
            query: query.to_string(),
            specs,
        })
    }
}

//! Persisted user preferences.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Namespaced key holding the serialized preferences.
pub const SETTINGS_KEY: &str = "shopscout:settings";

/// Errors from the preference store.
///
/// Never user-visible: restore paths swallow them and keep the in-memory
/// defaults.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The underlying store failed.
    #[error("Store error: {0}")]
    Backend(String),

    /// Stored bytes did not hold the expected shape.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Minimal raw key-value boundary over whatever persistence the host
/// offers. Read-modify-write is not atomic; last write wins.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;
    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError>;
}

/// In-memory store for tests and the demo.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

/// Advisory user preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Preferred number of top results. Advisory only; never enforced on
    /// the result set. The wire allows a string or a number.
    #[serde(deserialize_with = "string_or_number")]
    pub top_count: String,
}

/// Accept `"10"` as well as `10`; older saves used a bare number.
fn string_or_number<'de, D: serde::Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    use serde::de::Error;

    match serde_json::Value::deserialize(d)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            top_count: "10".to_string(),
        }
    }
}

impl Preferences {
    /// Persist under the fixed settings key as JSON.
    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(self)?;
        store.set(SETTINGS_KEY, &bytes)
    }

    /// Overwrite `self` from the store when a well-formed value exists.
    ///
    /// Missing keys, unreadable bytes and malformed shapes all leave the
    /// current value untouched; nothing is reported to the user.
    pub fn restore(&mut self, store: &dyn KeyValueStore) {
        match Self::load(store) {
            Ok(Some(saved)) => *self = saved,
            Ok(None) => {}
            Err(e) => tracing::debug!(error = %e, "ignoring unreadable preferences"),
        }
    }

    fn load(store: &dyn KeyValueStore) -> Result<Option<Preferences>, StoreError> {
        let Some(bytes) = store.get(SETTINGS_KEY)? else {
            return Ok(None);
        };
        let saved: Preferences = serde_json::from_slice(&bytes)?;
        // An empty topCount is treated as never saved.
        Ok(Some(saved).filter(|p| !p.top_count.is_empty()))
    }
}

//! Remote search response payload and failure classification.

use serde::{Deserialize, Serialize};

use crate::{ResultRecord, SessionError};

/// Fallback message when the server supplies no error text.
pub const GENERIC_SEARCH_FAILURE: &str = "Search failed. Please try again.";

/// Message for a well-formed response with nothing in it.
pub const NO_RESULTS_MESSAGE: &str = "No products found matching your criteria";

/// Body of an `/api/search` response: a ranked result list or an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<ResultRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchResponse {
    /// Normalize the payload into ranked results or a single user-facing
    /// failure.
    ///
    /// An explicit non-empty `error` wins over any result list; an empty or
    /// absent list is a semantic failure, not an empty success. Result order
    /// is preserved exactly as the server ranked it.
    pub fn into_results(self) -> Result<Vec<ResultRecord>, SessionError> {
        if let Some(error) = self.error.filter(|e| !e.is_empty()) {
            return Err(SessionError::Search(error));
        }
        match self.results {
            Some(results) if !results.is_empty() => Ok(results),
            _ => Err(SessionError::Search(NO_RESULTS_MESSAGE.to_string())),
        }
    }
}

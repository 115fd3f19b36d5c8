//! Remote search boundary.

use async_trait::async_trait;
use scout_core::{SearchQuery, SearchResponse};
use thiserror::Error;

/// Errors crossing the remote search boundary.
///
/// The controller normalizes all of these into one user-facing failure
/// message; they are kept distinct here for logging.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Failed to send the request or read the response.
    #[error("Request failed: {0}")]
    Request(String),

    /// HTTP error response.
    #[error("HTTP {0}")]
    Status(u16),

    /// Failed to parse the response body.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// The opaque remote search service.
#[async_trait]
pub trait SearchBackend {
    /// Issue one search request carrying the query and its specs.
    async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, FetchError>;
}

/// HTTP backend posting JSON to `/api/search` under a base URL.
#[derive(Debug, Clone)]
pub struct HttpSearchBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSearchBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/search", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl SearchBackend for HttpSearchBackend {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, FetchError> {
        tracing::debug!(url = %self.endpoint(), "issuing search request");

        let response = self
            .client
            .post(self.endpoint())
            .json(query)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .json::<SearchResponse>()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))
    }
}

//! Session error types.

use thiserror::Error;

/// Errors surfaced to the user during a search session.
///
/// Variants carry the exact user-facing copy; nothing here is fatal to the
/// process, and every path lands back in a stable input stage.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Submit rejected before any network activity.
    #[error("{0}")]
    Validation(String),

    /// Remote search failed: transport, status, error payload or empty set.
    #[error("{0}")]
    Search(String),

    /// A card action could not be performed.
    #[error("{0}")]
    Action(String),
}

impl SessionError {
    /// The user-facing message for this error.
    pub fn message(&self) -> &str {
        match self {
            SessionError::Validation(m) | SessionError::Search(m) | SessionError::Action(m) => m,
        }
    }
}

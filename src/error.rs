//! Error types for the client library.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, LbcError>;

/// Errors surfaced by the client.
///
/// Every failed operation resolves to exactly one of these kinds. Only
/// [`LbcError::Datadome`] is retryable; the session manager never retries
/// the other kinds.
#[derive(Error, Debug)]
pub enum LbcError {
    /// Malformed filter input detected at query-construction time.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// Transport or backend failure not identified as an anti-bot block.
    #[error("request failed: {0}")]
    Request(String),

    /// The backend rejected the request through its DataDome protection.
    #[error("blocked by DataDome: {0}")]
    Datadome(String),

    /// A single-resource lookup returned an explicit not-found signal.
    #[error("not found: {0}")]
    NotFound(String),
}

impl LbcError {
    /// Returns whether the session manager may retry after this error.
    /// Retry is reserved strictly for the anti-bot block signal.
    pub fn is_retryable(&self) -> bool {
        matches!(self, LbcError::Datadome(_))
    }

    /// Returns whether this error is a request failure, counting the
    /// DataDome block as its subtype.
    pub fn is_request_error(&self) -> bool {
        matches!(self, LbcError::Request(_) | LbcError::Datadome(_))
    }
}

impl From<reqwest::Error> for LbcError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LbcError::Request(format!("request timed out: {}", err))
        } else {
            LbcError::Request(err.to_string())
        }
    }
}

impl From<url::ParseError> for LbcError {
    fn from(err: url::ParseError) -> Self {
        LbcError::InvalidValue(format!("malformed URL: {}", err))
    }
}

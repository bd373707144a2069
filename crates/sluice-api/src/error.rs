//! Transport error taxonomy.

use std::fmt;

use thiserror::Error;

use sluice_core::ValidationError;

/// Terminal transport errors.
///
/// Transient failures (unexpected status, connect/timeout/IO) never escape
/// the retry loop directly; after the backoff budget is spent they surface
/// as [`ApiError::RetryExhausted`] carrying the last observed cause.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Input rejected locally, before any network call.
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// The resource does not exist (404). A valid "no data" outcome,
    /// not a failure; callers log it at debug level at most.
    #[error("resource not found")]
    NotFound,

    /// The server rejected the request as malformed (400). Caller error,
    /// never retried.
    #[error("invalid request: {body}")]
    InvalidRequest { body: String },

    /// A success status carried a payload we could not decode.
    #[error("invalid response payload: {0}")]
    Decode(String),

    /// All retry attempts failed with transient causes.
    #[error("retries exhausted after {attempts} attempts, last cause: {cause}")]
    RetryExhausted { attempts: u32, cause: TransientCause },
}

/// The reason a single attempt was classified as transient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransientCause {
    /// An HTTP status outside the terminal set (2xx/400/404).
    Status(u16),
    /// A connection, timeout, or other network-level failure.
    Network(String),
}

impl fmt::Display for TransientCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(code) => write!(f, "unexpected status {code}"),
            Self::Network(message) => write!(f, "network error: {message}"),
        }
    }
}

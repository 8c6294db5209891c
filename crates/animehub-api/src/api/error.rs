//! Error taxonomy for API calls.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the gateway and the client layer.
///
/// Every variant is local to the call that produced it: the gateway never
/// retries, and a failed call still consumes its pacing slot.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, DNS or timeout failure before any HTTP status was
    /// obtained.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("request failed with HTTP status {status}")]
    RequestFailed {
        /// The status the upstream returned.
        status: StatusCode,
    },

    /// The response body could not be decoded as JSON of the expected
    /// shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] reqwest::Error),

    /// An endpoint path or query could not be assembled into a valid URL.
    /// Produced by the locator-building layer, never by the gateway.
    #[error("invalid locator: {0}")]
    InvalidLocator(#[from] url::ParseError),
}

impl ApiError {
    /// Returns the HTTP status for `RequestFailed` errors.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::RequestFailed { status } => Some(*status),
            _ => None,
        }
    }
}

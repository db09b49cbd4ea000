//! Error types returned by the N2YO client

use thiserror::Error;

/// Everything that can go wrong while talking to N2YO
#[derive(Debug, Error)]
pub enum N2yoError {
    /// A required argument was missing, zero, out of range, or the observer
    /// location could not be resolved. Raised before any request is sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Network failure, non-2xx status or an undecodable body, as reported by
    /// the HTTP layer.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// N2YO answered with an `{"error": "..."}` body (e.g. a bad API key).
    #[error("N2YO API error: {0}")]
    Api(String),

    /// The body did not match the requested response model.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl N2yoError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        N2yoError::InvalidArgument(message.into())
    }

    /// True for errors raised locally before any request was attempted.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, N2yoError::InvalidArgument(_))
    }
}

pub type Result<T> = std::result::Result<T, N2yoError>;

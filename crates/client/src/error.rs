//! Upstream client error types.

use std::sync::Arc;

use reqwest::StatusCode;
use reel_core::Error;

/// Errors from the upstream HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// Missing API key for an authenticated upstream.
    #[error("missing API key: REEL_IMDB_KEY not set")]
    MissingApiKey,

    /// Configured base URL does not parse.
    #[error("invalid base URL: {0}")]
    InvalidUrl(String),

    /// Upstream reported the resource as missing.
    #[error("not found: HTTP {status}")]
    NotFound { status: u16 },

    /// Any other error status.
    #[error("HTTP error: {status}")]
    HttpError { status: u16 },

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Response parse error.
    #[error("parse error: {0}")]
    Parse(String),
}

impl UpstreamError {
    /// Map a response status onto an error, if it is not a success.
    pub fn from_status(status: StatusCode) -> Result<(), UpstreamError> {
        if status == StatusCode::NOT_FOUND || status == StatusCode::GONE {
            return Err(UpstreamError::NotFound { status: status.as_u16() });
        }

        if !status.is_success() {
            return Err(UpstreamError::HttpError { status: status.as_u16() });
        }

        Ok(())
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { UpstreamError::Timeout } else { UpstreamError::Network(Arc::new(err)) }
    }
}

impl From<UpstreamError> for Error {
    fn from(err: UpstreamError) -> Self {
        match &err {
            UpstreamError::NotFound { status } => Error::NotFound { status: *status, message: err.to_string() },
            UpstreamError::HttpError { status } => {
                Error::UpstreamStatus { status: *status, message: err.to_string() }
            }
            _ => Error::Upstream(err.to_string()),
        }
    }
}

//! Unified error types for reel.
//!
//! Every failure inside the catalogue and comment engines is returned to the
//! immediate caller as one of these variants. Nothing is retried or defaulted.

use rmcp::model::{ErrorCode, ErrorData as McpError};
use tokio_rusqlite::rusqlite;

/// Unified error types for the reel services.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid input parameters (e.g., empty comment).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// The film catalogue reported the requested resource as missing.
    #[error("NOT_FOUND: status {status}: {message}")]
    NotFound { status: u16, message: String },

    /// The film catalogue answered with any other non-success status.
    #[error("UPSTREAM_ERROR: status {status}: {message}")]
    UpstreamStatus { status: u16, message: String },

    /// Any other upstream failure: network, timeout, enrichment error, malformed body.
    #[error("UPSTREAM_ERROR: {0}")]
    Upstream(String),

    /// An episode has no IMDb mapping. Indicates a deployment defect.
    #[error("CONFIG_DEFECT: no IMDb id mapped for episode {0}")]
    MissingEpisodeKey(u32),

    /// Database operation failed.
    #[error("STORE_ERROR: {0}")]
    Database(tokio_rusqlite::Error),

    /// Migration failed to apply.
    #[error("STORE_ERROR: migration failed: {0}")]
    MigrationFailed(String),

    /// A stored or outgoing payload could not be (de)serialized.
    #[error("STORE_ERROR: serialization failed: {0}")]
    Serialization(String),
}

impl Error {
    /// HTTP-like status the caller should reflect for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::NotFound { status, .. } | Error::UpstreamStatus { status, .. } => *status,
            Error::InvalidInput(_) => 400,
            _ => 500,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<tokio_rusqlite::Error<Error>> for Error {
    fn from(err: tokio_rusqlite::Error<Error>) -> Self {
        match err {
            tokio_rusqlite::Error::Error(e) => e,
            tokio_rusqlite::Error::ConnectionClosed => Error::Database(tokio_rusqlite::Error::ConnectionClosed),
            tokio_rusqlite::Error::Close(c) => Error::Database(tokio_rusqlite::Error::Close(c)),
            _ => Error::Database(tokio_rusqlite::Error::ConnectionClosed),
        }
    }
}

impl From<tokio_rusqlite::Error<rusqlite::Error>> for Error {
    fn from(err: tokio_rusqlite::Error<rusqlite::Error>) -> Self {
        Error::Database(err)
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Database(tokio_rusqlite::Error::Error(err))
    }
}

impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        let status = err.status_code();
        let (code, message) = match &err {
            Error::InvalidInput(msg) => (-32602, msg.clone()),
            Error::NotFound { message, .. } => (-32004, message.clone()),
            Error::UpstreamStatus { message, .. } => (-32008, message.clone()),
            Error::Upstream(msg) => (-32008, msg.clone()),
            Error::MissingEpisodeKey(_) => (-32000, err.to_string()),
            Error::Database(e) => (-32002, e.to_string()),
            Error::MigrationFailed(msg) => (-32002, msg.clone()),
            Error::Serialization(msg) => (-32002, msg.clone()),
        };

        McpError { code: ErrorCode(code), message: message.into(), data: Some(serde_json::json!({ "status": status })) }
    }
}

//! Structured errors raised by the server layer itself.
//!
//! Engine failures arrive as `reel_core::Error` and convert on their own.

use rmcp::model::{ErrorCode, ErrorData as McpError};

/// Structured errors for the reel server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Invalid input parameters (e.g., episode 0).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// A tool needs configuration that was not supplied at startup.
    #[error("NOT_CONFIGURED: {0}")]
    NotConfigured(String),

    /// Output could not be serialized.
    #[error("SERIALIZATION_FAILED: {0}")]
    Serialization(String),
}

impl From<ServerError> for McpError {
    fn from(err: ServerError) -> Self {
        let (code, status, message) = match &err {
            ServerError::InvalidInput(msg) => (-32602, 400, msg.clone()),
            ServerError::NotConfigured(msg) => (-32003, 503, msg.clone()),
            ServerError::Serialization(msg) => (-32603, 500, msg.clone()),
        };

        McpError { code: ErrorCode(code), message: message.into(), data: Some(serde_json::json!({ "status": status })) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_to_mcp_error() {
        let mcp_err: McpError = ServerError::InvalidInput("id must be at least 1".into()).into();
        assert_eq!(mcp_err.code.0, -32602);
        assert_eq!(mcp_err.data, Some(serde_json::json!({ "status": 400 })));

        let mcp_err: McpError = ServerError::NotConfigured("imdb_key".into()).into();
        assert_eq!(mcp_err.code.0, -32003);
    }
}

//! MCP tool implementations.
//!
//! Every tool answers with a JSON envelope carrying an HTTP-like `status`,
//! a human `message` and the `data` payload.

pub mod comments;
pub mod films;

pub use comments::{CommentCreateParams, CommentsListParams};
pub use films::FilmGetParams;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ServerError;

/// Caller-facing result envelope.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Envelope<T> {
    pub status: u16,
    pub message: String,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self { status: 200, message: message.into(), data }
    }

    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self { status: 201, message: message.into(), data }
    }
}

/// Serialize an output as the tool's text content.
pub(crate) fn respond<T: Serialize>(output: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(output).map_err(|e| ServerError::Serialization(e.to_string()))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[cfg(test)]
pub(crate) fn output_json(result: &CallToolResult) -> serde_json::Value {
    let value = serde_json::to_value(result).unwrap();
    serde_json::from_str(value["content"][0]["text"].as_str().unwrap()).unwrap()
}

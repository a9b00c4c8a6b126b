//! comment_create and comments_list tool implementations.

use reel_core::{CommentLog, CommentPage};
use rmcp::{ErrorData as McpError, model::CallToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Envelope, respond};

/// Parameters for the comment_create tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CommentCreateParams {
    /// Film the comment belongs to.
    pub movie_id: String,

    /// Comment text.
    pub comment: String,
}

/// Parameters for the comments_list tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CommentsListParams {
    /// Only list comments for this film.
    #[serde(default)]
    pub movie_id: Option<String>,

    /// 1-based page number (default 1; values below 1 are treated as 1).
    #[serde(default)]
    pub page: Option<i64>,
}

impl CommentsListParams {
    /// Page clamped to at least 1.
    pub fn effective_page(&self) -> u32 {
        self.page.unwrap_or(1).clamp(1, i64::from(u32::MAX)) as u32
    }
}

/// Output from the comments_list tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CommentsListOutput {
    pub status: u16,
    #[serde(flatten)]
    pub page: CommentPage,
}

/// Implementation of the comment_create tool.
pub async fn create_impl(log: &CommentLog, params: CommentCreateParams) -> Result<CallToolResult, McpError> {
    let comment = log
        .create(&params.movie_id, &params.comment)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "comment_create failed"))?;

    respond(&Envelope::created("Comment stored", comment))
}

/// Implementation of the comments_list tool.
pub async fn list_impl(log: &CommentLog, params: CommentsListParams) -> Result<CallToolResult, McpError> {
    let page = params.effective_page();
    let movie_id = params.movie_id.as_deref().filter(|id| !id.is_empty());

    let page = log
        .list(movie_id, page)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "comments_list failed"))?;

    respond(&CommentsListOutput { status: 200, page })
}

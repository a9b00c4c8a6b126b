//! MCP server handler implementation.
//!
//! This module defines the main server handler that
//! routes tool calls to the film catalogue and comment log.
use crate::error::ServerError;
use crate::tools::{self, CommentCreateParams, CommentsListParams, FilmGetParams};

use reel_core::{CommentLog, FilmCatalog};
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};

/// The main MCP server handler for reel.
#[derive(Clone)]
pub struct ReelServer {
    tool_router: ToolRouter<Self>,
    /// `None` when the IMDb key is not configured.
    catalog: Option<FilmCatalog>,
    comments: CommentLog,
}

/// Tool router implementation using the #[tool_router] macro.
///
/// This macro generates the routing logic that maps tool names to handler methods.
#[tool_router]
impl ReelServer {
    /// Create a new server handler.
    pub fn new(catalog: Option<FilmCatalog>, comments: CommentLog) -> Self {
        Self { tool_router: Self::tool_router(), catalog, comments }
    }

    fn catalog(&self) -> Result<&FilmCatalog, McpError> {
        self.catalog
            .as_ref()
            .ok_or_else(|| ServerError::NotConfigured("film tools need REEL_IMDB_KEY".into()).into())
    }

    /// List every film merged with its IMDb data.
    #[tool(description = "List all Star Wars films combined with IMDb data, in catalogue order. Served from cache when available.")]
    async fn films_list(&self) -> Result<CallToolResult, McpError> {
        tools::films::list_impl(self.catalog()?).await
    }

    /// Get a single film by episode number.
    #[tool(description = "Get one film by episode number, combined with IMDb data. Served from cache when available.")]
    async fn film_get(&self, params: Parameters<FilmGetParams>) -> Result<CallToolResult, McpError> {
        tools::films::get_impl(self.catalog()?, params.0).await
    }

    /// Store a comment about a film.
    #[tool(description = "Store a comment for a film. Returns the stored comment with its generated id and timestamp.")]
    async fn comment_create(&self, params: Parameters<CommentCreateParams>) -> Result<CallToolResult, McpError> {
        tools::comments::create_impl(&self.comments, params.0).await
    }

    /// List stored comments, oldest first, 10 per page.
    #[tool(description = "List comments oldest first, 10 per page, optionally only those for one film.")]
    async fn comments_list(&self, params: Parameters<CommentsListParams>) -> Result<CallToolResult, McpError> {
        tools::comments::list_impl(&self.comments, params.0).await
    }
}

impl ServerHandler for ReelServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "reel".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::model::ErrorData> {
        Ok(ListToolsResult { meta: None, tools: self.tool_router.list_all(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        self.tool_router
            .call(ToolCallContext::new(self, request, context))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reel_core::CacheDb;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_router_lists_all_tools() {
        let db = CacheDb::open_in_memory().await.unwrap();
        let server = ReelServer::new(None, CommentLog::new(Arc::new(db), "comments"));

        let mut names: Vec<String> = server.tool_router.list_all().into_iter().map(|t| t.name.to_string()).collect();
        names.sort();

        assert_eq!(names, vec!["comment_create", "comments_list", "film_get", "films_list"]);
    }

    #[tokio::test]
    async fn test_film_tools_need_catalog() {
        let db = CacheDb::open_in_memory().await.unwrap();
        let server = ReelServer::new(None, CommentLog::new(Arc::new(db), "comments"));

        let err = server.films_list().await.unwrap_err();
        assert_eq!(err.code.0, -32003);
    }
}

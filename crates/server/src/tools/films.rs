//! films_list and film_get tool implementations.

use reel_core::FilmCatalog;
use rmcp::{ErrorData as McpError, model::CallToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Envelope, respond};
use crate::error::ServerError;

/// Parameters for the film_get tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FilmGetParams {
    /// Episode number (1-6).
    pub id: u32,
}

/// Implementation of the films_list tool.
pub async fn list_impl(catalog: &FilmCatalog) -> Result<CallToolResult, McpError> {
    let films = catalog
        .all_films()
        .await
        .inspect_err(|e| tracing::error!(error = %e, "films_list failed"))?;

    respond(&Envelope::ok("All films", films))
}

/// Implementation of the film_get tool.
pub async fn get_impl(catalog: &FilmCatalog, params: FilmGetParams) -> Result<CallToolResult, McpError> {
    if params.id == 0 {
        return Err(ServerError::InvalidInput("id must be at least 1".into()).into());
    }

    let film = catalog
        .film(params.id)
        .await
        .inspect_err(|e| tracing::error!(error = %e, id = params.id, "film_get failed"))?;

    respond(&Envelope::ok("Film retrieved", film))
}

//! reel server entry point.
//!
//! Boots the MCP server on stdio transport.
//! Logging goes to stderr to avoid interfering with the JSON-RPC protocol on stdout.

use std::sync::Arc;

use anyhow::{Context, Result};
use reel_client::{ImdbClient, ImdbConfig, SwapiClient, SwapiConfig, UpstreamError};
use reel_core::{AppConfig, CacheDb, CommentLog, FilmCatalog};
use rmcp::service::serve_server;
use rmcp::transport::io::stdio;
use tracing_subscriber::EnvFilter;

mod error;
mod handler;
mod tools;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = AppConfig::load().context("loading configuration")?;
    let db = Arc::new(CacheDb::open(&config.db_path).await.context("opening store")?);

    let comments = CommentLog::new(db.clone(), config.comments_table.clone());
    let catalog = match ImdbConfig::from_app_config(&config) {
        Ok(imdb_config) => {
            let swapi = SwapiClient::new(SwapiConfig::from(&config))?;
            let imdb = ImdbClient::new(imdb_config)?;
            Some(
                FilmCatalog::new(db, config.films_table.clone(), Arc::new(swapi), Arc::new(imdb))
                    .with_pacing(config.pacing()),
            )
        }
        Err(UpstreamError::MissingApiKey) => {
            tracing::warn!("REEL_IMDB_KEY not set; film tools are disabled");
            None
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(db_path = %config.db_path.display(), "Starting reel server on stdio transport");

    let handler = handler::ReelServer::new(catalog, comments);
    let transport = stdio();
    let server = serve_server(handler, transport).await?;

    server.waiting().await?;

    Ok(())
}

//! IMDb enrichment client (RapidAPI).
//!
//! `GET {base_url}/{imdb_id}` with the `x-rapidapi-host` and `x-rapidapi-key`
//! headers. Every failure, a 404 included, is a generic upstream failure.

use async_trait::async_trait;
use reqwest::header;
use serde::Deserialize;
use std::time::{Duration, Instant};
use url::Url;

use crate::UpstreamError;
use reel_core::{AppConfig, EnrichmentSource, Error, ImdbSummary};

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// IMDb client configuration.
#[derive(Debug, Clone)]
pub struct ImdbConfig {
    pub base_url: String,
    pub host: String,
    pub api_key: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl ImdbConfig {
    /// Build from application config.
    ///
    /// # Errors
    ///
    /// `UpstreamError::MissingApiKey` if `imdb_key` is not configured.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, UpstreamError> {
        let api_key = config.require_imdb_key().map_err(|_| UpstreamError::MissingApiKey)?;

        Ok(Self {
            base_url: config.imdb_api_base.clone(),
            host: config.imdb_host.clone(),
            api_key: api_key.to_string(),
            timeout: config.timeout(),
            user_agent: config.user_agent.clone(),
        })
    }
}

/// Raw response from the title endpoint. Extra fields are ignored; every
/// field kept here must be present.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImdbTitleResponse {
    pub id: String,
    pub url: String,
    pub primary_image: String,
    pub trailer: String,
}

impl From<ImdbTitleResponse> for ImdbSummary {
    fn from(raw: ImdbTitleResponse) -> Self {
        ImdbSummary { id: raw.id, url: raw.url, primary_image: raw.primary_image, trailer: raw.trailer }
    }
}

/// IMDb enrichment client.
#[derive(Debug, Clone)]
pub struct ImdbClient {
    http: reqwest::Client,
    base_url: Url,
    host: String,
    api_key: String,
}

impl ImdbClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ImdbConfig) -> Result<Self, UpstreamError> {
        if config.api_key.is_empty() {
            return Err(UpstreamError::MissingApiKey);
        }

        let base_url = Url::parse(&config.base_url).map_err(|e| UpstreamError::InvalidUrl(e.to_string()))?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { http, base_url, host: config.host, api_key: config.api_key })
    }

    /// URL of a title.
    pub fn title_url(&self, imdb_id: &str) -> String {
        format!("{}/{imdb_id}", self.base_url.as_str().trim_end_matches('/'))
    }

    /// Fetch one title.
    pub async fn fetch_title(&self, imdb_id: &str) -> Result<ImdbTitleResponse, UpstreamError> {
        let start = Instant::now();
        let url = self.title_url(imdb_id);

        tracing::debug!("requesting IMDb title: {}", imdb_id);

        let response = self
            .http
            .get(&url)
            .header("x-rapidapi-host", &self.host)
            .header("x-rapidapi-key", &self.api_key)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("IMDb response status: {}", status);
        UpstreamError::from_status(status)?;

        let bytes = response.bytes().await?;
        let title: ImdbTitleResponse =
            serde_json::from_slice(&bytes).map_err(|e| UpstreamError::Parse(e.to_string()))?;

        tracing::debug!("IMDb request completed in {:?}", start.elapsed());
        Ok(title)
    }
}

#[async_trait]
impl EnrichmentSource for ImdbClient {
    async fn get_enrichment(&self, imdb_id: &str) -> Result<ImdbSummary, Error> {
        let title = self
            .fetch_title(imdb_id)
            .await
            .map_err(|e| Error::Upstream(format!("IMDb {imdb_id}: {e}")))?;
        Ok(ImdbSummary::from(title))
    }
}

//! Film catalogue (SWAPI) client.
//!
//! - **List**: `GET {base_url}` returns every film in catalogue order.
//! - **Single**: `GET {base_url}/{id}` returns one film.
//! - A 404/410 surfaces as `Error::NotFound` and any other error status as
//!   `Error::UpstreamStatus`, both keeping the origin status. Transport and
//!   parse failures are generic upstream failures. No retries.

pub mod response;

pub use response::{FilmListResponse, FilmProperties, FilmResponse, RawFilm};

use async_trait::async_trait;
use reqwest::header;
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use url::Url;

use crate::UpstreamError;
use reel_core::{AppConfig, Error, FilmSource, FilmSummary};

/// Default base URL for the film catalogue.
const DEFAULT_BASE_URL: &str = "https://www.swapi.tech/api/films";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default user agent.
const DEFAULT_USER_AGENT: &str = "reel/0.1";

/// Film catalogue client configuration.
#[derive(Debug, Clone)]
pub struct SwapiConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for SwapiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl From<&AppConfig> for SwapiConfig {
    fn from(config: &AppConfig) -> Self {
        Self { base_url: config.swapi_url.clone(), timeout: config.timeout(), user_agent: config.user_agent.clone() }
    }
}

/// Film catalogue client.
#[derive(Debug, Clone)]
pub struct SwapiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl SwapiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: SwapiConfig) -> Result<Self, UpstreamError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| UpstreamError::InvalidUrl(e.to_string()))?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { http, base_url })
    }

    /// URL of the list endpoint.
    pub fn list_url(&self) -> String {
        self.base_url.as_str().trim_end_matches('/').to_string()
    }

    /// URL of a single film.
    pub fn film_url(&self, id: u32) -> String {
        format!("{}/{id}", self.list_url())
    }

    /// Fetch every film.
    pub async fn fetch_list(&self) -> Result<FilmListResponse, UpstreamError> {
        self.get_json(&self.list_url()).await
    }

    /// Fetch a single film.
    pub async fn fetch_film(&self, id: u32) -> Result<FilmResponse, UpstreamError> {
        self.get_json(&self.film_url(id)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, UpstreamError> {
        let start = Instant::now();
        tracing::debug!("requesting film catalogue: {}", url);

        let response = self
            .http
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("film catalogue response status: {}", status);
        UpstreamError::from_status(status)?;

        let bytes = response.bytes().await?;
        let parsed = serde_json::from_slice(&bytes).map_err(|e| UpstreamError::Parse(e.to_string()))?;

        tracing::debug!("film catalogue request completed in {:?}", start.elapsed());
        Ok(parsed)
    }
}

#[async_trait]
impl FilmSource for SwapiClient {
    async fn list_films(&self) -> Result<Vec<FilmSummary>, Error> {
        let response = self.fetch_list().await?;
        Ok(response.result.into_iter().map(FilmSummary::from).collect())
    }

    async fn get_film(&self, id: u32) -> Result<FilmSummary, Error> {
        let response = self.fetch_film(id).await?;
        Ok(FilmSummary::from(response.result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::serve_once;

    const FILM_JSON: &str = r#"{"message":"ok","result":{"uid":"1","properties":{"title":"A New Hope",
        "episode_id":4,"director":"George Lucas","producer":"Gary Kurtz",
        "release_date":"1977-05-25","opening_crawl":"It is a period of civil war."}}}"#;

    fn client(base_url: &str) -> SwapiClient {
        SwapiClient::new(SwapiConfig { base_url: base_url.to_string(), ..Default::default() }).unwrap()
    }

    fn films_client(origin: &str) -> SwapiClient {
        client(&format!("{origin}/films"))
    }

    #[test]
    fn test_config_default() {
        let config = SwapiConfig::default();
        assert_eq!(config.base_url, "https://www.swapi.tech/api/films");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_config_from_app_config() {
        let app = AppConfig { swapi_url: "http://films.test/api".into(), timeout_ms: 500, ..Default::default() };
        let config = SwapiConfig::from(&app);
        assert_eq!(config.base_url, "http://films.test/api");
        assert_eq!(config.timeout, Duration::from_millis(500));
    }

    #[test]
    fn test_invalid_base_url() {
        let result = SwapiClient::new(SwapiConfig { base_url: "not a url".into(), ..Default::default() });
        assert!(matches!(result, Err(UpstreamError::InvalidUrl(_))));
    }

    #[test]
    fn test_endpoint_urls() {
        let c = client("https://www.swapi.tech/api/films/");
        assert_eq!(c.list_url(), "https://www.swapi.tech/api/films");
        assert_eq!(c.film_url(4), "https://www.swapi.tech/api/films/4");
    }

    #[tokio::test]
    async fn test_get_film_success() {
        let (base, request) = serve_once("200 OK", FILM_JSON).await;

        let film = films_client(&base).get_film(1).await.unwrap();

        assert_eq!(film.episode, 4);
        assert_eq!(film.title, "A New Hope");
        assert!(request.await.unwrap().starts_with("GET /films/1 "));
    }

    #[tokio::test]
    async fn test_get_film_not_found_keeps_status() {
        let (base, _request) = serve_once("404 Not Found", r#"{"message":"not found"}"#).await;

        let err = films_client(&base).get_film(42).await.unwrap_err();

        assert!(matches!(err, Error::NotFound { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_error_status_is_kept() {
        let (base, _request) = serve_once("500 Internal Server Error", "{}").await;

        let err = films_client(&base).list_films().await.unwrap_err();

        assert!(matches!(err, Error::UpstreamStatus { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_rate_limited_film_keeps_status() {
        let (base, _request) = serve_once("429 Too Many Requests", "{}").await;

        let err = films_client(&base).get_film(4).await.unwrap_err();

        assert_eq!(err.status_code(), 429);
    }

    #[tokio::test]
    async fn test_malformed_body_is_generic() {
        let (base, _request) = serve_once("200 OK", "<html>").await;

        let err = films_client(&base).list_films().await.unwrap_err();

        assert!(matches!(err, Error::Upstream(msg) if msg.contains("parse error")));
    }
}

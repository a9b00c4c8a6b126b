//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (REEL_*)
//! 2. TOML config file (if REEL_CONFIG_FILE set)
//! 3. Built-in defaults

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (REEL_*)
/// 2. TOML config file (if REEL_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path to SQLite store database.
    ///
    /// Set via REEL_DB_PATH environment variable.
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,

    /// Base URL of the film catalogue (list endpoint; single films live under `{swapi_url}/{id}`).
    ///
    /// Set via REEL_SWAPI_URL environment variable.
    #[serde(default = "default_swapi_url")]
    pub swapi_url: String,

    /// Base URL of the IMDb enrichment API.
    ///
    /// Set via REEL_IMDB_API_BASE environment variable.
    #[serde(default = "default_imdb_api_base")]
    pub imdb_api_base: String,

    /// Value for the `x-rapidapi-host` header.
    ///
    /// Set via REEL_IMDB_HOST environment variable.
    #[serde(default = "default_imdb_host")]
    pub imdb_host: String,

    /// Value for the `x-rapidapi-key` header.
    ///
    /// Set via REEL_IMDB_KEY environment variable.
    /// Required only when enrichment data is fetched.
    #[serde(default)]
    pub imdb_key: Option<String>,

    /// Logical table holding cached films.
    ///
    /// Set via REEL_FILMS_TABLE environment variable.
    #[serde(default = "default_films_table")]
    pub films_table: String,

    /// Logical table holding comments.
    ///
    /// Set via REEL_COMMENTS_TABLE environment variable.
    #[serde(default = "default_comments_table")]
    pub comments_table: String,

    /// Delay between consecutive enrichment calls in milliseconds.
    ///
    /// Set via REEL_PACING_MS environment variable.
    #[serde(default = "default_pacing_ms")]
    pub pacing_ms: u64,

    /// HTTP request timeout in milliseconds.
    ///
    /// Set via REEL_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// User-Agent string for HTTP requests.
    ///
    /// Set via REEL_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_db_path() -> PathBuf {
    PathBuf::from("./reel-store.sqlite")
}

fn default_swapi_url() -> String {
    "https://www.swapi.tech/api/films".into()
}

fn default_imdb_api_base() -> String {
    "https://imdb236.p.rapidapi.com/api/imdb".into()
}

fn default_imdb_host() -> String {
    "imdb236.p.rapidapi.com".into()
}

fn default_films_table() -> String {
    "films".into()
}

fn default_comments_table() -> String {
    "comments".into()
}

fn default_pacing_ms() -> u64 {
    200
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_user_agent() -> String {
    "reel/0.1".into()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            swapi_url: default_swapi_url(),
            imdb_api_base: default_imdb_api_base(),
            imdb_host: default_imdb_host(),
            imdb_key: None,
            films_table: default_films_table(),
            comments_table: default_comments_table(),
            pacing_ms: default_pacing_ms(),
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest/tokio.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Pause applied between consecutive enrichment calls.
    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.pacing_ms)
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `REEL_`
    /// 2. TOML file from `REEL_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("REEL_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("REEL_")
                .ignore(&["CONFIG_FILE"])
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        );

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    /// Check if the IMDb API key is available (for deferred validation).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if the key is not set.
    pub fn require_imdb_key(&self) -> Result<&str, ConfigError> {
        self.imdb_key.as_deref().filter(|k| !k.is_empty()).ok_or_else(|| ConfigError::Missing {
            field: "imdb_key".into(),
            hint: "Set REEL_IMDB_KEY environment variable".into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.db_path, PathBuf::from("./reel-store.sqlite"));
        assert_eq!(config.films_table, "films");
        assert_eq!(config.comments_table, "comments");
        assert_eq!(config.pacing_ms, 200);
        assert_eq!(config.user_agent, "reel/0.1");
        assert!(config.imdb_key.is_none());
    }

    #[test]
    fn test_durations() {
        let config = AppConfig::default();
        assert_eq!(config.timeout(), Duration::from_millis(10_000));
        assert_eq!(config.pacing(), Duration::from_millis(200));
    }

    #[test]
    fn test_require_imdb_key_missing() {
        let config = AppConfig::default();
        assert!(matches!(config.require_imdb_key(), Err(ConfigError::Missing { .. })));

        let config = AppConfig { imdb_key: Some(String::new()), ..Default::default() };
        assert!(matches!(config.require_imdb_key(), Err(ConfigError::Missing { .. })));
    }

    #[test]
    fn test_require_imdb_key_present() {
        let config = AppConfig { imdb_key: Some("test-key".into()), ..Default::default() };
        assert_eq!(config.require_imdb_key().unwrap(), "test-key");
    }

    #[test]
    fn test_toml_layer() {
        let config: AppConfig = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::string("pacing_ms = 0\nfilms_table = \"film_cache\""))
            .extract()
            .unwrap();
        assert_eq!(config.pacing_ms, 0);
        assert_eq!(config.films_table, "film_cache");
        assert_eq!(config.comments_table, "comments");
    }
}

//! Core types and shared functionality for reel.
//!
//! This crate provides:
//! - Key-value store abstraction with a SQLite backend
//! - Two-tier film cache and the cache-aside film catalogue
//! - Comment storage with filtered, paginated listing
//! - Unified error types
//! - Configuration structures

pub mod cache;
pub mod catalog;
pub mod comments;
pub mod config;
pub mod error;
pub mod film;
pub mod store;
pub mod upstream;

pub use cache::{CacheDb, FilmCache};
pub use catalog::FilmCatalog;
pub use comments::{Comment, CommentLog, CommentPage};
pub use config::{AppConfig, ConfigError};
pub use error::Error;
pub use film::{CombinedFilm, FilmSummary, ImdbSummary};
pub use store::{KvStore, StoredItem};
pub use upstream::{EnrichmentSource, FilmSource};

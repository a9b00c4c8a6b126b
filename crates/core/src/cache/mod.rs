//! SQLite-backed store and the film cache built on top of it.
//!
//! This module provides a persistent key-value store using SQLite
//! with async access via tokio-rusqlite. It supports:
//!
//! - Logical tables partitioned inside a single `items` table
//! - Automatic schema migrations
//! - WAL mode for concurrent access
//! - A two-tier film cache (collection + per-film entries)

pub mod connection;
pub mod films;
pub mod items;
pub mod keys;
pub mod migrations;

pub use crate::Error;

pub use connection::CacheDb;
pub use films::FilmCache;
pub use keys::CacheKey;

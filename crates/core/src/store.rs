//! Durable key-value store abstraction.
//!
//! The engines only ever see a [`KvStore`]; the SQLite-backed [`CacheDb`](crate::CacheDb)
//! is the production implementation and tests substitute their own.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::Error;

/// A single item persisted under `(table, key)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredItem {
    pub key: String,
    /// JSON payload.
    pub data: String,
    /// RFC 3339 write timestamp.
    pub updated_at: String,
}

impl StoredItem {
    /// Build an item stamped with the current time.
    pub fn new(key: impl Into<String>, data: String) -> Self {
        Self::written_at(key, data, Utc::now())
    }

    /// Build an item stamped with an explicit write time.
    pub fn written_at(key: impl Into<String>, data: String, at: DateTime<Utc>) -> Self {
        Self { key: key.into(), data, updated_at: at.to_rfc3339_opts(SecondsFormat::Millis, true) }
    }
}

/// Get/put/scan over logical tables.
///
/// Individual calls are atomic per key; there are no multi-key transactions.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Fetch one item. A missing key is `Ok(None)`, never an error.
    async fn get_item(&self, table: &str, key: &str) -> Result<Option<StoredItem>, Error>;

    /// Insert or replace an item.
    async fn put_item(&self, table: &str, item: StoredItem) -> Result<(), Error>;

    /// Every item in the table, in insertion order.
    async fn scan(&self, table: &str) -> Result<Vec<StoredItem>, Error>;
}

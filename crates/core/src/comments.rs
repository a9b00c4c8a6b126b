//! Film comments: write path and the filtered, time-ordered, paginated listing.
//!
//! Comments are stored as an unordered bag with no secondary index, so every
//! listing scans the whole table and filters, sorts and slices in memory.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Error;
use crate::store::{KvStore, StoredItem};

/// Fixed listing page size.
pub const PAGE_SIZE: usize = 10;

/// A user comment attached to a film.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub movie_id: String,
    pub comment: String,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
}

/// One page of a comment listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct CommentPage {
    pub message: String,
    pub page: u32,
    #[serde(rename = "pages")]
    pub total_pages: u32,
    #[serde(rename = "total")]
    pub total_count: usize,
    #[serde(rename = "data")]
    pub items: Vec<Comment>,
}

/// Comment log over a [`KvStore`] table.
#[derive(Clone)]
pub struct CommentLog {
    store: Arc<dyn KvStore>,
    table: String,
}

impl CommentLog {
    pub fn new(store: Arc<dyn KvStore>, table: impl Into<String>) -> Self {
        Self { store, table: table.into() }
    }

    /// Store a new comment stamped with a fresh id and the current time.
    ///
    /// No deduplication: identical submissions produce distinct comments.
    pub async fn create(&self, movie_id: &str, comment: &str) -> Result<Comment, Error> {
        if movie_id.is_empty() {
            return Err(Error::InvalidInput("movie_id is required".into()));
        }
        if comment.is_empty() {
            return Err(Error::InvalidInput("comment is required".into()));
        }

        let comment = Comment {
            id: Uuid::new_v4().to_string(),
            movie_id: movie_id.to_string(),
            comment: comment.to_string(),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };

        let data = serde_json::to_string(&comment)?;
        self.store
            .put_item(&self.table, StoredItem::new(comment.id.clone(), data))
            .await?;

        tracing::info!(id = %comment.id, movie_id, "stored comment");
        Ok(comment)
    }

    /// List comments, optionally for one film, oldest first.
    ///
    /// `page` is 1-based and expected to be clamped by the caller; a page past
    /// the end yields no items.
    pub async fn list(&self, movie_id: Option<&str>, page: u32) -> Result<CommentPage, Error> {
        let items = self.store.scan(&self.table).await?;
        let comments = items
            .iter()
            .map(|item| serde_json::from_str::<Comment>(&item.data))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| Error::Serialization(format!("stored comment is corrupt: {e}")))?;

        tracing::debug!(scanned = comments.len(), movie_id, page, "listing comments");
        Ok(paginate(comments, movie_id, page))
    }
}

/// Filter, stably sort by creation instant and slice one page.
pub fn paginate(comments: Vec<Comment>, movie_id: Option<&str>, page: u32) -> CommentPage {
    let mut matching: Vec<Comment> = match movie_id {
        Some(id) => comments.into_iter().filter(|c| c.movie_id == id).collect(),
        None => comments,
    };

    matching.sort_by_cached_key(|c| parse_instant(&c.created_at));

    let total_count = matching.len();
    let total_pages = total_count.div_ceil(PAGE_SIZE) as u32;
    let start = (page.saturating_sub(1) as usize).saturating_mul(PAGE_SIZE);
    let items: Vec<Comment> = matching.into_iter().skip(start).take(PAGE_SIZE).collect();

    let message = match movie_id {
        Some(id) => format!("Comments for film {id}"),
        None => "All comments".to_string(),
    };

    CommentPage { message, page, total_pages, total_count, items }
}

/// Parse a creation timestamp into an instant.
///
/// Accepts RFC 3339, a naive date-time read as UTC, or a bare date at UTC
/// midnight. Anything else is `None`, which sorts first.
fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

//! Two-tier film cache: the full collection under `ALL`, single films under `FILM#<episode>`.
//!
//! Entries are never invalidated or expired.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::keys::CacheKey;
use crate::Error;
use crate::film::CombinedFilm;
use crate::store::{KvStore, StoredItem};

/// Cache adapter over a [`KvStore`] table.
#[derive(Clone)]
pub struct FilmCache {
    store: Arc<dyn KvStore>,
    table: String,
}

impl FilmCache {
    pub fn new(store: Arc<dyn KvStore>, table: impl Into<String>) -> Self {
        Self { store, table: table.into() }
    }

    /// Cached collection, or `None` on a miss.
    pub async fn get_all(&self) -> Result<Option<Vec<CombinedFilm>>, Error> {
        self.get(CacheKey::All).await
    }

    pub async fn put_all(&self, films: &[CombinedFilm], written_at: DateTime<Utc>) -> Result<(), Error> {
        self.put(CacheKey::All, films, written_at).await
    }

    /// Cached film, or `None` on a miss.
    pub async fn get_film(&self, episode: u32) -> Result<Option<CombinedFilm>, Error> {
        self.get(CacheKey::Film(episode)).await
    }

    /// Store a film under its own episode.
    pub async fn put_film(&self, film: &CombinedFilm, written_at: DateTime<Utc>) -> Result<(), Error> {
        self.put(CacheKey::Film(film.episode), film, written_at).await
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, key: CacheKey) -> Result<Option<T>, Error> {
        let Some(item) = self.store.get_item(&self.table, &key.to_string()).await? else {
            return Ok(None);
        };

        let value = serde_json::from_str(&item.data)
            .map_err(|e| Error::Serialization(format!("cache entry {key} is corrupt: {e}")))?;
        Ok(Some(value))
    }

    async fn put<T: serde::Serialize + ?Sized>(
        &self, key: CacheKey, value: &T, written_at: DateTime<Utc>,
    ) -> Result<(), Error> {
        let data = serde_json::to_string(value)?;
        self.store
            .put_item(&self.table, StoredItem::written_at(key.to_string(), data, written_at))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CacheDb;

    fn film(episode: u32) -> CombinedFilm {
        CombinedFilm {
            title: format!("Episode {episode}"),
            episode,
            director: "George Lucas".into(),
            release_date: "1977-05-25".into(),
            opening_crawl: "...".into(),
            id: format!("tt{episode}"),
            url: format!("https://imdb/{episode}"),
            primary_image: format!("https://img/{episode}"),
            trailer: format!("https://trailer/{episode}"),
        }
    }

    #[tokio::test]
    async fn test_collection_round_trip() {
        let db = CacheDb::open_in_memory().await.unwrap();
        let cache = FilmCache::new(Arc::new(db), "films");

        assert!(cache.get_all().await.unwrap().is_none());

        let films = vec![film(4), film(5)];
        cache.put_all(&films, Utc::now()).await.unwrap();

        assert_eq!(cache.get_all().await.unwrap().unwrap(), films);
        assert!(cache.get_film(4).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_item_round_trip() {
        let db = CacheDb::open_in_memory().await.unwrap();
        let cache = FilmCache::new(Arc::new(db.clone()), "films");

        cache.put_film(&film(6), Utc::now()).await.unwrap();

        assert_eq!(cache.get_film(6).await.unwrap().unwrap(), film(6));
        assert!(cache.get_all().await.unwrap().is_none());
        assert!(db.get_item("films", "FILM#6").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_write_timestamp_is_recorded() {
        let db = CacheDb::open_in_memory().await.unwrap();
        let cache = FilmCache::new(Arc::new(db.clone()), "films");
        let at = DateTime::parse_from_rfc3339("2025-06-05T10:00:00Z").unwrap().with_timezone(&Utc);

        cache.put_film(&film(1), at).await.unwrap();

        let item = db.get_item("films", "FILM#1").await.unwrap().unwrap();
        assert_eq!(item.updated_at, "2025-06-05T10:00:00.000Z");
    }

    #[tokio::test]
    async fn test_corrupt_entry_is_an_error() {
        let db = CacheDb::open_in_memory().await.unwrap();
        db.put_item("films", StoredItem::new("FILM#2", "not json".to_string()))
            .await
            .unwrap();
        let cache = FilmCache::new(Arc::new(db), "films");

        assert!(matches!(cache.get_film(2).await, Err(Error::Serialization(_))));
    }
}

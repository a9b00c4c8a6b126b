//! Cache-aside film catalogue.
//!
//! Combines catalogue films with their IMDb enrichment and keeps the result in
//! the two-tier [`FilmCache`]. On a miss the bulk path rebuilds the whole
//! collection, calling the enrichment API strictly one film at a time with a
//! fixed pause between calls.
//!
//! Writes are not transactional: the collection entry is written first, then
//! each film entry. A failure part-way leaves the earlier entries in place.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crate::Error;
use crate::cache::FilmCache;
use crate::film::{CombinedFilm, FilmSummary, imdb_id_for_episode};
use crate::store::KvStore;
use crate::upstream::{EnrichmentSource, FilmSource};

/// Default pause between consecutive enrichment calls.
pub const DEFAULT_PACING: Duration = Duration::from_millis(200);

/// Film aggregation engine. Holds no state beyond its injected collaborators.
#[derive(Clone)]
pub struct FilmCatalog {
    cache: FilmCache,
    films: Arc<dyn FilmSource>,
    enrichment: Arc<dyn EnrichmentSource>,
    pacing: Duration,
}

impl FilmCatalog {
    pub fn new(
        store: Arc<dyn KvStore>, table: impl Into<String>, films: Arc<dyn FilmSource>,
        enrichment: Arc<dyn EnrichmentSource>,
    ) -> Self {
        Self { cache: FilmCache::new(store, table), films, enrichment, pacing: DEFAULT_PACING }
    }

    /// Override the pause between enrichment calls. `Duration::ZERO` disables it.
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn pacing(&self) -> Duration {
        self.pacing
    }

    /// All films, combined with their enrichment, in catalogue order.
    ///
    /// Served verbatim from the collection entry when present. Otherwise the
    /// catalogue is listed once, each film is enriched in order, and the
    /// result is written as the collection entry followed by one entry per film.
    pub async fn all_films(&self) -> Result<Vec<CombinedFilm>, Error> {
        if let Some(films) = self.cache.get_all().await? {
            tracing::debug!(count = films.len(), "film collection cache hit");
            return Ok(films);
        }

        tracing::debug!("film collection cache miss, rebuilding from upstream");
        let summaries = self.films.list_films().await?;

        let mut combined = Vec::with_capacity(summaries.len());
        for summary in summaries {
            combined.push(self.enrich(summary).await?);
            self.pause().await;
        }

        let written_at = Utc::now();
        self.cache.put_all(&combined, written_at).await?;
        for film in &combined {
            self.cache.put_film(film, written_at).await?;
        }

        tracing::info!(count = combined.len(), "cached film collection");
        Ok(combined)
    }

    /// One film by id.
    ///
    /// Only the per-film entry is consulted and written; the collection entry is untouched.
    /// The result is cached under the episode of the record returned, which may differ
    /// from the requested id.
    pub async fn film(&self, id: u32) -> Result<CombinedFilm, Error> {
        if let Some(film) = self.cache.get_film(id).await? {
            tracing::debug!(id, "film cache hit");
            return Ok(film);
        }

        tracing::debug!(id, "film cache miss, fetching from upstream");
        let summary = self.films.get_film(id).await?;
        if summary.episode != id {
            tracing::debug!(id, episode = summary.episode, "catalogue id differs from episode");
        }

        let film = self.enrich(summary).await?;
        self.cache.put_film(&film, Utc::now()).await?;

        tracing::info!(episode = film.episode, "cached film");
        Ok(film)
    }

    async fn enrich(&self, summary: FilmSummary) -> Result<CombinedFilm, Error> {
        let imdb_id = imdb_id_for_episode(summary.episode)?;
        tracing::debug!(episode = summary.episode, imdb_id, "fetching enrichment");
        let imdb = self.enrichment.get_enrichment(imdb_id).await?;
        Ok(CombinedFilm::combine(summary, imdb))
    }

    async fn pause(&self) {
        if !self.pacing.is_zero() {
            tokio::time::sleep(self.pacing).await;
        }
    }
}

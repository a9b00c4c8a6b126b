//! Upstream provider seams.
//!
//! HTTP implementations live in `reel-client`; the catalogue engine only depends on these traits.

use async_trait::async_trait;

use crate::Error;
use crate::film::{FilmSummary, ImdbSummary};

/// The film catalogue.
#[async_trait]
pub trait FilmSource: Send + Sync {
    /// Every film, in catalogue order.
    async fn list_films(&self) -> Result<Vec<FilmSummary>, Error>;

    /// One film by id. A missing film is `Error::NotFound` carrying the upstream status.
    async fn get_film(&self, id: u32) -> Result<FilmSummary, Error>;
}

/// The IMDb enrichment API.
#[async_trait]
pub trait EnrichmentSource: Send + Sync {
    async fn get_enrichment(&self, imdb_id: &str) -> Result<ImdbSummary, Error>;
}

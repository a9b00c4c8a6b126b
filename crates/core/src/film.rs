//! Film records from both upstreams and the combined record served to callers.

use serde::{Deserialize, Serialize};

use crate::Error;

/// Episode number to IMDb title id.
///
/// Every episode the catalogue can return must be listed here.
const EPISODE_TO_IMDB: &[(u32, &str)] = &[
    (1, "tt0120915"),
    (2, "tt0121765"),
    (3, "tt0121766"),
    (4, "tt0076759"),
    (5, "tt0080684"),
    (6, "tt0086190"),
];

/// Resolve the IMDb id for an episode.
///
/// # Errors
///
/// `Error::MissingEpisodeKey` when the episode is not mapped.
pub fn imdb_id_for_episode(episode: u32) -> Result<&'static str, Error> {
    EPISODE_TO_IMDB
        .iter()
        .find(|(ep, _)| *ep == episode)
        .map(|(_, id)| *id)
        .ok_or(Error::MissingEpisodeKey(episode))
}

/// Film as reported by the catalogue upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilmSummary {
    pub title: String,
    pub episode: u32,
    pub director: String,
    pub release_date: String,
    pub opening_crawl: String,
}

/// IMDb enrichment for a film.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImdbSummary {
    pub id: String,
    pub url: String,
    pub primary_image: String,
    pub trailer: String,
}

/// A film merged with its IMDb enrichment. The unit of caching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CombinedFilm {
    pub title: String,
    pub episode: u32,
    pub director: String,
    pub release_date: String,
    pub opening_crawl: String,
    pub id: String,
    pub url: String,
    pub primary_image: String,
    pub trailer: String,
}

impl CombinedFilm {
    pub fn combine(film: FilmSummary, imdb: ImdbSummary) -> Self {
        Self {
            title: film.title,
            episode: film.episode,
            director: film.director,
            release_date: film.release_date,
            opening_crawl: film.opening_crawl,
            id: imdb.id,
            url: imdb.url,
            primary_image: imdb.primary_image,
            trailer: imdb.trailer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_episode_map_covers_saga() {
        for episode in 1..=6 {
            let id = imdb_id_for_episode(episode).unwrap();
            assert!(id.starts_with("tt"));
        }
        assert_eq!(imdb_id_for_episode(4).unwrap(), "tt0076759");
    }

    #[test]
    fn test_unmapped_episode() {
        assert!(matches!(imdb_id_for_episode(0), Err(Error::MissingEpisodeKey(0))));
        assert!(matches!(imdb_id_for_episode(7), Err(Error::MissingEpisodeKey(7))));
    }

    #[test]
    fn test_combined_wire_format() {
        let film = CombinedFilm::combine(
            FilmSummary {
                title: "A New Hope".into(),
                episode: 4,
                director: "George Lucas".into(),
                release_date: "1977-05-25".into(),
                opening_crawl: "It is a period of civil war.".into(),
            },
            ImdbSummary {
                id: "tt0076759".into(),
                url: "https://www.imdb.com/title/tt0076759/".into(),
                primary_image: "https://img/4.jpg".into(),
                trailer: "https://trailer/4".into(),
            },
        );

        let json = serde_json::to_value(&film).unwrap();
        assert_eq!(json["releaseDate"], "1977-05-25");
        assert_eq!(json["openingCrawl"], "It is a period of civil war.");
        assert_eq!(json["primaryImage"], "https://img/4.jpg");
        assert_eq!(json["episode"], 4);
        assert_eq!(json["id"], "tt0076759");
    }
}

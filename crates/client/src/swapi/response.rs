//! Film catalogue response types and normalization.

use reel_core::FilmSummary;
use serde::Deserialize;

/// Raw response from the film list endpoint.
#[derive(Debug, Deserialize)]
pub struct FilmListResponse {
    #[serde(default)]
    pub message: String,
    pub result: Vec<RawFilm>,
}

/// Raw response from the single film endpoint.
#[derive(Debug, Deserialize)]
pub struct FilmResponse {
    #[serde(default)]
    pub message: String,
    pub result: RawFilm,
}

/// Film entry as returned by the catalogue.
#[derive(Debug, Deserialize)]
pub struct RawFilm {
    #[serde(default)]
    pub uid: String,
    pub properties: FilmProperties,
}

#[derive(Debug, Deserialize)]
pub struct FilmProperties {
    pub title: String,
    pub episode_id: u32,
    pub director: String,
    #[serde(default)]
    pub producer: String,
    pub release_date: String,
    pub opening_crawl: String,
}

impl From<RawFilm> for FilmSummary {
    fn from(raw: RawFilm) -> Self {
        let p = raw.properties;
        FilmSummary {
            title: p.title,
            episode: p.episode_id,
            director: p.director,
            release_date: p.release_date,
            opening_crawl: p.opening_crawl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST_JSON: &str = r#"{
        "message": "ok",
        "result": [
            {
                "uid": "1",
                "properties": {
                    "title": "A New Hope",
                    "episode_id": 4,
                    "director": "George Lucas",
                    "producer": "Gary Kurtz, Rick McCallum",
                    "release_date": "1977-05-25",
                    "opening_crawl": "It is a period of civil war.",
                    "url": "https://www.swapi.tech/api/films/1"
                }
            },
            {
                "uid": "2",
                "properties": {
                    "title": "The Empire Strikes Back",
                    "episode_id": 5,
                    "director": "Irvin Kershner",
                    "producer": "Gary Kurtz, Rick McCallum",
                    "release_date": "1980-05-17",
                    "opening_crawl": "It is a dark time for the Rebellion."
                }
            }
        ]
    }"#;

    #[test]
    fn test_parse_list() {
        let response: FilmListResponse = serde_json::from_str(LIST_JSON).unwrap();
        let films: Vec<FilmSummary> = response.result.into_iter().map(FilmSummary::from).collect();

        assert_eq!(films.len(), 2);
        assert_eq!(films[0].episode, 4);
        assert_eq!(films[0].release_date, "1977-05-25");
        assert_eq!(films[1].title, "The Empire Strikes Back");
        assert_eq!(films[1].opening_crawl, "It is a dark time for the Rebellion.");
    }

    #[test]
    fn test_parse_single() {
        let json = r#"{"message":"ok","result":{"uid":"3","properties":{"title":"Return of the Jedi",
            "episode_id":6,"director":"Richard Marquand","producer":"Howard G. Kazanjian",
            "release_date":"1983-05-25","opening_crawl":"Luke Skywalker has returned."}}}"#;
        let response: FilmResponse = serde_json::from_str(json).unwrap();
        let film = FilmSummary::from(response.result);

        assert_eq!(film.episode, 6);
        assert_eq!(film.director, "Richard Marquand");
    }

    #[test]
    fn test_missing_properties_fails() {
        let json = r#"{"message":"ok","result":[{"uid":"1"}]}"#;
        assert!(serde_json::from_str::<FilmListResponse>(json).is_err());
    }
}

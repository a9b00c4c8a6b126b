//! Cache key derivation for the film table.

use std::fmt;

/// Sentinel key for the full film collection.
pub const ALL_KEY: &str = "ALL";

/// Prefix for per-film keys. Contains `#`, so it can never equal [`ALL_KEY`].
pub const FILM_PREFIX: &str = "FILM#";

/// Key of a film cache entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    All,
    Film(u32),
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheKey::All => f.write_str(ALL_KEY),
            CacheKey::Film(episode) => write!(f, "{FILM_PREFIX}{episode}"),
        }
    }
}

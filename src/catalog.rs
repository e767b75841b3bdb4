//! The song catalog served by `/songs`.
//!
//! The catalog is static data: the built-in list below, or a JSON file named
//! by `SONGPOP_CATALOG`. Popularity in the catalog is ignored and replaced on
//! every request.

use std::path::Path;

use thiserror::Error;

use crate::types::Song;

/// Ids starting with this prefix are unfilled template entries.
pub const PLACEHOLDER_PREFIX: &str = "YOUR_REAL_";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("cannot read catalog: {0}")]
    IoError(#[from] std::io::Error),
    #[error("invalid catalog: {0}")]
    SerdeError(#[from] serde_json::Error),
}

fn song(name: &str, streams: u64, key: &str, bpm: u32, spotify_id: &str) -> Song {
    Song {
        name: name.to_string(),
        streams,
        key: key.to_string(),
        bpm,
        spotify_id: spotify_id.to_string(),
        popularity: 0,
    }
}

pub fn default_catalog() -> Vec<Song> {
    vec![
        song("If I", 924000, "B", 119, "54Ew6UcuXLChTnSAwXAIXY"),
        song("Payday", 556000, "F", 126, "4gpOjiawQcmFqRSwtp7Ppt"),
        song("Quédate Conmigo", 111000, "C", 120, "23Byo25q7SjXvpumZv3q4K"),
        song("Whatever Happens, Happens", 472000, "F#", 118, "2APRTIVViZequi0ZClGao5"),
        song("Silk Thieves", 85900, "G", 125, "3NX8oez6NU2BjJHDK06a65"),
        song("Sinnerman", 87100, "A#", 127, "2WSlfpTj1WD3H6vKZCXyik"),
        song("Vanilla", 140000, "F#", 116, "0KNQTHbKpmQtRSDgYhkJf7"),
        song("Can We", 94800, "F#", 122, "7lDSJLLBjsfPhZi79APe6i"),
        song("Killin' Me", 13501, "A#", 126, "5u1SCoT3vRGHnpwYATaNUD"),
        song("Aquatic Movements", 19500, "A", 124, "1nHYUvlvvT57PtXdunIJP1"),
    ]
}

/// Reads a catalog from a JSON array of songs.
pub async fn load_catalog(path: &Path) -> Result<Vec<Song>, CatalogError> {
    let content = async_fs::read_to_string(path).await?;
    parse_catalog(&content)
}

pub fn parse_catalog(json: &str) -> Result<Vec<Song>, CatalogError> {
    let mut songs: Vec<Song> = serde_json::from_str(json)?;
    for song in songs.iter_mut() {
        song.popularity = 0;
    }
    Ok(songs)
}

/// Spotify ids worth looking up, in catalog order.
pub fn lookup_ids(songs: &[Song]) -> Vec<String> {
    songs
        .iter()
        .map(|s| s.spotify_id.as_str())
        .filter(|id| !id.is_empty() && !id.starts_with(PLACEHOLDER_PREFIX))
        .map(str::to_string)
        .collect()
}

use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub name: String,
    pub streams: u64,
    pub key: String,
    pub bpm: u32,
    #[serde(default)]
    pub spotify_id: String,
    /// Only field filled in per request, from the live Spotify value.
    #[serde(default)]
    pub popularity: u32,
}

#[derive(Tabled)]
pub struct SongTableRow {
    pub name: String,
    pub streams: u64,
    pub key: String,
    pub bpm: u32,
    pub popularity: u32,
}

impl From<&Song> for SongTableRow {
    fn from(song: &Song) -> Self {
        Self {
            name: song.name.clone(),
            streams: song.streams,
            key: song.key.clone(),
            bpm: song.bpm,
            popularity: song.popularity,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub expires_in: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeveralTracksResponse {
    // Unknown ids come back as `null` entries.
    pub tracks: Vec<Option<TrackPopularity>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackPopularity {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub popularity: u32,
}

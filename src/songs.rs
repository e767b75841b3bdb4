use std::{cmp::Ordering, collections::HashMap, str::FromStr};

use crate::{
    catalog,
    config::Credentials,
    info,
    spotify::{SpotifyClient, SpotifyError},
    types::Song,
    warning,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Streams,
    Key,
    Bpm,
    Popularity,
    Name,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "streams" => Ok(SortField::Streams),
            "key" => Ok(SortField::Key),
            "bpm" => Ok(SortField::Bpm),
            "popularity" => Ok(SortField::Popularity),
            "name" => Ok(SortField::Name),
            other => Err(format!("unknown sort field: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// `"asc"` sorts ascending; anything else, including nothing, descending.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }
}

/// Requested ordering. `field` is `None` for an unrecognized field name,
/// which keeps catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: Option<SortField>,
    pub order: SortOrder,
}

pub const DEFAULT_SORT_FIELD: &str = "streams";

impl SortSpec {
    pub fn parse(sort_by: Option<&str>, sort_order: Option<&str>) -> Self {
        Self {
            field: sort_by.unwrap_or(DEFAULT_SORT_FIELD).parse().ok(),
            order: SortOrder::parse(sort_order),
        }
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::parse(None, None)
    }
}

/// Copy of `songs` with popularity taken from `popularity`, 0 when missing.
pub fn apply_popularity(songs: &[Song], popularity: &HashMap<String, u32>) -> Vec<Song> {
    songs
        .iter()
        .map(|song| Song {
            popularity: popularity.get(&song.spotify_id).copied().unwrap_or(0),
            ..song.clone()
        })
        .collect()
}

fn compare(a: &Song, b: &Song, field: SortField) -> Ordering {
    match field {
        SortField::Streams => a.streams.cmp(&b.streams),
        SortField::Key => a.key.cmp(&b.key),
        SortField::Bpm => a.bpm.cmp(&b.bpm),
        SortField::Popularity => a.popularity.cmp(&b.popularity),
        SortField::Name => a.name.cmp(&b.name),
    }
}

/// Stable sort by `field` in `order`. `None` leaves the slice as it is.
pub fn sort_songs(songs: &mut [Song], field: Option<SortField>, order: SortOrder) {
    let Some(field) = field else {
        return;
    };

    songs.sort_by(|a, b| match order {
        SortOrder::Asc => compare(a, b, field),
        SortOrder::Desc => compare(b, a, field),
    });
}

/// Merges fetched popularity onto the catalog and sorts the result.
pub fn assemble(catalog: &[Song], popularity: &HashMap<String, u32>, sort: SortSpec) -> Vec<Song> {
    let mut songs = apply_popularity(catalog, popularity);
    sort_songs(&mut songs, sort.field, sort.order);
    songs
}

/// Catalog enriched with live popularity, sorted per `sort`.
///
/// Only a failure to obtain an access token is an error. Batches that fail
/// are logged and their songs keep popularity 0.
pub async fn enriched_songs(
    client: &SpotifyClient,
    credentials: &Credentials,
    catalog: &[Song],
    sort: SortSpec,
) -> Result<Vec<Song>, SpotifyError> {
    let token = client
        .tokens()
        .get_token(&credentials.client_id, &credentials.client_secret)
        .await?;

    let ids = catalog::lookup_ids(catalog);
    let report = client.fetch_popularity(&ids, &token).await;
    if !report.is_complete() {
        warning!(
            "{} of {} batches failed; affected songs report popularity 0",
            report.failures.len(),
            ids.len().div_ceil(crate::spotify::MAX_BATCH_SIZE)
        );
    }

    let songs = assemble(catalog, &report.popularity, sort);
    let found = songs
        .iter()
        .filter(|s| report.popularity.contains_key(&s.spotify_id))
        .count();
    info!("Successfully mapped popularity for {} tracks.", found);

    Ok(songs)
}

use std::collections::HashMap;

use songpop::api::SongsQuery;
use songpop::catalog::{self, CatalogError, PLACEHOLDER_PREFIX};
use songpop::songs::*;
use songpop::types::Song;

// Helper function to create a test song
fn create_test_song(name: &str, streams: u64, key: &str, bpm: u32, spotify_id: &str) -> Song {
    Song {
        name: name.to_string(),
        streams,
        key: key.to_string(),
        bpm,
        spotify_id: spotify_id.to_string(),
        popularity: 0,
    }
}

fn names(songs: &[Song]) -> Vec<&str> {
    songs.iter().map(|s| s.name.as_str()).collect()
}

fn abc_catalog() -> Vec<Song> {
    vec![
        create_test_song("A", 10, "C", 120, "id_a"),
        create_test_song("B", 30, "A", 110, "id_b"),
        create_test_song("C", 20, "B", 130, "id_c"),
    ]
}

#[test]
fn test_sort_streams_ascending() {
    let mut songs = abc_catalog();
    sort_songs(&mut songs, Some(SortField::Streams), SortOrder::Asc);
    assert_eq!(names(&songs), vec!["A", "C", "B"]);
}

#[test]
fn test_sort_streams_descending_is_default() {
    let mut songs = abc_catalog();
    let spec = SortSpec::parse(Some("streams"), None);
    assert_eq!(spec.order, SortOrder::Desc);
    sort_songs(&mut songs, spec.field, spec.order);
    assert_eq!(names(&songs), vec!["B", "C", "A"]);
}

#[test]
fn test_sort_by_each_field() {
    let mut songs = abc_catalog();
    sort_songs(&mut songs, Some(SortField::Key), SortOrder::Asc);
    assert_eq!(names(&songs), vec!["B", "C", "A"]);

    sort_songs(&mut songs, Some(SortField::Bpm), SortOrder::Desc);
    assert_eq!(names(&songs), vec!["C", "A", "B"]);

    sort_songs(&mut songs, Some(SortField::Name), SortOrder::Desc);
    assert_eq!(names(&songs), vec!["C", "B", "A"]);
}

#[test]
fn test_sort_by_popularity_after_merge() {
    let popularity = HashMap::from([("id_a".to_string(), 70), ("id_c".to_string(), 40)]);
    let songs = assemble(
        &abc_catalog(),
        &popularity,
        SortSpec::parse(Some("popularity"), Some("desc")),
    );
    assert_eq!(names(&songs), vec!["A", "C", "B"]);
    assert_eq!(songs[2].popularity, 0);
}

#[test]
fn test_unknown_sort_field_keeps_catalog_order() {
    let spec = SortSpec::parse(Some("danceability"), Some("asc"));
    assert_eq!(spec.field, None);

    let songs = assemble(&abc_catalog(), &HashMap::new(), spec);
    assert_eq!(names(&songs), vec!["A", "B", "C"]);
}

#[test]
fn test_sort_order_parsing() {
    assert_eq!(SortOrder::parse(Some("asc")), SortOrder::Asc);
    assert_eq!(SortOrder::parse(Some("desc")), SortOrder::Desc);
    assert_eq!(SortOrder::parse(Some("ASC")), SortOrder::Desc);
    assert_eq!(SortOrder::parse(None), SortOrder::Desc);
    assert_eq!(SortSpec::default().field, Some(SortField::Streams));
}

#[test]
fn test_sort_is_stable_for_equal_keys() {
    let mut songs = vec![
        create_test_song("First", 1, "F#", 120, "1"),
        create_test_song("Second", 2, "F#", 120, "2"),
        create_test_song("Third", 3, "F#", 120, "3"),
    ];
    sort_songs(&mut songs, Some(SortField::Key), SortOrder::Desc);
    assert_eq!(names(&songs), vec!["First", "Second", "Third"]);
}

#[test]
fn test_missing_popularity_defaults_to_zero() {
    let mut catalog = abc_catalog();
    catalog[1].popularity = 99; // stale value from the catalog source
    let popularity = HashMap::from([("id_a".to_string(), 55)]);

    let songs = apply_popularity(&catalog, &popularity);
    assert_eq!(songs.len(), 3);
    assert_eq!(songs[0].popularity, 55);
    assert_eq!(songs[1].popularity, 0);
    assert_eq!(songs[2].popularity, 0);
}

#[test]
fn test_lookup_ids_skips_empty_and_placeholders() {
    let catalog = vec![
        create_test_song("Real", 1, "A", 100, "4gpOjiawQcmFqRSwtp7Ppt"),
        create_test_song("Empty", 1, "A", 100, ""),
        create_test_song("Template", 1, "A", 100, &format!("{}ID_1", PLACEHOLDER_PREFIX)),
        create_test_song("Other", 1, "A", 100, "54Ew6UcuXLChTnSAwXAIXY"),
    ];

    assert_eq!(
        catalog::lookup_ids(&catalog),
        vec!["4gpOjiawQcmFqRSwtp7Ppt", "54Ew6UcuXLChTnSAwXAIXY"]
    );
}

#[test]
fn test_default_catalog() {
    let songs = catalog::default_catalog();
    assert_eq!(songs.len(), 10);
    assert_eq!(catalog::lookup_ids(&songs).len(), 10);
    assert!(songs.iter().all(|s| s.popularity == 0));
}

#[test]
fn test_parse_catalog_resets_popularity() {
    let json = r#"[
        {"name": "Payday", "streams": 556000, "key": "F", "bpm": 126, "spotifyId": "4gpOjiawQcmFqRSwtp7Ppt", "popularity": 42},
        {"name": "Unreleased", "streams": 0, "key": "G", "bpm": 100}
    ]"#;

    let songs = catalog::parse_catalog(json).unwrap();
    assert_eq!(songs.len(), 2);
    assert_eq!(songs[0].spotify_id, "4gpOjiawQcmFqRSwtp7Ppt");
    assert_eq!(songs[0].popularity, 0);
    assert_eq!(songs[1].spotify_id, "");
}

#[test]
fn test_parse_catalog_rejects_invalid_json() {
    assert!(catalog::parse_catalog("{not json").is_err());
}

#[test]
fn test_song_serializes_camel_case() {
    let song = create_test_song("If I", 924000, "B", 119, "54Ew6UcuXLChTnSAwXAIXY");
    let value = serde_json::to_value(&song).unwrap();
    assert_eq!(value["spotifyId"], "54Ew6UcuXLChTnSAwXAIXY");
    assert_eq!(value["popularity"], 0);
    assert_eq!(value["streams"], 924000);
}

#[test]
fn test_songs_query_takes_first_of_repeated_values() {
    let pairs = vec![
        ("sortBy".to_string(), "bpm".to_string()),
        ("page".to_string(), "2".to_string()),
        ("sortBy".to_string(), "name".to_string()),
    ];
    let query = SongsQuery::from_pairs(&pairs);
    assert_eq!(query.sort_by.as_deref(), Some("bpm"));
    assert_eq!(query.sort_order, None);
    assert_eq!(query.sort_spec(), SortSpec::parse(Some("bpm"), None));

    assert_eq!(SongsQuery::from_pairs(&[]).sort_spec(), SortSpec::default());
}

#[test]
fn test_catalog_errors_are_typed() {
    let err = catalog::parse_catalog("[{\"name\": 1}]").unwrap_err();
    assert!(matches!(err, CatalogError::SerdeError(_)));
    assert!(err.to_string().starts_with("invalid catalog"));
}

#[tokio::test]
async fn test_missing_catalog_file_is_io_error() {
    let err = catalog::load_catalog(std::path::Path::new("does/not/exist.json"))
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::IoError(_)));
}

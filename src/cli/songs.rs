use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error,
    songs::{self, SortSpec},
    state::AppState,
    success,
    types::SongTableRow,
};

pub async fn list_songs(sort_by: Option<String>, sort_order: Option<String>) {
    let state = match AppState::from_env().await {
        Ok(state) => state,
        Err(e) => error!("Cannot initialize state. Err: {}", e),
    };
    let sort = SortSpec::parse(sort_by.as_deref(), sort_order.as_deref());

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching popularity from Spotify...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let result =
        songs::enriched_songs(&state.client, &state.credentials, &state.catalog, sort).await;
    pb.finish_and_clear();

    let songs = match result {
        Ok(songs) => songs,
        Err(e) => error!("Could not authenticate with Spotify. Err: {}", e),
    };

    let rows: Vec<SongTableRow> = songs.iter().map(SongTableRow::from).collect();
    println!("{}", Table::new(rows));
    success!("Listed {} songs", songs.len());
}

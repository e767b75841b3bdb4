use std::collections::HashMap;

use reqwest::StatusCode;

use crate::{info, types::SeveralTracksResponse, utils, warning};

use super::{client::SpotifyClient, error::SpotifyError};

/// Most track ids Spotify accepts in one `GET /tracks` request.
pub const MAX_BATCH_SIZE: usize = 50;

/// A batch that contributed nothing to the merged result.
#[derive(Debug)]
pub struct BatchFailure {
    pub ids: Vec<String>,
    pub error: SpotifyError,
}

/// Merged outcome of a chunked popularity fetch.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub popularity: HashMap<String, u32>,
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

impl SpotifyClient {
    /// Fetches popularity for at most [`MAX_BATCH_SIZE`] tracks with a single
    /// request.
    ///
    /// Ids Spotify does not know are simply missing from the returned map.
    ///
    /// # Errors
    ///
    /// - `TooManyIds` when more than 50 ids are passed (nothing is sent)
    /// - `RateLimited` when every attempt was answered with 429
    /// - `Upstream` for any other non-200 status, carrying the raw body
    /// - `ParseFailed` when the body is not the expected JSON
    pub async fn get_tracks_popularity(
        &self,
        track_ids: &[String],
        token: &str,
    ) -> Result<HashMap<String, u32>, SpotifyError> {
        if track_ids.is_empty() {
            return Ok(HashMap::new());
        }
        if track_ids.len() > MAX_BATCH_SIZE {
            return Err(SpotifyError::TooManyIds(track_ids.len()));
        }

        let request = self
            .http
            .get(format!("{}/tracks", self.api_url))
            .query(&[("ids", track_ids.join(","))])
            .bearer_auth(token);

        let response = self.policy.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(SpotifyError::Upstream { status, body });
        }

        let data: SeveralTracksResponse = serde_json::from_str(&body).map_err(|e| {
            SpotifyError::ParseFailed(format!(
                "Failed to unmarshal track data (response body: {}): {}",
                body, e
            ))
        })?;

        Ok(data
            .tracks
            .into_iter()
            .flatten()
            .filter_map(|track| match track.id {
                Some(id) if !id.is_empty() => Some((id, track.popularity)),
                _ => None,
            })
            .collect())
    }

    /// Fetches popularity for any number of tracks.
    ///
    /// The ids are split into contiguous batches of at most
    /// [`MAX_BATCH_SIZE`], each fetched on its own task. A failing batch is
    /// logged and listed in [`BatchReport::failures`] while the others still
    /// contribute their values.
    pub async fn fetch_popularity(&self, track_ids: &[String], token: &str) -> BatchReport {
        let mut report = BatchReport::default();
        if track_ids.is_empty() {
            return report;
        }

        info!(
            "Attempting to fetch popularity for {} track IDs...",
            track_ids.len()
        );

        let mut handles = Vec::new();
        for (start, end) in utils::chunk_bounds(track_ids.len(), MAX_BATCH_SIZE) {
            let client = self.clone();
            let batch = track_ids[start..end].to_vec();
            let token = token.to_string();
            let handle = tokio::spawn(async move {
                let result = client.get_tracks_popularity(&batch, &token).await;
                (batch, result)
            });
            handles.push((start, end, handle));
        }

        for (start, end, handle) in handles {
            match handle.await {
                Ok((_, Ok(popularity))) => report.popularity.extend(popularity),
                Ok((batch, Err(e))) => {
                    warning!("Error fetching details for batch {}-{}: {}", start, end - 1, e);
                    report.failures.push(BatchFailure { ids: batch, error: e });
                }
                Err(e) => {
                    warning!("Task join error for batch {}-{}: {}", start, end - 1, e);
                    report.failures.push(BatchFailure {
                        ids: track_ids[start..end].to_vec(),
                        error: SpotifyError::TaskFailed(e.to_string()),
                    });
                }
            }
        }

        info!(
            "Finished fetching popularities. Result map size: {}",
            report.popularity.len()
        );

        report
    }
}

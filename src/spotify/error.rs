//! Error types for Spotify Web API operations.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors from Spotify token and track requests.
#[derive(Error, Debug)]
pub enum SpotifyError {
    #[error("Spotify client id or client secret is not configured")]
    MissingCredentials,
    #[error("Failed to fetch token: status {status} - {body}")]
    TokenRejected { status: StatusCode, body: String },
    #[error("Received empty access token")]
    EmptyToken,
    #[error("Failed executing request to Spotify: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Rate limit exceeded after {attempts} attempts")]
    RateLimited { attempts: u32 },
    #[error("Max retries reached for Spotify request")]
    MaxRetriesReached,
    #[error("Spotify request failed: status {status} - {body}")]
    Upstream { status: StatusCode, body: String },
    #[error("Failed to parse Spotify response: {0}")]
    ParseFailed(String),
    #[error("Too many track ids in one request; max is {max}, got {0}", max = super::tracks::MAX_BATCH_SIZE)]
    TooManyIds(usize),
    #[error("Request body cannot be cloned for a retry")]
    RequestNotRetryable,
    #[error("Batch task failed: {0}")]
    TaskFailed(String),
}

impl SpotifyError {
    /// True for missing or rejected credentials.
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            SpotifyError::MissingCredentials
                | SpotifyError::TokenRejected { .. }
                | SpotifyError::EmptyToken
        )
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, SpotifyError::RateLimited { .. })
    }
}

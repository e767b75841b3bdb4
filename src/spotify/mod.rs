//! # Spotify Integration Module
//!
//! Client side of the Spotify Web API as far as songpop needs it: an access
//! token from the client credentials flow, and track popularity looked up in
//! batches.
//!
//! ## Architecture
//!
//! ```text
//! songs::enriched_songs
//!          ↓
//! TokenCache::get_token          (auth)
//!          ↓
//! SpotifyClient::fetch_popularity (tracks, one task per batch of 50)
//!          ↓
//! RetryPolicy::execute           (retry, 429 + Retry-After)
//!          ↓
//! reqwest → Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - [`TokenCache`] holds one [`Credential`] and refreshes it under
//!   a single async lock. A token is reused until 60 seconds before it
//!   expires.
//! - [`retry`] - [`RetryPolicy`] resends rate-limited requests. `Retry-After`
//!   is honored when numeric, otherwise the delay is `5 + 2 * attempt`
//!   seconds. After the last attempt the call fails with
//!   [`SpotifyError::RateLimited`].
//! - [`tracks`] - single-batch lookups (at most 50 ids, one request) and the
//!   chunked fan-out that tolerates failing batches.
//! - [`client`] - [`SpotifyClient`], the shared handle (HTTP pool, base URL,
//!   retry policy, token cache).
//! - [`error`] - [`SpotifyError`].
//!
//! ## Timeouts
//!
//! - Token exchange: 10 seconds
//! - Web API requests: 15 seconds per attempt
//!
//! A rate-limited lookup can take the sum of all backoff delays on top of
//! that; there is no overall deadline.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let client = SpotifyClient::new()?;
//! let token = client.tokens().get_token(&id, &secret).await?;
//! let report = client.fetch_popularity(&track_ids, &token).await;
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod retry;
pub mod tracks;

pub use auth::{CacheState, Credential, TokenCache};
pub use client::SpotifyClient;
pub use error::SpotifyError;
pub use retry::RetryPolicy;
pub use tracks::{BatchFailure, BatchReport, MAX_BATCH_SIZE};

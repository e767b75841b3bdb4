//! # API Module
//!
//! HTTP endpoints served by songpop.
//!
//! ## Endpoints
//!
//! - [`songs`] - `GET /songs?sortBy=&sortOrder=`. Returns the catalog with
//!   live Spotify popularity as pretty-printed JSON. `sortBy` is one of
//!   `streams` (default), `key`, `bpm`, `popularity`, `name`; an unknown
//!   value keeps catalog order. `sortOrder` is `asc` or `desc` (default).
//! - [`health`] - `GET /health`. Status, version and the state of the cached
//!   Spotify token (`empty`, `valid` or `stale`).
//!
//! ## Errors
//!
//! Failures become [`ApiError`], rendered as `{"error": "..."}` with a 5xx
//! status. Credentials and upstream response bodies are only logged, never
//! returned.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Extension, Router, routing::get};
//! use songpop::api::{health, songs};
//!
//! let app = Router::new()
//!     .route("/songs", get(songs))
//!     .route("/health", get(health))
//!     .layer(Extension(state));
//! ```

mod error;
mod health;
mod songs;

pub use error::ApiError;
pub use health::health;
pub use songs::{SongsQuery, songs};

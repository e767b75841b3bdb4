//! Configuration management for songpop.
//!
//! Configuration values come from environment variables, optionally seeded
//! from `.env` files. Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` in the current working directory
//! 3. `.env` in the local data directory
//! 4. Application defaults
//!
//! Missing Spotify credentials are not a startup error. They surface as an
//! authentication failure when the first token is requested.

use std::{env, fmt, path::PathBuf};

use dotenv;

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8080";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Loads environment variables from `.env` files.
///
/// Reads `./.env` first and then `<data_local_dir>/songpop/.env`. `dotenv`
/// never overrides variables that are already set, so the process
/// environment wins over both files and the working directory wins over the
/// data directory.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/songpop/.env`
/// - macOS: `~/Library/Application Support/songpop/.env`
/// - Windows: `%LOCALAPPDATA%/songpop/.env`
///
/// # Returns
///
/// The number of `.env` files that were loaded. Zero is not an error.
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created or a
/// `.env` file exists but cannot be parsed.
pub async fn load_env() -> Result<usize, String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("songpop/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    let mut loaded = 0;
    for candidate in [PathBuf::from(".env"), path] {
        if !candidate.is_file() {
            continue;
        }
        dotenv::from_path(&candidate)
            .map_err(|e| format!("{}: {}", candidate.display(), e))?;
        loaded += 1;
    }

    Ok(loaded)
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Address the HTTP server binds to (`SERVER_ADDRESS`).
pub fn server_addr() -> String {
    var_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}

/// Spotify Web API base URL (`SPOTIFY_API_URL`).
pub fn spotify_apiurl() -> String {
    var_or("SPOTIFY_API_URL", DEFAULT_SPOTIFY_API_URL)
}

/// Spotify token endpoint (`SPOTIFY_API_TOKEN_URL`).
pub fn spotify_apitoken_url() -> String {
    var_or("SPOTIFY_API_TOKEN_URL", DEFAULT_SPOTIFY_TOKEN_URL)
}

/// Frontend origin allowed by CORS (`CORS_ALLOWED_ORIGIN`).
pub fn cors_allowed_origin() -> String {
    var_or("CORS_ALLOWED_ORIGIN", DEFAULT_CORS_ORIGIN)
}

/// Optional path to a JSON catalog replacing the built-in songs
/// (`SONGPOP_CATALOG`).
pub fn catalog_path() -> Option<PathBuf> {
    env::var("SONGPOP_CATALOG")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}

/// Spotify application credentials for the client credentials flow.
///
/// Unset variables become empty strings; the token cache rejects them when a
/// token is first requested.
#[derive(Clone, Default)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Reads `SPOTIFY_CLIENT_ID` and `SPOTIFY_CLIENT_SECRET`.
    pub fn from_env() -> Self {
        Self {
            client_id: env::var("SPOTIFY_CLIENT_ID").unwrap_or_default(),
            client_secret: env::var("SPOTIFY_CLIENT_SECRET").unwrap_or_default(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}

// The secret never ends up in logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

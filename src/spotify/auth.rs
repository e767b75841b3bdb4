use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use reqwest::{Client, StatusCode, header::AUTHORIZATION};
use tokio::sync::Mutex;

use crate::{info, types::TokenResponse, utils};

use super::error::SpotifyError;

/// Tokens are treated as expired this long before their real expiry.
pub const TOKEN_SAFETY_MARGIN_SECS: i64 = 60;

/// Timeout for the token exchange request.
pub const TOKEN_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A bearer token and the moment Spotify stops accepting it.
#[derive(Debug, Clone, PartialEq)]
pub struct Credential {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl Credential {
    pub fn new(token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            token: token.into(),
            expires_at,
        }
    }

    /// Usable at `now`: non-empty and not within the safety margin of expiry.
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        !self.token.is_empty()
            && now < self.expires_at - TimeDelta::seconds(TOKEN_SAFETY_MARGIN_SECS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    Empty,
    Valid,
    Stale,
}

impl CacheState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheState::Empty => "empty",
            CacheState::Valid => "valid",
            CacheState::Stale => "stale",
        }
    }
}

/// Process-wide cache for the client credentials access token.
///
/// Construct once and share it behind an `Arc`. Every caller goes through
/// the same lock for the whole check-and-refresh sequence, so a cold cache
/// sees exactly one token request no matter how many callers race for it.
pub struct TokenCache {
    http: Client,
    token_url: String,
    credential: Mutex<Option<Credential>>,
}

impl TokenCache {
    pub fn new(http: Client, token_url: impl Into<String>) -> Self {
        Self {
            http,
            token_url: token_url.into(),
            credential: Mutex::new(None),
        }
    }

    /// Creates a cache that already holds `credential`.
    pub fn with_credential(
        http: Client,
        token_url: impl Into<String>,
        credential: Credential,
    ) -> Self {
        Self {
            http,
            token_url: token_url.into(),
            credential: Mutex::new(Some(credential)),
        }
    }

    /// Returns a usable access token, requesting a new one when the cached
    /// token is missing or inside the safety margin.
    ///
    /// A failed request leaves the cached credential untouched.
    ///
    /// # Errors
    ///
    /// - `MissingCredentials` if either value is empty (no request is sent)
    /// - `Network` if the token endpoint cannot be reached
    /// - `TokenRejected` for any non-200 answer
    /// - `ParseFailed` / `EmptyToken` for an unusable body
    pub async fn get_token(
        &self,
        client_id: &str,
        client_secret: &str,
    ) -> Result<String, SpotifyError> {
        let mut credential = self.credential.lock().await;

        if let Some(cached) = credential.as_ref() {
            if cached.is_fresh(Utc::now()) {
                return Ok(cached.token.clone());
            }
        }

        let fresh = self.request_token(client_id, client_secret).await?;
        let token = fresh.token.clone();
        info!("Obtained Spotify access token valid until {}", fresh.expires_at);
        *credential = Some(fresh);

        Ok(token)
    }

    /// Snapshot of the cached credential.
    pub async fn current(&self) -> Option<Credential> {
        self.credential.lock().await.clone()
    }

    pub async fn state(&self) -> CacheState {
        match self.credential.lock().await.as_ref() {
            None => CacheState::Empty,
            Some(c) if c.is_fresh(Utc::now()) => CacheState::Valid,
            Some(_) => CacheState::Stale,
        }
    }

    async fn request_token(
        &self,
        client_id: &str,
        client_secret: &str,
    ) -> Result<Credential, SpotifyError> {
        if client_id.is_empty() || client_secret.is_empty() {
            return Err(SpotifyError::MissingCredentials);
        }

        let response = self
            .http
            .post(&self.token_url)
            .header(AUTHORIZATION, utils::basic_auth_value(client_id, client_secret))
            .form(&[("grant_type", "client_credentials")])
            .timeout(TOKEN_REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(SpotifyError::TokenRejected { status, body });
        }

        let parsed: TokenResponse = serde_json::from_str(&body).map_err(|e| {
            SpotifyError::ParseFailed(format!("Failed to unmarshal token response: {}", e))
        })?;

        if parsed.access_token.is_empty() {
            return Err(SpotifyError::EmptyToken);
        }

        let expires_at = TimeDelta::try_seconds(parsed.expires_in)
            .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
            .ok_or_else(|| {
                SpotifyError::ParseFailed(format!(
                    "Token lifetime out of range: expires_in {}",
                    parsed.expires_in
                ))
            })?;

        Ok(Credential {
            token: parsed.access_token,
            expires_at,
        })
    }
}

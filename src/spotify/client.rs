use std::{sync::Arc, time::Duration};

use reqwest::Client;

use crate::config;

use super::{auth::TokenCache, error::SpotifyError, retry::RetryPolicy};

/// Timeout for every Web API request sent through the client.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Handle to the Spotify Web API.
///
/// Cheap to clone: clones share the HTTP connection pool and the token cache.
#[derive(Clone)]
pub struct SpotifyClient {
    pub(crate) http: Client,
    pub(crate) api_url: String,
    pub(crate) policy: RetryPolicy,
    tokens: Arc<TokenCache>,
}

impl SpotifyClient {
    /// Client for the endpoints configured in the environment.
    pub fn new() -> Result<Self, SpotifyError> {
        Self::with_base_urls(&config::spotify_apiurl(), &config::spotify_apitoken_url())
    }

    /// Client for explicit endpoints (used with wiremock in tests).
    pub fn with_base_urls(api_url: &str, token_url: &str) -> Result<Self, SpotifyError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        let tokens = Arc::new(TokenCache::new(http.clone(), token_url));

        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            policy: RetryPolicy::default(),
            tokens,
        })
    }

    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the token cache, e.g. with one seeded with a known credential.
    pub fn with_token_cache(mut self, tokens: Arc<TokenCache>) -> Self {
        self.tokens = tokens;
        self
    }

    pub fn tokens(&self) -> &Arc<TokenCache> {
        &self.tokens
    }
}

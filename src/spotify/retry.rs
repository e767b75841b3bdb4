//! Rate-limit aware request execution.
//!
//! Spotify answers bursts with `429 Too Many Requests` and usually says how
//! long to back off in `Retry-After`. [`RetryPolicy::execute`] resends the
//! request after that delay, or after its own backoff when the header is
//! missing, and gives up with [`SpotifyError::RateLimited`] once the attempt
//! budget is spent. Every other response goes back to the caller untouched.

use std::time::Duration;

use reqwest::{RequestBuilder, Response, StatusCode, header::HeaderMap};
use tokio::time::sleep;

use crate::{utils, warning};

use super::error::SpotifyError;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Delay used when `Retry-After` is missing: 5 s plus 2 s per retry made.
pub fn rate_limit_backoff(attempt: u32) -> Duration {
    Duration::from_secs(5 + u64::from(attempt) * 2)
}

pub fn is_rate_limited(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS
}

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: fn(u32) -> Duration,
    pub retryable: fn(StatusCode) -> bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff: rate_limit_backoff,
            retryable: is_rate_limited,
        }
    }
}

impl RetryPolicy {
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_backoff(mut self, backoff: fn(u32) -> Duration) -> Self {
        self.backoff = backoff;
        self
    }

    /// Delay before the retry following `attempt` (0-based).
    ///
    /// A numeric `Retry-After` wins; otherwise the backoff function decides.
    pub fn delay(&self, attempt: u32, headers: &HeaderMap) -> Duration {
        match utils::parse_retry_after(headers) {
            Some(seconds) => Duration::from_secs(seconds),
            None => (self.backoff)(attempt),
        }
    }

    /// Sends `request`, retrying retryable responses up to `max_attempts`
    /// times in total.
    ///
    /// Transport errors are returned at once. The sleep between attempts
    /// only suspends the calling task.
    pub async fn execute(&self, request: RequestBuilder) -> Result<Response, SpotifyError> {
        let mut attempt = 0;

        while attempt < self.max_attempts {
            let response = request
                .try_clone()
                .ok_or(SpotifyError::RequestNotRetryable)?
                .send()
                .await?;

            if !(self.retryable)(response.status()) {
                return Ok(response);
            }

            let delay = self.delay(attempt, response.headers());
            // drain so the connection can be reused
            let _ = response.bytes().await;

            if attempt + 1 >= self.max_attempts {
                return Err(SpotifyError::RateLimited {
                    attempts: self.max_attempts,
                });
            }

            warning!(
                "Rate limit exceeded. Retrying after {} seconds...",
                delay.as_secs()
            );
            sleep(delay).await;
            attempt += 1;
        }

        Err(SpotifyError::MaxRetriesReached)
    }
}

use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::header::{HeaderMap, RETRY_AFTER};

/// Value for an `Authorization` header using HTTP Basic auth.
pub fn basic_auth_value(client_id: &str, client_secret: &str) -> String {
    let encoded = STANDARD.encode(format!("{}:{}", client_id, client_secret));
    format!("Basic {}", encoded)
}

/// Reads `Retry-After` as a number of seconds.
///
/// HTTP-date values and anything else non-numeric yield `None`.
pub fn parse_retry_after(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
}

/// Start/end indices (end exclusive) of the contiguous chunks of `len` items.
pub fn chunk_bounds(len: usize, chunk_size: usize) -> Vec<(usize, usize)> {
    if chunk_size == 0 {
        return Vec::new();
    }

    (0..len)
        .step_by(chunk_size)
        .map(|start| (start, (start + chunk_size).min(len)))
        .collect()
}

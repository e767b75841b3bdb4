use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::{spotify::SpotifyError, warning};

/// Errors a handler turns into an HTTP response.
///
/// The body only ever carries a generic message; the underlying error is
/// logged and never sent to the client.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Could not authenticate with Spotify")]
    Authentication(#[source] SpotifyError),
    #[error("Spotify is currently unavailable")]
    Upstream(#[source] SpotifyError),
    #[error("Could not encode response")]
    Encoding(#[from] serde_json::Error),
}

impl From<SpotifyError> for ApiError {
    fn from(err: SpotifyError) -> Self {
        if err.is_auth() {
            ApiError::Authentication(err)
        } else {
            ApiError::Upstream(err)
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Authentication(_) | ApiError::Encoding(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Upstream(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Authentication(e) | ApiError::Upstream(e) => {
                warning!("{}: {}", self, e);
            }
            ApiError::Encoding(e) => warning!("{}: {}", self, e),
        }
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

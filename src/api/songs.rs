use axum::{
    Extension,
    extract::Query,
    http::header,
    response::{IntoResponse, Response},
};

use crate::{songs::SortSpec, state::AppState};

use super::error::ApiError;

/// Sorting parameters of `GET /songs`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SongsQuery {
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl SongsQuery {
    /// Picks `sortBy` and `sortOrder` from raw query pairs. When a parameter
    /// is repeated the first value wins; unknown parameters are ignored.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let first = |name: &str| {
            pairs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone())
        };

        Self {
            sort_by: first("sortBy"),
            sort_order: first("sortOrder"),
        }
    }

    pub fn sort_spec(&self) -> SortSpec {
        SortSpec::parse(self.sort_by.as_deref(), self.sort_order.as_deref())
    }
}

pub async fn songs(
    Query(pairs): Query<Vec<(String, String)>>,
    Extension(state): Extension<AppState>,
) -> Result<Response, ApiError> {
    let query = SongsQuery::from_pairs(&pairs);

    let songs = crate::songs::enriched_songs(
        &state.client,
        &state.credentials,
        &state.catalog,
        query.sort_spec(),
    )
    .await?;

    let body = serde_json::to_string_pretty(&songs)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

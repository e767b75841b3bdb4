use axum::{Extension, response::Json};
use serde_json::{Value, json};

use crate::state::AppState;

pub async fn health(Extension(state): Extension<AppState>) -> Json<Value> {
    let token = state.client.tokens().state().await;

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "token": token.as_str(),
    }))
}

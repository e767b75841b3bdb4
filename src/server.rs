use std::{net::SocketAddr, str::FromStr, time::Duration};

use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use tower_http::cors::CorsLayer;

use crate::{Res, api, config, state::AppState, success, warning};

/// CORS policy for the frontend at `allowed_origin`.
pub fn cors_layer(allowed_origin: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
        .max_age(Duration::from_secs(12 * 60 * 60));

    match HeaderValue::from_str(allowed_origin) {
        Ok(origin) => layer.allow_origin(origin),
        Err(e) => {
            warning!("Ignoring invalid CORS origin {}: {}", allowed_origin, e);
            layer
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/songs", get(api::songs))
        .layer(Extension(state))
        .layer(cors_layer(&config::cors_allowed_origin()))
}

pub async fn start_api_server(state: AppState, addr: &str) -> Res<()> {
    let addr = SocketAddr::from_str(addr)
        .map_err(|e| format!("Failed to parse server address {}: {}", addr, e))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    success!("songpop API server running on {}", addr);
    axum::serve(listener, router(state)).await?;

    Ok(())
}

use crate::{config, error, server, state::AppState, warning};

pub async fn serve(addr: Option<String>) {
    let state = match AppState::from_env().await {
        Ok(state) => state,
        Err(e) => error!("Cannot initialize server state. Err: {}", e),
    };

    if !state.credentials.is_complete() {
        warning!(
            "SPOTIFY_CLIENT_ID or SPOTIFY_CLIENT_SECRET is not set; /songs will fail to authenticate"
        );
    }

    let addr = addr.unwrap_or_else(config::server_addr);
    if let Err(e) = server::start_api_server(state, &addr).await {
        error!("Server stopped. Err: {}", e);
    }
}

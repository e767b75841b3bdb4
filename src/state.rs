use std::sync::Arc;

use crate::{
    Res, catalog,
    config::{self, Credentials},
    info,
    spotify::SpotifyClient,
    types::Song,
};

/// Everything a request handler needs. Built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub client: SpotifyClient,
    pub credentials: Credentials,
    pub catalog: Arc<Vec<Song>>,
}

impl AppState {
    pub fn new(client: SpotifyClient, credentials: Credentials, catalog: Vec<Song>) -> Self {
        Self {
            client,
            credentials,
            catalog: Arc::new(catalog),
        }
    }

    /// State from the environment: configured endpoints, credentials and
    /// catalog (the built-in one unless `SONGPOP_CATALOG` is set).
    pub async fn from_env() -> Res<Self> {
        let catalog = match config::catalog_path() {
            Some(path) => {
                let songs = catalog::load_catalog(&path).await?;
                info!("Loaded {} songs from {}", songs.len(), path.display());
                songs
            }
            None => catalog::default_catalog(),
        };

        Ok(Self::new(
            SpotifyClient::new()?,
            Credentials::from_env(),
            catalog,
        ))
    }
}

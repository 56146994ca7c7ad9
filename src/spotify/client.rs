use std::sync::Arc;

use reqwest::Client;
use tokio::sync::Mutex;

use crate::{
    config::Config,
    error::AppError,
    management::TokenManager,
    types::{Playlist, PlaylistCategory, Track},
};

use super::{SERVICE, playlist};

/// Spotify Web API client shared by all request handlers.
///
/// Holds the HTTP client, the API base URL and the app token cache.
/// Cloning is cheap; clones share the same token.
#[derive(Clone)]
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    tokens: Arc<Mutex<TokenManager>>,
}

impl SpotifyClient {
    pub fn new(http: Client, config: &Config) -> Self {
        let tokens = TokenManager::new(
            http.clone(),
            config.spotify_api_token_url.clone(),
            config.spotify_client_id.clone(),
            config.spotify_client_secret.clone(),
        );

        Self {
            http,
            api_url: config.spotify_api_url.clone(),
            tokens: Arc::new(Mutex::new(tokens)),
        }
    }

    async fn access_token(&self) -> Result<String, AppError> {
        self.tokens.lock().await.get_valid_token().await
    }

    /// Finds the playlist for a category by searching for its label.
    ///
    /// The first search result is taken as is, no check is made that its
    /// name actually matches the label.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UpstreamData`] if the search yields no playlist.
    pub async fn find_playlist(&self, category: PlaylistCategory) -> Result<Playlist, AppError> {
        let token = self.access_token().await?;

        playlist::search(&self.http, &self.api_url, &token, category.label())
            .await?
            .ok_or_else(|| AppError::UpstreamData {
                service: SERVICE,
                message: format!("no playlist found for '{}'", category.label()),
            })
    }

    pub async fn playlist_tracks(&self, playlist_id: &str) -> Result<Vec<Track>, AppError> {
        let token = self.access_token().await?;
        playlist::tracks(&self.http, &self.api_url, &token, playlist_id).await
    }
}

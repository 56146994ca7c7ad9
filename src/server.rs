use axum::{
    Router,
    routing::{get, post},
};
use reqwest::Client;
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{
    Res, api, config::Config, error::AppError, info, spotify::SpotifyClient,
    weather::WeatherClient,
};

/// Clients shared by all request handlers.
///
/// Built once at startup. Both clients use the same connection pool and
/// request timeout.
#[derive(Clone)]
pub struct AppState {
    pub weather: WeatherClient,
    pub spotify: SpotifyClient,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let http = Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| AppError::Config(format!("cannot build HTTP client: {}", e)))?;

        Ok(Self {
            weather: WeatherClient::new(http.clone(), config),
            spotify: SpotifyClient::new(http, config),
        })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/get_weather", post(api::get_weather))
        .with_state(state)
}

pub async fn start_api_server(config: &Config) -> Res<()> {
    let state = Arc::new(AppState::from_config(config)?);

    let addr = SocketAddr::from_str(&config.server_address)
        .map_err(|e| format!("Failed to parse server address: {}", e))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, router(state)).await?;
    Ok(())
}

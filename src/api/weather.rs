use std::sync::Arc;

use axum::{Json, body::Bytes, extract::State};

use crate::{
    error::AppError,
    management,
    server::AppState,
    success,
    types::{PlaylistRequest, PlaylistResponse},
    warning,
};

pub async fn get_weather(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<PlaylistResponse>, AppError> {
    let zip_code = match zip_code_from_body(&body) {
        Ok(zip_code) => zip_code,
        Err(e) => {
            warning!("Rejected request ({}): {}", e.kind(), e);
            return Err(e);
        }
    };

    match management::weather_playlist(&state, &zip_code).await {
        Ok(answer) => {
            success!(
                "{} for {} ({}, {})",
                answer.playlist_name,
                zip_code,
                answer.weather_description,
                answer.temperature
            );
            Ok(Json(answer))
        }
        Err(e) => {
            warning!("Request for {} failed ({}): {}", zip_code, e.kind(), e);
            Err(e)
        }
    }
}

// Parsed by hand so malformed bodies get the same error shape as everything else.
fn zip_code_from_body(body: &[u8]) -> Result<String, AppError> {
    let request: PlaylistRequest = serde_json::from_slice(body)
        .map_err(|e| AppError::Input(format!("request body is not valid JSON: {}", e)))?;

    request
        .zip_code
        .ok_or_else(|| AppError::Input("zip_code is missing".to_string()))
}

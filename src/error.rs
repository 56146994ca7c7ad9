use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Everything that can go wrong while answering a playlist request.
///
/// The variants keep the failure causes apart for logging. On the wire
/// they all collapse into the same `{"error": "..."}` payload with status
/// 500, see [`AppError::status`].
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid request: {0}")]
    Input(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("{service} request failed: {source}")]
    Unavailable {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} returned status {status}: {message}")]
    Upstream {
        service: &'static str,
        status: u16,
        message: String,
    },

    #[error("{service} rejected the credentials: {message}")]
    Auth {
        service: &'static str,
        message: String,
    },

    #[error("unexpected {service} response: {message}")]
    UpstreamData {
        service: &'static str,
        message: String,
    },
}

impl AppError {
    /// Wraps a transport error. The request URL is stripped because it can
    /// carry credentials (OpenWeather takes the API key as `appid`).
    pub fn unavailable(service: &'static str, source: reqwest::Error) -> Self {
        AppError::Unavailable {
            service,
            source: source.without_url(),
        }
    }

    /// Short name of the error kind, used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Input(_) => "input",
            AppError::Config(_) => "config",
            AppError::Unavailable { .. } => "unavailable",
            AppError::Upstream { .. } => "upstream",
            AppError::Auth { .. } => "auth",
            AppError::UpstreamData { .. } => "upstream-data",
        }
    }

    /// HTTP status reported for this error.
    ///
    /// Every kind maps to 500 so clients only ever see a single error shape.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Input(_)
            | AppError::Config(_)
            | AppError::Unavailable { .. }
            | AppError::Upstream { .. }
            | AppError::Auth { .. }
            | AppError::UpstreamData { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_maps_to_internal_server_error() {
        let errors = [
            AppError::Input("zip_code is missing".to_string()),
            AppError::Config("WEATHER_API_KEY must be set".to_string()),
            AppError::Upstream {
                service: "OpenWeather",
                status: 404,
                message: "city not found".to_string(),
            },
            AppError::Auth {
                service: "Spotify",
                message: "invalid_client".to_string(),
            },
            AppError::UpstreamData {
                service: "Spotify",
                message: "no playlist found for 'Rainy Day'".to_string(),
            },
        ];

        for err in errors {
            assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn message_carries_the_provider_text() {
        let err = AppError::Upstream {
            service: "OpenWeather",
            status: 404,
            message: "city not found".to_string(),
        };
        assert_eq!(err.kind(), "upstream");
        assert_eq!(
            err.to_string(),
            "OpenWeather returned status 404: city not found"
        );
    }
}

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    error::AppError,
    types::{PlaylistCategory, PlaylistItem, Track, WeatherReading},
};

const RAIN_KEYWORD: &str = "rain";
const CLOUD_KEYWORD: &str = "cloud";
const SUMMER_ABOVE: f64 = 25.0;
const WINTER_BELOW: f64 = 10.0;

/// Picks the playlist category for a weather reading.
///
/// The rules are checked in order and the first match wins:
/// 1. description mentions rain → [`PlaylistCategory::RainyDay`]
/// 2. description mentions clouds → [`PlaylistCategory::CloudyVibes`]
/// 3. temperature above 25 → [`PlaylistCategory::SummerHits`]
/// 4. temperature below 10 → [`PlaylistCategory::CozyWinter`]
/// 5. otherwise → [`PlaylistCategory::DefaultPlaylist`]
///
/// Keyword matching ignores case. The temperature is compared as is, in
/// whatever unit the weather provider was asked for.
///
/// # Example
///
/// ```
/// let reading = WeatherReading { temperature: 5.0, description: "Light Rain".into() };
/// assert_eq!(pick_category(&reading), PlaylistCategory::RainyDay);
/// ```
pub fn pick_category(reading: &WeatherReading) -> PlaylistCategory {
    let description = reading.description.to_lowercase();

    if description.contains(RAIN_KEYWORD) {
        PlaylistCategory::RainyDay
    } else if description.contains(CLOUD_KEYWORD) {
        PlaylistCategory::CloudyVibes
    } else if reading.temperature > SUMMER_ABOVE {
        PlaylistCategory::SummerHits
    } else if reading.temperature < WINTER_BELOW {
        PlaylistCategory::CozyWinter
    } else {
        PlaylistCategory::DefaultPlaylist
    }
}

/// Projects playlist entries to `{name, artist}` pairs.
///
/// Entries without a track (removed or unavailable items) are skipped. Only
/// the first listed artist is kept; a track without artists gets an empty
/// artist name.
pub fn to_tracks(items: Vec<PlaylistItem>) -> Vec<Track> {
    items
        .into_iter()
        .filter_map(|item| item.track)
        .map(|track| Track {
            artist: track
                .artists
                .into_iter()
                .next()
                .map(|artist| artist.name)
                .unwrap_or_default(),
            name: track.name,
        })
        .collect()
}

/// Shortens a response body for use in an error message.
pub fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}

/// Extracts the human readable message from a provider error body.
///
/// OpenWeather answers with `{"cod": .., "message": ".."}`, the Spotify Web
/// API with `{"error": {"status": .., "message": ".."}}` and the Spotify
/// accounts service with `{"error": "..", "error_description": ".."}`. Bodies
/// in none of these shapes are returned truncated.
pub fn provider_message(body: &str) -> String {
    let Ok(json) = serde_json::from_str::<Value>(body) else {
        return truncate_body(body);
    };

    json["error"]["message"]
        .as_str()
        .or_else(|| json["error_description"].as_str())
        .or_else(|| json["message"].as_str())
        .or_else(|| json["error"].as_str())
        .map(str::to_string)
        .unwrap_or_else(|| truncate_body(body))
}

/// Turns a provider response into `T` or the matching [`AppError`].
///
/// # Error Mapping
///
/// - 401 and 403 → [`AppError::Auth`]
/// - any other non-success status → [`AppError::Upstream`]
/// - body cannot be read → [`AppError::Unavailable`]
/// - body is not the expected JSON → [`AppError::UpstreamData`]
pub async fn decode_response<T: DeserializeOwned>(
    service: &'static str,
    response: Response,
) -> Result<T, AppError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|source| AppError::unavailable(service, source))?;

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(AppError::Auth {
            service,
            message: provider_message(&body),
        });
    }

    if !status.is_success() {
        return Err(AppError::Upstream {
            service,
            status: status.as_u16(),
            message: provider_message(&body),
        });
    }

    serde_json::from_str(&body).map_err(|e| AppError::UpstreamData {
        service,
        message: e.to_string(),
    })
}

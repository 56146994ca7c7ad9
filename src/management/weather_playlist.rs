use crate::{
    error::AppError,
    server::AppState,
    types::{PlaylistResponse, WeatherReading},
    utils,
};

/// Builds the playlist answer for a zip code.
///
/// Runs the whole pipeline in order: current weather, category, playlist
/// search, first page of tracks. Each step needs the previous one, so the
/// three upstream calls happen one after another. The first failing step
/// ends the request with its error.
///
/// # Arguments
///
/// * `state` - Shared clients
/// * `zip_code` - Postal code as sent by the caller
///
/// # Example
///
/// ```
/// let answer = weather_playlist(&state, "94040").await?;
/// println!("{} tracks for {}", answer.tracks.len(), answer.playlist_name);
/// ```
pub async fn weather_playlist(
    state: &AppState,
    zip_code: &str,
) -> Result<PlaylistResponse, AppError> {
    let reading: WeatherReading = state.weather.current_by_zip(zip_code).await?;
    let category = utils::pick_category(&reading);

    let playlist = state.spotify.find_playlist(category).await?;
    let tracks = state.spotify.playlist_tracks(&playlist.id).await?;

    Ok(PlaylistResponse {
        temperature: reading.temperature,
        weather_description: reading.description,
        playlist_name: category.label().to_string(),
        tracks,
    })
}

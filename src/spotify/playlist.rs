use reqwest::Client;

use crate::{
    error::AppError,
    types::{Playlist, PlaylistTracksResponse, SearchPlaylistsResponse, Track},
    utils,
};

use super::SERVICE;

/// Searches the catalog for playlists matching a free-text query.
///
/// Only a single result is requested. Spotify occasionally returns `null`
/// entries in search results; these are treated as no result.
///
/// # Arguments
///
/// * `http` - Shared HTTP client
/// * `api_url` - Spotify Web API base URL
/// * `token` - Valid access token
/// * `query` - Free-text search query, e.g. `"Rainy Day"`
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Some(Playlist))` - The first matching playlist
/// - `Ok(None)` - The search returned nothing
/// - `Err(AppError)` - Network failure, API error or unexpected body
///
/// # Example
///
/// ```
/// if let Some(playlist) = search(&http, api_url, &token, "Summer Hits").await? {
///     println!("Found playlist {}", playlist.id);
/// }
/// ```
pub async fn search(
    http: &Client,
    api_url: &str,
    token: &str,
    query: &str,
) -> Result<Option<Playlist>, AppError> {
    let api_url = format!("{uri}/search", uri = api_url);

    let response = http
        .get(&api_url)
        .query(&[("q", query), ("type", "playlist"), ("limit", "1")])
        .bearer_auth(token)
        .send()
        .await
        .map_err(|source| AppError::unavailable(SERVICE, source))?;

    let res: SearchPlaylistsResponse = utils::decode_response(SERVICE, response).await?;

    Ok(res.playlists.items.into_iter().next().flatten())
}

/// Retrieves the first page of a playlist's tracks.
///
/// No pagination is done; the page size is Spotify's default. Each entry is
/// reduced to its track name and first artist, see [`utils::to_tracks`].
///
/// # Arguments
///
/// * `http` - Shared HTTP client
/// * `api_url` - Spotify Web API base URL
/// * `token` - Valid access token
/// * `playlist_id` - Spotify ID of the playlist
///
/// # Example
///
/// ```
/// let tracks = tracks(&http, api_url, &token, "37i9dQZF1DXbvABJXBIyiY").await?;
/// for track in tracks {
///     println!("{} - {}", track.artist, track.name);
/// }
/// ```
pub async fn tracks(
    http: &Client,
    api_url: &str,
    token: &str,
    playlist_id: &str,
) -> Result<Vec<Track>, AppError> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks",
        uri = api_url,
        id = playlist_id
    );

    let response = http
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(|source| AppError::unavailable(SERVICE, source))?;

    let res: PlaylistTracksResponse = utils::decode_response(SERVICE, response).await?;

    Ok(utils::to_tracks(res.items))
}

use std::fmt;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub expires_in: u64,
    #[serde(default)]
    pub obtained_at: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub temperature: f64,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaylistCategory {
    RainyDay,
    CloudyVibes,
    SummerHits,
    CozyWinter,
    DefaultPlaylist,
}

impl PlaylistCategory {
    pub fn label(&self) -> &'static str {
        match self {
            PlaylistCategory::RainyDay => "Rainy Day",
            PlaylistCategory::CloudyVibes => "Cloudy Vibes",
            PlaylistCategory::SummerHits => "Summer Hits",
            PlaylistCategory::CozyWinter => "Cozy Winter",
            PlaylistCategory::DefaultPlaylist => "Default Playlist",
        }
    }
}

impl fmt::Display for PlaylistCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tabled)]
pub struct Track {
    pub name: String,
    pub artist: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistRequest {
    pub zip_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistResponse {
    pub temperature: f64,
    pub weather_description: String,
    pub playlist_name: String,
    pub tracks: Vec<Track>,
}

// OpenWeather

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeatherResponse {
    pub main: WeatherMain,
    pub weather: Vec<WeatherCondition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherMain {
    pub temp: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherCondition {
    pub description: String,
}

// Spotify

#[derive(Debug, Clone, Deserialize)]
pub struct SearchPlaylistsResponse {
    pub playlists: PlaylistsContainer,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistsContainer {
    pub items: Vec<Option<Playlist>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Playlist {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Vec<PlaylistItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<PlaylistTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTrack {
    pub name: String,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

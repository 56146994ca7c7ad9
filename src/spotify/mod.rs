//! # Spotify Integration Module
//!
//! This module provides the small slice of the Spotify Web API the service
//! needs: app authentication, playlist search and playlist track listing.
//! It handles HTTP communication, token handling and the translation of
//! Spotify errors into [`AppError`](crate::error::AppError) values.
//!
//! ## Architecture
//!
//! ```text
//! Request pipeline (management::weather_playlist)
//!          ↓
//! SpotifyClient
//!     ├── Authentication (client credentials, cached token)
//!     └── Playlist Operations (search, tracks)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Implements the OAuth 2.0 client credentials grant:
//! - **App Tokens**: No user is involved, the client id and secret are
//!   exchanged directly for an access token
//! - **Basic Auth**: Credentials are sent as an HTTP Basic authorization header
//! - **Token Caching**: [`TokenManager`](crate::management::TokenManager)
//!   keeps the token until shortly before it expires
//!
//! ### Playlist Module
//!
//! [`playlist`] - Read-only playlist operations:
//! - **Search**: Free-text playlist search limited to a single result
//! - **Tracks**: First page of a playlist's tracks, projected to name and artist
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Client credentials token request (accounts service)
//! - `GET /search?type=playlist&limit=1` - Playlist search
//! - `GET /playlists/{playlist_id}/tracks` - Playlist items, first page
//!
//! ## Error Handling
//!
//! Network failures, rejected credentials, error statuses and unexpected
//! bodies each map to their own [`AppError`](crate::error::AppError) variant.
//! Nothing is retried and rate limit responses are reported like any other
//! error status.
//!
//! ## Thread Safety
//!
//! [`SpotifyClient`] is cheap to clone and shared between request handlers.
//! The token cache is the only mutable part and sits behind an async mutex.
//!
//! ## Usage
//!
//! ```rust
//! let client = SpotifyClient::new(http, &config);
//! let playlist = client.find_playlist(PlaylistCategory::RainyDay).await?;
//! let tracks = client.playlist_tracks(&playlist.id).await?;
//! ```

pub mod auth;
pub mod client;
pub mod playlist;

pub use client::SpotifyClient;

pub(crate) const SERVICE: &str = "Spotify";

//! # API Module
//!
//! HTTP endpoints of the weather playlist service.
//!
//! ## Endpoints
//!
//! - [`get_weather`] - `POST /get_weather`. Takes `{"zip_code": "..."}` and
//!   answers with the weather summary and a matching playlist:
//!
//!   ```json
//!   {
//!     "temperature": 30.0,
//!     "weather_description": "clear sky",
//!     "playlist_name": "Summer Hits",
//!     "tracks": [{ "name": "...", "artist": "..." }]
//!   }
//!   ```
//!
//!   Any failure is answered with status 500 and `{"error": "<message>"}`.
//!
//! - [`health`] - `GET /health`. Returns application status and version
//!   information for monitoring systems and load balancers.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::{get, post}};
//! use weatherplay::api::{get_weather, health};
//!
//! let app = Router::new()
//!     .route("/get_weather", post(get_weather))
//!     .route("/health", get(health))
//!     .with_state(state);
//! ```

mod health;
mod weather;

pub use health::health;
pub use weather::get_weather;

mod auth;
mod weather_playlist;

pub use auth::TokenManager;
pub use weather_playlist::weather_playlist;

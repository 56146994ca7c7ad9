//! Weather Playlist Service Library
//!
//! This library looks up the current weather for a zip code, derives a mood
//! category from it and answers with a matching Spotify playlist. It contains
//! the HTTP endpoint, the upstream clients for OpenWeather and Spotify, the
//! configuration layer and a few terminal helpers.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints served by the web server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error kinds of the request pipeline
//! - `management` - The weather to playlist pipeline and token caching
//! - `server` - Shared application state and the HTTP server
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//! - `weather` - OpenWeather client implementation
//!
//! # Example
//!
//! ```
//! use weatherplay::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> weatherplay::Res<()> {
//!     config::load_env().await?;
//!     let cfg = config::Config::from_env()?;
//!     server::start_api_server(&cfg).await
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;
pub mod weather;

/// A convenient Result type alias for operations that may fail.
///
/// Used for startup plumbing (loading configuration, binding the server)
/// where any error is fatal. The request pipeline uses
/// [`error::AppError`] instead.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Used to provide positive feedback when operations complete successfully,
/// e.g. when a request was answered with a playlist.
///
/// # Example
///
/// ```
/// success!("Served playlist {} for {}", playlist_name, zip_code);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Only used during startup, never
/// while serving requests.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, most notably failed requests, which are
/// answered with an error payload while the server keeps running.
///
/// # Example
///
/// ```
/// warning!("Request failed ({}): {}", kind, message);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

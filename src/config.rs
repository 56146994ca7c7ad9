//! Configuration management for the weather playlist service.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. All values are read once at startup into a
//! [`Config`] which is then handed to the clients that need it.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the working directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf, time::Duration};

use crate::error::AppError;

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:5000";
pub const DEFAULT_WEATHER_API_URL: &str = "https://api.openweathermap.org/data/2.5";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_API_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Loads environment variables from `.env` files.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `weatherplay/.env`, then from a `.env` file in
/// the working directory. Variables that are already set are never overwritten,
/// and a missing file is not an error.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/weatherplay/.env`
/// - macOS: `~/Library/Application Support/weatherplay/.env`
/// - Windows: `%LOCALAPPDATA%/weatherplay/.env`
///
/// # Errors
///
/// This function will return an error if:
/// - The parent directory cannot be created
/// - An existing `.env` file cannot be parsed
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("weatherplay/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))?;
    }

    match dotenv::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

/// Unit system requested from the weather provider.
///
/// The category thresholds (25 and 10 degrees) are meant as Celsius, so
/// [`Units::Metric`] is the default. [`Units::Standard`] is the provider's own
/// default and yields Kelvin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    Standard,
    Metric,
    Imperial,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Standard => "standard",
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }
}

impl TryFrom<&str> for Units {
    type Error = AppError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "standard" | "kelvin" => Ok(Units::Standard),
            "metric" | "celsius" => Ok(Units::Metric),
            "imperial" | "fahrenheit" => Ok(Units::Imperial),
            _ => Err(AppError::Config(format!(
                "WEATHER_UNITS must be one of standard, metric, imperial (got '{}')",
                value
            ))),
        }
    }
}

/// Runtime configuration of the service.
///
/// Built once at startup with [`Config::from_env`] and shared by reference
/// afterwards. Secrets are only ever read from the environment.
#[derive(Clone)]
pub struct Config {
    pub server_address: String,
    pub weather_api_key: String,
    pub weather_api_url: String,
    pub weather_units: Units,
    pub spotify_client_id: String,
    pub spotify_client_secret: String,
    pub spotify_api_url: String,
    pub spotify_api_token_url: String,
    pub http_timeout: Duration,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("server_address", &self.server_address)
            .field("weather_api_key", &"<redacted>")
            .field("weather_api_url", &self.weather_api_url)
            .field("weather_units", &self.weather_units)
            .field("spotify_client_id", &self.spotify_client_id)
            .field("spotify_client_secret", &"<redacted>")
            .field("spotify_api_url", &self.spotify_api_url)
            .field("spotify_api_token_url", &self.spotify_api_token_url)
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if a required credential is missing or
    /// an optional value cannot be parsed.
    ///
    /// # Example
    ///
    /// ```
    /// config::load_env().await?;
    /// let cfg = Config::from_env()?;
    /// ```
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated as missing, so an untouched `.env.example`
    /// copy fails the same way as an absent variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required = |key: &str| {
            get(key).ok_or_else(|| AppError::Config(format!("{} must be set", key)))
        };

        let weather_units = match get("WEATHER_UNITS") {
            Some(units) => Units::try_from(units.as_str())?,
            None => Units::Metric,
        };

        let http_timeout = match get("HTTP_TIMEOUT_SECS") {
            Some(secs) => match secs.parse::<u64>() {
                Ok(n) if n > 0 => Duration::from_secs(n),
                _ => {
                    return Err(AppError::Config(format!(
                        "HTTP_TIMEOUT_SECS must be a positive number of seconds (got '{}')",
                        secs
                    )));
                }
            },
            None => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        };

        Ok(Self {
            server_address: get("SERVER_ADDRESS")
                .unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string()),
            weather_api_key: required("WEATHER_API_KEY")?,
            weather_api_url: trim_url(
                get("WEATHER_API_URL").unwrap_or_else(|| DEFAULT_WEATHER_API_URL.to_string()),
            ),
            weather_units,
            spotify_client_id: required("SPOTIFY_API_AUTH_CLIENT_ID")?,
            spotify_client_secret: required("SPOTIFY_API_AUTH_CLIENT_SECRET")?,
            spotify_api_url: trim_url(
                get("SPOTIFY_API_URL").unwrap_or_else(|| DEFAULT_SPOTIFY_API_URL.to_string()),
            ),
            spotify_api_token_url: get("SPOTIFY_API_TOKEN_URL")
                .unwrap_or_else(|| DEFAULT_SPOTIFY_API_TOKEN_URL.to_string()),
            http_timeout,
        })
    }
}

fn trim_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    const CREDENTIALS: [(&str, &str); 3] = [
        ("WEATHER_API_KEY", "weather-key"),
        ("SPOTIFY_API_AUTH_CLIENT_ID", "client-id"),
        ("SPOTIFY_API_AUTH_CLIENT_SECRET", "client-secret"),
    ];

    #[test]
    fn defaults_apply_when_only_credentials_are_set() {
        let cfg = Config::from_lookup(lookup(&CREDENTIALS)).unwrap();

        assert_eq!(cfg.server_address, DEFAULT_SERVER_ADDRESS);
        assert_eq!(cfg.weather_api_url, DEFAULT_WEATHER_API_URL);
        assert_eq!(cfg.weather_units, Units::Metric);
        assert_eq!(cfg.spotify_api_url, DEFAULT_SPOTIFY_API_URL);
        assert_eq!(cfg.spotify_api_token_url, DEFAULT_SPOTIFY_API_TOKEN_URL);
        assert_eq!(cfg.http_timeout, Duration::from_secs(10));
    }

    #[test]
    fn missing_credential_is_reported_by_name() {
        let err = Config::from_lookup(lookup(&CREDENTIALS[..2])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("SPOTIFY_API_AUTH_CLIENT_SECRET"));
    }

    #[test]
    fn blank_credential_counts_as_missing() {
        let mut pairs = CREDENTIALS.to_vec();
        pairs[0] = ("WEATHER_API_KEY", "   ");
        let err = Config::from_lookup(lookup(&pairs)).unwrap_err();
        assert!(err.to_string().contains("WEATHER_API_KEY"));
    }

    #[test]
    fn optional_values_are_parsed() {
        let mut pairs = CREDENTIALS.to_vec();
        pairs.push(("WEATHER_UNITS", "Standard"));
        pairs.push(("HTTP_TIMEOUT_SECS", "3"));
        pairs.push(("SPOTIFY_API_URL", "http://localhost:9000/v1/"));

        let cfg = Config::from_lookup(lookup(&pairs)).unwrap();
        assert_eq!(cfg.weather_units, Units::Standard);
        assert_eq!(cfg.http_timeout, Duration::from_secs(3));
        assert_eq!(cfg.spotify_api_url, "http://localhost:9000/v1");
    }

    #[test]
    fn invalid_units_and_timeout_are_rejected() {
        let mut pairs = CREDENTIALS.to_vec();
        pairs.push(("WEATHER_UNITS", "rankine"));
        assert!(Config::from_lookup(lookup(&pairs)).is_err());

        let mut pairs = CREDENTIALS.to_vec();
        pairs.push(("HTTP_TIMEOUT_SECS", "soon"));
        let err = Config::from_lookup(lookup(&pairs)).unwrap_err();
        assert!(err.to_string().contains("HTTP_TIMEOUT_SECS"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut pairs = CREDENTIALS.to_vec();
        pairs.push(("HTTP_TIMEOUT_SECS", "0"));
        let err = Config::from_lookup(lookup(&pairs)).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("HTTP_TIMEOUT_SECS"));
    }

    #[test]
    fn debug_output_hides_secrets() {
        let cfg = Config::from_lookup(lookup(&CREDENTIALS)).unwrap();
        let printed = format!("{:?}", cfg);
        assert!(!printed.contains("weather-key"));
        assert!(!printed.contains("client-secret"));
    }
}

use reqwest::Client;

use crate::{
    config::{Config, Units},
    error::AppError,
    types::{CurrentWeatherResponse, WeatherReading},
    utils,
};

use super::SERVICE;

#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    api_url: String,
    api_key: String,
    units: Units,
}

impl WeatherClient {
    pub fn new(http: Client, config: &Config) -> Self {
        Self {
            http,
            api_url: config.weather_api_url.clone(),
            api_key: config.weather_api_key.clone(),
            units: config.weather_units,
        }
    }

    /// Fetches the current weather for a zip code.
    ///
    /// The zip code is forwarded to the provider untouched, including an
    /// optional `,country` suffix (e.g. `"94040,us"`). Format problems are
    /// reported by the provider.
    ///
    /// # Arguments
    ///
    /// * `zip_code` - Postal code as entered by the user
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(WeatherReading)` - Temperature and the first condition description
    /// - `Err(AppError)` - Network failure, provider error or unexpected body
    ///
    /// # Example
    ///
    /// ```
    /// let reading = client.current_by_zip("94040").await?;
    /// println!("{} at {}", reading.description, reading.temperature);
    /// ```
    pub async fn current_by_zip(&self, zip_code: &str) -> Result<WeatherReading, AppError> {
        let api_url = format!("{uri}/weather", uri = self.api_url);

        let response = self
            .http
            .get(&api_url)
            .query(&[
                ("zip", zip_code),
                ("appid", self.api_key.as_str()),
                ("units", self.units.as_str()),
            ])
            .send()
            .await
            .map_err(|source| AppError::unavailable(SERVICE, source))?;

        let parsed: CurrentWeatherResponse = utils::decode_response(SERVICE, response).await?;

        let description = parsed
            .weather
            .into_iter()
            .next()
            .map(|w| w.description)
            .ok_or_else(|| AppError::UpstreamData {
                service: SERVICE,
                message: "response contained no weather conditions".to_string(),
            })?;

        Ok(WeatherReading {
            temperature: parsed.main.temp,
            description,
        })
    }
}

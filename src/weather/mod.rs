//! # Weather Module
//!
//! Client for the OpenWeather current weather API. The service only needs
//! a single reading per request, the temperature and the free-text
//! condition description at a zip code, so this module stays small.
//!
//! ## API Coverage
//!
//! - `GET /weather?zip={zip}&appid={key}&units={units}` - current conditions
//!
//! ## Units
//!
//! The unit system is taken from the configuration (`WEATHER_UNITS`) and
//! passed through as the `units` query parameter. The reading carries the
//! temperature exactly as the provider returned it.

pub mod current;

pub use current::WeatherClient;

pub(crate) const SERVICE: &str = "OpenWeather";

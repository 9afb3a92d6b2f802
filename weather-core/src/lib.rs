//! Core library for the `weathercli` tool.
//!
//! This crate defines:
//! - An OpenWeatherMap API client (current weather, geocoding, One Call forecast)
//! - Decoders for the JSON bodies of those endpoints
//! - Formatters producing one-line human-readable summaries
//! - Client and on-disk configuration
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod conditions;
pub mod config;
pub mod decode;
pub mod error;
pub mod forecast;
pub mod model;
pub mod transport;
pub mod units;

#[cfg(test)]
mod test_support;

pub use client::Client;
pub use conditions::{conditions, format_conditions};
pub use config::{ClientConfig, Config};
pub use decode::{decode_current, decode_forecast, decode_geo_data};
pub use error::{Error, Result};
pub use forecast::format_daily;
pub use model::{CurrentWeatherResponse, DailyForecast, GeoLocation, Metrics, WeatherSummary};
pub use transport::{HttpTransport, RawResponse, Transport};
pub use units::Units;

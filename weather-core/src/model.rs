use serde::{Deserialize, Serialize};

/// Body of the current weather endpoint (`/data/2.5/weather`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeatherResponse {
    #[serde(rename = "weather", default)]
    pub summaries: Vec<WeatherSummary>,
    #[serde(rename = "main")]
    pub metrics: Metrics,
}

/// Qualitative description, e.g. "overcast clouds".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherSummary {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    #[serde(rename = "temp")]
    pub temperature: f64,
    pub humidity: u8,
}

/// One entry of the geocoding endpoint (`/geo/1.0/direct`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub name: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct OneCallResponse {
    #[serde(default)]
    pub daily: Vec<DailyForecast>,
}

/// One day of the One Call forecast (`/data/2.5/onecall`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    /// Unix timestamp, seconds.
    #[serde(rename = "dt")]
    pub date: u64,
    pub temp: TemperatureRange,
    pub humidity: u8,
    #[serde(rename = "weather", default)]
    pub summaries: Vec<WeatherSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRange {
    #[serde(rename = "min")]
    pub low: f64,
    #[serde(rename = "max")]
    pub high: f64,
}

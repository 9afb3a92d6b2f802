//! Pure decoders turning raw response bodies into typed values.

use crate::{
    Error, Result,
    model::{CurrentWeatherResponse, DailyForecast, GeoLocation, OneCallResponse},
};

/// Decode a current weather response.
pub fn decode_current(data: &[u8]) -> Result<CurrentWeatherResponse> {
    serde_json::from_slice(data).map_err(|source| Error::Decode { what: "current weather", source })
}

/// Decode a geocoding response and return its first location.
///
/// The endpoint answers with an array; an empty array means the place name
/// was not recognised and is reported as [`Error::NoLocations`].
pub fn decode_geo_data(data: &[u8]) -> Result<GeoLocation> {
    let locations: Vec<GeoLocation> = serde_json::from_slice(data)
        .map_err(|source| Error::Decode { what: "geocoding", source })?;

    locations.into_iter().next().ok_or(Error::NoLocations)
}

/// Decode the `daily` section of a One Call response.
///
/// An absent or empty `daily` array yields an empty list.
pub fn decode_forecast(data: &[u8]) -> Result<Vec<DailyForecast>> {
    if data.is_empty() {
        return Err(Error::EmptyForecast);
    }

    let resp: OneCallResponse = serde_json::from_slice(data)
        .map_err(|source| Error::Decode { what: "one call forecast", source })?;

    Ok(resp.daily)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NON_JSON: &[u8] = b"123456";

    #[test]
    fn decode_current_rejects_non_json() {
        let err = decode_current(NON_JSON).unwrap_err();
        assert!(matches!(err, Error::Decode { what: "current weather", .. }));
    }

    #[test]
    fn decode_current_reads_weather_and_main() {
        let body = br#"{
            "coord": {"lon": -0.1257, "lat": 51.5085},
            "weather": [{"id": 801, "main": "Clouds", "description": "few clouds", "icon": "02d"}],
            "main": {"temp": 52.72, "feels_like": 50.4, "humidity": 47},
            "name": "London"
        }"#;

        let resp = decode_current(body).unwrap();
        assert_eq!(resp.summaries.len(), 1);
        assert_eq!(resp.summaries[0].description, "few clouds");
        assert!((resp.metrics.temperature - 52.72).abs() < 1e-9);
        assert_eq!(resp.metrics.humidity, 47);
    }

    #[test]
    fn decode_current_without_weather_array_has_no_summaries() {
        let resp = decode_current(br#"{"main": {"temp": 1.5, "humidity": 90}}"#).unwrap();
        assert!(resp.summaries.is_empty());
    }

    #[test]
    fn decode_current_requires_main() {
        assert!(decode_current(br#"{"weather": []}"#).is_err());
    }

    #[test]
    fn decode_geo_data_rejects_non_json() {
        assert!(matches!(decode_geo_data(NON_JSON), Err(Error::Decode { .. })));
    }

    #[test]
    fn decode_geo_data_rejects_empty_array() {
        assert!(matches!(decode_geo_data(b"[]"), Err(Error::NoLocations)));
    }

    #[test]
    fn decode_geo_data_returns_first_location() {
        let body = br#"[
            {"name": "Tampa", "country": "US", "state": "Florida", "lat": 27.9477595, "lon": -82.458444},
            {"name": "Tampa", "country": "CA", "lat": 1.0, "lon": 2.0}
        ]"#;

        let GeoLocation { name, country, lat, lon } = decode_geo_data(body).unwrap();
        assert_eq!(name, "Tampa");
        assert_eq!(country, "US");
        assert!((lat - 27.9477595).abs() < 1e-9);
        assert!((lon + 82.458444).abs() < 1e-9);
    }

    #[test]
    fn decode_forecast_rejects_empty_input() {
        assert!(matches!(decode_forecast(b""), Err(Error::EmptyForecast)));
    }

    #[test]
    fn decode_forecast_rejects_non_json() {
        assert!(matches!(decode_forecast(NON_JSON), Err(Error::Decode { .. })));
    }

    #[test]
    fn decode_forecast_empty_daily_is_not_an_error() {
        assert!(decode_forecast(br#"{"daily": []}"#).unwrap().is_empty());
        assert!(decode_forecast(br#"{"lat": 1.0}"#).unwrap().is_empty());
    }
}

use chrono::{DateTime, Utc};

use crate::{
    Client, Result,
    decode::{decode_forecast, decode_geo_data},
    model::{DailyForecast, GeoLocation},
    units::Units,
};

/// Sections dropped from One Call responses when only the daily outlook is wanted.
const NON_DAILY_SECTIONS: [&str; 4] = ["current", "minutely", "hourly", "alerts"];

impl Client {
    /// Resolve `location` through the geocoding endpoint, then fetch its daily forecast.
    pub async fn daily_forecast(
        &self,
        location: &str,
        units: &str,
    ) -> Result<(GeoLocation, Vec<DailyForecast>)> {
        // Reject bad units before spending a request on geocoding.
        units.parse::<Units>()?;

        let place = decode_geo_data(&self.geocode(location).await?)?;
        let data = self.forecast(place.lat, place.lon, units, &NON_DAILY_SECTIONS).await?;
        let days = decode_forecast(&data)?;

        Ok((place, days))
    }
}

/// One-line rendering of a forecast day, e.g.
/// `"2022-03-07 (Mon): light rain, low 3.12 C, high 9.87 C, humidity 71%"`.
pub fn format_daily(day: &DailyForecast, units: Units) -> String {
    let date = i64::try_from(day.date)
        .ok()
        .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0))
        .map(|dt| dt.format("%Y-%m-%d (%a)").to_string())
        .unwrap_or_else(|| day.date.to_string());
    let desc = day.summaries.first().map(|s| s.description.trim()).unwrap_or_default();
    let unit = units.temperature_initial();

    format!(
        "{date}: {desc}, low {:.2} {unit}, high {:.2} {unit}, humidity {}%",
        day.temp.low, day.temp.high, day.humidity
    )
}

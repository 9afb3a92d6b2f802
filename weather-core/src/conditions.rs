use crate::{Client, Result, decode::decode_current, model::CurrentWeatherResponse, units::Units};

/// Summarise the current weather for `location`, e.g.
/// `"overcast clouds, 9.21 C, humidity 46%"`.
///
/// Builds a client for the public API host from `api_key`; see
/// [`Client::conditions`] to reuse an existing client.
pub async fn conditions(location: &str, units: &str, api_key: &str) -> Result<String> {
    let client = Client::new(api_key)?;
    client.conditions(location, units).await
}

impl Client {
    pub async fn conditions(&self, location: &str, units: &str) -> Result<String> {
        let data = self.current(location, units).await?;
        let resp = decode_current(&data)?;
        // `current` has already validated the token.
        let units: Units = units.parse()?;

        Ok(format_conditions(&resp, units))
    }
}

/// One-line rendering of a decoded current weather response.
pub fn format_conditions(resp: &CurrentWeatherResponse, units: Units) -> String {
    let desc = resp.summaries.first().map(|s| s.description.trim()).unwrap_or_default();

    format!(
        "{}, {:.2} {}, humidity {}%",
        desc,
        resp.metrics.temperature,
        units.temperature_initial(),
        resp.metrics.humidity
    )
}

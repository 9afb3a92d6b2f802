use log::{debug, warn};
use reqwest::Url;
use std::sync::Arc;

use crate::{
    ClientConfig, Error, Result,
    error::redact_key,
    transport::{HttpTransport, Transport},
    units::Units,
};

/// Time granularities the One Call endpoint can leave out of its response.
pub const EXCLUDABLE_SECTIONS: &[&str] = &["current", "minutely", "hourly", "daily", "alerts"];

/// OpenWeatherMap API client.
///
/// Immutable after construction, so one instance can be shared between tasks.
/// Each endpoint method validates its arguments, issues a single GET and
/// returns the raw body.
#[derive(Debug, Clone)]
pub struct Client {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Client for the public API host. Fails if `api_key` is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(ClientConfig::new(api_key)?)
    }

    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.timeout)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Current weather for `location` (e.g. "london", "tampa,us").
    pub async fn current(&self, location: &str, units: &str) -> Result<Vec<u8>> {
        if location.is_empty() {
            return Err(Error::EmptyLocation);
        }
        let units: Units = units.parse()?;

        let url = self.endpoint(
            "/data/2.5/weather",
            &[("q", location), ("units", units.as_str()), ("appid", self.config.api_key.as_str())],
        )?;
        self.fetch(url).await
    }

    /// Geocoding data for `location`, limited to the best match.
    pub async fn geocode(&self, location: &str) -> Result<Vec<u8>> {
        if location.is_empty() {
            return Err(Error::EmptyLocation);
        }

        let url = self.endpoint(
            "/geo/1.0/direct",
            &[("q", location), ("limit", "1"), ("appid", self.config.api_key.as_str())],
        )?;
        self.fetch(url).await
    }

    /// One Call data for a coordinate pair.
    ///
    /// Entries of `exclude` outside [`EXCLUDABLE_SECTIONS`] are dropped.
    pub async fn forecast<S: AsRef<str>>(
        &self,
        lat: f64,
        lon: f64,
        units: &str,
        exclude: &[S],
    ) -> Result<Vec<u8>> {
        let units: Units = units.parse()?;

        let lat = format!("{lat:.2}");
        let lon = format!("{lon:.2}");
        let excludes = exclude_param(exclude);

        let mut params = vec![
            ("lat", lat.as_str()),
            ("lon", lon.as_str()),
            ("units", units.as_str()),
            ("appid", self.config.api_key.as_str()),
        ];
        if let Some(sections) = &excludes {
            params.push(("exclude", sections.as_str()));
        }

        let url = self.endpoint("/data/2.5/onecall", &params)?;
        self.fetch(url).await
    }

    /// `base_url` + `path` with each query value percent-encoded.
    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url> {
        let raw = format!("{}{path}", self.config.base_url);
        Url::parse_with_params(&raw, params)
            .map_err(|e| Error::InvalidBaseUrl { url: raw, reason: e.to_string() })
    }

    async fn fetch(&self, url: Url) -> Result<Vec<u8>> {
        debug!("GET {}", redact_key(url.as_str()));

        let res = self.transport.get(url.as_str()).await?;

        if !res.is_success() {
            let url = redact_key(url.as_str());
            warn!("GET {url} returned status {}", res.status);
            return Err(Error::Status {
                url,
                status: res.status,
                body: truncate_body(&String::from_utf8_lossy(&res.body)),
            });
        }

        Ok(res.body)
    }
}

/// Comma-joined recognised sections, or `None` if nothing survives filtering.
fn exclude_param<S: AsRef<str>>(exclude: &[S]) -> Option<String> {
    let sections: Vec<String> = exclude
        .iter()
        .map(|s| s.as_ref().to_lowercase())
        .filter(|s| EXCLUDABLE_SECTIONS.contains(&s.as_str()))
        .collect();

    (!sections.is_empty()).then(|| sections.join(","))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

use thiserror::Error;

/// Errors returned by the client, the decoders and the formatter.
#[derive(Debug, Error)]
pub enum Error {
    #[error("api key must not be empty")]
    EmptyApiKey,

    #[error("location argument must not be empty")]
    EmptyLocation,

    #[error("units must be one of: standard, metric, imperial (got '{0}')")]
    InvalidUnits(String),

    #[error("invalid API base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),

    #[error("error getting data from {url}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("error reading response body from {url}")]
    ReadBody {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} failed with status {status}: {body}")]
    Status { url: String, status: u16, body: String },

    #[error("failed to decode {what} response")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("response from Geocoding API must contain at least one location")]
    NoLocations,

    #[error("data must be a non-empty response from the One Call API")]
    EmptyForecast,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Replaces the `appid` query value so URLs can be logged or shown to users.
pub(crate) fn redact_key(url: &str) -> String {
    const MARKER: &str = "appid=";

    match url.find(MARKER) {
        Some(idx) => {
            let start = idx + MARKER.len();
            let end = url[start..].find('&').map_or(url.len(), |i| start + i);
            format!("{}***{}", &url[..start], &url[end..])
        }
        None => url.to_string(),
    }
}

use async_trait::async_trait;
use std::{fmt::Debug, time::Duration};

use crate::{Error, Result, error::redact_key};

/// Status and body of a completed GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Outbound HTTP used by [`crate::Client`]; one call per `get`.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    async fn get(&self, url: &str) -> Result<RawResponse>;
}

/// `reqwest`-backed transport with a fixed overall request timeout.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(Error::HttpClient)?;

        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<RawResponse> {
        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| Error::Request { url: redact_key(url), source })?;

        let status = res.status().as_u16();
        let body = res
            .bytes()
            .await
            .map_err(|source| Error::ReadBody { url: redact_key(url), source })?;

        Ok(RawResponse { status, body: body.to_vec() })
    }
}

use async_trait::async_trait;
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use crate::{
    Client, ClientConfig, Result,
    transport::{RawResponse, Transport},
};

/// Transport that records requested URLs and replays queued responses.
#[derive(Debug, Default)]
pub struct StubTransport {
    calls: Mutex<Vec<String>>,
    responses: Mutex<VecDeque<RawResponse>>,
}

impl StubTransport {
    pub fn replying(bodies: &[(u16, &str)]) -> Arc<Self> {
        let responses = bodies
            .iter()
            .map(|(status, body)| RawResponse { status: *status, body: body.as_bytes().to_vec() })
            .collect();

        Arc::new(Self { calls: Mutex::new(Vec::new()), responses: Mutex::new(responses) })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn get(&self, url: &str) -> Result<RawResponse> {
        self.calls.lock().unwrap().push(url.to_string());
        let next = self.responses.lock().unwrap().pop_front();
        Ok(next.unwrap_or_else(|| panic!("no stubbed response left for {url}")))
    }
}

/// Client pointed at `http://stub` with key `apikey`.
pub fn stub_client(transport: Arc<StubTransport>) -> Client {
    let config = ClientConfig::new("apikey").unwrap().with_base_url("http://stub");
    Client::with_transport(config, transport)
}

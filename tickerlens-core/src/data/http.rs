//! Blocking reqwest transport.

use std::time::Duration;

use reqwest::Url;
use serde_json::Value;

use super::provider::{FetchError, Transport};

pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("tickerlens/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn name(&self) -> &str {
        "http"
    }

    fn fetch_json(&self, url: &Url) -> Result<Value, FetchError> {
        let resp = self.client.get(url.clone()).send().map_err(classify)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        resp.json::<Value>()
            .map_err(|e| FetchError::InvalidJson(strip_url(e).to_string()))
    }
}

/// Map a reqwest send error onto our taxonomy. The URL is stripped so the API
/// key never ends up in a log line.
fn classify(err: reqwest::Error) -> FetchError {
    let is_timeout = err.is_timeout();
    let msg = strip_url(err).to_string();
    if is_timeout {
        FetchError::Timeout(msg)
    } else {
        FetchError::NetworkUnreachable(msg)
    }
}

fn strip_url(err: reqwest::Error) -> reqwest::Error {
    err.without_url()
}

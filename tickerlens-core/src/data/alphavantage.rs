//! Alpha Vantage `TIME_SERIES_DAILY` client.
//!
//! Builds the request URL from the process-wide API key and hands it to a
//! `Transport`. Parsing of the body is left to `transform`.

use std::sync::Arc;

use reqwest::Url;
use serde_json::Value;

use super::provider::{FetchError, Transport};
use crate::config::AppConfig;

pub const DEFAULT_ENDPOINT: &str = "https://www.alphavantage.co/query";

const FUNCTION_DAILY: &str = "TIME_SERIES_DAILY";

/// Daily time-series client. Cheap to clone; the transport is shared.
#[derive(Clone)]
pub struct MarketDataClient {
    transport: Arc<dyn Transport>,
    endpoint: String,
    api_key: String,
    full_history: bool,
}

impl std::fmt::Debug for MarketDataClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketDataClient")
            .field("transport", &self.transport.name())
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("full_history", &self.full_history)
            .finish()
    }
}

impl MarketDataClient {
    pub fn new(
        transport: Arc<dyn Transport>,
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            full_history: false,
        }
    }

    pub fn from_config(transport: Arc<dyn Transport>, config: &AppConfig) -> Self {
        Self {
            full_history: config.full_history,
            ..Self::new(transport, config.endpoint.clone(), config.api_key.clone())
        }
    }

    /// Request the full history instead of the ~100 day compact response.
    pub fn with_full_history(mut self, full_history: bool) -> Self {
        self.full_history = full_history;
        self
    }

    /// `{endpoint}?function=TIME_SERIES_DAILY&symbol={symbol}&apikey={key}`
    pub fn daily_series_url(&self, symbol: &str) -> Result<Url, FetchError> {
        let mut params = vec![
            ("function", FUNCTION_DAILY),
            ("symbol", symbol),
            ("apikey", self.api_key.as_str()),
        ];
        if self.full_history {
            params.push(("outputsize", "full"));
        }
        Url::parse_with_params(&self.endpoint, &params)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {e}", self.endpoint)))
    }

    /// Fetch the raw daily series body for `symbol`.
    pub fn fetch_daily(&self, symbol: &str) -> Result<Value, FetchError> {
        let url = self.daily_series_url(symbol)?;
        tracing::debug!(symbol, transport = self.transport.name(), "fetching daily series");
        self.transport.fetch_json(&url)
    }
}

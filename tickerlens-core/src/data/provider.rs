//! Transport trait and structured transport errors.
//!
//! The Transport trait is the "fetch JSON from a URL" collaborator. The
//! production implementation is `HttpTransport`; tests plug in their own.

use reqwest::Url;
use serde_json::Value;
use thiserror::Error;

use crate::error::ErrorKind;

/// Transport-level failures. All of them surface as `ErrorKind::FetchFailed`.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("HTTP {status}")]
    Status { status: u16 },

    #[error("response body is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP client setup failed: {0}")]
    Client(String),

    #[error("fetch worker is gone")]
    WorkerUnavailable,
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::FetchFailed
    }
}

/// Fetches a URL and decodes the body as JSON.
pub trait Transport: Send + Sync {
    /// Human-readable name of this transport.
    fn name(&self) -> &str;

    /// GET `url` and decode the body. Non-2xx statuses are errors.
    fn fetch_json(&self, url: &Url) -> Result<Value, FetchError>;
}

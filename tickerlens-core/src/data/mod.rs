//! Market data access: transport seam, HTTP implementation, Alpha Vantage client.

pub mod alphavantage;
pub mod http;
pub mod provider;

pub use alphavantage::{MarketDataClient, DEFAULT_ENDPOINT};
pub use http::HttpTransport;
pub use provider::{FetchError, Transport};

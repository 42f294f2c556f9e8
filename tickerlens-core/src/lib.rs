//! TickerLens Core — view-state machine for a single-screen stock price viewer.
//!
//! This crate contains everything except the terminal renderer:
//! - Domain types (queries, range keys, daily bars, summaries)
//! - Response transformer: raw Alpha Vantage payload to chart series + summary
//! - Controller that validates input, dispatches fetches and discards stale results
//! - View-state store read by the renderer
//! - Screen derivation (which regions are visible, formatted values, chart bounds)
//! - Alpha Vantage client, HTTP transport and background fetch worker
//! - Startup configuration

pub mod config;
pub mod controller;
pub mod data;
pub mod domain;
pub mod error;
pub mod transform;
pub mod view;
pub mod view_state;
pub mod worker;

pub use config::{AppConfig, ConfigError};
pub use controller::{Controller, FetchDispatcher, FetchTicket};
pub use domain::{DailyBar, Query, RangeKey, Summary};
pub use error::ErrorKind;
pub use transform::{transform, TransformError, Transformed};
pub use view::Screen;
pub use view_state::{ViewState, ViewStateStore};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: everything that crosses the worker channel or
    /// sits in the shared store is Send + Sync.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<Query>();
        require_sync::<Query>();
        require_send::<DailyBar>();
        require_sync::<DailyBar>();
        require_send::<ViewState>();
        require_sync::<ViewState>();
        require_send::<ViewStateStore>();
        require_sync::<ViewStateStore>();
        require_send::<FetchTicket>();
        require_send::<data::FetchError>();
        require_send::<worker::WorkerCommand>();
        require_send::<worker::WorkerResponse>();
        require_send::<data::MarketDataClient>();
        require_sync::<data::MarketDataClient>();
    }
}

//! DailyBar — one trading day of OHLC prices.

use serde::{Deserialize, Serialize};

/// OHLC prices for a single trading day.
///
/// All four prices are finite. The usual `low <= open/close <= high` ordering is
/// not checked: upstream data is taken as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// The most recent trading day for the queried symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub symbol: String,
    pub bar: DailyBar,
}

impl Summary {
    pub fn date(&self) -> &str {
        &self.bar.date
    }
}

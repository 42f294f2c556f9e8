//! Domain types for TickerLens

pub mod bar;
pub mod query;

pub use bar::{DailyBar, Summary};
pub use query::{Query, RangeKey};

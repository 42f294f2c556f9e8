//! Screen derivation — turns a `ViewState` into the regions a renderer draws.
//!
//! Nothing here touches a terminal. The TUI and the CLI both render from a
//! `Screen`, so what is shown for each state is decided in one place.

use serde::Serialize;

use crate::domain::{DailyBar, Summary};
use crate::view_state::ViewState;

/// Padding applied to the close range on the Y axis.
const Y_LOW_FACTOR: f64 = 0.95;
const Y_HIGH_FACTOR: f64 = 1.05;
/// Half-height of the Y band used when the close range collapses.
const FLAT_BAND: f64 = 0.5;

/// `$` plus exactly two decimals.
pub fn format_currency(value: f64) -> String {
    format!("${value:.2}")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBox {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryPanel {
    pub title: String,
    pub date_line: String,
    pub prices: [PriceBox; 4],
}

impl SummaryPanel {
    fn from_summary(summary: &Summary) -> Self {
        let bar = &summary.bar;
        Self {
            title: format!("Stock: {}", summary.symbol),
            date_line: format!("Date: {}", bar.date),
            prices: [
                price_box("Open", bar.open),
                price_box("High", bar.high),
                price_box("Low", bar.low),
                price_box("Close", bar.close),
            ],
        }
    }
}

fn price_box(label: &'static str, value: f64) -> PriceBox {
    PriceBox {
        label,
        value: format_currency(value),
    }
}

/// Axis bounds for the close chart. Neither axis ever has zero width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartBounds {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

impl ChartBounds {
    pub fn from_closes(closes: &[f64]) -> Self {
        let x = if closes.len() <= 1 {
            [0.0, 1.0]
        } else {
            [0.0, (closes.len() - 1) as f64]
        };

        if closes.is_empty() {
            return Self { x, y: [0.0, 1.0] };
        }

        let min = closes.iter().copied().fold(f64::INFINITY, f64::min);
        let max = closes.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let low = min * Y_LOW_FACTOR;
        let high = max * Y_HIGH_FACTOR;

        // Zero-width (all closes at 0) or inverted (negative closes).
        let y = if high > low {
            [low, high]
        } else {
            let mid = (min + max) / 2.0;
            [mid - FLAT_BAND, mid + FLAT_BAND]
        };
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPanel {
    pub title: String,
    /// `(index, close)` in ascending date order.
    pub points: Vec<(f64, f64)>,
    /// Dates matching `points`, for axis labels.
    pub dates: Vec<String>,
    pub bounds: ChartBounds,
}

impl ChartPanel {
    fn from_series(series: &[DailyBar], range_label: &str) -> Self {
        let closes: Vec<f64> = series.iter().map(|b| b.close).collect();
        Self {
            title: format!("Closing Prices - {range_label}"),
            points: closes
                .iter()
                .enumerate()
                .map(|(i, &c)| (i as f64, c))
                .collect(),
            dates: series.iter().map(|b| b.date.clone()).collect(),
            bounds: ChartBounds::from_closes(&closes),
        }
    }

    pub fn first_date(&self) -> Option<&str> {
        self.dates.first().map(String::as_str)
    }

    pub fn last_date(&self) -> Option<&str> {
        self.dates.last().map(String::as_str)
    }
}

/// Everything a renderer needs for one frame. Absent regions are not drawn.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Screen {
    pub error_banner: Option<String>,
    pub loading: Option<String>,
    pub summary_panel: Option<SummaryPanel>,
    pub chart_panel: Option<ChartPanel>,
    pub recap: Option<String>,
}

impl Screen {
    pub fn from_state(state: &ViewState) -> Self {
        match state {
            ViewState::Idle => Self::default(),
            ViewState::Loading { query } => Self {
                loading: Some(format!("Loading {}...", query.symbol)),
                ..Self::default()
            },
            ViewState::Error { message, .. } => Self {
                error_banner: Some(message.clone()),
                ..Self::default()
            },
            ViewState::Loaded {
                summary,
                series,
                range_label,
            } => Self {
                summary_panel: Some(SummaryPanel::from_summary(summary)),
                chart_panel: Some(ChartPanel::from_series(series, range_label)),
                recap: Some(recap_line(&summary.bar)),
                ..Self::default()
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn recap_line(bar: &DailyBar) -> String {
    format!(
        "Open: {} | High: {} | Low: {} | Close: {}",
        format_currency(bar.open),
        format_currency(bar.high),
        format_currency(bar.low),
        format_currency(bar.close)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Query, RangeKey};
    use crate::error::ErrorKind;

    fn bar(date: &str, close: f64) -> DailyBar {
        DailyBar {
            date: date.into(),
            open: 180.0,
            high: 190.5,
            low: 179.25,
            close,
        }
    }

    fn loaded() -> ViewState {
        ViewState::Loaded {
            summary: Summary {
                symbol: "AAPL".into(),
                bar: bar("2024-01-03", 186.0),
            },
            series: vec![bar("2024-01-02", 184.0), bar("2024-01-03", 186.0)],
            range_label: "1 week".into(),
        }
    }

    #[test]
    fn currency_has_two_decimals() {
        assert_eq!(format_currency(186.0), "$186.00");
        assert_eq!(format_currency(0.126), "$0.13");
        assert_eq!(format_currency(1234.5), "$1234.50");
    }

    #[test]
    fn idle_draws_nothing() {
        assert!(Screen::from_state(&ViewState::Idle).is_empty());
    }

    #[test]
    fn loading_shows_only_indicator() {
        let screen = Screen::from_state(&ViewState::Loading {
            query: Query {
                symbol: "MSFT".into(),
                range: RangeKey::OneWeek,
            },
        });
        assert_eq!(screen.loading.as_deref(), Some("Loading MSFT..."));
        assert!(screen.error_banner.is_none());
        assert!(screen.summary_panel.is_none());
        assert!(screen.chart_panel.is_none());
        assert!(screen.recap.is_none());
    }

    #[test]
    fn error_shows_only_banner() {
        let screen = Screen::from_state(&ViewState::error(ErrorKind::FetchFailed));
        assert_eq!(
            screen.error_banner.as_deref(),
            Some("Error fetching data. Please try again.")
        );
        assert!(screen.summary_panel.is_none());
        assert!(screen.chart_panel.is_none());
        assert!(screen.recap.is_none());
        assert!(screen.loading.is_none());
    }

    #[test]
    fn loaded_fills_summary_chart_and_recap() {
        let screen = Screen::from_state(&loaded());
        assert!(screen.error_banner.is_none());
        assert!(screen.loading.is_none());

        let summary = screen.summary_panel.unwrap();
        assert_eq!(summary.title, "Stock: AAPL");
        assert_eq!(summary.date_line, "Date: 2024-01-03");
        let labels: Vec<_> = summary.prices.iter().map(|p| p.label).collect();
        assert_eq!(labels, ["Open", "High", "Low", "Close"]);
        assert_eq!(summary.prices[3].value, "$186.00");

        let chart = screen.chart_panel.unwrap();
        assert_eq!(chart.title, "Closing Prices - 1 week");
        assert_eq!(chart.points, vec![(0.0, 184.0), (1.0, 186.0)]);
        assert_eq!(chart.first_date(), Some("2024-01-02"));
        assert_eq!(chart.last_date(), Some("2024-01-03"));

        assert_eq!(
            screen.recap.as_deref(),
            Some("Open: $180.00 | High: $190.50 | Low: $179.25 | Close: $186.00")
        );
    }

    #[test]
    fn bounds_pad_close_range() {
        let b = ChartBounds::from_closes(&[100.0, 120.0, 110.0]);
        assert_eq!(b.x, [0.0, 2.0]);
        assert!((b.y[0] - 95.0).abs() < 1e-9);
        assert!((b.y[1] - 126.0).abs() < 1e-9);
    }

    #[test]
    fn single_point_x_axis_is_widened() {
        let b = ChartBounds::from_closes(&[50.0]);
        assert_eq!(b.x, [0.0, 1.0]);
        assert!(b.y[1] > b.y[0]);
    }

    #[test]
    fn flat_zero_series_gets_a_band() {
        let b = ChartBounds::from_closes(&[0.0, 0.0, 0.0]);
        assert_eq!(b.y, [-0.5, 0.5]);
    }

    #[test]
    fn negative_closes_do_not_invert_axis() {
        let b = ChartBounds::from_closes(&[-10.0]);
        assert!(b.y[1] > b.y[0]);
        assert_eq!(b.y, [-10.5, -9.5]);
    }

    #[test]
    fn empty_series_has_unit_bounds() {
        let b = ChartBounds::from_closes(&[]);
        assert_eq!(b.x, [0.0, 1.0]);
        assert_eq!(b.y, [0.0, 1.0]);
    }
}

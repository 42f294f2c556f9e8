//! Response transformer — raw `TIME_SERIES_DAILY` payload to chart series + summary.
//!
//! Pure and fail-closed: any missing or unparseable price aborts the whole
//! transform, so the renderer never sees a partial series.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::{DailyBar, Summary};
use crate::error::ErrorKind;

/// Key of the daily time-series object in the response body.
pub const TIME_SERIES_KEY: &str = "Time Series (Daily)";

pub const FIELD_OPEN: &str = "1. open";
pub const FIELD_HIGH: &str = "2. high";
pub const FIELD_LOW: &str = "3. low";
pub const FIELD_CLOSE: &str = "4. close";

/// Keys Alpha Vantage uses instead of a time series when it refuses a request.
const UPSTREAM_MESSAGE_KEYS: [&str; 3] = ["Error Message", "Note", "Information"];

/// Why a response could not be turned into a series.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    #[error("response has no \"Time Series (Daily)\" object")]
    MissingTimeSeries,

    #[error("provider returned a message instead of data: {0}")]
    Upstream(String),

    #[error("time series is empty")]
    EmptySeries,

    #[error("{date}: record is not an object")]
    NotAnObject { date: String },

    #[error("{date}: missing field \"{field}\"")]
    MissingField { date: String, field: &'static str },

    #[error("{date}: field \"{field}\" is not a finite number: {value}")]
    InvalidNumber {
        date: String,
        field: &'static str,
        value: String,
    },
}

impl TransformError {
    /// Every transform failure is a malformed response from the user's view.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::MalformedResponse
    }
}

/// Successful transform output.
#[derive(Debug, Clone, PartialEq)]
pub struct Transformed {
    pub summary: Summary,
    /// Ascending by date, at most `window_days` long.
    pub series: Vec<DailyBar>,
}

/// Turn a decoded response body into a chart series and a latest-day summary.
///
/// The series holds the `window_days` most recent dates in ascending order
/// (fewer if the response is shorter). The summary always reflects the single
/// most recent date, independent of the window.
pub fn transform(
    raw: &Value,
    symbol: &str,
    window_days: usize,
) -> Result<Transformed, TransformError> {
    let series_obj = time_series(raw)?;

    let mut dates: Vec<&String> = series_obj.keys().collect();
    if dates.is_empty() {
        return Err(TransformError::EmptySeries);
    }
    // ISO dates sort correctly as strings.
    dates.sort_unstable_by(|a, b| b.cmp(a));

    let latest = dates[0];

    let mut series = dates
        .iter()
        .take(window_days)
        .map(|date| parse_bar(date, &series_obj[date.as_str()]))
        .collect::<Result<Vec<_>, _>>()?;
    series.reverse();

    let latest_bar = match series.last() {
        Some(bar) if bar.date == *latest => bar.clone(),
        _ => parse_bar(latest, &series_obj[latest.as_str()])?,
    };

    Ok(Transformed {
        summary: Summary {
            symbol: symbol.to_string(),
            bar: latest_bar,
        },
        series,
    })
}

fn time_series(raw: &Value) -> Result<&Map<String, Value>, TransformError> {
    match raw.get(TIME_SERIES_KEY) {
        Some(Value::Object(obj)) => Ok(obj),
        Some(_) => Err(TransformError::MissingTimeSeries),
        None => {
            let upstream = UPSTREAM_MESSAGE_KEYS
                .iter()
                .find_map(|key| raw.get(*key).and_then(Value::as_str));
            match upstream {
                Some(msg) => Err(TransformError::Upstream(msg.to_string())),
                None => Err(TransformError::MissingTimeSeries),
            }
        }
    }
}

fn parse_bar(date: &str, record: &Value) -> Result<DailyBar, TransformError> {
    let obj = record.as_object().ok_or_else(|| TransformError::NotAnObject {
        date: date.to_string(),
    })?;

    Ok(DailyBar {
        date: date.to_string(),
        open: parse_price(date, obj, FIELD_OPEN)?,
        high: parse_price(date, obj, FIELD_HIGH)?,
        low: parse_price(date, obj, FIELD_LOW)?,
        close: parse_price(date, obj, FIELD_CLOSE)?,
    })
}

fn parse_price(
    date: &str,
    obj: &Map<String, Value>,
    field: &'static str,
) -> Result<f64, TransformError> {
    let value = obj.get(field).ok_or_else(|| TransformError::MissingField {
        date: date.to_string(),
        field,
    })?;

    let parsed = match value {
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    };

    match parsed {
        Some(price) if price.is_finite() => Ok(price),
        _ => Err(TransformError::InvalidNumber {
            date: date.to_string(),
            field,
            value: value.to_string(),
        }),
    }
}

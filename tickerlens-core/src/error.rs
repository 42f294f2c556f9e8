//! Error taxonomy surfaced through `ViewState::Error`.

use serde::{Deserialize, Serialize};

pub const MSG_EMPTY_SYMBOL: &str = "Please enter a stock symbol.";
pub const MSG_FETCH_FAILED: &str = "Error fetching data. Please try again.";

/// Why a submit ended in the error state.
///
/// The user sees a generic message for each kind; the distinction is kept for
/// logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Empty symbol, caught before any network call.
    InvalidInput,
    /// Connectivity, timeout, non-2xx status or a body that is not JSON.
    FetchFailed,
    /// JSON parsed but lacked the time series, or a price was not numeric.
    MalformedResponse,
}

impl ErrorKind {
    /// Message shown in the error banner.
    pub fn user_message(self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => MSG_EMPTY_SYMBOL,
            ErrorKind::FetchFailed | ErrorKind::MalformedResponse => MSG_FETCH_FAILED,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "INPUT",
            ErrorKind::FetchFailed => "NET",
            ErrorKind::MalformedResponse => "DATA",
        }
    }
}

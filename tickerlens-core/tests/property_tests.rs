//! Property tests for the transformer and input normalization.
//!
//! Uses proptest to verify:
//! 1. Window clamping — series length is min(window, available dates)
//! 2. Ascending order — series dates strictly increase
//! 3. Summary independence — summary is always the latest date, whatever the window
//! 4. Fail closed — one bad close inside the window fails the whole transform
//! 5. Normalization — padding and case never change the resolved query

use proptest::prelude::*;
use serde_json::{json, Map, Value};

use tickerlens_core::{transform, Query, RangeKey};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_price() -> impl Strategy<Value = f64> {
    (1.0..1000.0_f64).prop_map(|p| (p * 100.0).round() / 100.0)
}

/// Distinct trading dates as `YYYY-MM-DD`, in no particular order.
fn arb_dates() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set((2000u32..2030, 1u32..=12, 1u32..=28), 1..60).prop_map(|set| {
        set.into_iter()
            .map(|(y, m, d)| format!("{y:04}-{m:02}-{d:02}"))
            .collect()
    })
}

fn arb_series() -> impl Strategy<Value = Vec<(String, f64)>> {
    arb_dates().prop_flat_map(|dates| {
        let n = dates.len();
        (
            Just(dates),
            prop::collection::vec(arb_price(), n),
        )
            .prop_map(|(dates, closes)| dates.into_iter().zip(closes).collect())
    })
}

fn body_of(days: &[(String, f64)]) -> Value {
    let mut series = Map::new();
    for (date, close) in days {
        series.insert(
            date.clone(),
            json!({
                "1. open": format!("{close}"),
                "2. high": format!("{close}"),
                "3. low": format!("{close}"),
                "4. close": format!("{close}"),
                "5. volume": "1000"
            }),
        );
    }
    json!({ "Time Series (Daily)": series })
}

fn latest(days: &[(String, f64)]) -> &str {
    days.iter()
        .map(|(d, _)| d.as_str())
        .max()
        .unwrap_or_default()
}

// ── 1–3. Window, order, summary ──────────────────────────────────────

proptest! {
    #[test]
    fn series_length_is_clamped(days in arb_series(), window in 0usize..100) {
        let out = transform(&body_of(&days), "SPY", window).unwrap();
        prop_assert_eq!(out.series.len(), window.min(days.len()));
    }

    #[test]
    fn series_is_strictly_ascending(days in arb_series(), window in 1usize..100) {
        let out = transform(&body_of(&days), "SPY", window).unwrap();
        for pair in out.series.windows(2) {
            prop_assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn series_ends_at_latest_date(days in arb_series(), window in 1usize..100) {
        let out = transform(&body_of(&days), "SPY", window).unwrap();
        prop_assert_eq!(out.series.last().map(|b| b.date.as_str()), Some(latest(&days)));
    }

    #[test]
    fn summary_is_latest_for_any_window(days in arb_series(), window in 0usize..100) {
        let out = transform(&body_of(&days), "SPY", window).unwrap();
        prop_assert_eq!(out.summary.date(), latest(&days));
        prop_assert_eq!(out.summary.symbol.as_str(), "SPY");
    }
}

// ── 4. Fail closed ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn bad_close_in_window_fails_everything(days in arb_series(), pick in any::<prop::sample::Index>()) {
        let mut body = body_of(&days);
        let mut sorted: Vec<&str> = days.iter().map(|(d, _)| d.as_str()).collect();
        sorted.sort_unstable();
        let victim = sorted[pick.index(sorted.len())].to_string();
        body["Time Series (Daily)"][victim.as_str()]["4. close"] = json!("N/A");

        // Window covering every date: the bad record is always selected.
        prop_assert!(transform(&body, "SPY", days.len()).is_err());
    }
}

// ── 5. Normalization ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn padding_and_case_do_not_change_query(
        symbol in "[A-Z]{1,5}",
        left in " {0,3}",
        right in " {0,3}",
        lower in any::<bool>(),
    ) {
        let typed = if lower { symbol.to_lowercase() } else { symbol.clone() };
        let padded = format!("{left}{typed}{right}");
        for range in RangeKey::ALL {
            let a = Query::from_input(&padded, range.label());
            let b = Query::from_input(&symbol, range.label());
            prop_assert_eq!(a.clone(), b);
            prop_assert_eq!(a.map(|q| q.days()), Some(range.days()));
        }
    }

    #[test]
    fn whitespace_only_symbol_is_rejected(blank in "[ \t]{0,6}", range in "\\PC{0,10}") {
        prop_assert!(Query::from_input(&blank, &range).is_none());
    }
}

//! User query: a normalized symbol plus a chart range.

use serde::{Deserialize, Serialize};

/// Selectable chart ranges, in dropdown order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeKey {
    #[serde(rename = "1w")]
    OneWeek,
    #[serde(rename = "2w")]
    TwoWeeks,
    #[serde(rename = "30d")]
    #[default]
    ThirtyDays,
    #[serde(rename = "90d")]
    NinetyDays,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "5y")]
    FiveYears,
}

impl RangeKey {
    pub const ALL: [RangeKey; 6] = [
        RangeKey::OneWeek,
        RangeKey::TwoWeeks,
        RangeKey::ThirtyDays,
        RangeKey::NinetyDays,
        RangeKey::OneYear,
        RangeKey::FiveYears,
    ];

    /// Number of most-recent trading days shown in the chart.
    pub fn days(self) -> usize {
        match self {
            RangeKey::OneWeek => 7,
            RangeKey::TwoWeeks => 14,
            RangeKey::ThirtyDays => 30,
            RangeKey::NinetyDays => 90,
            RangeKey::OneYear => 365,
            RangeKey::FiveYears => 1825,
        }
    }

    /// Human label, as shown in the range selector and chart title.
    pub fn label(self) -> &'static str {
        match self {
            RangeKey::OneWeek => "1 week",
            RangeKey::TwoWeeks => "2 weeks",
            RangeKey::ThirtyDays => "30 days",
            RangeKey::NinetyDays => "90 days",
            RangeKey::OneYear => "1 year",
            RangeKey::FiveYears => "5 years",
        }
    }

    pub fn short_key(self) -> &'static str {
        match self {
            RangeKey::OneWeek => "1w",
            RangeKey::TwoWeeks => "2w",
            RangeKey::ThirtyDays => "30d",
            RangeKey::NinetyDays => "90d",
            RangeKey::OneYear => "1y",
            RangeKey::FiveYears => "5y",
        }
    }

    /// Strict lookup by label or short key.
    pub fn parse(selection: &str) -> Option<Self> {
        let selection = selection.trim();
        RangeKey::ALL.into_iter().find(|key| {
            key.label() == selection || key.short_key().eq_ignore_ascii_case(selection)
        })
    }

    /// Lenient lookup used by submit: anything unrecognized, including the
    /// empty string, falls back to 30 days.
    pub fn resolve(selection: &str) -> Self {
        Self::parse(selection).unwrap_or_default()
    }

    pub fn index(self) -> usize {
        match self {
            RangeKey::OneWeek => 0,
            RangeKey::TwoWeeks => 1,
            RangeKey::ThirtyDays => 2,
            RangeKey::NinetyDays => 3,
            RangeKey::OneYear => 4,
            RangeKey::FiveYears => 5,
        }
    }

    pub fn next(self) -> RangeKey {
        RangeKey::ALL[(self.index() + 1) % RangeKey::ALL.len()]
    }

    pub fn prev(self) -> RangeKey {
        RangeKey::ALL[(self.index() + RangeKey::ALL.len() - 1) % RangeKey::ALL.len()]
    }
}

/// A validated request for one symbol over one range.
///
/// Built by the controller on submit; never mutated after dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub symbol: String,
    pub range: RangeKey,
}

impl Query {
    /// Normalize user input into a query. Returns `None` when the symbol is
    /// empty after trimming.
    pub fn from_input(symbol_input: &str, range_selection: &str) -> Option<Self> {
        let symbol = normalize_symbol(symbol_input);
        if symbol.is_empty() {
            return None;
        }
        Some(Self {
            symbol,
            range: RangeKey::resolve(range_selection),
        })
    }

    pub fn days(&self) -> usize {
        self.range.days()
    }
}

/// Trim surrounding whitespace and uppercase.
pub fn normalize_symbol(input: &str) -> String {
    input.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_table_matches_dropdown() {
        let expected = [
            ("1 week", 7),
            ("2 weeks", 14),
            ("30 days", 30),
            ("90 days", 90),
            ("1 year", 365),
            ("5 years", 1825),
        ];
        for (label, days) in expected {
            assert_eq!(RangeKey::resolve(label).days(), days, "{label}");
        }
    }

    #[test]
    fn short_keys_are_aliases() {
        assert_eq!(RangeKey::parse("1w"), Some(RangeKey::OneWeek));
        assert_eq!(RangeKey::parse("5Y"), Some(RangeKey::FiveYears));
        assert_eq!(RangeKey::parse(" 90d "), Some(RangeKey::NinetyDays));
    }

    #[test]
    fn unrecognized_range_silently_falls_back_to_30_days() {
        // Observed behavior, kept on purpose: no error for unknown selections.
        assert_eq!(RangeKey::resolve("").days(), 30);
        assert_eq!(RangeKey::resolve("3 months").days(), 30);
        assert_eq!(RangeKey::resolve("1 WEEK").days(), 30);
    }

    #[test]
    fn range_cycle() {
        assert_eq!(RangeKey::OneWeek.next(), RangeKey::TwoWeeks);
        assert_eq!(RangeKey::FiveYears.next(), RangeKey::OneWeek);
        assert_eq!(RangeKey::OneWeek.prev(), RangeKey::FiveYears);
        for key in RangeKey::ALL {
            assert_eq!(RangeKey::ALL[key.index()], key);
        }
    }

    #[test]
    fn query_normalizes_case_and_whitespace() {
        let a = Query::from_input("  aapl ", "30 days").unwrap();
        let b = Query::from_input("AAPL", "30 days").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.symbol, "AAPL");
        assert_eq!(a.days(), 30);
    }

    #[test]
    fn blank_symbol_is_rejected() {
        assert!(Query::from_input("", "1 week").is_none());
        assert!(Query::from_input(" \t\n", "1 week").is_none());
    }
}

//! View-state — the single value the renderer reads.
//!
//! Exactly one variant is active at a time. Transitions replace the whole
//! value; nothing is patched in place.

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;

use crate::domain::{DailyBar, Query, Summary};
use crate::error::ErrorKind;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ViewState {
    #[default]
    Idle,
    Loading {
        query: Query,
    },
    Error {
        message: String,
        kind: ErrorKind,
    },
    Loaded {
        summary: Summary,
        series: Vec<DailyBar>,
        range_label: String,
    },
}

impl ViewState {
    /// Error state carrying the kind's generic user message.
    pub fn error(kind: ErrorKind) -> Self {
        ViewState::Error {
            message: kind.user_message().to_string(),
            kind,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading { .. })
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            ViewState::Error { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ViewState::Idle => "idle",
            ViewState::Loading { .. } => "loading",
            ViewState::Error { .. } => "error",
            ViewState::Loaded { .. } => "loaded",
        }
    }
}

/// Holder of the current `ViewState`.
///
/// One writer (the controller), any number of readers. The state sits behind
/// an `Arc` swapped under a mutex, so a reader's snapshot is always a whole
/// state and never a half-applied transition.
#[derive(Debug, Default)]
pub struct ViewStateStore {
    current: Mutex<Arc<ViewState>>,
}

impl ViewStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cheap read of the current state.
    pub fn snapshot(&self) -> Arc<ViewState> {
        // A poisoned lock still guards a complete Arc; keep serving it.
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the current state wholesale.
    pub fn replace(&self, next: ViewState) {
        let next = Arc::new(next);
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RangeKey;

    #[test]
    fn starts_idle() {
        let store = ViewStateStore::new();
        assert_eq!(*store.snapshot(), ViewState::Idle);
    }

    #[test]
    fn replace_swaps_whole_state() {
        let store = ViewStateStore::new();
        let before = store.snapshot();
        store.replace(ViewState::Loading {
            query: Query {
                symbol: "AAPL".into(),
                range: RangeKey::OneWeek,
            },
        });
        // Old snapshot is untouched by the transition.
        assert_eq!(*before, ViewState::Idle);
        assert!(store.snapshot().is_loading());
    }

    #[test]
    fn error_constructor_uses_generic_message() {
        let state = ViewState::error(ErrorKind::InvalidInput);
        assert_eq!(
            state,
            ViewState::Error {
                message: "Please enter a stock symbol.".into(),
                kind: ErrorKind::InvalidInput,
            }
        );
        assert_eq!(state.error_kind(), Some(ErrorKind::InvalidInput));
        assert_eq!(state.name(), "error");
    }

    #[test]
    fn concurrent_readers_see_whole_states() {
        let store = Arc::new(ViewStateStore::new());
        let reader = {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                for _ in 0..1_000 {
                    match &*store.snapshot() {
                        ViewState::Idle | ViewState::Error { .. } => {}
                        other => panic!("unexpected state {other:?}"),
                    }
                }
            })
        };
        for i in 0..1_000 {
            if i % 2 == 0 {
                store.replace(ViewState::error(ErrorKind::FetchFailed));
            } else {
                store.replace(ViewState::Idle);
            }
        }
        reader.join().unwrap();
    }
}

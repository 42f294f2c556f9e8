//! Input/request controller — the only writer of the view-state store.
//!
//! `submit` validates input and dispatches a sequence-tagged fetch.
//! `complete` applies the fetch outcome, but only for the most recently
//! issued ticket: anything older is a stale response and is dropped without
//! touching the store.

use std::sync::Arc;

use serde_json::Value;

use crate::data::FetchError;
use crate::domain::Query;
use crate::error::ErrorKind;
use crate::transform::transform;
use crate::view_state::{ViewState, ViewStateStore};

/// One dispatched fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub query: Query,
}

/// Sends a ticket off to whatever performs the network call.
pub trait FetchDispatcher {
    fn dispatch(&mut self, ticket: FetchTicket) -> Result<(), FetchError>;
}

pub struct Controller<D: FetchDispatcher> {
    store: Arc<ViewStateStore>,
    dispatcher: D,
    last_seq: u64,
    in_flight: Option<FetchTicket>,
}

impl<D: FetchDispatcher> Controller<D> {
    pub fn new(store: Arc<ViewStateStore>, dispatcher: D) -> Self {
        Self {
            store,
            dispatcher,
            last_seq: 0,
            in_flight: None,
        }
    }

    pub fn state(&self) -> Arc<ViewState> {
        self.store.snapshot()
    }

    /// The ticket whose completion would currently be applied.
    pub fn in_flight(&self) -> Option<&FetchTicket> {
        self.in_flight.as_ref()
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Validate input and start a fetch.
    ///
    /// An empty symbol moves straight to `Error { InvalidInput }` without a
    /// network call and supersedes any fetch still in flight. Otherwise the
    /// store moves to `Loading` and exactly one ticket is dispatched.
    pub fn submit(&mut self, symbol_input: &str, range_selection: &str) -> Option<FetchTicket> {
        let Some(query) = Query::from_input(symbol_input, range_selection) else {
            tracing::debug!(input_len = symbol_input.len(), "rejected empty symbol");
            self.in_flight = None;
            self.store.replace(ViewState::error(ErrorKind::InvalidInput));
            return None;
        };

        self.last_seq += 1;
        let ticket = FetchTicket {
            seq: self.last_seq,
            query: query.clone(),
        };

        self.store.replace(ViewState::Loading { query });
        self.in_flight = Some(ticket.clone());

        tracing::debug!(
            seq = ticket.seq,
            symbol = %ticket.query.symbol,
            days = ticket.query.days(),
            "dispatching fetch"
        );

        if let Err(e) = self.dispatcher.dispatch(ticket.clone()) {
            self.complete(ticket.seq, Err(e));
        }
        Some(ticket)
    }

    /// Apply a fetch outcome. Returns `false` when the outcome was stale and
    /// discarded.
    pub fn complete(&mut self, seq: u64, outcome: Result<Value, FetchError>) -> bool {
        let ticket = match self.in_flight.take() {
            Some(ticket) if ticket.seq == seq => ticket,
            other => {
                tracing::debug!(
                    seq,
                    latest = other.as_ref().map(|t| t.seq),
                    "discarding stale fetch result"
                );
                self.in_flight = other;
                return false;
            }
        };

        let next = match outcome {
            Err(e) => {
                tracing::warn!(seq, symbol = %ticket.query.symbol, error = %e, "fetch failed");
                ViewState::error(e.kind())
            }
            Ok(body) => match transform(&body, &ticket.query.symbol, ticket.query.days()) {
                Ok(out) => {
                    tracing::info!(
                        seq,
                        symbol = %ticket.query.symbol,
                        latest = out.summary.date(),
                        points = out.series.len(),
                        "series loaded"
                    );
                    ViewState::Loaded {
                        summary: out.summary,
                        series: out.series,
                        range_label: ticket.query.range.label().to_string(),
                    }
                }
                Err(e) => {
                    tracing::warn!(
                        seq,
                        symbol = %ticket.query.symbol,
                        error = %e,
                        "malformed response"
                    );
                    ViewState::error(e.kind())
                }
            },
        };

        self.store.replace(next);
        true
    }
}

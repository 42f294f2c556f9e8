//! Application state — single-owner, main-thread only.
//!
//! Holds the input widgets and the controller. The worker thread talks back
//! through `worker_rx`; responses are applied here, on the UI thread.

use std::sync::mpsc::Receiver;

use chrono::NaiveTime;

use tickerlens_core::worker::{ChannelDispatcher, WorkerResponse};
use tickerlens_core::{Controller, ErrorKind, RangeKey, Screen, ViewState};

/// Which input widget has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Symbol,
    Range,
    Button,
}

impl Focus {
    pub fn next(self) -> Focus {
        match self {
            Focus::Symbol => Focus::Range,
            Focus::Range => Focus::Button,
            Focus::Button => Focus::Symbol,
        }
    }

    pub fn prev(self) -> Focus {
        match self {
            Focus::Symbol => Focus::Button,
            Focus::Range => Focus::Symbol,
            Focus::Button => Focus::Range,
        }
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub at: NaiveTime,
    pub text: String,
    pub level: StatusLevel,
}

/// Top-level application state.
pub struct AppState {
    pub focus: Focus,
    pub running: bool,

    // Input widgets
    pub symbol_input: String,
    pub range: RangeKey,

    pub controller: Controller<ChannelDispatcher>,
    pub worker_rx: Receiver<WorkerResponse>,

    pub status_message: Option<StatusMessage>,
}

impl AppState {
    pub fn new(
        controller: Controller<ChannelDispatcher>,
        worker_rx: Receiver<WorkerResponse>,
    ) -> Self {
        Self {
            focus: Focus::Symbol,
            running: true,
            symbol_input: String::new(),
            range: RangeKey::default(),
            controller,
            worker_rx,
            status_message: None,
        }
    }

    /// Regions to draw for the current view-state.
    pub fn screen(&self) -> Screen {
        Screen::from_state(&self.controller.state())
    }

    /// Submit the current symbol and range. Shared by Enter and the button.
    pub fn submit(&mut self) {
        match self.controller.submit(&self.symbol_input, self.range.label()) {
            Some(ticket) => self.set_status(format!(
                "Fetching {} ({})",
                ticket.query.symbol,
                ticket.query.range.label()
            )),
            None => self.set_warning("Symbol is empty"),
        }
        // Dispatch can fail synchronously if the worker is gone.
        self.report_state();
    }

    /// Drain pending worker responses without blocking.
    pub fn drain_worker(&mut self) {
        while let Ok(resp) = self.worker_rx.try_recv() {
            self.handle_worker_response(resp);
        }
    }

    pub fn handle_worker_response(&mut self, resp: WorkerResponse) {
        match resp {
            WorkerResponse::Fetched { seq, outcome } => {
                if self.controller.complete(seq, outcome) {
                    self.report_state();
                }
            }
        }
    }

    /// Mirror fetch results into the status bar.
    fn report_state(&mut self) {
        let state = self.controller.state();
        match &*state {
            ViewState::Loaded {
                summary, series, ..
            } => self.set_status(format!(
                "Loaded {}: {} trading days, latest {}",
                summary.symbol,
                series.len(),
                summary.date()
            )),
            ViewState::Error { kind, .. } if *kind != ErrorKind::InvalidInput => {
                self.set_error(format!("[{}] fetch failed, see log", kind.label()))
            }
            _ => {}
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.set_message(msg.into(), StatusLevel::Info);
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.set_message(msg.into(), StatusLevel::Warning);
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.set_message(msg.into(), StatusLevel::Error);
    }

    fn set_message(&mut self, text: String, level: StatusLevel) {
        self.status_message = Some(StatusMessage {
            at: chrono::Local::now().time(),
            text,
            level,
        });
    }
}

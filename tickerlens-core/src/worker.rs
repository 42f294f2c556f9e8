//! Background fetch worker — all network I/O runs here.
//!
//! Communication with the UI thread is via `mpsc` channels. The UI thread
//! keeps ownership of the controller and applies `Fetched` responses itself,
//! so the view-state store still has a single writer.

use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use serde_json::Value;

use crate::controller::{FetchDispatcher, FetchTicket};
use crate::data::{FetchError, MarketDataClient};

/// Commands sent from the UI thread to the worker.
#[derive(Debug)]
pub enum WorkerCommand {
    Fetch(FetchTicket),
    Shutdown,
}

/// Responses sent from the worker back to the UI thread.
#[derive(Debug)]
pub enum WorkerResponse {
    Fetched {
        seq: u64,
        outcome: Result<Value, FetchError>,
    },
}

/// Spawn the background worker thread.
pub fn spawn_worker(
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
    client: MarketDataClient,
) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("tickerlens-fetch".into())
        .spawn(move || worker_loop(rx, tx, client))
}

fn worker_loop(rx: Receiver<WorkerCommand>, tx: Sender<WorkerResponse>, client: MarketDataClient) {
    loop {
        match rx.recv() {
            Ok(WorkerCommand::Shutdown) | Err(_) => break,
            Ok(WorkerCommand::Fetch(ticket)) => {
                // Each fetch gets its own thread so a slow request never
                // holds back the ticket that superseded it.
                spawn_fetch(ticket, tx.clone(), client.clone());
            }
        }
    }
    tracing::debug!("fetch worker stopped");
}

fn spawn_fetch(ticket: FetchTicket, tx: Sender<WorkerResponse>, client: MarketDataClient) {
    let seq = ticket.seq;
    let reply = tx.clone();
    let spawned = thread::Builder::new()
        .name(format!("tickerlens-fetch-{seq}"))
        .spawn(move || {
            let outcome = client.fetch_daily(&ticket.query.symbol);
            if tx.send(WorkerResponse::Fetched { seq, outcome }).is_err() {
                tracing::debug!(seq, "fetch finished after the UI hung up");
            }
        });

    if let Err(e) = spawned {
        tracing::error!(seq, error = %e, "failed to spawn fetch thread");
        let _ = reply.send(WorkerResponse::Fetched {
            seq,
            outcome: Err(FetchError::WorkerUnavailable),
        });
    }
}

/// `FetchDispatcher` that hands tickets to the worker thread.
pub struct ChannelDispatcher {
    tx: Sender<WorkerCommand>,
}

impl ChannelDispatcher {
    pub fn new(tx: Sender<WorkerCommand>) -> Self {
        Self { tx }
    }

    /// Ask the worker to stop accepting tickets. Fetches already running
    /// finish on their own threads.
    pub fn shutdown(&self) {
        if self.tx.send(WorkerCommand::Shutdown).is_err() {
            tracing::debug!("fetch worker already gone at shutdown");
        }
    }
}

impl FetchDispatcher for ChannelDispatcher {
    fn dispatch(&mut self, ticket: FetchTicket) -> Result<(), FetchError> {
        self.tx
            .send(WorkerCommand::Fetch(ticket))
            .map_err(|_| FetchError::WorkerUnavailable)
    }
}

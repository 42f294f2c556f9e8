//! TickerLens CLI — one-shot quotes from the terminal.
//!
//! Commands:
//! - `quote` — fetch a symbol's daily series and print summary, recap and closes
//! - `ranges` — list the chart ranges and their day counts

use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tickerlens_core::config::ConfigFile;
use tickerlens_core::data::{HttpTransport, MarketDataClient};
use tickerlens_core::view::{format_currency, Screen};
use tickerlens_core::worker::{spawn_worker, ChannelDispatcher, WorkerResponse};
use tickerlens_core::{AppConfig, Controller, RangeKey, ViewState, ViewStateStore};

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser)]
#[command(
    name = "tickerlens",
    version,
    about = "TickerLens CLI — daily stock prices from Alpha Vantage"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the daily series for a symbol and print it.
    Quote {
        /// Ticker symbol (case and surrounding spaces are ignored).
        symbol: String,

        /// Chart range: a label ("1 week", "90 days") or short key (1w, 2w, 30d, 90d, 1y, 5y).
        /// Unrecognized values fall back to 30 days.
        #[arg(long, default_value = "30 days")]
        range: String,

        /// Path to a TOML config file. Defaults to <config dir>/tickerlens/config.toml.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the resulting view-state as JSON instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List the selectable chart ranges.
    Ranges,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Quote {
            symbol,
            range,
            config,
            json,
        } => run_quote(&symbol, &range, config, json),
        Commands::Ranges => {
            print!("{}", format_ranges());
            Ok(())
        }
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();
}

fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tickerlens")
        .join("config.toml")
}

fn run_quote(symbol: &str, range: &str, config_path: Option<PathBuf>, json: bool) -> Result<()> {
    let default_path = default_config_path();
    let file = match &config_path {
        Some(path) => ConfigFile::Required(path),
        None => ConfigFile::Optional(&default_path),
    };
    let config = AppConfig::load(file).context("loading configuration")?;
    tracing::debug!(?config, "configuration loaded");

    let transport = HttpTransport::new(config.timeout()).context("building HTTP client")?;
    let client = MarketDataClient::from_config(Arc::new(transport), &config);

    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (resp_tx, resp_rx) = mpsc::channel();
    let worker = spawn_worker(cmd_rx, resp_tx, client).context("spawning fetch worker")?;
    let mut controller = Controller::new(
        Arc::new(ViewStateStore::new()),
        ChannelDispatcher::new(cmd_tx),
    );

    // Wait for the one ticket we issued; an invalid symbol never dispatches.
    if controller.submit(symbol, range).is_some() {
        while controller.state().is_loading() {
            let WorkerResponse::Fetched { seq, outcome } = resp_rx
                .recv()
                .context("fetch worker stopped without answering")?;
            controller.complete(seq, outcome);
        }
    }
    controller.dispatcher().shutdown();
    let _ = worker.join();

    let state = controller.state();
    if json {
        println!("{}", serde_json::to_string_pretty(&*state)?);
    } else {
        print!("{}", format_screen(&Screen::from_state(&state)));
    }

    if let ViewState::Error { kind, message } = &*state {
        if !json {
            eprintln!("Error [{}]: {message}", kind.label());
        }
        std::process::exit(1);
    }
    Ok(())
}

/// Plain-text rendering of a screen, one region after another.
fn format_screen(screen: &Screen) -> String {
    let mut out = String::new();
    if let Some(summary) = &screen.summary_panel {
        let _ = writeln!(out);
        let _ = writeln!(out, "=== {} ===", summary.title);
        let _ = writeln!(out, "{}", summary.date_line);
        for price in &summary.prices {
            let _ = writeln!(out, "{:<7}{}", format!("{}:", price.label), price.value);
        }
    }
    if let Some(recap) = &screen.recap {
        let _ = writeln!(out);
        let _ = writeln!(out, "{recap}");
    }
    if let Some(chart) = &screen.chart_panel {
        let _ = writeln!(out);
        let _ = writeln!(out, "--- {} ---", chart.title);
        for (date, (_, close)) in chart.dates.iter().zip(&chart.points) {
            let _ = writeln!(out, "{date}  {:>12}", format_currency(*close));
        }
        let _ = writeln!(out);
    }
    out
}

fn format_ranges() -> String {
    let mut out = String::new();
    for range in RangeKey::ALL {
        let marker = if range == RangeKey::default() {
            " (default)"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "{:<4}{:<10}{:>5} days{marker}",
            range.short_key(),
            range.label(),
            range.days()
        );
    }
    out
}

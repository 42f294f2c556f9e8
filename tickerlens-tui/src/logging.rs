//! File logging. Stdout belongs to the terminal UI, so events go to a daily
//! rolling file under `./logs`.
//!
//! ```bash
//! RUST_LOG=tickerlens_core=trace tickerlens-tui
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "tickerlens=debug,info";
const LOG_FILE_PREFIX: &str = "tickerlens.log";

pub fn log_dir() -> PathBuf {
    PathBuf::from("./logs")
}

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating log directory {}", dir.display()))?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE_PREFIX);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_names(true)
                .with_line_number(true),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)))
        .try_init()
        .context("installing tracing subscriber")?;

    Ok(())
}

//! TickerLens TUI — single-screen daily stock price viewer.
//!
//! Layout:
//! 1. Header — title and one-line instructions
//! 2. Input row — symbol field, range selector, "Get Stock Data" button
//! 3. Result area — error banner, loading indicator, or summary + chart + recap
//! 4. Status bar — key hints and the last status message

mod app;
mod input;
mod logging;
mod theme;
mod ui;

use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use tickerlens_core::config::ConfigFile;
use tickerlens_core::data::{HttpTransport, MarketDataClient};
use tickerlens_core::worker::{self, ChannelDispatcher};
use tickerlens_core::{AppConfig, Controller, ViewStateStore};

use crate::app::AppState;

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    logging::init(&logging::log_dir())?;

    // Configuration is read once; a missing key stops us before the UI starts.
    let config_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tickerlens")
        .join("config.toml");
    let config =
        AppConfig::load(ConfigFile::Optional(&config_path)).context("loading configuration")?;
    tracing::info!(?config, "starting tickerlens-tui");

    let transport = HttpTransport::new(config.timeout()).context("building HTTP client")?;
    let client = MarketDataClient::from_config(Arc::new(transport), &config);

    // Worker channels
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (resp_tx, resp_rx) = mpsc::channel();
    let worker_handle =
        worker::spawn_worker(cmd_rx, resp_tx, client).context("spawning fetch worker")?;

    let controller = Controller::new(
        Arc::new(ViewStateStore::new()),
        ChannelDispatcher::new(cmd_tx),
    );
    let mut app = AppState::new(controller, resp_rx);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // The worker loop returns as soon as it sees Shutdown; fetch threads
    // still blocked in HTTP are detached and end with the process.
    app.controller.dispatcher().shutdown();
    let _ = worker_handle.join();
    tracing::info!("tickerlens-tui stopped");

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Drain worker responses (non-blocking)
        app.drain_worker();

        // 3. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}

//! Top-level UI layout — header, input bar, result area, status bar.
//!
//! Every frame re-derives a `Screen` from the current view-state; nothing
//! drawn here is kept between frames.

pub mod chart_panel;
pub mod input_bar;
pub mod status_bar;
pub mod summary_panel;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use tickerlens_core::view::Screen;

use crate::app::AppState;
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    input_bar::render(f, chunks[1], app);
    draw_results(f, chunks[2], &app.screen());
    status_bar::render(f, chunks[3], app);
}

pub const TITLE: &str = "View Stock Market Data";
pub const SUBTITLE: &str = "Enter a stock symbol to fetch its latest market data.";

fn render_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            TITLE,
            theme::accent().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(SUBTITLE, theme::muted())),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Result area. At most one of banner, loading or loaded panels is present.
fn draw_results(f: &mut Frame, area: Rect, screen: &Screen) {
    if let Some(message) = &screen.error_banner {
        render_banner(f, area, message);
        return;
    }
    if let Some(text) = &screen.loading {
        render_centered(f, area, Span::styled(text.as_str(), theme::warning()));
        return;
    }

    match (&screen.summary_panel, &screen.chart_panel) {
        (Some(summary), Some(chart)) => {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(summary_panel::HEIGHT),
                    Constraint::Min(6),
                    Constraint::Length(1),
                ])
                .split(area);
            summary_panel::render(f, parts[0], summary);
            chart_panel::render(f, parts[1], chart);
            if let Some(recap) = &screen.recap {
                f.render_widget(
                    Paragraph::new(Span::styled(recap.as_str(), theme::text()))
                        .alignment(Alignment::Center),
                    parts[2],
                );
            }
        }
        _ => render_centered(
            f,
            area,
            Span::styled(
                "Type a ticker symbol and press Enter to fetch daily prices.",
                theme::muted(),
            ),
        ),
    }
}

fn render_banner(f: &mut Frame, area: Rect, message: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::negative())
        .title(" Error ")
        .title_style(theme::negative());
    let para = Paragraph::new(Line::from(Span::styled(message, theme::error_banner())))
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    let height = area.height.min(3);
    f.render_widget(para, Rect { height, ..area });
}

fn render_centered(f: &mut Frame, area: Rect, span: Span) {
    let top = area.height / 2;
    let line_area = Rect {
        y: area.y + top,
        height: area.height.saturating_sub(top).min(1),
        ..area
    };
    f.render_widget(Paragraph::new(span).alignment(Alignment::Center), line_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::{one_day_body, rig};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use tickerlens_core::worker::{WorkerCommand, WorkerResponse};

    fn render(app: &AppState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn idle_shows_hint_and_default_range() {
        let rig = rig();
        let text = render(&rig.app);
        assert!(text.contains("Type a ticker symbol"));
        assert!(text.contains("30 days"));
        assert!(text.contains("Get Stock Data"));
    }

    #[test]
    fn header_is_shown_in_every_state() {
        let mut rig = rig();
        let text = render(&rig.app);
        assert!(text.lines().next().unwrap().contains(TITLE));
        assert!(text.contains(SUBTITLE));

        rig.app.submit();
        let text = render(&rig.app);
        assert!(text.contains(TITLE));
        assert!(text.contains("Please enter a stock symbol."));
    }

    #[test]
    fn error_state_shows_banner_only() {
        let mut rig = rig();
        rig.app.submit();
        let text = render(&rig.app);
        assert!(text.contains("Please enter a stock symbol."));
        assert!(!text.contains("Closing Prices"));
    }

    #[test]
    fn loading_state_shows_indicator() {
        let mut rig = rig();
        rig.app.symbol_input = "nvda".into();
        rig.app.submit();
        assert!(render(&rig.app).contains("Loading NVDA..."));
    }

    #[test]
    fn loaded_state_shows_summary_chart_and_recap() {
        let mut rig = rig();
        rig.app.symbol_input = "AAPL".into();
        rig.app.submit();
        let Ok(WorkerCommand::Fetch(ticket)) = rig.commands.try_recv() else {
            panic!("expected fetch");
        };
        rig.app.handle_worker_response(WorkerResponse::Fetched {
            seq: ticket.seq,
            outcome: Ok(one_day_body()),
        });

        let text = render(&rig.app);
        assert!(text.contains("Stock: AAPL"));
        assert!(text.contains("Date: 2024-01-03"));
        assert!(text.contains("Closing Prices - 30 days"));
        assert!(text.contains("Open: $180.00 | High: $190.50 | Low: $179.25 | Close: $186.00"));
        assert!(!text.contains("Error"));
    }
}

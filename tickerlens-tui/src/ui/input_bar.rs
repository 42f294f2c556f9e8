//! Input row — symbol field, range selector, fetch button.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, Focus};
use crate::theme;

pub const BUTTON_LABEL: &str = "Get Stock Data";

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),
            Constraint::Length(18),
            Constraint::Length(20),
        ])
        .split(area);

    render_symbol(f, chunks[0], app);
    render_range(f, chunks[1], app);
    render_button(f, chunks[2], app);
}

fn bordered(title: &'static str, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(focused))
        .title(title)
        .title_style(theme::panel_title(focused))
}

fn render_symbol(f: &mut Frame, area: Rect, app: &AppState) {
    let focused = app.focus == Focus::Symbol;
    let mut spans = vec![Span::styled(app.symbol_input.as_str(), theme::text())];
    if focused {
        spans.push(Span::styled("_", theme::accent()));
    } else if app.symbol_input.is_empty() {
        spans.push(Span::styled("e.g. AAPL", theme::muted()));
    }
    let para = Paragraph::new(Line::from(spans)).block(bordered(" Symbol ", focused));
    f.render_widget(para, area);
}

fn render_range(f: &mut Frame, area: Rect, app: &AppState) {
    let focused = app.focus == Focus::Range;
    let arrow = if focused { theme::accent() } else { theme::muted() };
    let line = Line::from(vec![
        Span::styled("◂ ", arrow),
        Span::styled(app.range.label(), theme::text()),
        Span::styled(" ▸", arrow),
    ]);
    let para = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(bordered(" Range ", focused));
    f.render_widget(para, area);
}

fn render_button(f: &mut Frame, area: Rect, app: &AppState) {
    let focused = app.focus == Focus::Button;
    let para = Paragraph::new(Span::styled(BUTTON_LABEL, theme::button(focused)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::panel_border(focused)),
        );
    f.render_widget(para, area);
}

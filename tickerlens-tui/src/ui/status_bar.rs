//! Bottom status bar — key hints and the last status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(
        " Tab:focus ←/→:range Enter:fetch Esc:quit",
        theme::muted(),
    ));

    if let Some(status) = &app.status_message {
        spans.push(Span::raw(" | "));
        let style = match status.level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
            StatusLevel::Error => theme::negative(),
        };
        spans.push(Span::styled(
            format!("{} ", status.at.format("%H:%M:%S")),
            theme::muted(),
        ));
        spans.push(Span::styled(status.text.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

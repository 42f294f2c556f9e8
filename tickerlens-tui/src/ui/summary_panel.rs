//! Latest-day summary: symbol, date and four price boxes.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use tickerlens_core::view::{PriceBox, SummaryPanel};

use crate::theme;

/// Rows taken by the panel, borders included.
pub const HEIGHT: u16 = 6;

pub fn render(f: &mut Frame, area: Rect, panel: &SummaryPanel) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(format!(" {} ", panel.title))
        .title_style(theme::accent().add_modifier(Modifier::BOLD));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(inner);

    f.render_widget(
        Paragraph::new(Span::styled(panel.date_line.as_str(), theme::neutral())),
        rows[0],
    );

    let boxes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(rows[1]);
    for (price, slot) in panel.prices.iter().zip(boxes.iter()) {
        render_price_box(f, *slot, price);
    }
}

fn render_price_box(f: &mut Frame, area: Rect, price: &PriceBox) {
    let value_style = match price.label {
        "High" => theme::positive(),
        "Low" => theme::negative(),
        _ => theme::text(),
    };
    let para = Paragraph::new(Line::from(Span::styled(
        price.value.as_str(),
        value_style.add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::muted())
            .title(price.label)
            .title_style(theme::neutral()),
    );
    f.render_widget(para, area);
}

//! Closing-price line chart.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType};
use ratatui::Frame;

use tickerlens_core::view::{format_currency, ChartPanel};

use crate::theme;

pub fn render(f: &mut Frame, area: Rect, panel: &ChartPanel) {
    let first = panel.points.first().map(|p| p.1).unwrap_or_default();
    let last = panel.points.last().map(|p| p.1).unwrap_or_default();

    let dataset = Dataset::default()
        .name("Close")
        .marker(symbols::Marker::Braille)
        .style(theme::day_change(first, last))
        .graph_type(GraphType::Line)
        .data(&panel.points);

    let [x_min, x_max] = panel.bounds.x;
    let [y_min, y_max] = panel.bounds.y;

    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::muted())
                .title(format!(" {} ", panel.title))
                .title_style(theme::accent().add_modifier(Modifier::BOLD)),
        )
        .x_axis(
            Axis::default()
                .title(Span::styled("Date", theme::muted()))
                .style(theme::muted())
                .bounds([x_min, x_max])
                .labels(vec![
                    Span::styled(panel.first_date().unwrap_or("").to_string(), theme::muted()),
                    Span::styled(panel.last_date().unwrap_or("").to_string(), theme::muted()),
                ]),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled("Close", theme::muted()))
                .style(theme::muted())
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::styled(format_currency(y_min), theme::muted()),
                    Span::styled(format_currency(y_max), theme::muted()),
                ]),
        );

    f.render_widget(chart, area);
}

//! Parrot/neon palette and the styles built from it.
//!
//! # Color Palette
//! - **Accent**: Electric cyan (focus, titles, header)
//! - **Positive**: Neon green (close at or above open, rising chart line)
//! - **Negative**: Hot pink (close below open, falling chart line, error banner)
//! - **Warning**: Neon orange (loading indicator)
//! - **Neutral**: Cool purple (labels)
//! - **Muted**: Steel blue (hints, axes, unfocused borders)

use ratatui::style::{Color, Modifier, Style};

pub const BACKGROUND: Color = Color::Rgb(18, 18, 20);
pub const ACCENT: Color = Color::Rgb(0, 255, 255);
pub const POSITIVE: Color = Color::Rgb(0, 255, 128);
pub const NEGATIVE: Color = Color::Rgb(255, 20, 147);
pub const WARNING: Color = Color::Rgb(255, 140, 0);
pub const NEUTRAL: Color = Color::Rgb(147, 112, 219);
pub const MUTED: Color = Color::Rgb(100, 149, 237);
pub const TEXT_PRIMARY: Color = Color::White;

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn text() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

/// Border of a focusable widget or panel.
pub fn panel_border(focused: bool) -> Style {
    if focused {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(focused: bool) -> Style {
    if focused {
        accent().add_modifier(Modifier::BOLD)
    } else {
        neutral()
    }
}

/// Green when the day closed at or above its open, pink otherwise.
pub fn day_change(open: f64, close: f64) -> Style {
    if close >= open {
        positive()
    } else {
        negative()
    }
}

pub fn error_banner() -> Style {
    Style::default()
        .fg(TEXT_PRIMARY)
        .bg(NEGATIVE)
        .add_modifier(Modifier::BOLD)
}

pub fn button(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(BACKGROUND)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        accent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_changes_border() {
        assert_eq!(panel_border(true).fg, Some(ACCENT));
        assert_eq!(panel_border(false).fg, Some(MUTED));
    }

    #[test]
    fn day_change_color() {
        assert_eq!(day_change(10.0, 11.0).fg, Some(POSITIVE));
        assert_eq!(day_change(10.0, 10.0).fg, Some(POSITIVE));
        assert_eq!(day_change(10.0, 9.0).fg, Some(NEGATIVE));
    }

    #[test]
    fn focused_button_is_inverted() {
        let style = button(true);
        assert_eq!(style.bg, Some(ACCENT));
        assert_eq!(style.fg, Some(BACKGROUND));
    }
}

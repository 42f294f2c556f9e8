//! Keyboard input dispatch — global keys, then the focused widget.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Focus};

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Global keys.
    match key.code {
        KeyCode::Esc => {
            app.running = false;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.focus = app.focus.prev();
            } else {
                app.focus = app.focus.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.focus = app.focus.prev();
            return;
        }
        KeyCode::Enter => {
            app.submit();
            return;
        }
        _ => {}
    }

    // 2. Focused widget.
    match app.focus {
        Focus::Symbol => handle_symbol_key(app, key),
        Focus::Range => handle_range_key(app, key),
        Focus::Button => {
            if key.code == KeyCode::Char(' ') {
                app.submit();
            }
        }
    }
}

fn handle_symbol_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Backspace => {
            app.symbol_input.pop();
        }
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.symbol_input.push(c);
        }
        _ => {}
    }
}

fn handle_range_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.range = app.range.prev(),
        KeyCode::Right | KeyCode::Char('l') => app.range = app.range.next(),
        _ => {}
    }
}

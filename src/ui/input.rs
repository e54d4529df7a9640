use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Routes a key press: global shortcuts first, then the screen, then the
/// fallbacks (Esc quits when the screen did not use it).
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Char('q')) {
        app.request_quit();
        return;
    }

    if matches!(key.code, KeyCode::Char('o')) && key.modifiers.is_empty() {
        app.rotate();
        return;
    }

    if app.on_key(key) {
        return;
    }

    if matches!(key.code, KeyCode::Esc) {
        app.request_quit();
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

mod edit;
mod mouse;
mod move_mode;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

pub use mouse::handle_mouse;

use edit::{handle_edit, insert_text};
use move_mode::handle_move;
use navigate::handle_navigate;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status = None;

    // Ctrl-C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Help overlay swallows the next key
    if app.show_help {
        app.show_help = false;
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Edit => handle_edit(app, key),
        Mode::Move => handle_move(app, key),
    }
}

/// Handle a bracketed paste. Pasting outside the input line focuses it first.
/// Newlines become spaces: one paste adds at most one todo.
pub fn handle_paste(app: &mut App, text: &str) {
    if text.is_empty() || app.mode == Mode::Move {
        return;
    }
    app.mode = Mode::Edit;
    let clean = text.replace(['\r', '\n'], " ");
    insert_text(app, &clean);
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};
use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary};

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => app.mode = Mode::Navigate,
        KeyCode::Enter => app.submit_input(),

        KeyCode::Char('u') if ctrl => {
            app.input.clear();
            app.input_cursor = 0;
        }
        KeyCode::Char('a') if ctrl => app.input_cursor = 0,
        KeyCode::Char('e') if ctrl => app.input_cursor = app.input.len(),
        KeyCode::Char(c) if !ctrl => {
            let mut buf = [0u8; 4];
            insert_text(app, c.encode_utf8(&mut buf));
        }

        KeyCode::Backspace => {
            if let Some(start) = prev_grapheme_boundary(&app.input, app.input_cursor) {
                app.input.replace_range(start..app.input_cursor, "");
                app.input_cursor = start;
            }
        }
        KeyCode::Delete => {
            if let Some(end) = next_grapheme_boundary(&app.input, app.input_cursor) {
                app.input.replace_range(app.input_cursor..end, "");
            }
        }
        KeyCode::Left => {
            if let Some(start) = prev_grapheme_boundary(&app.input, app.input_cursor) {
                app.input_cursor = start;
            }
        }
        KeyCode::Right => {
            if let Some(end) = next_grapheme_boundary(&app.input, app.input_cursor) {
                app.input_cursor = end;
            }
        }
        KeyCode::Home => app.input_cursor = 0,
        KeyCode::End => app.input_cursor = app.input.len(),
        _ => {}
    }
}

/// Insert at the caret and move the caret past the inserted text
pub(super) fn insert_text(app: &mut App, text: &str) {
    app.input.insert_str(app.input_cursor, text);
    app.input_cursor += text.len();
}

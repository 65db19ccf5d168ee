use crossterm::event::{KeyCode, KeyEvent};

use crate::model::Filter;
use crate::tui::app::{App, Mode};

use super::move_mode::enter_move_mode;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    let len = app.view().rows.len();

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        // Cursor
        KeyCode::Char('j') | KeyCode::Down => {
            if app.cursor + 1 < len {
                app.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => app.cursor = app.cursor.saturating_sub(1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => app.cursor = len.saturating_sub(1),

        // Input line
        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Char('n') => {
            app.mode = Mode::Edit;
            app.input_cursor = app.input.len();
        }

        // Row operations
        KeyCode::Char(' ') | KeyCode::Char('x') | KeyCode::Enter => {
            if let Some(id) = app.cursor_id() {
                app.session.toggle(id);
                // Under a filter the row may have left the view; stay on the
                // same index so the next row takes its place
                app.after_change();
            }
        }
        KeyCode::Char('d') | KeyCode::Delete | KeyCode::Backspace => {
            if let Some(id) = app.cursor_id() {
                app.session.delete(id);
                app.after_change();
            }
        }
        KeyCode::Char('m') => enter_move_mode(app),
        KeyCode::Char('C') => {
            app.session.clear_completed();
            app.after_change();
        }

        // Filter selector
        KeyCode::Tab | KeyCode::Char('f') => {
            let next = app.session.filter().next();
            set_filter(app, next);
        }
        KeyCode::BackTab | KeyCode::Char('F') => {
            let prev = app.session.filter().prev();
            set_filter(app, prev);
        }
        KeyCode::Char('1') => set_filter(app, Filter::All),
        KeyCode::Char('2') => set_filter(app, Filter::Active),
        KeyCode::Char('3') => set_filter(app, Filter::Completed),

        KeyCode::Char('t') => {
            app.session.toggle_theme();
            app.after_change();
        }
        _ => {}
    }
}

/// Switch filter, keeping the cursor on the same todo when it stays visible
pub(super) fn set_filter(app: &mut App, filter: Filter) {
    let current = app.cursor_id();
    app.session.set_filter(filter);
    app.cursor = 0;
    if let Some(id) = current {
        app.select_id(id);
    }
    app.clamp_cursor();
}

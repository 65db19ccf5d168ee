use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

/// Enter MOVE mode for the todo under the cursor.
pub(super) fn enter_move_mode(app: &mut App) {
    if let Some(id) = app.cursor_id() {
        app.drag.start(id);
        app.mode = Mode::Move;
    }
}

/// In MOVE mode the cursor picks the drop target; the grabbed todo stays in
/// place until the drop.
pub(super) fn handle_move(app: &mut App, key: KeyEvent) {
    let len = app.view().rows.len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.cursor + 1 < len {
                app.cursor += 1;
            }
            let over = app.cursor_id();
            app.drag.hover(over);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor = app.cursor.saturating_sub(1);
            let over = app.cursor_id();
            app.drag.hover(over);
        }
        KeyCode::Enter | KeyCode::Char('m') => {
            let target = app.cursor_id();
            let moved = app.drag.drop_on(target);
            app.drag.end();
            app.mode = Mode::Navigate;
            if let Some((moved, target)) = moved {
                app.session.reorder(moved, target);
                app.select_id(moved);
                app.after_change();
            }
        }
        KeyCode::Esc => {
            let grabbed = app.drag.dragged();
            app.drag.end();
            app.mode = Mode::Navigate;
            if let Some(id) = grabbed {
                app.select_id(id);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::super::handle_key;
    use super::super::test_keys::*;
    use super::*;
    use crate::model::todo::TodoId;
    use crate::tui::render::test_helpers::*;

    fn ids(app: &App) -> Vec<TodoId> {
        app.session.todos().iter().map(|t| t.id).collect()
    }

    #[test]
    fn move_down_and_drop() {
        let mut app = seeded_app();
        app.cursor = 1; // id 2
        handle_key(&mut app, ch('m'));
        assert_eq!(app.mode, Mode::Move);
        assert_eq!(app.drag.dragged(), Some(2));

        handle_key(&mut app, ch('j'));
        handle_key(&mut app, ch('j'));
        assert_eq!(app.drag.target(), Some(4));
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(ids(&app), vec![1, 3, 4, 2, 5, 6]);
        assert_eq!(app.mode, Mode::Navigate);
        assert!(!app.drag.is_dragging());
        assert_eq!(app.cursor_id(), Some(2));
    }

    #[test]
    fn move_up_lands_before_target() {
        let mut app = seeded_app();
        app.cursor = 4; // id 5
        handle_key(&mut app, ch('m'));
        handle_key(&mut app, ch('k'));
        handle_key(&mut app, ch('k'));
        handle_key(&mut app, ch('k'));
        handle_key(&mut app, ch('m'));
        assert_eq!(ids(&app), vec![1, 5, 2, 3, 4, 6]);
    }

    #[test]
    fn drop_on_self_is_noop() {
        let mut app = seeded_app();
        app.cursor = 2;
        handle_key(&mut app, ch('m'));
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, ch('k'));
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(ids(&app), vec![1, 2, 3, 4, 5, 6]);
        assert!(!app.drag.is_dragging());
    }

    #[test]
    fn esc_cancels_and_returns_to_grabbed_row() {
        let mut app = seeded_app();
        app.cursor = 0;
        handle_key(&mut app, ch('m'));
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(ids(&app), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(app.cursor, 0);
        assert!(!app.drag.is_dragging());
    }

    #[test]
    fn move_respects_filtered_view() {
        let mut app = seeded_app();
        handle_key(&mut app, ch('2')); // active: 2 3 4 5 6
        app.cursor = 4; // id 6
        handle_key(&mut app, ch('m'));
        handle_key(&mut app, ch('g')); // ignored in move mode
        for _ in 0..4 {
            handle_key(&mut app, ch('k'));
        }
        handle_key(&mut app, key(KeyCode::Enter));
        // 6 takes the slot of 2 in the full list; the completed todo stays first
        assert_eq!(ids(&app), vec![1, 6, 2, 3, 4, 5]);
    }
}

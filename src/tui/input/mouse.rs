use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::tui::app::{App, Mode, MouseAction};

use super::navigate::set_filter;

/// Handle a mouse event against the interactive areas of the last render.
///
/// Press on a row starts a drag; releasing on another row reorders, releasing
/// on the same row without moving is a click (toggle). The drag state is
/// cleared on every release, wherever it lands.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.show_help || app.mode == Mode::Move {
        return;
    }
    let (col, row) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.status = None;
            if let Some(action) = app.area_at(col, row) {
                press(app, action);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            let over = app.row_at(col, row);
            app.drag.hover(over);
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if !app.drag.is_dragging() {
                return;
            }
            let target = app.row_at(col, row);
            let reorder = app.drag.drop_on(target);
            let click = app.drag.is_click_on(target);
            app.drag.end();

            if let Some((moved, target)) = reorder {
                app.session.reorder(moved, target);
                app.select_id(moved);
                app.after_change();
            } else if click && let Some(id) = target {
                app.session.toggle(id);
                app.after_change();
            }
        }
        MouseEventKind::ScrollDown => {
            let len = app.view().rows.len();
            if app.cursor + 1 < len {
                app.cursor += 1;
            }
        }
        MouseEventKind::ScrollUp => app.cursor = app.cursor.saturating_sub(1),
        _ => {}
    }
}

fn press(app: &mut App, action: MouseAction) {
    match action {
        MouseAction::ToggleTheme => {
            app.session.toggle_theme();
            app.after_change();
        }
        MouseAction::FocusInput => {
            app.mode = Mode::Edit;
            app.input_cursor = app.input.len();
        }
        MouseAction::Toggle(id) => {
            app.mode = Mode::Navigate;
            app.select_id(id);
            app.session.toggle(id);
            app.after_change();
        }
        MouseAction::Delete(id) => {
            app.mode = Mode::Navigate;
            app.select_id(id);
            app.session.delete(id);
            app.after_change();
        }
        MouseAction::Row(id) => {
            app.mode = Mode::Navigate;
            app.select_id(id);
            app.drag.start(id);
        }
        MouseAction::SetFilter(filter) => set_filter(app, filter),
        MouseAction::ClearCompleted => {
            app.session.clear_completed();
            app.after_change();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Filter;
    use crate::model::todo::TodoId;
    use crate::tui::app::{InteractiveArea, MouseAction};
    use crate::tui::render::test_helpers::*;
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;

    fn ev(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn down(c: u16, r: u16) -> MouseEvent {
        ev(MouseEventKind::Down(MouseButton::Left), c, r)
    }

    fn drag(c: u16, r: u16) -> MouseEvent {
        ev(MouseEventKind::Drag(MouseButton::Left), c, r)
    }

    fn up(c: u16, r: u16) -> MouseEvent {
        ev(MouseEventKind::Up(MouseButton::Left), c, r)
    }

    /// Lay rows out one per line starting at y=10: check at x 1..3, text up
    /// to x 30, delete at x 30..32.
    fn with_row_areas(app: &mut App) {
        let mut areas = Vec::new();
        for (i, row) in app.view().rows.iter().enumerate() {
            let y = 10 + i as u16;
            areas.push(InteractiveArea {
                rect: Rect::new(1, y, 2, 1),
                action: MouseAction::Toggle(row.id),
            });
            areas.push(InteractiveArea {
                rect: Rect::new(30, y, 2, 1),
                action: MouseAction::Delete(row.id),
            });
            areas.push(InteractiveArea {
                rect: Rect::new(0, y, 32, 1),
                action: MouseAction::Row(row.id),
            });
        }
        areas.push(InteractiveArea {
            rect: Rect::new(40, 0, 3, 1),
            action: MouseAction::ToggleTheme,
        });
        areas.push(InteractiveArea {
            rect: Rect::new(10, 20, 6, 1),
            action: MouseAction::SetFilter(Filter::Active),
        });
        areas.push(InteractiveArea {
            rect: Rect::new(0, 2, 32, 3),
            action: MouseAction::FocusInput,
        });
        app.interactive_areas = areas;
    }

    fn ids(app: &App) -> Vec<TodoId> {
        app.session.todos().iter().map(|t| t.id).collect()
    }

    #[test]
    fn drag_row_onto_another_reorders() {
        let mut app = seeded_app();
        with_row_areas(&mut app);
        handle_mouse(&mut app, down(10, 14)); // id 5
        assert_eq!(app.drag.dragged(), Some(5));
        handle_mouse(&mut app, drag(10, 12));
        handle_mouse(&mut app, drag(10, 11));
        assert_eq!(app.drag.target(), Some(2));
        handle_mouse(&mut app, up(10, 11));

        assert_eq!(ids(&app), vec![1, 5, 2, 3, 4, 6]);
        assert!(!app.drag.is_dragging());
        assert_eq!(app.cursor_id(), Some(5));
    }

    #[test]
    fn drop_outside_rows_is_noop_and_clears_drag() {
        let mut app = seeded_app();
        with_row_areas(&mut app);
        handle_mouse(&mut app, down(10, 12));
        handle_mouse(&mut app, drag(10, 30));
        handle_mouse(&mut app, up(10, 30));
        assert_eq!(ids(&app), vec![1, 2, 3, 4, 5, 6]);
        assert!(!app.drag.is_dragging());
    }

    #[test]
    fn drag_back_onto_self_is_noop() {
        let mut app = seeded_app();
        with_row_areas(&mut app);
        handle_mouse(&mut app, down(10, 12));
        handle_mouse(&mut app, drag(10, 13));
        handle_mouse(&mut app, drag(10, 12));
        handle_mouse(&mut app, up(10, 12));
        assert_eq!(ids(&app), vec![1, 2, 3, 4, 5, 6]);
        // Moved away and back: not a click either
        assert!(!app.session.todos()[2].completed);
    }

    #[test]
    fn click_on_text_toggles() {
        let mut app = seeded_app();
        with_row_areas(&mut app);
        handle_mouse(&mut app, down(10, 11));
        handle_mouse(&mut app, up(10, 11));
        assert!(app.session.todos()[1].completed);
    }

    #[test]
    fn click_on_circle_and_cross() {
        let mut app = seeded_app();
        with_row_areas(&mut app);
        handle_mouse(&mut app, down(1, 10));
        assert!(!app.session.todos()[0].completed);
        // Release after an immediate action does nothing more
        handle_mouse(&mut app, up(1, 10));
        assert!(!app.session.todos()[0].completed);

        handle_mouse(&mut app, down(30, 15));
        assert_eq!(ids(&app), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn click_theme_filter_and_input() {
        let mut app = seeded_app();
        with_row_areas(&mut app);
        handle_mouse(&mut app, down(41, 0));
        assert!(app.session.is_dark_theme());
        handle_mouse(&mut app, down(12, 20));
        assert_eq!(app.session.filter(), Filter::Active);
        handle_mouse(&mut app, down(5, 3));
        assert_eq!(app.mode, Mode::Edit);
    }

    #[test]
    fn mouse_ignored_in_move_mode() {
        let mut app = seeded_app();
        with_row_areas(&mut app);
        app.mode = Mode::Move;
        handle_mouse(&mut app, down(1, 10));
        assert!(app.session.todos()[0].completed);
    }
}

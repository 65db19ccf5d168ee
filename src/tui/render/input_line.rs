use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::tui::app::{App, InteractiveArea, Mode, MouseAction};
use crate::util::unicode::{display_width, next_grapheme_boundary, truncate_to_width};

const PLACEHOLDER: &str = "Create a new todo\u{2026}";

/// Leading circle plus its trailing space
const PREFIX_WIDTH: u16 = 2;

/// The add-todo line. Focused (accent border, visible caret) in Edit mode.
pub fn render_input_line(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = app.theme().clone();
    let editing = app.mode == Mode::Edit;
    let surface = Style::default().bg(theme.surface);

    let border_color = if editing { theme.accent } else { theme.border };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(surface.fg(border_color))
        .style(surface);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text_width = inner.width.saturating_sub(PREFIX_WIDTH + 1) as usize;
    let mut spans = vec![Span::styled("\u{25CB} ", surface.fg(theme.dim))];
    let start = scroll_start(&app.input, app.input_cursor, text_width);
    if app.input.is_empty() {
        spans.push(Span::styled(PLACEHOLDER, surface.fg(theme.dim)));
    } else {
        let visible = truncate_to_width(&app.input[start..], text_width);
        spans.push(Span::styled(visible, surface.fg(theme.text)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).style(surface), inner);

    if editing && inner.height > 0 {
        let caret = display_width(&app.input[start..app.input_cursor]) as u16;
        frame.set_cursor_position(Position::new(inner.x + PREFIX_WIDTH + caret, inner.y));
    }

    app.interactive_areas.push(InteractiveArea {
        rect: area,
        action: MouseAction::FocusInput,
    });
}

/// Byte offset of the first visible grapheme, scrolled so the caret stays
/// inside `width` cells.
fn scroll_start(input: &str, cursor: usize, width: usize) -> usize {
    let mut start = 0;
    while width > 0 && display_width(&input[start..cursor]) >= width {
        match next_grapheme_boundary(input, start) {
            Some(next) => start = next,
            None => break,
        }
    }
    start
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn placeholder_when_empty() {
        let mut app = seeded_app();
        let out = render_to_string(40, 3, |frame, area| {
            render_input_line(frame, &mut app, area)
        });
        assert!(out.contains("\u{25CB} Create a new todo\u{2026}"));
        assert_eq!(app.area_at(5, 1), Some(MouseAction::FocusInput));
    }

    #[test]
    fn shows_typed_text() {
        let mut app = seeded_app();
        app.mode = Mode::Edit;
        app.input = "Buy milk".into();
        app.input_cursor = app.input.len();
        let out = render_to_string(40, 3, |frame, area| {
            render_input_line(frame, &mut app, area)
        });
        assert!(out.contains("Buy milk"));
        assert!(!out.contains("Create a new todo"));
    }

    #[test]
    fn long_input_scrolls_to_caret() {
        let input = "abcdefghijklmnopqrstuvwxyz";
        assert_eq!(scroll_start(input, 5, 10), 0);
        assert_eq!(scroll_start(input, 26, 10), 17);
        assert_eq!(scroll_start(input, 26, 0), 0);
    }
}

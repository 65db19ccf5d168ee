pub mod header;
pub mod help_overlay;
pub mod input_line;
pub mod list_view;
pub mod status_row;
#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Widest the todo column gets on large terminals
const MAX_COLUMN_WIDTH: u16 = 72;

/// Main render function. Interactive areas are rebuilt on every frame, so
/// mouse hits always test against what is on screen.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.interactive_areas.clear();

    // Background fill
    let bg_style = Style::default().bg(app.theme().background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header | gap | input line | gap | list card | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(centered_column(area, MAX_COLUMN_WIDTH));

    header::render_header(frame, app, chunks[0]);
    input_line::render_input_line(frame, app, chunks[2]);
    list_view::render_list_view(frame, app, chunks[4]);
    status_row::render_status_row(frame, app, chunks[5]);

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
}

/// Horizontally center a column of at most `max_width` cells
fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::model::Filter;
use crate::ops::view::{Footer, TodoRow};
use crate::tui::app::{App, InteractiveArea, Mode, MouseAction};
use crate::tui::theme::Theme;
use crate::util::unicode::{display_width, truncate_to_width};

/// Marker, glyph and gap before the text
const LEFT_GUTTER: u16 = 3;
/// Gap, cross and padding after the text
const RIGHT_GUTTER: u16 = 3;
const CLEAR_LABEL: &str = "Clear Completed";

/// The list card: rows (or the empty-state message) with the footer on the
/// last line.
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = app.theme().clone();
    let surface = Style::default().bg(theme.surface);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(surface.fg(theme.border))
        .style(surface);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let view = app.view();
    if let Some(message) = view.empty_message {
        let line = Line::from(Span::styled(format!(" {}", message), surface.fg(theme.dim)));
        frame.render_widget(Paragraph::new(line), inner);
        return;
    }

    // Footer takes the last inner line when there is room for a row too
    let (rows_area, footer_area) = if inner.height >= 2 {
        let rows = Rect {
            height: inner.height - 1,
            ..inner
        };
        let footer = Rect {
            y: inner.y + inner.height - 1,
            height: 1,
            ..inner
        };
        (rows, Some(footer))
    } else {
        (inner, None)
    };

    let visible = rows_area.height as usize;
    adjust_scroll(app, visible, view.rows.len());

    let show_cursor = app.mode != Mode::Edit;
    for (i, row) in view
        .rows
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(visible)
    {
        let y = rows_area.y + (i - app.scroll_offset) as u16;
        let rect = Rect {
            y,
            height: 1,
            ..rows_area
        };
        let selected = show_cursor && i == app.cursor;
        render_row(frame, app, &theme, row, rect, selected);
    }

    if let (Some(footer_area), Some(footer)) = (footer_area, view.footer.as_ref()) {
        render_footer(frame, app, &theme, footer, view.filter, footer_area);
    }
}

/// Keep the cursor inside the visible window
fn adjust_scroll(app: &mut App, visible: usize, len: usize) {
    if visible == 0 {
        return;
    }
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + visible {
        app.scroll_offset = app.cursor + 1 - visible;
    }
    app.scroll_offset = app.scroll_offset.min(len.saturating_sub(visible));
}

fn render_row(
    frame: &mut Frame,
    app: &mut App,
    theme: &Theme,
    row: &TodoRow,
    rect: Rect,
    selected: bool,
) {
    let bg = if selected {
        theme.selection_bg
    } else {
        theme.surface
    };
    let base = Style::default().bg(bg);

    let marker = if app.drag.dragged() == Some(row.id) {
        "\u{2261}"
    } else if app.drag.target() == Some(row.id) {
        "\u{25B8}"
    } else {
        " "
    };
    let (glyph, glyph_style, text_style) = if row.completed {
        (
            "\u{2713}",
            base.fg(theme.check),
            base.fg(theme.completed)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    } else {
        ("\u{25CB}", base.fg(theme.dim), base.fg(theme.text))
    };

    let text_width = rect.width.saturating_sub(LEFT_GUTTER + RIGHT_GUTTER) as usize;
    let text = truncate_to_width(&row.text, text_width);
    let pad = text_width.saturating_sub(display_width(&text));

    let line = Line::from(vec![
        Span::styled(marker, base.fg(theme.accent)),
        Span::styled(glyph, glyph_style),
        Span::styled(" ", base),
        Span::styled(text, text_style),
        Span::styled(" ".repeat(pad + 1), base),
        Span::styled("\u{2715}", base.fg(theme.dim)),
        Span::styled(" ", base),
    ]);
    frame.render_widget(Paragraph::new(line).style(base), rect);

    // Narrow areas first: the first hit wins
    app.interactive_areas.push(InteractiveArea {
        rect: Rect {
            width: LEFT_GUTTER.min(rect.width),
            ..rect
        },
        action: MouseAction::Toggle(row.id),
    });
    if rect.width >= LEFT_GUTTER + RIGHT_GUTTER {
        app.interactive_areas.push(InteractiveArea {
            rect: Rect {
                x: rect.x + rect.width - RIGHT_GUTTER,
                width: RIGHT_GUTTER,
                ..rect
            },
            action: MouseAction::Delete(row.id),
        });
    }
    app.interactive_areas.push(InteractiveArea {
        rect,
        action: MouseAction::Row(row.id),
    });
}

/// Counter on the left, filter selector centered, clear control on the right
fn render_footer(
    frame: &mut Frame,
    app: &mut App,
    theme: &Theme,
    footer: &Footer,
    current: Filter,
    area: Rect,
) {
    let base = Style::default().bg(theme.surface);
    let dim = base.fg(theme.dim);

    let counter = format!(" {}", footer.label);
    place(frame, area, area.x, &counter, dim);

    let gap = 2;
    let filters_width: u16 = Filter::ALL
        .iter()
        .map(|f| display_width(f.label()) as u16)
        .sum::<u16>()
        + gap * (Filter::ALL.len() as u16 - 1);
    let mut x = area.x + area.width.saturating_sub(filters_width) / 2;
    for filter in Filter::ALL {
        let label = filter.label();
        let style = if filter == current {
            base.fg(theme.accent).add_modifier(Modifier::BOLD)
        } else {
            dim
        };
        if let Some(rect) = place(frame, area, x, label, style) {
            app.interactive_areas.push(InteractiveArea {
                rect,
                action: MouseAction::SetFilter(filter),
            });
        }
        x += display_width(label) as u16 + gap;
    }

    let clear_width = display_width(CLEAR_LABEL) as u16;
    let clear_x = (area.x + area.width).saturating_sub(clear_width + 1);
    let clear_style = if footer.has_completed { dim } else { base.fg(theme.completed) };
    if let Some(rect) = place(frame, area, clear_x, CLEAR_LABEL, clear_style) {
        app.interactive_areas.push(InteractiveArea {
            rect,
            action: MouseAction::ClearCompleted,
        });
    }
}

/// Draw `text` at column `x` of a one-line `area`, clipped to it. Returns the
/// drawn rect, or None when nothing fits.
fn place(frame: &mut Frame, area: Rect, x: u16, text: &str, style: Style) -> Option<Rect> {
    let rect = Rect::new(x, area.y, display_width(text) as u16, 1).intersection(area);
    if rect.is_empty() {
        return None;
    }
    frame.render_widget(Paragraph::new(Span::styled(text.to_string(), style)), rect);
    Some(rect)
}

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

const NAVIGATE_HINTS: &str = "a add  x toggle  d delete  m move  Tab filter  t theme  ? help";

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let bg = theme.background;
    let dim = Style::default().fg(theme.dim).bg(bg);

    // A pending message wins over the hints in every mode
    let line = if let Some(ref message) = app.status {
        Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(theme.danger).bg(bg),
        ))
    } else {
        match app.mode {
            Mode::Edit => Line::from(Span::styled("Enter add  Esc done", dim)),
            Mode::Move => Line::from(vec![
                Span::styled(
                    "MOVE",
                    Style::default()
                        .fg(theme.accent)
                        .bg(bg)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("  j/k target  Enter drop  Esc cancel", dim),
            ]),
            Mode::Navigate if app.ui.show_key_hints => {
                Line::from(Span::styled(NAVIGATE_HINTS, dim))
            }
            Mode::Navigate => Line::default(),
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, InteractiveArea, MouseAction};
use crate::util::unicode::display_width;

/// Title on the left, theme toggle on the right. The toggle names the theme
/// it switches to.
pub fn render_header(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = app.theme().clone();
    let bg = theme.background;

    let title = Span::styled(
        "T O D O",
        Style::default()
            .fg(theme.title)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(
        Paragraph::new(Line::from(title)).style(Style::default().bg(bg)),
        area,
    );

    let toggle = if app.session.is_dark_theme() {
        "\u{2600} light"
    } else {
        "\u{263E} dark"
    };
    let toggle_width = display_width(toggle) as u16;
    if area.width <= toggle_width + 8 {
        return;
    }
    let rect = Rect::new(
        area.x + area.width - toggle_width,
        area.y,
        toggle_width,
        1,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(toggle, Style::default().fg(theme.dim).bg(bg))),
        rect,
    );
    app.interactive_areas.push(InteractiveArea {
        rect,
        action: MouseAction::ToggleTheme,
    });
}

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::io::store::MemoryStore;
use crate::model::UiConfig;
use crate::session::Session;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();
    buffer_to_string(terminal.backend().buffer())
}

/// Render the whole app the way the event loop does.
pub fn render_app(app: &mut App, w: u16, h: u16) -> String {
    render_to_string(w, h, |frame, _| super::render(frame, app))
}

fn buffer_to_string(buf: &Buffer) -> String {
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

fn app_with(store: MemoryStore) -> App {
    App::new(Session::load(Box::new(store)), UiConfig::default())
}

/// Fresh store: the six seeded todos, light theme.
pub fn seeded_app() -> App {
    app_with(MemoryStore::new())
}

/// A stored empty list.
pub fn empty_app() -> App {
    app_with(MemoryStore::with("todos", "[]"))
}

/// Every save fails.
pub fn read_only_app() -> App {
    let mut store = MemoryStore::with("todos", "[]");
    store.read_only = true;
    app_with(store)
}

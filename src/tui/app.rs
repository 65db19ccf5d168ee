use std::io;
use std::time::Duration;

use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;

use crate::io::config_io::read_config;
use crate::io::data_dir::resolve_data_dir;
use crate::io::store::FileStore;
use crate::model::UiConfig;
use crate::model::todo::TodoId;
use crate::ops::view::TodoView;
use crate::session::Session;

use super::drag::DragState;
use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Cursor on the list
    Navigate,
    /// Typing into the input line
    Edit,
    /// Keyboard reorder: the cursor picks the drop target
    Move,
}

/// What a click on an interactive area does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    ToggleTheme,
    FocusInput,
    /// The check circle of a row
    Toggle(TodoId),
    /// The ✕ of a row
    Delete(TodoId),
    /// Anywhere else on a row: click toggles, press-and-drag reorders
    Row(TodoId),
    SetFilter(crate::model::Filter),
    ClearCompleted,
}

/// A clickable region recorded during render
#[derive(Debug, Clone, Copy)]
pub struct InteractiveArea {
    pub rect: Rect,
    pub action: MouseAction,
}

pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

/// Main application state
pub struct App {
    pub session: Session,
    pub ui: UiConfig,
    light: Theme,
    dark: Theme,
    pub mode: Mode,
    pub should_quit: bool,
    /// Index into the visible rows
    pub cursor: usize,
    /// First visible row
    pub scroll_offset: usize,
    /// Contents of the input line
    pub input: String,
    /// Byte offset of the input caret (always on a grapheme boundary)
    pub input_cursor: usize,
    pub drag: DragState,
    pub show_help: bool,
    /// One-shot message for the status row
    pub status: Option<String>,
    /// Clickable regions from the last render, in priority order
    pub interactive_areas: Vec<InteractiveArea>,
}

impl App {
    pub fn new(session: Session, ui: UiConfig) -> Self {
        let light = Theme::from_config(false, &ui);
        let dark = Theme::from_config(true, &ui);
        let mut app = App {
            session,
            ui,
            light,
            dark,
            mode: Mode::Navigate,
            should_quit: false,
            cursor: 0,
            scroll_offset: 0,
            input: String::new(),
            input_cursor: 0,
            drag: DragState::Idle,
            show_help: false,
            status: None,
            interactive_areas: Vec::new(),
        };
        app.after_change();
        app
    }

    /// Palette for the current theme flag
    pub fn theme(&self) -> &Theme {
        if self.session.is_dark_theme() {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn view(&self) -> TodoView {
        self.session.view()
    }

    /// Id of the row under the cursor
    pub fn cursor_id(&self) -> Option<TodoId> {
        self.view().rows.get(self.cursor).map(|r| r.id)
    }

    /// Move the cursor onto the row for `id`, if visible
    pub fn select_id(&mut self, id: TodoId) {
        if let Some(idx) = self.view().rows.iter().position(|r| r.id == id) {
            self.cursor = idx;
        }
    }

    pub fn clamp_cursor(&mut self) {
        let len = self.view().rows.len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Call after every session operation: keeps the cursor on a row and
    /// surfaces a failed save in the status row.
    pub fn after_change(&mut self) {
        self.clamp_cursor();
        if let Some(err) = self.session.save_error() {
            self.status = Some(format!("not saved: {}", err));
        }
    }

    /// Add the input line as a todo and clear it. Blank input is ignored.
    pub fn submit_input(&mut self) {
        if let Some(id) = self.session.add(&self.input) {
            self.input.clear();
            self.input_cursor = 0;
            self.select_id(id);
        }
        self.after_change();
    }

    /// Highest-priority interactive area at a screen position
    pub fn area_at(&self, column: u16, row: u16) -> Option<MouseAction> {
        self.interactive_areas
            .iter()
            .find(|a| rect_contains(a.rect, column, row))
            .map(|a| a.action)
    }

    /// The todo row at a screen position, whichever part of it was hit
    pub fn row_at(&self, column: u16, row: u16) -> Option<TodoId> {
        self.interactive_areas
            .iter()
            .filter(|a| rect_contains(a.rect, column, row))
            .find_map(|a| match a.action {
                MouseAction::Row(id) | MouseAction::Toggle(id) | MouseAction::Delete(id) => {
                    Some(id)
                }
                _ => None,
            })
    }
}

/// Run the TUI application
pub fn run(data_dir: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let dir = resolve_data_dir(data_dir)?;
    let config = read_config(&dir)?;
    let store = FileStore::open(&dir)?;
    let session = Session::load(Box::new(store));
    let mouse = config.ui.mouse;

    let mut app = App::new(session, config.ui);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            LeaveAlternateScreen
        );
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

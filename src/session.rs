//! The session controller: the only owner of the todo list, the filter and
//! the theme flag. Front ends (TUI, CLI) call its operations and read back a
//! [`TodoView`]; every operation that changes the list is persisted before it
//! returns.

use chrono::Utc;

use crate::io::recovery::{RecoveryCategory, RecoveryEntry, log_recovery};
use crate::io::store::{Store, StoreError};
use crate::io::todo_io;
use crate::model::filter::Filter;
use crate::model::todo::{Todo, TodoId, seed_todos};
use crate::ops::todo_ops;
use crate::ops::view::{TodoView, build_view};

pub struct Session {
    store: Box<dyn Store>,
    todos: Vec<Todo>,
    filter: Filter,
    dark_theme: bool,
    /// Set when the last persist failed; cleared by the next successful one
    save_error: Option<String>,
}

impl Session {
    /// Load state from `store`. An absent or unreadable todo list is
    /// replaced by the seed tasks, which are saved immediately.
    pub fn load(store: Box<dyn Store>) -> Self {
        let stored = todo_io::read_todos(store.as_ref());
        let dark_theme = todo_io::read_dark_theme(store.as_ref());

        let mut session = Session {
            store,
            todos: Vec::new(),
            filter: Filter::All,
            dark_theme,
            save_error: None,
        };

        match stored {
            Some(todos) => session.todos = todos,
            None => {
                session.todos = seed_todos(Utc::now());
                session.persist();
            }
        }
        session
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn is_dark_theme(&self) -> bool {
        self.dark_theme
    }

    pub fn items_left(&self) -> usize {
        todo_ops::active_count(&self.todos)
    }

    /// The view-model for the current list and filter
    pub fn view(&self) -> TodoView {
        build_view(&self.todos, self.filter)
    }

    pub fn save_error(&self) -> Option<&str> {
        self.save_error.as_deref()
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Add a todo. Blank text is ignored and returns `None`.
    pub fn add(&mut self, text: &str) -> Option<TodoId> {
        let id = todo_ops::add_todo(&mut self.todos, text, Utc::now())?;
        self.persist();
        Some(id)
    }

    pub fn toggle(&mut self, id: TodoId) -> bool {
        self.apply(|todos| todo_ops::toggle_todo(todos, id))
    }

    pub fn delete(&mut self, id: TodoId) -> bool {
        self.apply(|todos| todo_ops::delete_todo(todos, id))
    }

    pub fn clear_completed(&mut self) -> bool {
        self.apply(todo_ops::clear_completed)
    }

    /// Move `moved` to where `target` is. Equal or unknown ids are ignored.
    pub fn reorder(&mut self, moved: TodoId, target: TodoId) -> bool {
        self.apply(|todos| todo_ops::reorder_todo(todos, moved, target))
    }

    /// Filters are view state and are never persisted.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn toggle_theme(&mut self) -> bool {
        self.set_dark_theme(!self.dark_theme);
        self.dark_theme
    }

    pub fn set_dark_theme(&mut self, dark: bool) {
        self.dark_theme = dark;
        match todo_io::save_dark_theme(self.store.as_mut(), dark) {
            Ok(()) => self.save_error = None,
            Err(e) => self.record_failure(e, format!("{}={}", todo_io::THEME_KEY, dark)),
        }
    }

    fn apply(&mut self, op: impl FnOnce(&mut Vec<Todo>) -> bool) -> bool {
        let changed = op(&mut self.todos);
        if changed {
            self.persist();
        }
        changed
    }

    fn persist(&mut self) {
        match todo_io::save_todos(self.store.as_mut(), &self.todos) {
            Ok(()) => self.save_error = None,
            Err(e) => {
                let unsaved = serde_json::to_string_pretty(&self.todos).unwrap_or_default();
                self.record_failure(e, unsaved);
            }
        }
    }

    /// Remember a failed write and copy the unsaved data to the recovery log.
    fn record_failure(&mut self, error: StoreError, unsaved: String) {
        if let Some(dir) = self.store.log_dir() {
            log_recovery(
                dir,
                RecoveryEntry::now(
                    RecoveryCategory::Write,
                    "could not save",
                    vec![("Error".to_string(), error.to_string())],
                    unsaved,
                ),
            );
        }
        self.save_error = Some(error.to_string());
    }
}

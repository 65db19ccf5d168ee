use std::collections::HashSet;

use crate::io::recovery::{RecoveryCategory, RecoveryEntry, log_recovery};
use crate::io::store::{Store, StoreError};
use crate::model::todo::Todo;

/// Store key holding the serialized todo list
pub const TODOS_KEY: &str = "todos";
/// Store key holding the theme flag ("true" / "false")
pub const THEME_KEY: &str = "isDarkTheme";

/// Why a stored todo list was rejected
#[derive(Debug, thiserror::Error)]
pub enum InvalidTodos {
    #[error("not a todo list: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate id {0}")]
    DuplicateId(u64),
    #[error("todo {0} has empty text")]
    EmptyText(u64),
}

/// Parse and validate a serialized todo list.
pub fn parse_todos(raw: &str) -> Result<Vec<Todo>, InvalidTodos> {
    let todos: Vec<Todo> = serde_json::from_str(raw)?;
    let mut seen = HashSet::new();
    for todo in &todos {
        if !seen.insert(todo.id) {
            return Err(InvalidTodos::DuplicateId(todo.id));
        }
        if todo.text.trim().is_empty() {
            return Err(InvalidTodos::EmptyText(todo.id));
        }
    }
    Ok(todos)
}

/// Read the stored todo list. Returns `None` when the key is absent or the
/// value is invalid; invalid values are copied to the recovery log first.
pub fn read_todos(store: &dyn Store) -> Option<Vec<Todo>> {
    let raw = store.get(TODOS_KEY)?;
    match parse_todos(&raw) {
        Ok(todos) => Some(todos),
        Err(e) => {
            if let Some(dir) = store.log_dir() {
                log_recovery(
                    dir,
                    RecoveryEntry::now(
                        RecoveryCategory::Parser,
                        "unreadable todo list replaced by defaults",
                        vec![
                            ("Key".to_string(), TODOS_KEY.to_string()),
                            ("Error".to_string(), e.to_string()),
                        ],
                        raw,
                    ),
                );
            }
            None
        }
    }
}

/// Overwrite the stored todo list with `todos`.
pub fn save_todos(store: &mut dyn Store, todos: &[Todo]) -> Result<(), StoreError> {
    let raw = serde_json::to_string(todos)?;
    store.set(TODOS_KEY, raw)
}

/// Absent or anything but "true" means light.
pub fn read_dark_theme(store: &dyn Store) -> bool {
    store.get(THEME_KEY).as_deref() == Some("true")
}

pub fn save_dark_theme(store: &mut dyn Store, dark: bool) -> Result<(), StoreError> {
    store.set(THEME_KEY, dark.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::recovery::read_recovery_log;
    use crate::io::store::{FileStore, MemoryStore};
    use crate::model::todo::seed_todos;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn save_then_read_round_trip() {
        let mut store = MemoryStore::new();
        let mut todos = seed_todos(Utc::now());
        todos[2].completed = true;
        todos[4].created_at = None;
        save_todos(&mut store, &todos).unwrap();
        assert_eq!(read_todos(&store), Some(todos));
    }

    #[test]
    fn empty_list_is_valid() {
        let mut store = MemoryStore::new();
        save_todos(&mut store, &[]).unwrap();
        assert_eq!(store.get(TODOS_KEY).as_deref(), Some("[]"));
        assert_eq!(read_todos(&store), Some(vec![]));
    }

    #[test]
    fn absent_key_reads_none() {
        assert_eq!(read_todos(&MemoryStore::new()), None);
    }

    #[test]
    fn accepts_records_without_created_at() {
        let store = MemoryStore::with(
            TODOS_KEY,
            r#"[{"id":1,"text":"Jog","completed":false},{"id":1700000000000,"text":"Read","completed":true}]"#,
        );
        let todos = read_todos(&store).unwrap();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[1].id, 1_700_000_000_000);
        assert!(todos[1].completed);
    }

    #[test]
    fn rejects_malformed_and_invalid_lists() {
        assert!(matches!(parse_todos("{{"), Err(InvalidTodos::Json(_))));
        assert!(matches!(parse_todos("null"), Err(InvalidTodos::Json(_))));
        assert!(matches!(
            parse_todos(r#"[{"id":1,"text":"a","completed":false},{"id":1,"text":"b","completed":false}]"#),
            Err(InvalidTodos::DuplicateId(1))
        ));
        assert!(matches!(
            parse_todos(r#"[{"id":3,"text":"  ","completed":false}]"#),
            Err(InvalidTodos::EmptyText(3))
        ));
    }

    #[test]
    fn invalid_value_goes_to_recovery_log() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        store.set(TODOS_KEY, "[{\"id\":".into()).unwrap();

        assert_eq!(read_todos(&store), None);
        let log = read_recovery_log(dir.path()).unwrap();
        assert!(log.contains("unreadable todo list replaced by defaults"));
        assert!(log.contains("[{\"id\":"));
    }

    #[test]
    fn theme_flag_encoding() {
        let mut store = MemoryStore::new();
        assert!(!read_dark_theme(&store));

        save_dark_theme(&mut store, true).unwrap();
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("true"));
        assert!(read_dark_theme(&store));

        save_dark_theme(&mut store, false).unwrap();
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("false"));
        assert!(!read_dark_theme(&store));

        let odd = MemoryStore::with(THEME_KEY, "yes");
        assert!(!read_dark_theme(&odd));
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a todo. New ids are derived from the creation time in
/// milliseconds and are always greater than every id already in the list.
pub type TodoId = u64;

/// A single todo record, as stored under the `todos` key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    /// Trimmed, never empty
    pub text: String,
    pub completed: bool,
    /// Absent on records written by older versions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Todo {
    /// Create an active todo stamped with `created_at`
    pub fn new(id: TodoId, text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Todo {
            id,
            text: text.into(),
            completed: false,
            created_at: Some(created_at),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.completed
    }
}

/// The tasks a fresh (or unreadable) store starts with.
pub fn seed_todos(created_at: DateTime<Utc>) -> Vec<Todo> {
    const SEED: [(&str, bool); 6] = [
        ("Complete online JavaScript course", true),
        ("Jog around the park 3x", false),
        ("10 minutes meditation", false),
        ("Read for 1 hour", false),
        ("Pick up groceries", false),
        ("Complete Todo App on Frontend Mentor", false),
    ];

    SEED.iter()
        .enumerate()
        .map(|(i, (text, completed))| Todo {
            id: i as TodoId + 1,
            text: (*text).to_string(),
            completed: *completed,
            created_at: Some(created_at),
        })
        .collect()
}

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::model::todo::{Todo, TodoId};

// All operations here are total: unknown ids and blank text are no-ops.
// Each returns whether the list changed so the caller knows to persist.

/// Pick an id for a todo created at `now`: the timestamp in milliseconds,
/// bumped past the largest id already in use. When the largest id is
/// `TodoId::MAX` the smallest free id is used instead.
pub fn next_id(todos: &[Todo], now: DateTime<Utc>) -> TodoId {
    let stamp = now.timestamp_millis().max(0) as TodoId;
    match todos.iter().map(|t| t.id).max() {
        Some(max) if max >= stamp => max
            .checked_add(1)
            .unwrap_or_else(|| smallest_free_id(todos)),
        _ => stamp,
    }
}

fn smallest_free_id(todos: &[Todo]) -> TodoId {
    let used: HashSet<TodoId> = todos.iter().map(|t| t.id).collect();
    // A list can never hold every id, so a free one always exists
    (0..=TodoId::MAX).find(|id| !used.contains(id)).unwrap_or(0)
}

/// Append a new active todo. Returns its id, or `None` for blank text.
pub fn add_todo(todos: &mut Vec<Todo>, text: &str, now: DateTime<Utc>) -> Option<TodoId> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let id = next_id(todos, now);
    todos.push(Todo::new(id, text, now));
    Some(id)
}

pub fn toggle_todo(todos: &mut [Todo], id: TodoId) -> bool {
    match todos.iter_mut().find(|t| t.id == id) {
        Some(todo) => {
            todo.completed = !todo.completed;
            true
        }
        None => false,
    }
}

pub fn delete_todo(todos: &mut Vec<Todo>, id: TodoId) -> bool {
    match todos.iter().position(|t| t.id == id) {
        Some(idx) => {
            todos.remove(idx);
            true
        }
        None => false,
    }
}

/// Remove every completed todo
pub fn clear_completed(todos: &mut Vec<Todo>) -> bool {
    let before = todos.len();
    todos.retain(|t| !t.completed);
    todos.len() != before
}

/// Move `moved` to the index `target` occupies. Moving up lands the todo
/// directly before the target, moving down directly after it.
pub fn reorder_todo(todos: &mut Vec<Todo>, moved: TodoId, target: TodoId) -> bool {
    if moved == target {
        return false;
    }
    let from = match todos.iter().position(|t| t.id == moved) {
        Some(i) => i,
        None => return false,
    };
    let to = match todos.iter().position(|t| t.id == target) {
        Some(i) => i,
        None => return false,
    };

    let todo = todos.remove(from);
    todos.insert(to, todo);
    true
}

/// Number of todos not yet completed
pub fn active_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|t| t.is_active()).count()
}

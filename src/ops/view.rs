use serde::Serialize;

use crate::model::filter::Filter;
use crate::model::todo::{Todo, TodoId};
use crate::ops::todo_ops::active_count;

/// Everything a front end needs to draw the list. Built fresh from state on
/// every render; front ends never read the todo list directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoView {
    pub filter: Filter,
    /// Visible rows in list order (empty when `empty_message` is set)
    pub rows: Vec<TodoRow>,
    /// Set when no todo passes the filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
    /// Absent when the filtered list is empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoRow {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    /// Active todos across the whole list, regardless of filter
    pub items_left: usize,
    /// "1 item left" / "N items left"
    pub label: String,
    /// Whether "Clear Completed" would remove anything
    pub has_completed: bool,
}

/// Build the view-model for `todos` under `filter`.
pub fn build_view(todos: &[Todo], filter: Filter) -> TodoView {
    let rows: Vec<TodoRow> = todos
        .iter()
        .filter(|t| filter.matches(t))
        .map(|t| TodoRow {
            id: t.id,
            text: t.text.clone(),
            completed: t.completed,
        })
        .collect();

    if rows.is_empty() {
        return TodoView {
            filter,
            rows,
            empty_message: Some(filter.empty_message()),
            footer: None,
        };
    }

    let left = active_count(todos);
    TodoView {
        filter,
        rows,
        empty_message: None,
        footer: Some(Footer {
            items_left: left,
            label: items_left_label(left),
            has_completed: todos.iter().any(|t| t.completed),
        }),
    }
}

/// Counter wording with singular/plural agreement
pub fn items_left_label(count: usize) -> String {
    format!("{} item{} left", count, if count == 1 { "" } else { "s" })
}

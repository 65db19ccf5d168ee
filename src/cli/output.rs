use serde::Serialize;

use crate::ops::view::TodoView;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct AddedJson {
    pub id: u64,
}

#[derive(Serialize)]
pub struct ThemeJson {
    pub theme: &'static str,
}

#[derive(Serialize)]
pub struct RecoveryJson {
    pub path: String,
    pub entries: usize,
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// One line per row (`  2 [ ] text`), then the counter. An empty filtered
/// list prints just its message.
pub fn format_view_text(view: &TodoView) -> String {
    if let Some(message) = view.empty_message {
        return message.to_string();
    }
    let id_width = view
        .rows
        .iter()
        .map(|r| r.id.to_string().len())
        .max()
        .unwrap_or(1);

    let mut lines: Vec<String> = view
        .rows
        .iter()
        .map(|row| {
            let mark = if row.completed { 'x' } else { ' ' };
            format!("{:>width$} [{}] {}", row.id, mark, row.text, width = id_width)
        })
        .collect();
    if let Some(footer) = &view.footer {
        lines.push(footer.label.clone());
    }
    lines.join("\n")
}

pub fn theme_name(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Filter;
    use crate::model::todo::seed_todos;
    use crate::ops::view::build_view;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    #[test]
    fn seeded_list_text() {
        let view = build_view(&seed_todos(Utc::now()), Filter::All);
        assert_eq!(
            format_view_text(&view),
            "1 [x] Complete online JavaScript course\n\
             2 [ ] Jog around the park 3x\n\
             3 [ ] 10 minutes meditation\n\
             4 [ ] Read for 1 hour\n\
             5 [ ] Pick up groceries\n\
             6 [ ] Complete Todo App on Frontend Mentor\n\
             5 items left"
        );
    }

    #[test]
    fn ids_are_right_aligned() {
        let mut todos = seed_todos(Utc::now());
        todos[5].id = 1_700_000_000_000;
        let view = build_view(&todos, Filter::All);
        let text = format_view_text(&view);
        assert!(text.starts_with("            1 [x] Complete online"));
    }

    #[test]
    fn empty_filter_prints_message() {
        let view = build_view(&[], Filter::Active);
        assert_eq!(format_view_text(&view), "No active todos");
    }

    #[test]
    fn view_json_shape() {
        let view = build_view(&seed_todos(Utc::now()), Filter::Completed);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["filter"], "completed");
        assert_eq!(json["rows"][0]["id"], 1);
        assert_eq!(json["footer"]["itemsLeft"], 5);
        assert_eq!(json["footer"]["label"], "5 items left");
        assert!(json.get("emptyMessage").is_none());
        assert!(json.get("empty_message").is_none());
    }
}

use crate::model::todo::TodoId;

/// Reorder gesture state, shared by mouse dragging and keyboard move mode.
///
/// `Idle → Dragging (start) → Idle (end)`. A drop only produces a reorder
/// when it lands on a row other than the dragged one; [`DragState::end`]
/// always returns to idle so the dragging indicator never outlives the
/// gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        id: TodoId,
        /// Row currently under the pointer (or keyboard cursor)
        over: Option<TodoId>,
        /// Whether the pointer moved since `start`; a press and release
        /// without movement is a click, not a drag
        moved: bool,
    },
}

impl DragState {
    pub fn start(&mut self, id: TodoId) {
        *self = DragState::Dragging {
            id,
            over: Some(id),
            moved: false,
        };
    }

    /// Track the row under the pointer. Ignored while idle.
    pub fn hover(&mut self, row: Option<TodoId>) {
        if let DragState::Dragging { over, moved, .. } = self {
            *over = row;
            *moved = true;
        }
    }

    /// The reorder a drop on `row` would perform: `(moved, target)`.
    pub fn drop_on(&self, row: Option<TodoId>) -> Option<(TodoId, TodoId)> {
        match (*self, row) {
            (DragState::Dragging { id, .. }, Some(target)) if target != id => Some((id, target)),
            _ => None,
        }
    }

    /// True for a press and release on the same row with no movement.
    pub fn is_click_on(&self, row: Option<TodoId>) -> bool {
        matches!(*self, DragState::Dragging { id, moved: false, .. } if row == Some(id))
    }

    pub fn end(&mut self) {
        *self = DragState::Idle;
    }

    pub fn dragged(&self) -> Option<TodoId> {
        match self {
            DragState::Dragging { id, .. } => Some(*id),
            DragState::Idle => None,
        }
    }

    /// The hovered drop target, if it is not the dragged row itself
    pub fn target(&self) -> Option<TodoId> {
        match *self {
            DragState::Dragging { id, over, .. } => over.filter(|&o| o != id),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}

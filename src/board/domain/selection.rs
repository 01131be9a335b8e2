//! Transient focus and drag state owned by the interaction surface.

use super::{BoardId, Task, TaskId};
use serde::{Deserialize, Serialize};

/// Value copy of the task fields needed to drive keyboard moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusedTask {
    /// Focused task identifier.
    pub id: TaskId,
    /// Board the task was on when focused; re-resolved before each move.
    #[serde(rename = "boardID")]
    pub board_id: BoardId,
    /// Display label.
    pub label: String,
}

impl From<&Task> for FocusedTask {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            board_id: task.board_id(),
            label: task.label().to_owned(),
        }
    }
}

/// Keyboard focus: none, or one task.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveTask {
    /// No task has been focused.
    #[default]
    None,
    /// The focused task.
    Active(FocusedTask),
}

impl ActiveTask {
    /// Returns the focused task, if any.
    #[must_use]
    pub const fn focused(&self) -> Option<&FocusedTask> {
        match self {
            Self::None => None,
            Self::Active(task) => Some(task),
        }
    }

    /// Returns the focused task identifier, if any.
    #[must_use]
    pub const fn id(&self) -> Option<TaskId> {
        match self {
            Self::None => None,
            Self::Active(task) => Some(task.id),
        }
    }
}

/// Payload captured when a drag starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    /// Dragged task identifier.
    pub id: TaskId,
    /// Display label.
    pub label: String,
    /// Position the drag started from, as reported by the presentation layer.
    pub position: usize,
}

/// Drag state: idle, or one drag in flight.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DraggingTask {
    /// No drag in flight.
    #[default]
    None,
    /// A drag is in flight.
    Dragging(DragPayload),
}

impl DraggingTask {
    /// Returns the drag payload, if a drag is in flight.
    #[must_use]
    pub const fn payload(&self) -> Option<&DragPayload> {
        match self {
            Self::None => None,
            Self::Dragging(payload) => Some(payload),
        }
    }

    /// Returns `true` while a drag is in flight.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }
}

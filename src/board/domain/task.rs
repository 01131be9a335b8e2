//! Task record held in the flat board sequence.

use super::{BoardId, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A task on the board.
///
/// The board a task belongs to is a reference, not ownership: the task's
/// position inside its board is never stored and is derived from the flat
/// sequence instead. Caller-supplied fields beyond `id`, `boardID` and
/// `label` are carried verbatim in [`Task::fields`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    #[serde(rename = "boardID")]
    board_id: BoardId,
    label: String,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl Task {
    /// Creates a task with no extra fields.
    #[must_use]
    pub fn new(
        id: impl Into<TaskId>,
        board_id: impl Into<BoardId>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            board_id: board_id.into(),
            label: label.into(),
            fields: Map::new(),
        }
    }

    /// Attaches an opaque caller field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the board the task is assigned to.
    #[must_use]
    pub const fn board_id(&self) -> BoardId {
        self.board_id
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns all caller-supplied fields.
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Returns a single caller-supplied field, if present.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub(crate) const fn assign_board(&mut self, board_id: BoardId) {
        self.board_id = board_id;
    }
}

//! Move intents produced by the movement engine.

use super::{BoardId, TaskId};
use serde::{Deserialize, Serialize};

/// Reorder request over the global flat sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowMove {
    /// Global index the task is taken from.
    pub from: usize,
    /// Global index the task is reinserted at.
    pub to: usize,
}

impl RowMove {
    /// Creates a row move request.
    #[must_use]
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

/// Request to point a task at another board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardReassignment {
    /// The task to reassign.
    #[serde(rename = "id")]
    pub task_id: TaskId,
    /// The destination board.
    #[serde(rename = "board")]
    pub board_id: BoardId,
}

impl BoardReassignment {
    /// Creates a board reassignment request.
    #[must_use]
    pub const fn new(task_id: TaskId, board_id: BoardId) -> Self {
        Self { task_id, board_id }
    }
}

/// A concrete transformation the state container can commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MoveIntent {
    /// Reorder by global index pair.
    RowMove(RowMove),
    /// Reassign a task to another board.
    BoardReassignment(BoardReassignment),
}

impl From<RowMove> for MoveIntent {
    fn from(value: RowMove) -> Self {
        Self::RowMove(value)
    }
}

impl From<BoardReassignment> for MoveIntent {
    fn from(value: BoardReassignment) -> Self {
        Self::BoardReassignment(value)
    }
}

/// Outcome of asking the engine for a move.
///
/// `NoMove` is a normal negative answer (for example a keyboard step at a
/// board edge). It is never an error and never a move to the same index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDecision {
    /// Nothing to do; state must not change.
    NoMove,
    /// A transformation to apply.
    Move(MoveIntent),
}

impl MoveDecision {
    /// Returns `true` when the decision carries a transformation.
    #[must_use]
    pub const fn is_move(&self) -> bool {
        matches!(self, Self::Move(_))
    }

    /// Returns the carried intent, if any.
    #[must_use]
    pub const fn intent(&self) -> Option<MoveIntent> {
        match self {
            Self::NoMove => None,
            Self::Move(intent) => Some(*intent),
        }
    }
}

impl From<MoveIntent> for MoveDecision {
    fn from(value: MoveIntent) -> Self {
        Self::Move(value)
    }
}

impl From<RowMove> for MoveDecision {
    fn from(value: RowMove) -> Self {
        Self::Move(MoveIntent::RowMove(value))
    }
}

impl From<BoardReassignment> for MoveDecision {
    fn from(value: BoardReassignment) -> Self {
        Self::Move(MoveIntent::BoardReassignment(value))
    }
}

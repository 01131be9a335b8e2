//! Pure decision and transformation rules for moving tasks.
//!
//! Nothing here mutates state. Each rule reads the current collection and
//! registry and answers with either a concrete [`MoveIntent`], a
//! [`MoveDecision::NoMove`], or a [`BoardDomainError`] when the request
//! references something that does not exist.

use super::{
    BoardDomainError, BoardDomainResult, BoardId, BoardReassignment, BoardRegistry,
    ColumnDirection, MoveDecision, MoveIntent, OrderedCollection, RowDirection, RowMove, TaskId,
};
use tracing::trace;

/// Stateless movement rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementEngine;

impl MovementEngine {
    /// Validates an explicit global index pair.
    ///
    /// Same-board constraints are not checked here; callers choose index
    /// pairs that keep the move meaningful.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::IndexOutOfRange`] when either index is not
    /// below `len`.
    pub const fn row_move(from: usize, to: usize, len: usize) -> BoardDomainResult<RowMove> {
        if from >= len {
            return Err(BoardDomainError::IndexOutOfRange { index: from, len });
        }
        if to >= len {
            return Err(BoardDomainError::IndexOutOfRange { index: to, len });
        }
        Ok(RowMove::new(from, to))
    }

    /// Returns whether a keyboard step from `current` stays inside a board of
    /// `total` rows.
    #[must_use]
    pub const fn can_move_to_row(current: usize, total: usize, direction: RowDirection) -> bool {
        match direction {
            RowDirection::Down => current.saturating_add(1) < total,
            RowDirection::Up => current > 0,
        }
    }

    /// Returns the per-board target index of a keyboard step, or `None` at
    /// the board edge.
    #[must_use]
    pub const fn row_step(current: usize, total: usize, direction: RowDirection) -> Option<usize> {
        if !Self::can_move_to_row(current, total, direction) {
            return None;
        }
        match direction {
            RowDirection::Down => current.checked_add(1),
            RowDirection::Up => current.checked_sub(1),
        }
    }

    /// Moves a task one row up or down within its own board.
    ///
    /// The step is computed on the board's sublist and converted into a
    /// global row move onto the neighbouring task's flat index, so tasks of
    /// other boards keep their relative order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] when the task is not in the
    /// collection.
    pub fn keyboard_row_move(
        collection: &OrderedCollection,
        task_id: TaskId,
        direction: RowDirection,
    ) -> BoardDomainResult<MoveDecision> {
        let task = collection
            .get(task_id)
            .ok_or(BoardDomainError::TaskNotFound(task_id))?;
        let board_tasks = collection.tasks_of_board(task.board_id());
        let current = board_tasks
            .iter()
            .position(|candidate| candidate.id() == task_id)
            .ok_or(BoardDomainError::TaskNotFound(task_id))?;

        let Some(target) = Self::row_step(current, board_tasks.len(), direction) else {
            trace!(task = %task_id, ?direction, "row step blocked at board edge");
            return Ok(MoveDecision::NoMove);
        };
        let neighbour = board_tasks
            .get(target)
            .map(|candidate| candidate.id())
            .ok_or(BoardDomainError::IndexOutOfRange {
                index: target,
                len: board_tasks.len(),
            })?;

        let from = collection
            .position_of(task_id)
            .ok_or(BoardDomainError::TaskNotFound(task_id))?;
        let to = collection
            .position_of(neighbour)
            .ok_or(BoardDomainError::TaskNotFound(neighbour))?;
        Ok(RowMove::new(from, to).into())
    }

    /// Moves a task to the neighbouring board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] for an unknown task and
    /// [`BoardDomainError::BoardNotFound`] when the task's current board is
    /// not registered.
    pub fn keyboard_column_move(
        collection: &OrderedCollection,
        registry: &BoardRegistry,
        task_id: TaskId,
        direction: ColumnDirection,
    ) -> BoardDomainResult<MoveDecision> {
        let task = collection
            .get(task_id)
            .ok_or(BoardDomainError::TaskNotFound(task_id))?;
        let decision = registry
            .adjacent(task.board_id(), direction)?
            .map_or(MoveDecision::NoMove, |board_id| {
                BoardReassignment::new(task_id, board_id).into()
            });
        if decision == MoveDecision::NoMove {
            trace!(task = %task_id, ?direction, "column step blocked at outer board");
        }
        Ok(decision)
    }

    /// Dropping a dragged task onto a board reassigns it there.
    #[must_use]
    pub const fn drop_on_board(task_id: TaskId, board_id: BoardId) -> BoardReassignment {
        BoardReassignment::new(task_id, board_id)
    }

    /// Dropping a dragged task onto a row moves it to that global index.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] when the dragged task is no
    /// longer present and [`BoardDomainError::IndexOutOfRange`] for a target
    /// beyond the sequence.
    pub fn drop_on_row(
        collection: &OrderedCollection,
        task_id: TaskId,
        target: usize,
    ) -> BoardDomainResult<RowMove> {
        let from = collection
            .position_of(task_id)
            .ok_or(BoardDomainError::TaskNotFound(task_id))?;
        Self::row_move(from, target, collection.len())
    }

    /// Checks an intent against the current state without applying it.
    ///
    /// # Errors
    ///
    /// Returns the error the state container would raise for the intent.
    pub fn validate(
        collection: &OrderedCollection,
        registry: &BoardRegistry,
        intent: MoveIntent,
    ) -> BoardDomainResult<()> {
        match intent {
            MoveIntent::RowMove(row_move) => {
                Self::row_move(row_move.from, row_move.to, collection.len()).map(|_| ())
            }
            MoveIntent::BoardReassignment(reassignment) => {
                if collection.get(reassignment.task_id).is_none() {
                    return Err(BoardDomainError::TaskNotFound(reassignment.task_id));
                }
                if !registry.contains(reassignment.board_id) {
                    return Err(BoardDomainError::BoardNotFound(reassignment.board_id));
                }
                Ok(())
            }
        }
    }
}

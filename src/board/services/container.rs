//! Canonical board state and its single writer.

use crate::board::{
    domain::{
        BoardConfig, BoardDomainError, BoardDomainResult, BoardId, BoardReassignment,
        BoardRegistry, MoveIntent, MovementEngine, OrderedCollection, PlacementPolicy, RowMove,
        Task, TaskId,
    },
    ports::{BoardView, MoveSink, MoveSinkResult},
};
use tracing::{debug, warn};

/// Owner of the flat task sequence and the board order.
///
/// All board membership and ordering changes go through this type. Every
/// request is validated in full before anything is written, so a rejected
/// request leaves the state untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardStateContainer {
    collection: OrderedCollection,
    registry: BoardRegistry,
    config: BoardConfig,
}

impl BoardStateContainer {
    /// Creates a container from tasks and boards in display order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateTask`] or
    /// [`BoardDomainError::DuplicateBoard`] when identifiers repeat.
    pub fn new(
        tasks: impl IntoIterator<Item = Task>,
        boards: impl IntoIterator<Item = BoardId>,
        config: BoardConfig,
    ) -> BoardDomainResult<Self> {
        Ok(Self {
            collection: OrderedCollection::new(tasks)?,
            registry: BoardRegistry::new(boards)?,
            config,
        })
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns every task in flat order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.collection.tasks()
    }

    /// Points a task at another board, placing it per the configured policy.
    ///
    /// A reassignment onto the task's current board changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] for an unknown task and
    /// [`BoardDomainError::BoardNotFound`] for an unregistered board.
    pub fn apply_board_reassignment(
        &mut self,
        task_id: TaskId,
        board_id: BoardId,
    ) -> BoardDomainResult<()> {
        let request = BoardReassignment::new(task_id, board_id);
        MovementEngine::validate(&self.collection, &self.registry, request.into())
            .inspect_err(|err| {
                warn!(task = %task_id, board = %board_id, %err, "board reassignment rejected");
            })?;

        let from = self
            .collection
            .position_of(task_id)
            .ok_or(BoardDomainError::TaskNotFound(task_id))?;
        if self.collection.get(task_id).map(Task::board_id) == Some(board_id) {
            return Ok(());
        }

        let target = self.placement_index(task_id, board_id, from);
        self.collection.reassign_board(task_id, board_id)?;
        if let Some(to) = target {
            self.collection.move_by_index(from, to)?;
        }
        debug!(task = %task_id, board = %board_id, from, to = ?target, "task reassigned");
        Ok(())
    }

    /// Moves the task at `from` to `to` in the flat sequence.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::IndexOutOfRange`] when either index is
    /// outside the sequence.
    pub fn apply_row_move(&mut self, from: usize, to: usize) -> BoardDomainResult<()> {
        self.collection
            .move_by_index(from, to)
            .inspect_err(|err| warn!(from, to, %err, "row move rejected"))?;
        debug!(from, to, "row moved");
        Ok(())
    }

    /// Commits either kind of intent.
    ///
    /// # Errors
    ///
    /// Returns the same errors as the matching `apply_*` method.
    pub fn apply(&mut self, intent: MoveIntent) -> BoardDomainResult<()> {
        match intent {
            MoveIntent::RowMove(request) => self.apply_row_move(request.from, request.to),
            MoveIntent::BoardReassignment(request) => {
                self.apply_board_reassignment(request.task_id, request.board_id)
            }
        }
    }

    /// Flat index the reassigned task should move to, or `None` to stay put.
    fn placement_index(&self, task_id: TaskId, board_id: BoardId, from: usize) -> Option<usize> {
        let mut peers = self
            .collection
            .tasks()
            .iter()
            .enumerate()
            .filter(|(_, task)| task.board_id() == board_id && task.id() != task_id)
            .map(|(index, _)| index);

        match self.config.placement {
            PlacementPolicy::Preserve => None,
            PlacementPolicy::Append => peers.last().map(|last| {
                if last > from {
                    last
                } else {
                    last.saturating_add(1)
                }
            }),
            PlacementPolicy::Prepend => peers.next().map(|first| {
                if first > from {
                    first.saturating_sub(1)
                } else {
                    first
                }
            }),
        }
    }
}

impl BoardView for BoardStateContainer {
    fn collection(&self) -> &OrderedCollection {
        &self.collection
    }

    fn registry(&self) -> &BoardRegistry {
        &self.registry
    }
}

impl MoveSink for BoardStateContainer {
    fn board_reassignment_requested(&mut self, request: BoardReassignment) -> MoveSinkResult<()> {
        Ok(self.apply_board_reassignment(request.task_id, request.board_id)?)
    }

    fn row_move_requested(&mut self, request: RowMove) -> MoveSinkResult<()> {
        Ok(self.apply_row_move(request.from, request.to)?)
    }
}

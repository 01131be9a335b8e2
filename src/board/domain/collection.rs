//! The flat, order-significant sequence of every task on the board.

use super::{BoardDomainError, BoardDomainResult, BoardId, Task, TaskId};
use std::collections::HashSet;

/// Single ordered list of all tasks across all boards.
///
/// Both the global order and each board's order are read from this one
/// sequence: a board's tasks are the tasks carrying its identifier, in the
/// order they appear here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderedCollection {
    tasks: Vec<Task>,
}

impl OrderedCollection {
    /// Creates a collection from tasks in display order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateTask`] when two tasks share an
    /// identifier.
    pub fn new(tasks: impl IntoIterator<Item = Task>) -> BoardDomainResult<Self> {
        let collected: Vec<Task> = tasks.into_iter().collect();
        let mut seen = HashSet::with_capacity(collected.len());
        for task in &collected {
            if !seen.insert(task.id()) {
                return Err(BoardDomainError::DuplicateTask(task.id()));
            }
        }
        Ok(Self { tasks: collected })
    }

    /// Returns every task in flat order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the collection holds no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the tasks assigned to `board_id`, in their flat relative order.
    #[must_use]
    pub fn tasks_of_board(&self, board_id: BoardId) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.board_id() == board_id)
            .collect()
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn get(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == task_id)
    }

    /// Returns the global flat index of a task.
    #[must_use]
    pub fn position_of(&self, task_id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == task_id)
    }

    /// Returns the index of a task inside its own board's sublist.
    #[must_use]
    pub fn position_in_board(&self, task_id: TaskId) -> Option<usize> {
        let board_id = self.get(task_id)?.board_id();
        self.tasks
            .iter()
            .filter(|task| task.board_id() == board_id)
            .position(|task| task.id() == task_id)
    }

    /// Removes the task at `from` and reinserts it at `to`.
    ///
    /// Indices are global over the whole flat sequence. `from == to` leaves
    /// the order untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::IndexOutOfRange`] when either index is not
    /// below the collection length; the order is unchanged in that case.
    pub fn move_by_index(&mut self, from: usize, to: usize) -> BoardDomainResult<()> {
        let len = self.tasks.len();
        for index in [from, to] {
            if index >= len {
                return Err(BoardDomainError::IndexOutOfRange { index, len });
            }
        }
        if from != to {
            let task = self.tasks.remove(from);
            self.tasks.insert(to, task);
        }
        Ok(())
    }

    /// Points a task at another board without moving it in the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] when no task has the
    /// identifier.
    pub fn reassign_board(&mut self, task_id: TaskId, board_id: BoardId) -> BoardDomainResult<()> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id() == task_id)
            .ok_or(BoardDomainError::TaskNotFound(task_id))?;
        task.assign_board(board_id);
        Ok(())
    }
}

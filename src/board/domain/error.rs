//! Error types for board state validation and key parsing.

use super::{BoardId, TaskId};
use thiserror::Error;

/// Result type for board domain operations.
pub type BoardDomainResult<T> = Result<T, BoardDomainError>;

/// Errors returned when a requested mutation cannot be applied.
///
/// Every variant is a rejection of a single request; the board state is left
/// exactly as it was before the request.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// A row index falls outside the flat task sequence.
    #[error("row index {index} out of range for {len} tasks")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the flat sequence at the time of the request.
        len: usize,
    },

    /// No task with the identifier exists.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// No board with the identifier is registered.
    #[error("board not found: {0}")]
    BoardNotFound(BoardId),

    /// The task identifier appears more than once in the supplied tasks.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The board identifier appears more than once in the supplied boards.
    #[error("duplicate board identifier: {0}")]
    DuplicateBoard(BoardId),
}

/// Error returned while parsing a key name into a direction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown arrow key: {0}")]
pub struct ParseKeyError(pub String);

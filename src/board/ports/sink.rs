//! Outbound port receiving move notifications.

use crate::board::domain::{BoardDomainError, BoardReassignment, MoveIntent, RowMove};
use std::sync::Arc;
use thiserror::Error;

/// Result type for move sink deliveries.
pub type MoveSinkResult<T> = Result<T, MoveSinkError>;

/// Receiver of move intents.
///
/// Delivery is synchronous: a notification is fully handled before the next
/// input event is processed. The state container commits what it receives;
/// presentational components forward notifications upward unchanged.
pub trait MoveSink {
    /// A task should be pointed at another board.
    ///
    /// # Errors
    ///
    /// Returns [`MoveSinkError::Rejected`] when the receiver refuses the
    /// request.
    fn board_reassignment_requested(&mut self, request: BoardReassignment) -> MoveSinkResult<()>;

    /// A task should be moved between two global indices.
    ///
    /// # Errors
    ///
    /// Returns [`MoveSinkError::Rejected`] when the receiver refuses the
    /// request.
    fn row_move_requested(&mut self, request: RowMove) -> MoveSinkResult<()>;
}

/// Routes an intent to the matching sink notification.
///
/// # Errors
///
/// Propagates the sink's error unchanged.
pub fn deliver<S>(sink: &mut S, intent: MoveIntent) -> MoveSinkResult<()>
where
    S: MoveSink + ?Sized,
{
    match intent {
        MoveIntent::RowMove(request) => sink.row_move_requested(request),
        MoveIntent::BoardReassignment(request) => sink.board_reassignment_requested(request),
    }
}

/// Errors returned by move sinks.
#[derive(Debug, Clone, Error)]
pub enum MoveSinkError {
    /// The request was rejected against the current board state.
    #[error("move rejected: {0}")]
    Rejected(#[from] BoardDomainError),

    /// The notification could not be passed on to the enclosing owner.
    #[error("forwarding failed: {0}")]
    Forwarding(Arc<dyn std::error::Error + Send + Sync>),
}

impl MoveSinkError {
    /// Wraps a forwarding failure.
    pub fn forwarding(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Forwarding(Arc::new(err))
    }
}

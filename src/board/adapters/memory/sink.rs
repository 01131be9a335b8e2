//! In-memory move sinks for headless embedding.

use crate::board::{
    domain::{BoardReassignment, MoveIntent, RowMove},
    ports::{MoveSink, MoveSinkResult},
};
use tracing::debug;

/// Sink that records every notification in arrival order.
///
/// Stands in for an enclosing owner when the surface is driven without a
/// state container, e.g. a presentational component under test.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingMoveSink {
    emitted: Vec<MoveIntent>,
}

impl RecordingMoveSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every intent received so far.
    #[must_use]
    pub fn emitted(&self) -> &[MoveIntent] {
        &self.emitted
    }

    /// Returns the row moves received so far.
    #[must_use]
    pub fn row_moves(&self) -> Vec<RowMove> {
        self.emitted
            .iter()
            .filter_map(|intent| match intent {
                MoveIntent::RowMove(request) => Some(*request),
                MoveIntent::BoardReassignment(_) => None,
            })
            .collect()
    }

    /// Returns the board reassignments received so far.
    #[must_use]
    pub fn reassignments(&self) -> Vec<BoardReassignment> {
        self.emitted
            .iter()
            .filter_map(|intent| match intent {
                MoveIntent::BoardReassignment(request) => Some(*request),
                MoveIntent::RowMove(_) => None,
            })
            .collect()
    }

    /// Drains the recorded intents.
    pub fn take(&mut self) -> Vec<MoveIntent> {
        std::mem::take(&mut self.emitted)
    }
}

impl MoveSink for RecordingMoveSink {
    fn board_reassignment_requested(&mut self, request: BoardReassignment) -> MoveSinkResult<()> {
        self.emitted.push(request.into());
        Ok(())
    }

    fn row_move_requested(&mut self, request: RowMove) -> MoveSinkResult<()> {
        self.emitted.push(request.into());
        Ok(())
    }
}

/// Sink that passes every notification to an enclosing owner unchanged.
///
/// This is the shape of a component that surfaces intents without owning the
/// canonical task list.
#[derive(Debug, Clone, Default)]
pub struct ForwardingMoveSink<S> {
    upstream: S,
    forwarded: usize,
}

impl<S: MoveSink> ForwardingMoveSink<S> {
    /// Wraps the owner that receives forwarded notifications.
    #[must_use]
    pub const fn new(upstream: S) -> Self {
        Self {
            upstream,
            forwarded: 0,
        }
    }

    /// Returns the number of notifications accepted upstream.
    #[must_use]
    pub const fn forwarded(&self) -> usize {
        self.forwarded
    }

    /// Returns the upstream owner.
    #[must_use]
    pub const fn upstream(&self) -> &S {
        &self.upstream
    }

    /// Unwraps the upstream owner.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.upstream
    }
}

impl<S: MoveSink> MoveSink for ForwardingMoveSink<S> {
    fn board_reassignment_requested(&mut self, request: BoardReassignment) -> MoveSinkResult<()> {
        debug!(task = %request.task_id, board = %request.board_id, "forwarding board reassignment");
        self.upstream.board_reassignment_requested(request)?;
        self.forwarded = self.forwarded.saturating_add(1);
        Ok(())
    }

    fn row_move_requested(&mut self, request: RowMove) -> MoveSinkResult<()> {
        debug!(from = request.from, to = request.to, "forwarding row move");
        self.upstream.row_move_requested(request)?;
        self.forwarded = self.forwarded.saturating_add(1);
        Ok(())
    }
}

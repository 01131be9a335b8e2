//! Read-only board snapshot consumed by the interaction surface.

use crate::board::domain::{BoardId, BoardRegistry, OrderedCollection, Task};

/// Read model of the canonical board state.
pub trait BoardView {
    /// Returns the flat task sequence.
    fn collection(&self) -> &OrderedCollection;

    /// Returns the board order.
    fn registry(&self) -> &BoardRegistry;

    /// Returns the tasks of one board in display order.
    fn tasks_of_board(&self, board_id: BoardId) -> Vec<&Task> {
        self.collection().tasks_of_board(board_id)
    }

    /// Returns the board identifiers in column order.
    fn boards(&self) -> &[BoardId] {
        self.registry().boards()
    }
}

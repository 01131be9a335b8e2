//! Ordered registry of boards (columns).

use super::{BoardDomainError, BoardDomainResult, BoardId, ColumnDirection};
use std::collections::HashSet;

/// Caller-owned board order.
///
/// A board's position is its index here; boards carry no ordering field of
/// their own. The engine only reads adjacency from the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardRegistry {
    boards: Vec<BoardId>,
}

impl BoardRegistry {
    /// Creates a registry from board identifiers in column order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateBoard`] when an identifier is
    /// listed twice.
    pub fn new(boards: impl IntoIterator<Item = BoardId>) -> BoardDomainResult<Self> {
        let collected: Vec<BoardId> = boards.into_iter().collect();
        let mut seen = HashSet::with_capacity(collected.len());
        for board in &collected {
            if !seen.insert(*board) {
                return Err(BoardDomainError::DuplicateBoard(*board));
            }
        }
        Ok(Self { boards: collected })
    }

    /// Returns the boards in column order.
    #[must_use]
    pub fn boards(&self) -> &[BoardId] {
        &self.boards
    }

    /// Returns the number of boards.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.boards.len()
    }

    /// Returns `true` when no boards are registered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Returns `true` when the board is registered.
    #[must_use]
    pub fn contains(&self, board_id: BoardId) -> bool {
        self.boards.contains(&board_id)
    }

    /// Returns the column index of a board.
    #[must_use]
    pub fn position(&self, board_id: BoardId) -> Option<usize> {
        self.boards.iter().position(|board| *board == board_id)
    }

    /// Returns the neighbouring board in the given direction.
    ///
    /// There is no wraparound: stepping past the first or last board yields
    /// `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::BoardNotFound`] when `board_id` is not
    /// registered.
    pub fn adjacent(
        &self,
        board_id: BoardId,
        direction: ColumnDirection,
    ) -> BoardDomainResult<Option<BoardId>> {
        let index = self
            .position(board_id)
            .ok_or(BoardDomainError::BoardNotFound(board_id))?;
        let neighbour = match direction {
            ColumnDirection::Next => index.checked_add(1),
            ColumnDirection::Previous => index.checked_sub(1),
        };
        Ok(neighbour.and_then(|target| self.boards.get(target).copied()))
    }
}

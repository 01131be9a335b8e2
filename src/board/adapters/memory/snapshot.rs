//! Owned board snapshot for components that do not own the canonical state.

use crate::board::{
    domain::{BoardDomainResult, BoardId, BoardRegistry, OrderedCollection, Task},
    ports::BoardView,
};

/// Copy of the tasks and boards handed down to a presentational component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardSnapshot {
    collection: OrderedCollection,
    registry: BoardRegistry,
}

impl BoardSnapshot {
    /// Builds a snapshot from tasks and boards in display order.
    ///
    /// # Errors
    ///
    /// Returns a duplicate-identifier error when tasks or boards repeat.
    pub fn new(
        tasks: impl IntoIterator<Item = Task>,
        boards: impl IntoIterator<Item = BoardId>,
    ) -> BoardDomainResult<Self> {
        Ok(Self {
            collection: OrderedCollection::new(tasks)?,
            registry: BoardRegistry::new(boards)?,
        })
    }

    /// Captures the current state of any board view.
    #[must_use]
    pub fn capture(view: &impl BoardView) -> Self {
        Self {
            collection: view.collection().clone(),
            registry: view.registry().clone(),
        }
    }
}

impl BoardView for BoardSnapshot {
    fn collection(&self) -> &OrderedCollection {
        &self.collection
    }

    fn registry(&self) -> &BoardRegistry {
        &self.registry
    }
}

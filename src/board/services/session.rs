//! Event loop tying the interaction surface to the state container.

use crate::board::{
    domain::{
        ActiveTask, ArrowKey, BoardDomainError, BoardId, BoardRegistry, ColumnDirection,
        DraggingTask, MoveDecision, OrderedCollection, RowDirection, TaskId,
    },
    ports::{BoardView, DragAffordance, MoveSink, MoveSinkError, deliver},
    services::{BoardStateContainer, InteractionSurface},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Inbound intent from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoardEvent {
    /// Focus a task for keyboard movement.
    SetActiveTask {
        /// Task to focus.
        task_id: TaskId,
    },
    /// Begin dragging a task.
    StartDrag {
        /// Task being dragged.
        task_id: TaskId,
        /// Position reported by the presentation layer.
        position: usize,
    },
    /// Cancel the drag in flight.
    StopDrag,
    /// Drop the dragged task onto a board.
    Drop {
        /// Destination board.
        board_id: BoardId,
    },
    /// Drop the dragged task onto a global row index.
    DropRow {
        /// Destination flat index.
        target: usize,
    },
    /// Move the focused task one row.
    RowOrderTask {
        /// Step direction.
        direction: RowDirection,
    },
    /// Move the focused task one board.
    ColumnOrderTask {
        /// Step direction.
        direction: ColumnDirection,
    },
    /// Move by explicit global index pair.
    RowMove {
        /// Source flat index.
        from: usize,
        /// Destination flat index.
        to: usize,
    },
    /// An arrow key was pressed while a task is focused.
    KeyPressed {
        /// The key.
        key: ArrowKey,
    },
}

/// Errors returned while handling a board event.
#[derive(Debug, Clone, Error)]
pub enum BoardSessionError {
    /// The event referenced missing state or out-of-range indices.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),

    /// The container or an observer refused the resulting intent.
    #[error(transparent)]
    Sink(#[from] MoveSinkError),
}

/// Result type for board session operations.
pub type BoardSessionResult<T> = Result<T, BoardSessionError>;

/// Single-threaded board event loop.
///
/// Events are handled one at a time: the resulting intent is committed to
/// the container and delivered to every observer before `handle` returns.
pub struct BoardSession<A> {
    container: BoardStateContainer,
    surface: InteractionSurface,
    affordance: A,
    observers: Vec<Box<dyn MoveSink>>,
}

impl<A: DragAffordance> BoardSession<A> {
    /// Creates a session over an existing container.
    #[must_use]
    pub fn new(container: BoardStateContainer, affordance: A) -> Self {
        let surface = InteractionSurface::new(*container.config());
        Self {
            container,
            surface,
            affordance,
            observers: Vec::new(),
        }
    }

    /// Registers an observer notified after each committed move.
    pub fn subscribe(&mut self, observer: Box<dyn MoveSink>) {
        self.observers.push(observer);
    }

    /// Returns the canonical state.
    #[must_use]
    pub const fn container(&self) -> &BoardStateContainer {
        &self.container
    }

    /// Returns the interaction state.
    #[must_use]
    pub const fn surface(&self) -> &InteractionSurface {
        &self.surface
    }

    /// Returns the platform drag affordance.
    #[must_use]
    pub const fn affordance(&self) -> &A {
        &self.affordance
    }

    /// Returns the keyboard focus.
    #[must_use]
    pub const fn active_task(&self) -> &ActiveTask {
        self.surface.active_task()
    }

    /// Returns the drag in flight.
    #[must_use]
    pub const fn dragging_task(&self) -> &DraggingTask {
        self.surface.dragging_task()
    }

    /// Handles one inbound event and commits its outcome.
    ///
    /// Returns the decision that was committed, or
    /// [`MoveDecision::NoMove`] when the event produced no move.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Domain`] when the event references
    /// missing state and [`BoardSessionError::Sink`] when the container or an
    /// observer rejects the intent. The container is never left partially
    /// mutated. Once a move is committed every observer is notified, and the
    /// first observer error is returned afterwards.
    pub fn handle(&mut self, event: BoardEvent) -> BoardSessionResult<MoveDecision> {
        let decision = self.decide(event)?;
        let MoveDecision::Move(intent) = decision else {
            return Ok(decision);
        };

        deliver(&mut self.container, intent)?;
        self.surface.refresh_active(&self.container);
        debug!(?intent, "move committed");

        let mut first_error = None;
        for observer in &mut self.observers {
            if let Err(err) = deliver(observer.as_mut(), intent) {
                warn!(?intent, %err, "observer rejected committed move");
                first_error.get_or_insert(err);
            }
        }
        first_error.map_or(Ok(decision), |err| Err(err.into()))
    }

    fn decide(&mut self, event: BoardEvent) -> BoardSessionResult<MoveDecision> {
        let decision = match event {
            BoardEvent::SetActiveTask { task_id } => {
                let task = self
                    .container
                    .collection()
                    .get(task_id)
                    .ok_or(BoardDomainError::TaskNotFound(task_id))?;
                self.surface.set_active_task(task);
                MoveDecision::NoMove
            }
            BoardEvent::StartDrag { task_id, position } => {
                let task = self
                    .container
                    .collection()
                    .get(task_id)
                    .ok_or(BoardDomainError::TaskNotFound(task_id))?;
                self.surface.start_drag(task, position, &mut self.affordance);
                MoveDecision::NoMove
            }
            BoardEvent::StopDrag => {
                self.surface.stop_drag();
                MoveDecision::NoMove
            }
            BoardEvent::Drop { board_id } => self.surface.drop(board_id),
            BoardEvent::DropRow { target } => self.surface.drop_row(target, &self.container)?,
            BoardEvent::RowOrderTask { direction } => {
                self.surface.row_order_task(direction, &self.container)?
            }
            BoardEvent::ColumnOrderTask { direction } => {
                self.surface.column_order_task(direction, &self.container)?
            }
            BoardEvent::RowMove { from, to } => self.surface.row_move(from, to),
            BoardEvent::KeyPressed { key } => self.surface.key_pressed(key, &self.container)?,
        };
        Ok(decision)
    }
}

impl<A> BoardView for BoardSession<A> {
    fn collection(&self) -> &OrderedCollection {
        self.container.collection()
    }

    fn registry(&self) -> &BoardRegistry {
        self.container.registry()
    }
}

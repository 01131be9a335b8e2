//! Translation of drag gestures and arrow keys into move intents.

use crate::board::{
    domain::{
        ActiveTask, ArrowKey, BoardConfig, BoardDomainResult, BoardId, ColumnDirection,
        DragPayload, DraggingTask, FocusedTask, KeyStep, MoveDecision, MoveIntent, MovementEngine,
        RowDirection, RowMove, Task,
    },
    ports::{BoardView, DragAffordance},
};
use tracing::{debug, trace};

/// Transient interaction state and gesture translation.
///
/// The surface owns only the focused task and the drag in flight. It reads
/// the board through a [`BoardView`] and answers with a [`MoveDecision`];
/// it never writes task state itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionSurface {
    active: ActiveTask,
    dragging: DraggingTask,
    config: BoardConfig,
}

impl InteractionSurface {
    /// Creates an idle surface with nothing focused.
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        Self {
            active: ActiveTask::None,
            dragging: DraggingTask::None,
            config,
        }
    }

    /// Returns the keyboard focus.
    #[must_use]
    pub const fn active_task(&self) -> &ActiveTask {
        &self.active
    }

    /// Returns the drag in flight.
    #[must_use]
    pub const fn dragging_task(&self) -> &DraggingTask {
        &self.dragging
    }

    /// Focuses a task for keyboard movement.
    pub fn set_active_task(&mut self, task: impl Into<FocusedTask>) {
        let focused = task.into();
        trace!(task = %focused.id, "task focused");
        self.active = ActiveTask::Active(focused);
    }

    /// Refreshes the focused task's copied fields after a move.
    ///
    /// Focus is kept even when the task has disappeared from the view.
    pub fn refresh_active(&mut self, view: &impl BoardView) {
        if let ActiveTask::Active(focused) = &mut self.active
            && let Some(task) = view.collection().get(focused.id)
        {
            *focused = FocusedTask::from(task);
        }
    }

    /// Starts dragging a task and configures the platform affordance.
    pub fn start_drag(
        &mut self,
        task: &Task,
        position: usize,
        affordance: &mut (impl DragAffordance + ?Sized),
    ) {
        affordance.set_drop_effect(self.config.drag_effect);
        affordance.set_effect_allowed(self.config.drag_effect);
        debug!(task = %task.id(), position, "drag started");
        self.dragging = DraggingTask::Dragging(DragPayload {
            id: task.id(),
            label: task.label().to_owned(),
            position,
        });
    }

    /// Cancels the drag in flight, if any.
    pub fn stop_drag(&mut self) {
        if self.dragging.is_dragging() {
            debug!("drag cancelled");
        }
        self.dragging = DraggingTask::None;
    }

    /// Drops the dragged task onto a board.
    ///
    /// Returns [`MoveDecision::NoMove`] when nothing is being dragged. The
    /// drag ends either way.
    pub fn drop(&mut self, board_id: BoardId) -> MoveDecision {
        match std::mem::take(&mut self.dragging) {
            DraggingTask::None => {
                trace!(board = %board_id, "drop without drag ignored");
                MoveDecision::NoMove
            }
            DraggingTask::Dragging(payload) => {
                MovementEngine::drop_on_board(payload.id, board_id).into()
            }
        }
    }

    /// Drops the dragged task onto a global row index.
    ///
    /// The drag ends even when the drop is rejected.
    ///
    /// # Errors
    ///
    /// Returns a domain error when the dragged task is gone or the index is
    /// outside the sequence.
    pub fn drop_row(
        &mut self,
        target: usize,
        view: &impl BoardView,
    ) -> BoardDomainResult<MoveDecision> {
        match std::mem::take(&mut self.dragging) {
            DraggingTask::None => {
                trace!(target, "row drop without drag ignored");
                Ok(MoveDecision::NoMove)
            }
            DraggingTask::Dragging(payload) => {
                MovementEngine::drop_on_row(view.collection(), payload.id, target).map(Into::into)
            }
        }
    }

    /// Requests an explicit row move, bypassing keyboard derivation.
    ///
    /// The pair is passed on as given; the state container validates it.
    #[must_use]
    pub const fn row_move(&self, from: usize, to: usize) -> MoveDecision {
        MoveDecision::Move(MoveIntent::RowMove(RowMove::new(from, to)))
    }

    /// Moves the focused task one row within its board.
    ///
    /// # Errors
    ///
    /// Returns a domain error when the focused task is no longer present.
    pub fn row_order_task(
        &self,
        direction: RowDirection,
        view: &impl BoardView,
    ) -> BoardDomainResult<MoveDecision> {
        let Some(task_id) = self.active.id() else {
            return Ok(MoveDecision::NoMove);
        };
        MovementEngine::keyboard_row_move(view.collection(), task_id, direction)
    }

    /// Moves the focused task to the neighbouring board.
    ///
    /// # Errors
    ///
    /// Returns a domain error when the focused task is no longer present or
    /// sits on an unregistered board.
    pub fn column_order_task(
        &self,
        direction: ColumnDirection,
        view: &impl BoardView,
    ) -> BoardDomainResult<MoveDecision> {
        let Some(task_id) = self.active.id() else {
            return Ok(MoveDecision::NoMove);
        };
        MovementEngine::keyboard_column_move(view.collection(), view.registry(), task_id, direction)
    }

    /// Routes an arrow key to a row or column step.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::row_order_task`] and
    /// [`Self::column_order_task`].
    pub fn key_pressed(
        &self,
        key: ArrowKey,
        view: &impl BoardView,
    ) -> BoardDomainResult<MoveDecision> {
        match key.step() {
            KeyStep::Row(direction) => self.row_order_task(direction, view),
            KeyStep::Column(direction) => self.column_order_task(direction, view),
        }
    }
}

//! Domain model for board state and task movement.
//!
//! The domain holds the flat task sequence, the board order, the pure
//! movement rules, and the transient focus/drag values. Nothing here knows
//! how intents are delivered or rendered.

mod collection;
mod config;
mod direction;
mod error;
mod ids;
mod intent;
mod movement;
mod registry;
mod selection;
mod task;

pub use collection::OrderedCollection;
pub use config::{BoardConfig, DropEffect, PlacementPolicy};
pub use direction::{ArrowKey, ColumnDirection, KeyStep, RowDirection};
pub use error::{BoardDomainError, BoardDomainResult, ParseKeyError};
pub use ids::{BoardId, TaskId};
pub use intent::{BoardReassignment, MoveDecision, MoveIntent, RowMove};
pub use movement::MovementEngine;
pub use registry::BoardRegistry;
pub use selection::{ActiveTask, DragPayload, DraggingTask, FocusedTask};
pub use task::Task;

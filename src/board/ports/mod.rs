//! Port contracts for board interaction.
//!
//! Ports define the boundary between the movement core and its embedding
//! presentation layer.

pub mod affordance;
pub mod sink;
pub mod view;

pub use affordance::DragAffordance;
pub use sink::{MoveSink, MoveSinkError, MoveSinkResult, deliver};
pub use view::BoardView;

//! Application services for board state and interaction.

mod container;
mod session;
mod surface;

pub use container::BoardStateContainer;
pub use session::{BoardEvent, BoardSession, BoardSessionError, BoardSessionResult};
pub use surface::InteractionSurface;

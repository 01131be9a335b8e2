//! In-memory adapters for headless use and tests.

mod affordance;
mod sink;
mod snapshot;

pub use affordance::RecordedDragAffordance;
pub use sink::{ForwardingMoveSink, RecordingMoveSink};
pub use snapshot::BoardSnapshot;

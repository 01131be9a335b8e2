//! Shared world state for board movement BDD scenarios.

use kanban_board::board::{
    adapters::memory::RecordedDragAffordance,
    domain::{BoardConfig, BoardId, MoveDecision, Task},
    services::{BoardSession, BoardSessionResult, BoardStateContainer},
};
use rstest::fixture;

/// Session type used by the BDD world.
pub type TestBoardSession = BoardSession<RecordedDragAffordance>;

/// Scenario world for board movement behaviour tests.
#[derive(Default)]
pub struct BoardWorld {
    /// Boards declared by `Given` steps, in column order.
    pub pending_boards: Vec<BoardId>,
    /// Tasks declared by `Given` steps, in flat order.
    pub pending_tasks: Vec<Task>,
    /// Session built from the pending state on first use.
    pub session: Option<TestBoardSession>,
    /// Outcome of the most recent `When` step.
    pub last_result: Option<BoardSessionResult<MoveDecision>>,
}

impl BoardWorld {
    /// Returns the session, building it from the declared boards and tasks
    /// on first use.
    pub fn session(&mut self) -> Result<&mut TestBoardSession, eyre::Report> {
        if self.session.is_none() {
            let container = BoardStateContainer::new(
                self.pending_tasks.clone(),
                self.pending_boards.clone(),
                BoardConfig::default(),
            )
            .map_err(|err| eyre::eyre!("invalid board state in scenario: {err}"))?;
            self.session = Some(BoardSession::new(container, RecordedDragAffordance::new()));
        }
        self.session
            .as_mut()
            .ok_or_else(|| eyre::eyre!("session was not built"))
    }

    /// Returns the outcome of the last `When` step.
    pub fn last_result(&self) -> Result<&BoardSessionResult<MoveDecision>, eyre::Report> {
        self.last_result
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing result in scenario world"))
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

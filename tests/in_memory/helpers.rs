//! Shared fixtures for in-memory board tests.

use kanban_board::board::{
    adapters::memory::RecordedDragAffordance,
    domain::{BoardConfig, BoardId, Task, TaskId},
    ports::BoardView,
    services::{BoardEvent, BoardSession, BoardStateContainer},
};
use rstest::fixture;
use tracing_subscriber::EnvFilter;

/// Session type used across in-memory tests.
pub type TestSession = BoardSession<RecordedDragAffordance>;

/// Installs a test-writer subscriber honouring `RUST_LOG`.
pub fn init_tracing() {
    drop(
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init(),
    );
}

/// Builds a session from `(task, board)` pairs and a board order.
pub fn session_with(tasks: &[(u64, u64)], boards: &[u64]) -> TestSession {
    init_tracing();
    let container = BoardStateContainer::new(
        tasks
            .iter()
            .map(|&(id, board)| Task::new(id, board, format!("task {id}"))),
        boards.iter().copied().map(BoardId::new),
        BoardConfig::default(),
    )
    .expect("valid board state");
    BoardSession::new(container, RecordedDragAffordance::new())
}

/// Three boards, two tasks each, interleaved in the flat sequence.
#[fixture]
pub fn interleaved() -> TestSession {
    session_with(
        &[(1, 1), (2, 2), (3, 3), (4, 1), (5, 2), (6, 3)],
        &[1, 2, 3],
    )
}

/// Task identifiers in flat order.
pub fn flat_ids(session: &TestSession) -> Vec<u64> {
    session
        .collection()
        .tasks()
        .iter()
        .map(|task| task.id().value())
        .collect()
}

/// Task identifiers of one board in display order.
pub fn board_ids(session: &TestSession, board: u64) -> Vec<u64> {
    session
        .tasks_of_board(BoardId::new(board))
        .iter()
        .map(|task| task.id().value())
        .collect()
}

/// Focuses a task, panicking on failure.
pub fn focus(session: &mut TestSession, id: u64) {
    session
        .handle(BoardEvent::SetActiveTask {
            task_id: TaskId::new(id),
        })
        .expect("task exists");
}

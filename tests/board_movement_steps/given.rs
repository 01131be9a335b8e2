//! Given steps for board movement BDD scenarios.

use super::world::BoardWorld;
use kanban_board::board::{
    domain::{BoardId, Task, TaskId},
    services::BoardEvent,
};
use rstest_bdd_macros::given;

#[given("boards {first:u64} to {last:u64}")]
fn boards(world: &mut BoardWorld, first: u64, last: u64) {
    world.pending_boards = (first..=last).map(BoardId::new).collect();
}

#[given("task {id:u64} on board {board:u64}")]
fn task_on_board(world: &mut BoardWorld, id: u64, board: u64) {
    world
        .pending_tasks
        .push(Task::new(id, board, format!("task {id}")));
}

#[given("task {id:u64} is focused")]
fn task_is_focused(world: &mut BoardWorld, id: u64) -> Result<(), eyre::Report> {
    world
        .session()?
        .handle(BoardEvent::SetActiveTask {
            task_id: TaskId::new(id),
        })
        .map_err(|err| eyre::eyre!("focus task {id}: {err}"))?;
    Ok(())
}

#[given("task {id:u64} is being dragged from position {position:usize}")]
fn task_is_dragged(world: &mut BoardWorld, id: u64, position: usize) -> Result<(), eyre::Report> {
    world
        .session()?
        .handle(BoardEvent::StartDrag {
            task_id: TaskId::new(id),
            position,
        })
        .map_err(|err| eyre::eyre!("start dragging task {id}: {err}"))?;
    Ok(())
}

//! Then steps for board movement BDD scenarios.

use super::world::BoardWorld;
use kanban_board::board::{
    domain::{BoardDomainError, BoardId, BoardReassignment, MoveDecision, RowMove, TaskId},
    ports::{BoardView, MoveSinkError},
    services::BoardSessionError,
};
use rstest_bdd_macros::then;

#[then("a row move from {from:usize} to {to:usize} is emitted")]
fn row_move_emitted(world: &BoardWorld, from: usize, to: usize) -> Result<(), eyre::Report> {
    let result = world.last_result()?;
    let expected = MoveDecision::from(RowMove::new(from, to));
    if !matches!(result, Ok(decision) if *decision == expected) {
        return Err(eyre::eyre!("expected {expected:?}, got {result:?}"));
    }
    Ok(())
}

#[then("task {id:u64} is reassigned to board {board:u64}")]
fn task_reassigned(world: &BoardWorld, id: u64, board: u64) -> Result<(), eyre::Report> {
    let result = world.last_result()?;
    let expected =
        MoveDecision::from(BoardReassignment::new(TaskId::new(id), BoardId::new(board)));
    if !matches!(result, Ok(decision) if *decision == expected) {
        return Err(eyre::eyre!("expected {expected:?}, got {result:?}"));
    }
    Ok(())
}

#[then("no move is emitted")]
fn no_move_emitted(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world.last_result()?;
    if !matches!(result, Ok(MoveDecision::NoMove)) {
        return Err(eyre::eyre!("expected no move, got {result:?}"));
    }
    Ok(())
}

#[then("the move is rejected as out of range")]
fn move_rejected_out_of_range(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world.last_result()?;
    if !matches!(
        result,
        Err(BoardSessionError::Sink(MoveSinkError::Rejected(
            BoardDomainError::IndexOutOfRange { .. }
        )))
    ) {
        return Err(eyre::eyre!("expected IndexOutOfRange rejection, got {result:?}"));
    }
    Ok(())
}

#[then("task {id:u64} is at row {row:usize}")]
fn task_at_row(world: &BoardWorld, id: u64, row: usize) -> Result<(), eyre::Report> {
    let session = world
        .session
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing session in scenario world"))?;
    let position = session.collection().position_of(TaskId::new(id));
    if position != Some(row) {
        return Err(eyre::eyre!("expected task {id} at row {row}, found {position:?}"));
    }
    Ok(())
}

#[then("task {id:u64} is on board {board:u64}")]
fn task_on_board(world: &BoardWorld, id: u64, board: u64) -> Result<(), eyre::Report> {
    let session = world
        .session
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing session in scenario world"))?;
    let found = session
        .collection()
        .get(TaskId::new(id))
        .map(|task| task.board_id());
    if found != Some(BoardId::new(board)) {
        return Err(eyre::eyre!("expected task {id} on board {board}, found {found:?}"));
    }
    Ok(())
}

#[then("nothing is being dragged")]
fn nothing_dragged(world: &BoardWorld) -> Result<(), eyre::Report> {
    let session = world
        .session
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing session in scenario world"))?;
    if session.dragging_task().is_dragging() {
        return Err(eyre::eyre!("expected drag to have ended"));
    }
    Ok(())
}

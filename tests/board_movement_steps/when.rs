//! When steps for board movement BDD scenarios.

use super::world::BoardWorld;
use kanban_board::board::{domain::ArrowKey, services::BoardEvent};
use rstest_bdd_macros::when;

#[when(r#"the "{key}" key is pressed"#)]
fn key_is_pressed(world: &mut BoardWorld, key: String) -> Result<(), eyre::Report> {
    let arrow = ArrowKey::try_from(key.as_str())
        .map_err(|err| eyre::eyre!("invalid key in scenario: {err}"))?;
    let result = world.session()?.handle(BoardEvent::KeyPressed { key: arrow });
    world.last_result = Some(result);
    Ok(())
}

#[when("the dragged task is dropped on row {target:usize}")]
fn dragged_task_dropped_on_row(world: &mut BoardWorld, target: usize) -> Result<(), eyre::Report> {
    let result = world.session()?.handle(BoardEvent::DropRow { target });
    world.last_result = Some(result);
    Ok(())
}

#[when("a row move from {from:usize} to {to:usize} is requested")]
fn row_move_requested(world: &mut BoardWorld, from: usize, to: usize) -> Result<(), eyre::Report> {
    let result = world.session()?.handle(BoardEvent::RowMove { from, to });
    world.last_result = Some(result);
    Ok(())
}

//! Drag-and-drop movement through the board session.

use super::helpers::{TestSession, board_ids, flat_ids, interleaved, session_with};
use kanban_board::board::{
    domain::{BoardDomainError, BoardId, DropEffect, MoveDecision, RowMove, TaskId},
    services::{BoardEvent, BoardSessionError},
};
use rstest::rstest;

fn start_drag(session: &mut TestSession, id: u64, position: usize) {
    session
        .handle(BoardEvent::StartDrag {
            task_id: TaskId::new(id),
            position,
        })
        .expect("task exists");
}

#[rstest]
fn drag_start_configures_move_affordance(mut interleaved: TestSession) {
    start_drag(&mut interleaved, 2, 1);

    assert_eq!(interleaved.affordance().drop_effect(), Some(DropEffect::Move));
    assert_eq!(interleaved.affordance().effect_allowed(), Some(DropEffect::Move));
    let payload = interleaved.dragging_task().payload().expect("drag in flight");
    assert_eq!(payload.id, TaskId::new(2));
    assert_eq!(payload.position, 1);
}

#[rstest]
fn drop_on_same_board_row_reorders(mut interleaved: TestSession) {
    start_drag(&mut interleaved, 4, 3);

    let decision = interleaved
        .handle(BoardEvent::DropRow { target: 0 })
        .expect("drop accepted");

    assert_eq!(decision, RowMove::new(3, 0).into());
    assert_eq!(board_ids(&interleaved, 1), vec![4, 1]);
}

#[rstest]
fn drop_on_board_moves_task_to_end_of_column(mut interleaved: TestSession) {
    start_drag(&mut interleaved, 3, 2);

    interleaved
        .handle(BoardEvent::Drop {
            board_id: BoardId::new(1),
        })
        .expect("drop accepted");

    assert_eq!(board_ids(&interleaved, 1), vec![1, 4, 3]);
    assert_eq!(board_ids(&interleaved, 3), vec![6]);
    assert!(!interleaved.dragging_task().is_dragging());
}

#[rstest]
fn drop_on_unknown_board_is_rejected_and_ends_drag(mut interleaved: TestSession) {
    let before = flat_ids(&interleaved);
    start_drag(&mut interleaved, 3, 2);

    let result = interleaved.handle(BoardEvent::Drop {
        board_id: BoardId::new(9),
    });

    assert!(matches!(result, Err(BoardSessionError::Sink(_))));
    assert_eq!(flat_ids(&interleaved), before);
    assert!(!interleaved.dragging_task().is_dragging());
}

#[rstest]
fn drop_row_out_of_range_is_rejected(mut interleaved: TestSession) {
    start_drag(&mut interleaved, 1, 0);

    let result = interleaved.handle(BoardEvent::DropRow { target: 6 });

    assert!(matches!(
        result,
        Err(BoardSessionError::Domain(BoardDomainError::IndexOutOfRange {
            index: 6,
            len: 6
        }))
    ));
    assert!(!interleaved.dragging_task().is_dragging());
}

#[rstest]
fn cancelled_drag_drops_nothing() {
    let mut session = session_with(&[(1, 1), (2, 1)], &[1, 2]);
    start_drag(&mut session, 1, 0);
    session
        .handle(BoardEvent::StopDrag)
        .expect("stop always succeeds");

    let decision = session
        .handle(BoardEvent::DropRow { target: 1 })
        .expect("no move is not an error");

    assert_eq!(decision, MoveDecision::NoMove);
    assert_eq!(flat_ids(&session), vec![1, 2]);
}

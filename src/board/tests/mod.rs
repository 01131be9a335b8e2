//! Unit tests for board state, movement rules, and interaction.

use crate::board::{
    domain::{BoardReassignment, RowMove},
    ports::{MoveSink, MoveSinkResult},
};
use mockall::mock;


mock! {
    pub Owner {}

    impl MoveSink for Owner {
        fn board_reassignment_requested(
            &mut self,
            request: BoardReassignment,
        ) -> MoveSinkResult<()>;
        fn row_move_requested(&mut self, request: RowMove) -> MoveSinkResult<()>;
    }
}

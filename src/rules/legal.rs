//! Move legality
//!
//! A move is legal iff the game is live, the chosen pit belongs to the side
//! to move, and the pit holds at least one stone. Illegal input is filtered
//! here, never raised mid-move: callers query before invoking the pipeline.

use crate::board::Board;

/// Check whether the side to move may sow from `pit`.
///
/// Out-of-range indices (including the stores) are simply illegal.
#[inline]
#[must_use]
pub fn is_legal_move(board: &Board, pit: usize) -> bool {
    !board.is_game_over()
        && board.current_player.pit_range().contains(&pit)
        && board.pits[pit] > 0
}

/// Legal starting pits for the side to move, in ascending index order
pub fn legal_moves(board: &Board) -> impl Iterator<Item = usize> + '_ {
    board
        .current_player
        .pit_range()
        .filter(move |&pit| is_legal_move(board, pit))
}

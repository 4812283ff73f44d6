//! Move pipeline integrating the individual rules
//!
//! A full move runs through a fixed sequence:
//!
//! 1. **Sow**: distribute the starting pit's stones counter-clockwise,
//!    skipping the opponent's store
//! 2. **Extra turn**: the mover keeps the turn if the last stone landed in
//!    their own store
//! 3. **Capture**: only without an extra turn, a last stone landing in an
//!    empty own pit claims itself plus the opposite pit
//! 4. **Endgame sweep**: once either side runs out of stones, both sides
//!    bank their remainder and the game is over
//!
//! Steps 2–4 are applied strictly in that order; the sweep overrides the
//! pending turn advance from step 2.
//!
//! # Example
//!
//! ```
//! use mancala::{apply_move, is_legal_move, Board, Rules};
//!
//! let rules = Rules::default();
//! let board = Board::new(4);
//!
//! assert!(is_legal_move(&board, 2));
//! let next = apply_move(&rules, &board, 2);
//!
//! // Pit 2's four stones reach exactly the store: extra turn for A
//! assert_eq!(next.store_count(mancala::Player::A), 1);
//! assert!(next.extra_turn);
//! ```

use crate::board::{side_is_empty, Board, Pits, Player};
use crate::rules::{self, Rules};

/// Resolve a finished sow into the successor position.
///
/// `pits` is the board after sowing and `last_index` the slot the final
/// stone landed in; both come from [`rules::sow`] or [`rules::sow_stepwise`].
/// Splitting resolution from sowing lets an animated caller replay the
/// sowing snapshots first and commit the result exactly once.
///
/// Calling this for a position that was already finished is a caller error.
#[must_use]
pub fn resolve_after_sow(board: &Board, mut pits: Pits, last_index: usize) -> Board {
    debug_assert!(!board.is_game_over(), "resolving a move on a finished game");

    let mover = board.current_player;
    let extra = last_index == mover.store();

    // Capture is suppressed by an extra turn. The index ranges already make
    // the two exclusive (a store is not a playing pit); the order is kept
    // anyway so the rule reads the way it is played.
    if !extra {
        rules::apply_capture(&mut pits, mover, last_index);
    }

    if side_is_empty(&pits, Player::A) || side_is_empty(&pits, Player::B) {
        rules::sweep(&mut pits);
        // The sweep discards the pending turn advance
        return Board::from_pits(pits, mover, false);
    }

    let next = if extra { mover } else { mover.opponent() };
    Board::from_pits(pits, next, extra)
}

/// Apply a full move and return the successor position.
///
/// Finished positions are returned unchanged, so the pipeline is a no-op on
/// terminal states. Sowing from an illegal pit on a live board is a caller
/// error; use [`rules::is_legal_move`] first.
#[must_use]
pub fn apply_move(rules: &Rules, board: &Board, pit: usize) -> Board {
    if board.is_game_over() {
        return *board;
    }

    let (pits, last_index) = rules::sow(rules, board, pit);
    resolve_after_sow(board, pits, last_index)
}

//! Endgame sweep and result reporting
//!
//! The game ends as soon as either side's six playing pits are all empty.
//! Whatever stones remain on the other side are swept into their owner's
//! store, and the fuller store wins.

use crate::board::{Board, Pits, Player, A_STORE, B_STORE};

/// Sweep every remaining playing-pit stone into its owner's store.
///
/// Afterwards all twelve playing pits are empty.
pub fn sweep(pits: &mut Pits) {
    for i in Player::A.pit_range() {
        pits[A_STORE] += pits[i];
        pits[i] = 0;
    }
    for i in Player::B.pit_range() {
        pits[B_STORE] += pits[i];
        pits[i] = 0;
    }
}

/// Final result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    WinA,
    WinB,
    Draw,
}

/// Result of a terminal position, decided by store counts.
///
/// # Panics
///
/// Panics when the game is not over; querying the outcome of a live
/// position is a caller error.
#[must_use]
pub fn outcome(board: &Board) -> Outcome {
    assert!(
        board.is_game_over(),
        "outcome is only defined for finished games"
    );

    match board.pits[A_STORE].cmp(&board.pits[B_STORE]) {
        std::cmp::Ordering::Greater => Outcome::WinA,
        std::cmp::Ordering::Less => Outcome::WinB,
        std::cmp::Ordering::Equal => Outcome::Draw,
    }
}

/// Human-readable end-of-game message with both scores
#[must_use]
pub fn describe_outcome(board: &Board) -> String {
    let a = board.pits[A_STORE];
    let b = board.pits[B_STORE];

    match outcome(board) {
        Outcome::WinA => format!("Game over. Player A wins {a}–{b}!"),
        Outcome::WinB => format!("Game over. Player B wins {b}–{a}!"),
        Outcome::Draw => format!("Game over. It's a draw {a}–{b}!"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::SLOT_COUNT;

    #[test]
    fn test_sweep_moves_everything_to_stores() {
        let mut pits: Pits = [0; SLOT_COUNT];
        pits[0] = 3;
        pits[5] = 1;
        pits[A_STORE] = 10;
        pits[8] = 2;
        pits[12] = 4;
        pits[B_STORE] = 7;

        sweep(&mut pits);

        assert_eq!(pits[A_STORE], 14);
        assert_eq!(pits[B_STORE], 13);
        for i in Player::A.pit_range().chain(Player::B.pit_range()) {
            assert_eq!(pits[i], 0);
        }
    }

    #[test]
    fn test_sweep_is_idempotent() {
        let mut pits: Pits = [0; SLOT_COUNT];
        pits[3] = 5;
        sweep(&mut pits);
        let once = pits;
        sweep(&mut pits);
        assert_eq!(pits, once);
    }

    fn terminal_board(a_store: u32, b_store: u32) -> Board {
        let mut pits: Pits = [0; SLOT_COUNT];
        pits[A_STORE] = a_store;
        pits[B_STORE] = b_store;
        Board::from_pits(pits, Player::A, false)
    }

    #[test]
    fn test_outcome_by_store_counts() {
        assert_eq!(outcome(&terminal_board(25, 23)), Outcome::WinA);
        assert_eq!(outcome(&terminal_board(20, 28)), Outcome::WinB);
        assert_eq!(outcome(&terminal_board(24, 24)), Outcome::Draw);
    }

    #[test]
    fn test_describe_outcome_reports_both_scores() {
        assert_eq!(
            describe_outcome(&terminal_board(25, 23)),
            "Game over. Player A wins 25–23!"
        );
        assert_eq!(
            describe_outcome(&terminal_board(20, 28)),
            "Game over. Player B wins 28–20!"
        );
        assert_eq!(
            describe_outcome(&terminal_board(24, 24)),
            "Game over. It's a draw 24–24!"
        );
    }

    #[test]
    #[should_panic(expected = "only defined for finished games")]
    fn test_outcome_rejects_live_position() {
        outcome(&Board::new(4));
    }
}

//! Greedy move suggestion
//!
//! A depth-1 lookahead: try every legal pit, keep the one that grows the
//! mover's store the most. It never examines the opponent's reply, so it
//! can happily hand over a capture — it is a hint, not a search.

use crate::board::Board;
use crate::engine::apply_move;
use crate::rules::{legal_moves, Rules};

/// Pit the side to move should sow according to the greedy score.
///
/// Each legal pit is scored by how many stones the move adds to the
/// mover's store (captures and the endgame sweep included, since the score
/// comes from running the full move pipeline). Ties go to the lowest pit
/// index. Returns `None` when no move is legal, which only happens on a
/// finished game.
#[must_use]
pub fn compute_hint(rules: &Rules, board: &Board) -> Option<usize> {
    let mover = board.current_player;
    let before = i64::from(board.store_count(mover));

    let mut best: Option<(usize, i64)> = None;
    for pit in legal_moves(board) {
        let next = apply_move(rules, board, pit);
        let gain = i64::from(next.store_count(mover)) - before;
        if best.map_or(true, |(_, best_gain)| gain > best_gain) {
            best = Some((pit, gain));
        }
    }

    best.map(|(pit, _)| pit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Pits, Player, A_STORE, B_STORE, SLOT_COUNT};
    use crate::rules::is_legal_move;

    #[test]
    fn test_hint_prefers_the_extra_turn_opening() {
        let rules = Rules::default();
        let board = Board::new(4);

        // Pits 2 through 5 each bank one stone on the opening move; the
        // tie-break lands on pit 2, which is also the extra-turn move
        assert_eq!(compute_hint(&rules, &board), Some(2));
    }

    #[test]
    fn test_hint_finds_a_capture() {
        let rules = Rules::default();
        let mut pits: Pits = [0; SLOT_COUNT];
        pits[0] = 1; // lands in empty pit 1, capturing the opposite pit
        pits[3] = 1; // lands in empty pit 4, captures nothing
        pits[11] = 8;
        pits[9] = 2;
        let board = Board::from_pits(pits, Player::A, false);

        assert_eq!(compute_hint(&rules, &board), Some(0));
    }

    #[test]
    fn test_hint_breaks_ties_by_lowest_pit() {
        let rules = Rules::default();
        let mut pits: Pits = [0; SLOT_COUNT];
        // Neither legal move reaches the store or captures: both score zero
        pits[0] = 2;
        pits[2] = 1;
        pits[10] = 3;
        let board = Board::from_pits(pits, Player::A, false);

        assert_eq!(compute_hint(&rules, &board), Some(0));
    }

    #[test]
    fn test_hint_is_always_legal() {
        let rules = Rules::default();
        let mut board = Board::new(3);

        // Walk a few dozen hint-driven moves; every suggestion must pass
        // the legality predicate it was derived from
        for _ in 0..64 {
            match compute_hint(&rules, &board) {
                Some(pit) => {
                    assert!(is_legal_move(&board, pit));
                    board = apply_move(&rules, &board, pit);
                }
                None => {
                    assert!(board.is_game_over());
                    break;
                }
            }
        }
    }

    #[test]
    fn test_hint_none_on_finished_game() {
        let rules = Rules::default();
        let mut pits: Pits = [0; SLOT_COUNT];
        pits[A_STORE] = 24;
        pits[B_STORE] = 24;
        let board = Board::from_pits(pits, Player::B, false);

        assert_eq!(compute_hint(&rules, &board), None);
    }

    #[test]
    fn test_hint_for_player_b() {
        let rules = Rules::default();
        let mut board = Board::new(4);
        board.current_player = Player::B;

        // Mirror of the opening: pits 9 through 12 each bank one stone and
        // the lowest index wins
        assert_eq!(compute_hint(&rules, &board), Some(9));
    }
}

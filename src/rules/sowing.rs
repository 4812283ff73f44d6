//! Stone sowing
//!
//! Sowing distributes a pit's stones one-by-one into successive slots,
//! counter-clockwise, skipping the opponent's store. The single-step
//! primitive is exposed on its own so a presentation layer can animate each
//! drop; iterating it is exactly what the batch form does.

use super::Rules;
use crate::board::{Board, Pits, SLOT_COUNT};

/// Advance one slot past `index` (skipping `skip`) and deposit one stone.
///
/// `skip` is the opponent's store, which never receives sown stones.
/// Returns the slot the stone landed in.
#[inline]
pub fn sow_step(pits: &mut Pits, index: usize, skip: usize) -> usize {
    let mut next = (index + 1) % SLOT_COUNT;
    if next == skip {
        next = (next + 1) % SLOT_COUNT;
    }
    pits[next] += 1;
    next
}

/// Sow every stone from `start`, invoking `on_step` once per stone placed.
///
/// All stones are drawn out of the starting pit up front; `on_step`
/// receives the pits snapshot and the slot just filled after each drop.
/// Returns the final pits and the index where the last stone landed.
///
/// With [`Rules::relay_sowing`] enabled, a lap that ends in a non-store pit
/// holding more than one stone picks that pit back up and keeps sowing;
/// the turn's sowing stops once a lap ends in the mover's own store or in a
/// pit that was empty before the landing stone.
pub fn sow_stepwise(
    rules: &Rules,
    board: &Board,
    start: usize,
    mut on_step: impl FnMut(&Pits, usize),
) -> (Pits, usize) {
    debug_assert!(
        super::is_legal_move(board, start),
        "sowing from an illegal pit {start}"
    );

    let my_store = board.current_player.store();
    let opp_store = board.current_player.opponent().store();

    let mut pits = board.pits;
    let mut hand = pits[start];
    pits[start] = 0;

    let mut index = start;
    loop {
        while hand > 0 {
            index = sow_step(&mut pits, index, opp_store);
            hand -= 1;
            on_step(&pits, index);
        }
        if !rules.relay_sowing || index == my_store || pits[index] == 1 {
            break;
        }
        // Relay: the occupied landing pit becomes the next hand
        hand = pits[index];
        pits[index] = 0;
    }

    (pits, index)
}

/// Batch sowing: identical to [`sow_stepwise`] with a no-op observer
pub fn sow(rules: &Rules, board: &Board, start: usize) -> (Pits, usize) {
    sow_stepwise(rules, board, start, |_, _| {})
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Pits, Player, A_STORE, B_STORE};

    #[test]
    fn test_sow_step_advances_and_deposits() {
        let mut pits: Pits = [0; SLOT_COUNT];
        let next = sow_step(&mut pits, 0, B_STORE);
        assert_eq!(next, 1);
        assert_eq!(pits[1], 1);
    }

    #[test]
    fn test_sow_step_wraps_around() {
        let mut pits: Pits = [0; SLOT_COUNT];
        // B sowing from pit 12 deposits into B's store at 13
        let next = sow_step(&mut pits, 12, A_STORE);
        assert_eq!(next, 13);
        // ... and from 13 wraps to pit 0
        let next = sow_step(&mut pits, 13, A_STORE);
        assert_eq!(next, 0);
    }

    #[test]
    fn test_sow_step_skips_opponent_store() {
        let mut pits: Pits = [0; SLOT_COUNT];
        // A sowing from pit 12: slot 13 is B's store, so the stone lands on 0
        let next = sow_step(&mut pits, 12, B_STORE);
        assert_eq!(next, 0);
        assert_eq!(pits[B_STORE], 0);
        assert_eq!(pits[0], 1);
    }

    #[test]
    fn test_single_lap_sow() {
        let rules = Rules::default();
        let board = Board::new(4);

        let (pits, last) = sow(&rules, &board, 2);

        assert_eq!(pits[2], 0);
        assert_eq!(pits[3], 5);
        assert_eq!(pits[4], 5);
        assert_eq!(pits[5], 5);
        assert_eq!(pits[A_STORE], 1);
        assert_eq!(last, A_STORE);
    }

    #[test]
    fn test_long_sow_skips_opponent_store() {
        let rules = Rules::default();
        let mut board = Board::new(4);
        board.pits[5] = 10;

        let (pits, last) = sow(&rules, &board, 5);

        // 10 stones from pit 5: store 6, pits 7..=12, skip 13, pits 0, 1, 2
        assert_eq!(pits[A_STORE], 1);
        for i in 7..=12 {
            assert_eq!(pits[i], 5);
        }
        assert_eq!(pits[B_STORE], 0);
        assert_eq!(pits[0], 5);
        assert_eq!(pits[1], 5);
        assert_eq!(pits[2], 5);
        assert_eq!(last, 2);
    }

    #[test]
    fn test_stepwise_matches_batch() {
        let rules = Rules::default();
        let mut board = Board::new(4);
        board.pits[5] = 9;

        let mut steps = 0;
        let (step_pits, step_last) = sow_stepwise(&rules, &board, 5, |_, _| steps += 1);
        let (batch_pits, batch_last) = sow(&rules, &board, 5);

        assert_eq!(step_pits, batch_pits);
        assert_eq!(step_last, batch_last);
        assert_eq!(steps, 9);
    }

    #[test]
    fn test_stepwise_snapshots_conserve_stones() {
        let rules = Rules::default();
        let board = Board::new(4);
        let total = board.total_stones();

        let mut hand_out = board.pits[0];
        sow_stepwise(&rules, &board, 0, |pits, index| {
            hand_out -= 1;
            // Stones still in hand are the only ones missing from the board
            assert_eq!(pits.iter().sum::<u32>() + hand_out, total);
            assert!(pits[index] > 0);
        });
    }

    #[test]
    fn test_relay_continues_from_occupied_pit() {
        let rules = Rules { relay_sowing: true };
        let mut pits: Pits = [0; SLOT_COUNT];
        pits[0] = 2;
        pits[1] = 1;
        pits[2] = 1;
        pits[8] = 4; // keep B's side live
        let board = Board::from_pits(pits, Player::A, false);

        // Lap 1: pit 0's two stones land on 1 (now 2) and 2 (now 2).
        // Relay picks up pit 2's two stones; they land on 3 and 4. The lap
        // ends on 4, which was empty, so sowing stops.
        let (after, last) = sow(&rules, &board, 0);

        assert_eq!(after[0], 0);
        assert_eq!(after[1], 2);
        assert_eq!(after[2], 0);
        assert_eq!(after[3], 1);
        assert_eq!(after[4], 1);
        assert_eq!(last, 4);
    }

    #[test]
    fn test_relay_through_store_ends_in_empty_pit() {
        let rules = Rules { relay_sowing: true };
        let mut pits: Pits = [0; SLOT_COUNT];
        pits[4] = 1;
        pits[5] = 1;
        pits[9] = 3; // keep B's side live
        let board = Board::from_pits(pits, Player::A, false);

        // Pit 4's stone lands on 5, which now holds 2. Relay continues with
        // those 2 stones into store 6 and pit 7; pit 7 was empty, so
        // sowing stops there.
        let (after, last) = sow(&rules, &board, 4);

        assert_eq!(after[4], 0);
        assert_eq!(after[5], 0);
        assert_eq!(after[A_STORE], 1);
        assert_eq!(after[7], 1);
        assert_eq!(last, 7);
    }

    #[test]
    fn test_relay_stops_in_own_store() {
        let rules = Rules { relay_sowing: true };
        let mut pits: Pits = [0; SLOT_COUNT];
        pits[4] = 2;
        pits[5] = 3;
        pits[9] = 3;
        let board = Board::from_pits(pits, Player::A, false);

        // Pit 4's stones land on 5 and on the store; a lap ending in the
        // mover's store never relays, even though pit 5 is occupied.
        let (after, last) = sow(&rules, &board, 4);

        assert_eq!(after[5], 4);
        assert_eq!(after[A_STORE], 1);
        assert_eq!(last, A_STORE);
    }

    #[test]
    fn test_relay_off_is_single_lap() {
        let rules = Rules::default();
        let mut pits: Pits = [0; SLOT_COUNT];
        pits[0] = 2;
        pits[1] = 1;
        pits[2] = 1;
        pits[8] = 4;
        let board = Board::from_pits(pits, Player::A, false);

        let (after, last) = sow(&rules, &board, 0);

        // One lap only: pit 2 keeps its two stones
        assert_eq!(after[1], 2);
        assert_eq!(after[2], 2);
        assert_eq!(last, 2);
    }

    #[test]
    fn test_relay_stepwise_matches_batch() {
        let rules = Rules { relay_sowing: true };
        let board = Board::new(4);

        for start in 0..=5 {
            let mut steps = 0;
            let (step_pits, step_last) = sow_stepwise(&rules, &board, start, |_, _| steps += 1);
            let (batch_pits, batch_last) = sow(&rules, &board, start);

            assert_eq!(step_pits, batch_pits);
            assert_eq!(step_last, batch_last);
            assert!(steps >= board.pits[start]);
        }
    }
}

//! Board snapshot with pit counts and turn tracking

use super::{side_is_empty, Pits, Player, A_STORE, B_STORE, SLOT_COUNT};

/// One game position: pit contents, side to move, extra-turn flag.
///
/// A `Board` is a value. The move pipeline never mutates one in place; every
/// transition returns a fresh snapshot, so callers can hold on to earlier
/// positions (e.g. while an animation is still showing them).
///
/// The total stone count across all 14 slots never changes over a game:
/// stones move between pits and stores but are never created or destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Stone count per slot
    pub pits: Pits,
    /// Side to move
    pub current_player: Player,
    /// The most recent move ended with the mover keeping the turn.
    /// Informational only; legality always follows `current_player`.
    pub extra_turn: bool,
}

impl Board {
    /// Starting position: `stones_per_pit` in each of the 12 playing pits,
    /// both stores empty, Player A to move.
    ///
    /// # Panics
    ///
    /// Panics if `stones_per_pit` is zero.
    #[must_use]
    pub fn new(stones_per_pit: u32) -> Self {
        assert!(stones_per_pit > 0, "stones_per_pit must be positive");

        let mut pits = [stones_per_pit; SLOT_COUNT];
        pits[A_STORE] = 0;
        pits[B_STORE] = 0;

        Self {
            pits,
            current_player: Player::A,
            extra_turn: false,
        }
    }

    /// Build a position from explicit pit contents
    #[must_use]
    pub fn from_pits(pits: Pits, current_player: Player, extra_turn: bool) -> Self {
        Self {
            pits,
            current_player,
            extra_turn,
        }
    }

    /// Stone count in a slot
    #[inline]
    pub fn stones(&self, index: usize) -> u32 {
        self.pits[index]
    }

    /// Stone count in a player's store
    #[inline]
    pub fn store_count(&self, player: Player) -> u32 {
        self.pits[player.store()]
    }

    /// Total stones in a player's six playing pits
    pub fn side_sum(&self, player: Player) -> u32 {
        player.pit_range().map(|i| self.pits[i]).sum()
    }

    /// Whether a player's playing pits are all empty
    #[inline]
    pub fn is_side_empty(&self, player: Player) -> bool {
        side_is_empty(&self.pits, player)
    }

    /// Game over when either side has no stones left to sow.
    ///
    /// Derived from the pits rather than stored: the endgame sweep zeroes
    /// all twelve playing pits, so once true this stays true.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.is_side_empty(Player::A) || self.is_side_empty(Player::B)
    }

    /// Sum over all 14 slots
    pub fn total_stones(&self) -> u32 {
        self.pits.iter().sum()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(4)
    }
}

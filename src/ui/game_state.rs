//! Game session state for the Mancala GUI

use std::time::{Duration, Instant};

use crate::board::{Board, Pits};
use crate::engine::resolve_after_sow;
use crate::hint::compute_hint;
use crate::rules::{self, Rules};

/// Delay between stone drops during sowing playback
pub const SOW_STEP_DELAY: Duration = Duration::from_millis(350);

/// Pre-computed sowing playback: one pits snapshot per stone dropped.
///
/// All frames come out of the engine's stepwise sow before playback starts;
/// advancing a frame is just an index bump, and cancelling playback simply
/// drops the frames. The final position is committed exactly once, when the
/// last frame has been shown.
pub struct SowingAnimation {
    frames: Vec<Pits>,
    final_pits: Pits,
    last_index: usize,
    frame: usize,
    last_tick: Instant,
}

impl SowingAnimation {
    fn new(rules: &Rules, board: &Board, start: usize) -> Self {
        // First frame: the whole hand is drawn out of the starting pit
        let mut pickup = board.pits;
        pickup[start] = 0;
        let mut frames = vec![pickup];

        let (final_pits, last_index) = rules::sow_stepwise(rules, board, start, |pits, _| {
            frames.push(*pits);
        });

        Self {
            frames,
            final_pits,
            last_index,
            frame: 0,
            last_tick: Instant::now(),
        }
    }

    /// Pits snapshot to display right now
    pub fn current_frame(&self) -> &Pits {
        &self.frames[self.frame]
    }

    /// Advance on the fixed per-stone delay; true once playback is done
    fn advance(&mut self) -> bool {
        if self.last_tick.elapsed() >= SOW_STEP_DELAY {
            if self.frame + 1 == self.frames.len() {
                return true;
            }
            self.frame += 1;
            self.last_tick = Instant::now();
        }
        false
    }
}

/// Main game session state
pub struct GameState {
    pub rules: Rules,
    pub stones_per_pit: u32,
    pub board: Board,
    pub animation: Option<SowingAnimation>,
    pub hint_pit: Option<usize>,
    pub last_landing: Option<usize>,
    pub message: Option<String>,
    pub moves_played: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(4, Rules::default())
    }
}

impl GameState {
    pub fn new(stones_per_pit: u32, rules: Rules) -> Self {
        Self {
            rules,
            stones_per_pit,
            board: Board::new(stones_per_pit),
            animation: None,
            hint_pit: None,
            last_landing: None,
            message: None,
            moves_played: 0,
        }
    }

    /// Start over with the current settings
    pub fn reset(&mut self) {
        *self = Self::new(self.stones_per_pit, self.rules);
    }

    /// Start over with a different pit size
    pub fn new_game(&mut self, stones_per_pit: u32) {
        self.stones_per_pit = stones_per_pit;
        self.reset();
    }

    /// Whether a sowing playback is running
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Pits to draw this frame: the animation snapshot while sowing plays
    /// back, the committed board otherwise
    pub fn displayed_pits(&self) -> &Pits {
        self.animation
            .as_ref()
            .map_or(&self.board.pits, SowingAnimation::current_frame)
    }

    /// One-line status for the side panel
    pub fn status_line(&self) -> String {
        if self.is_animating() {
            "Sowing...".to_string()
        } else if self.board.is_game_over() {
            rules::describe_outcome(&self.board)
        } else if self.board.extra_turn {
            format!("Extra turn! Player {} again", self.board.current_player.name())
        } else {
            format!("Player {}'s turn", self.board.current_player.name())
        }
    }

    /// Attempt to sow from `pit` for the side to move.
    ///
    /// On success the sowing playback starts; the move is committed when
    /// the playback finishes (see [`GameState::tick`]).
    pub fn try_sow(&mut self, pit: usize) -> Result<(), String> {
        if self.is_animating() {
            return Err("Still sowing".to_string());
        }

        if self.board.is_game_over() {
            return Err("The game is over".to_string());
        }

        if !rules::is_legal_move(&self.board, pit) {
            return Err("That pit cannot be sown".to_string());
        }

        self.hint_pit = None;
        self.last_landing = None;
        self.message = None;
        self.animation = Some(SowingAnimation::new(&self.rules, &self.board, pit));
        Ok(())
    }

    /// Drive the sowing playback; commits the move once the last frame has
    /// been shown. Returns true while a repaint should be scheduled.
    pub fn tick(&mut self) -> bool {
        let Some(animation) = &mut self.animation else {
            return false;
        };

        if animation.advance() {
            let final_pits = animation.final_pits;
            let last_index = animation.last_index;
            self.animation = None;

            self.board = resolve_after_sow(&self.board, final_pits, last_index);
            self.last_landing = Some(last_index);
            self.moves_played += 1;
        }

        true
    }

    /// Mark the greedy suggestion for the side to move
    pub fn request_hint(&mut self) {
        if self.is_animating() || self.board.is_game_over() {
            return;
        }
        self.hint_pit = compute_hint(&self.rules, &self.board);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player;

    #[test]
    fn test_try_sow_starts_playback_with_one_frame_per_stone() {
        let mut state = GameState::default();

        state.try_sow(2).unwrap();

        let animation = state.animation.as_ref().unwrap();
        // Pickup frame plus one frame per sown stone
        assert_eq!(animation.frames.len(), 5);
        assert_eq!(animation.current_frame()[2], 0);
        // The board itself is untouched until playback finishes
        assert_eq!(state.board, Board::new(4));
    }

    #[test]
    fn test_try_sow_rejects_illegal_input() {
        let mut state = GameState::default();

        assert!(state.try_sow(9).is_err()); // opponent's pit
        assert!(state.try_sow(6).is_err()); // store
        assert!(state.try_sow(2).is_ok());
        assert!(state.try_sow(3).is_err()); // still sowing
    }

    #[test]
    fn test_playback_commits_the_move_once() {
        let mut state = GameState::default();
        state.try_sow(2).unwrap();

        // Force every frame due immediately
        for _ in 0..16 {
            if let Some(animation) = &mut state.animation {
                animation.last_tick = Instant::now() - 2 * SOW_STEP_DELAY;
            }
            state.tick();
        }

        assert!(!state.is_animating());
        assert_eq!(state.board.store_count(Player::A), 1);
        assert!(state.board.extra_turn);
        assert_eq!(state.moves_played, 1);
        assert_eq!(state.last_landing, Some(Player::A.store()));
    }

    #[test]
    fn test_reset_discards_playback_and_hint() {
        let mut state = GameState::default();
        state.request_hint();
        assert!(state.hint_pit.is_some());
        state.try_sow(state.hint_pit.unwrap_or(0)).ok();

        state.reset();

        assert!(!state.is_animating());
        assert_eq!(state.board, Board::new(4));
        assert_eq!(state.hint_pit, None);
        assert_eq!(state.moves_played, 0);
    }

    #[test]
    fn test_status_line_tracks_the_game() {
        let mut state = GameState::default();
        assert_eq!(state.status_line(), "Player A's turn");

        state.board.current_player = Player::B;
        assert_eq!(state.status_line(), "Player B's turn");

        state.board.extra_turn = true;
        assert_eq!(state.status_line(), "Extra turn! Player B again");
    }
}

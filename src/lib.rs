//! Mancala (Kalah) rules engine with a desktop GUI
//!
//! A pure rules engine for the Kalah variant of Mancala:
//! - 2 x 6 playing pits plus one store per side, 4 stones per pit by default
//! - stones are sown counter-clockwise, skipping the opponent's store
//! - a last stone in your own store grants an extra turn
//! - a last stone in an empty own pit captures the opposite pit
//! - when one side empties, both sides bank their remainder and the fuller
//!   store wins
//!
//! Every transition is a total function from a position to a new position:
//! no shared mutable state, no I/O, no hidden randomness. The GUI is a thin
//! layer that replays sowing snapshots for animation and commits the final
//! position once.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: pit index space and the immutable board snapshot
//! - [`rules`]: legality, sowing, capture, endgame sweep
//! - [`engine`]: the full move pipeline
//! - [`hint`]: greedy one-ply move suggestion
//! - [`ui`]: egui presentation layer
//!
//! # Quick Start
//!
//! ```
//! use mancala::{apply_move, compute_hint, describe_outcome, Board, Rules};
//!
//! let rules = Rules::default();
//! let mut board = Board::new(4);
//!
//! // Play a full game by always following the hint
//! while let Some(pit) = compute_hint(&rules, &board) {
//!     board = apply_move(&rules, &board, pit);
//! }
//!
//! println!("{}", describe_outcome(&board));
//! ```

pub mod board;
pub mod engine;
pub mod hint;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pits, Player, A_STORE, B_STORE, SLOT_COUNT};
pub use engine::{apply_move, resolve_after_sow};
pub use hint::compute_hint;
pub use rules::{
    describe_outcome, is_legal_move, legal_moves, sow_stepwise, Outcome, Rules,
};

//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules and session state for the
//! block-placement puzzle. It has **no dependencies** on UI, storage or audio:
//! side effects are queued as [`Effect`] values for collaborators to carry out.
//!
//! - **Deterministic**: same seed produces the same hands
//! - **Testable**: randomness is injected through [`RandomSource`]
//! - **Atomic**: board operations return new boards, so a rejected placement
//!   leaves nothing behind
//!
//! # Module Structure
//!
//! - [`pieces`]: the 11-shape catalog and clockwise rotation
//! - [`rng`]: seeded LCG, scripted source and the batch generator
//! - [`board`]: placement validation, line detection and clearing
//! - [`scoring`]: per-placement points and running/high score
//! - [`session`]: turn sequence, selection and game-over detection
//! - [`snapshot`]: read-only state for the presentation layer
//!
//! # Game Rules
//!
//! - A hand of 3 random pieces is dealt; the next hand is prepared alongside it
//! - Select a piece and place it anywhere it fits on the 8x8 board
//! - Full rows and full columns clear simultaneously
//! - Points: 1 per tile, `n * 100 * n` for `n` lines, +1000 for emptying the board
//! - The game ends when no piece left in the hand fits anywhere
//!
//! # Example
//!
//! ```
//! use pink_blast_core::{GameConfig, GameSession};
//! use pink_blast_core::types::GameAction;
//!
//! let mut game = GameSession::with_seed(GameConfig::default(), 12345, 0).unwrap();
//!
//! game.apply_action(GameAction::Select(0));
//! game.apply_action(GameAction::Place { row: 0, col: 0 });
//!
//! assert!(game.score() > 0); // every tile placed is worth a point
//! assert_eq!(game.hand().len(), 2);
//! ```

pub mod board;
pub mod config;
pub mod events;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use pink_blast_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardParseError, CompletedLines};
pub use config::{ConfigError, GameConfig};
pub use events::{Effect, Feedback};
pub use pieces::{base_shape, rotate, Piece, Shape};
pub use rng::{BatchGenerator, Hand, RandomSource, SequenceRng, SimpleRng};
pub use scoring::{calculate_turn_score, parse_high_score, ScoreKeeper, TurnScore};
pub use session::{GameSession, PlaceError, PlacementOutcome, SessionState};
pub use snapshot::GameSnapshot;

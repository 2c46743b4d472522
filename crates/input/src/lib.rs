//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`map::UiCommand`]s and resolves them,
//! against a board cursor and the presentation mode, into
//! [`crate::types::GameAction`]s for the session.

pub mod handler;
pub mod map;

pub use pink_blast_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, should_quit, Direction, UiCommand};

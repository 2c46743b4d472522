//! Pink Blast (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof and hosts the terminal
//! [`app::App`] that wires a session to input, rendering and effect
//! delivery. The rules live in [`core`]; nothing here changes them.

pub mod app;

pub use pink_blast_adapter as adapter;
pub use pink_blast_core as core;
pub use pink_blast_input as input;
pub use pink_blast_term as term;
pub use pink_blast_types as types;

pub use app::{App, FeedbackTimer};

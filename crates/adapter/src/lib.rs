//! Adapter module - collaborators the engine talks to through effects
//!
//! The core never touches storage or audio. A session queues
//! [`core::Effect`] values; the host drains them and passes them here:
//!
//! - [`store`]: key-value storage for the high score (`"pinkBlastHS"`),
//!   in memory or as a JSON file under the user's data directory
//! - [`audio`]: sinks for named sound cues
//! - [`dispatch`]: a worker thread that plays cues and persists scores off
//!   the game loop
//!
//! # Environment Variables
//!
//! - `PINK_BLAST_STORE`: explicit path of the JSON store file
//! - `XDG_DATA_HOME` / `HOME`: used to derive the default store path

pub mod audio;
pub mod dispatch;
pub mod store;

pub use pink_blast_core as core;
pub use pink_blast_types as types;

pub use audio::{AudioSink, CueLog, SilentAudio, TerminalBell};
pub use dispatch::EffectDispatcher;
pub use store::{load_high_score, save_high_score, JsonFileStore, KeyValueStore, MemoryStore};

//! Audio sinks for engine sound cues.
//!
//! Playback is fire-and-forget: a sink must return promptly and never report
//! failure back to the game.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crate::types::SoundCue;

pub trait AudioSink: Send {
    fn play(&mut self, cue: SoundCue);
}

/// Discards every cue
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, _cue: SoundCue) {}
}

/// Rings the terminal bell for line clears, perfect clears and game over
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalBell;

impl TerminalBell {
    pub fn rings_for(cue: SoundCue) -> bool {
        matches!(
            cue,
            SoundCue::Clear1 | SoundCue::Combo | SoundCue::Perfect | SoundCue::GameOver
        )
    }
}

impl AudioSink for TerminalBell {
    fn play(&mut self, cue: SoundCue) {
        if Self::rings_for(cue) {
            let mut out = io::stdout();
            let _ = out.write_all(b"\x07");
            let _ = out.flush();
        }
    }
}

/// Records cues; clones share the same log
#[derive(Debug, Clone, Default)]
pub struct CueLog {
    cues: Arc<Mutex<Vec<SoundCue>>>,
}

impl CueLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cues played so far, in order
    pub fn cues(&self) -> Vec<SoundCue> {
        self.cues.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl AudioSink for CueLog {
    fn play(&mut self, cue: SoundCue) {
        if let Ok(mut cues) = self.cues.lock() {
            cues.push(cue);
        }
    }
}

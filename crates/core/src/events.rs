//! Events produced by a placement
//!
//! [`Feedback`] is the transient message shown after a placement. [`Effect`]
//! is a side-effect request (sound, high-score write) that the session
//! queues for collaborators to carry out; the core never waits on them.

use std::fmt;

use serde::Serialize;

use crate::scoring::TurnScore;
use crate::types::{FeedbackKind, SoundCue};

/// Transient placement message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Feedback {
    /// The placement emptied the board
    PerfectClear,
    /// Line-clear points earned
    Points(u32),
}

impl Feedback {
    /// Message for a placement outcome, if it deserves one
    pub fn from_turn(turn: &TurnScore) -> Option<Self> {
        if turn.board_clear_bonus > 0 {
            Some(Feedback::PerfectClear)
        } else if turn.line_count > 0 {
            Some(Feedback::Points(turn.line_points))
        } else {
            None
        }
    }

    pub fn kind(&self) -> FeedbackKind {
        match self {
            Feedback::PerfectClear => FeedbackKind::Clear,
            Feedback::Points(_) => FeedbackKind::Points,
        }
    }

    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::PerfectClear => f.write_str("PERFECT CLEAR!"),
            Feedback::Points(points) => write!(f, "+{}", points),
        }
    }
}

/// Side-effect request for an external collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Effect {
    /// Fire-and-forget audio cue
    Sound(SoundCue),
    /// Write the new high score to storage
    PersistHighScore(u32),
}

/// Sound cues for a committed placement, in play order
pub fn placement_cues(turn: &TurnScore) -> impl Iterator<Item = SoundCue> {
    let line_cues: &[SoundCue] = match turn.line_count {
        0 => &[],
        1 => &[SoundCue::Clear1, SoundCue::Good],
        _ => &[SoundCue::Combo, SoundCue::Amazing],
    };
    let perfect: &[SoundCue] = if turn.is_perfect_clear() {
        &[SoundCue::Perfect]
    } else {
        &[]
    };

    std::iter::once(SoundCue::Place)
        .chain(line_cues.iter().copied())
        .chain(perfect.iter().copied())
}

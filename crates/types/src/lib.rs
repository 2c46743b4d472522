//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no behavior beyond parsing and naming, so they
//! can be shared between the rule engine, the collaborators (storage, audio)
//! and the terminal front end.
//!
//! # Board Dimensions
//!
//! - **Board**: 8x8 cells, indexed `(row, col)` from the top-left corner
//! - **Hand**: 3 pieces dealt per batch
//!
//! Both are defaults; [`MAX_BOARD_SIZE`] and [`MAX_BATCH_SIZE`] bound the
//! configurable range.
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `LINE_CLEAR_BASE` | 100 | Multiplied by the square of lines cleared |
//! | `PERFECT_CLEAR_BONUS` | 1000 | Board emptied by a clearing placement |
//!
//! # Examples
//!
//! ```
//! use pink_blast_types::{Cell, ShapeKind, SoundCue, BOARD_SIZE, BATCH_SIZE};
//!
//! assert_eq!(ShapeKind::from_str("t-up"), Some(ShapeKind::TUp));
//! assert_eq!(ShapeKind::LBig.as_str(), "l-big");
//!
//! assert!(Cell::Filled.is_filled());
//! assert_eq!(SoundCue::Clear1.as_str(), "CLEAR_1");
//!
//! assert_eq!(BOARD_SIZE, 8);
//! assert_eq!(BATCH_SIZE, 3);
//! ```

use serde::{Deserialize, Serialize};

/// Default board dimension (8x8)
pub const BOARD_SIZE: usize = 8;

/// Default number of pieces dealt per hand
pub const BATCH_SIZE: usize = 3;

/// Largest supported board dimension
pub const MAX_BOARD_SIZE: usize = 16;

/// Largest supported hand size
pub const MAX_BATCH_SIZE: usize = 8;

/// Largest row/column extent of any catalog shape (h4 rotated is 4x1)
pub const MAX_SHAPE_DIM: usize = 4;

/// Base points per cleared line; the line bonus is `lines * LINE_CLEAR_BASE * lines`
pub const LINE_CLEAR_BASE: u32 = 100;

/// Bonus for a placement that clears lines and leaves the board empty
pub const PERFECT_CLEAR_BONUS: u32 = 1000;

/// How long the presentation layer keeps a placement feedback message visible
pub const FEEDBACK_DURATION_MS: u32 = 1000;

/// Storage key for the persisted high score (decimal integer string)
pub const HIGH_SCORE_KEY: &str = "pinkBlastHS";

/// A cell on the game board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    #[default]
    Empty,
    Filled,
}

impl Cell {
    pub fn is_filled(self) -> bool {
        self == Cell::Filled
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// The eleven catalog shapes, in catalog order
///
/// - **Single**: one cell
/// - **H2 / V2**: 1x2 and 2x1 dominoes
/// - **Z**: skew tetromino
/// - **H3 / V3**: 1x3 and 3x1 bars
/// - **Square**: 2x2 block
/// - **TUp / TDown**: T tetromino pointing up or down
/// - **LBig**: 3x3 corner (five cells)
/// - **H4**: 1x4 bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    Single,
    H2,
    V2,
    Z,
    H3,
    V3,
    Square,
    TUp,
    TDown,
    LBig,
    H4,
}

impl ShapeKind {
    /// Every shape in catalog order
    pub const ALL: [ShapeKind; 11] = [
        ShapeKind::Single,
        ShapeKind::H2,
        ShapeKind::V2,
        ShapeKind::Z,
        ShapeKind::H3,
        ShapeKind::V3,
        ShapeKind::Square,
        ShapeKind::TUp,
        ShapeKind::TDown,
        ShapeKind::LBig,
        ShapeKind::H4,
    ];

    /// Parse shape name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use pink_blast_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("H4"), Some(ShapeKind::H4));
    /// assert_eq!(ShapeKind::from_str("square"), Some(ShapeKind::Square));
    /// assert_eq!(ShapeKind::from_str("pentomino"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "single" => Some(ShapeKind::Single),
            "h2" => Some(ShapeKind::H2),
            "v2" => Some(ShapeKind::V2),
            "z" => Some(ShapeKind::Z),
            "h3" => Some(ShapeKind::H3),
            "v3" => Some(ShapeKind::V3),
            "square" => Some(ShapeKind::Square),
            "t-up" => Some(ShapeKind::TUp),
            "t-down" => Some(ShapeKind::TDown),
            "l-big" => Some(ShapeKind::LBig),
            "h4" => Some(ShapeKind::H4),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Single => "single",
            ShapeKind::H2 => "h2",
            ShapeKind::V2 => "v2",
            ShapeKind::Z => "z",
            ShapeKind::H3 => "h3",
            ShapeKind::V3 => "v3",
            ShapeKind::Square => "square",
            ShapeKind::TUp => "t-up",
            ShapeKind::TDown => "t-down",
            ShapeKind::LBig => "l-big",
            ShapeKind::H4 => "h4",
        }
    }
}

/// Presentation mode
///
/// Mode never changes engine behavior or scoring; it only decides whether the
/// upcoming hand is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Next hand hidden
    #[default]
    Classic,
    /// Next hand previewed
    Future,
}

impl Mode {
    pub fn toggle(self) -> Self {
        match self {
            Mode::Classic => Mode::Future,
            Mode::Future => Mode::Classic,
        }
    }

    pub fn shows_next_hand(self) -> bool {
        self == Mode::Future
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(Mode::Classic),
            "future" => Some(Mode::Future),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Classic => "CLASSIC",
            Mode::Future => "FUTURE",
        }
    }
}

/// Named audio cues requested by the engine
///
/// Several cues may fire for one event (e.g. `Clear1` together with `Good`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    Pickup,
    Place,
    /// Exactly one line cleared
    Clear1,
    /// Two or more lines cleared
    Combo,
    /// Board emptied
    Perfect,
    Good,
    Amazing,
    GameOver,
    GameStart,
}

impl SoundCue {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::Pickup => "PICKUP",
            SoundCue::Place => "PLACE",
            SoundCue::Clear1 => "CLEAR_1",
            SoundCue::Combo => "COMBO",
            SoundCue::Perfect => "PERFECT",
            SoundCue::Good => "GOOD",
            SoundCue::Amazing => "AMAZING",
            SoundCue::GameOver => "GAMEOVER",
            SoundCue::GameStart => "GAMESTART",
        }
    }
}

/// Category of a placement feedback message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    /// Full board clear
    Clear,
    /// Line-clear points
    Points,
}

/// Player intents accepted by the game session
///
/// These are produced by the input layer and applied through
/// `GameSession::apply_action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameAction {
    /// Toggle selection of a hand slot
    Select(usize),
    /// Place the selected piece with its anchor at `(row, col)`
    Place { row: usize, col: usize },
    /// Start a fresh game
    Retry,
}

//! Scoring module - per-placement points and running totals
//!
//! A placement earns one point per tile placed, a quadratic bonus for the
//! lines it completes, and a flat bonus when it empties the board:
//!
//! - 0 lines: 0
//! - 1 line: 100
//! - 2 lines: 400
//! - 3 lines: 900
//! - n lines: `n * 100 * n`

use serde::{Deserialize, Serialize};

use crate::types::{LINE_CLEAR_BASE, PERFECT_CLEAR_BONUS};

/// Score breakdown of one placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TurnScore {
    pub tiles_placed: u32,
    /// Completed rows plus completed columns
    pub line_count: u32,
    pub line_points: u32,
    pub board_clear_bonus: u32,
    pub total: u32,
}

impl TurnScore {
    pub fn is_perfect_clear(&self) -> bool {
        self.board_clear_bonus > 0
    }
}

/// Quadratic line bonus: `lines * 100 * lines`
pub fn calculate_line_points(line_count: u32) -> u32 {
    line_count
        .saturating_mul(LINE_CLEAR_BASE)
        .saturating_mul(line_count)
}

/// 1000 when the board ended empty and this placement cleared something
pub fn calculate_board_clear_bonus(board_empty_after: bool, line_count: u32) -> u32 {
    if board_empty_after && line_count > 0 {
        PERFECT_CLEAR_BONUS
    } else {
        0
    }
}

/// Calculate the complete score for one placement
pub fn calculate_turn_score(
    tiles_placed: u32,
    line_count: u32,
    board_empty_after: bool,
) -> TurnScore {
    let line_points = calculate_line_points(line_count);
    let board_clear_bonus = calculate_board_clear_bonus(board_empty_after, line_count);
    let total = tiles_placed
        .saturating_add(line_points)
        .saturating_add(board_clear_bonus);

    TurnScore {
        tiles_placed,
        line_count,
        line_points,
        board_clear_bonus,
        total,
    }
}

/// Parse a stored high score.
///
/// Anything that is not a non-negative decimal integer means "no prior high
/// score".
pub fn parse_high_score(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok()).unwrap_or(0)
}

/// Running score and best score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreKeeper {
    score: u32,
    high_score: u32,
}

impl ScoreKeeper {
    pub fn new(high_score: u32) -> Self {
        Self {
            score: 0,
            high_score,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Add a turn's points; returns true when this raised the high score
    pub fn add(&mut self, turn: &TurnScore) -> bool {
        self.score = self.score.saturating_add(turn.total);
        if self.score > self.high_score {
            self.high_score = self.score;
            return true;
        }
        false
    }

    /// Zero the running score; the high score is kept
    pub fn reset(&mut self) {
        self.score = 0;
    }
}

//! Game configuration
//!
//! Only two knobs exist: the board dimension and the number of pieces dealt
//! per hand. Both default to the classic 8x8 board with 3-piece hands.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::types::{BATCH_SIZE, BOARD_SIZE, MAX_BATCH_SIZE, MAX_BOARD_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    /// Grid dimension N (the board is N x N)
    pub board_size: usize,
    /// Pieces per hand
    pub batch_size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    #[display("board size must be between 1 and {MAX_BOARD_SIZE}, got {_0}")]
    BoardSize(#[error(not(source))] usize),
    #[display("batch size must be between 1 and {MAX_BATCH_SIZE}, got {_0}")]
    BatchSize(#[error(not(source))] usize),
}

impl GameConfig {
    pub fn new(board_size: usize, batch_size: usize) -> Result<Self, ConfigError> {
        Self {
            board_size,
            batch_size,
        }
        .validate()
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if !(1..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::BoardSize(self.board_size));
        }
        if !(1..=MAX_BATCH_SIZE).contains(&self.batch_size) {
            return Err(ConfigError::BatchSize(self.batch_size));
        }
        Ok(self)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            batch_size: BATCH_SIZE,
        }
    }
}

//! Read-only view of a session for the presentation layer

use serde::Serialize;

use crate::board::Board;
use crate::events::Feedback;
use crate::pieces::Piece;
use crate::rng::Hand;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub board: Board,
    /// FNV-1a over the board cells; changes whenever any cell changes
    pub board_hash: u64,
    pub hand: Hand,
    pub next_hand: Hand,
    pub score: u32,
    pub high_score: u32,
    pub selected: Option<usize>,
    pub game_over: bool,
    pub feedback: Option<Feedback>,
    pub episode_id: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }

    pub fn selected_piece(&self) -> Option<&Piece> {
        self.selected.and_then(|i| self.hand.get(i))
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let board = Board::default();
        Self {
            board_hash: board_hash(&board),
            board,
            hand: Hand::new(),
            next_hand: Hand::new(),
            score: 0,
            high_score: 0,
            selected: None,
            game_over: false,
            feedback: None,
            episode_id: 0,
        }
    }
}

/// FNV-1a 64-bit hash of the board dimension and cells
pub fn board_hash(board: &Board) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    let bytes = std::iter::once(board.size() as u8)
        .chain(board.cells().iter().map(|c| c.is_filled() as u8));
    for b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(0x00000100000001B3);
    }
    h
}

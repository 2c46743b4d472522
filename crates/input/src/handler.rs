//! Cursor and mode state for keyboard play.
//!
//! The terminal has no pointer, so the player drives a board cursor and the
//! handler turns "place" into a placement at the cursor cell.

use crossterm::event::KeyEvent;

use crate::map::{handle_key_event, Direction, UiCommand};
use crate::types::{GameAction, Mode, BOARD_SIZE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputHandler {
    row: usize,
    col: usize,
    board_size: usize,
    mode: Mode,
}

impl InputHandler {
    pub fn new(board_size: usize) -> Self {
        Self {
            row: 0,
            col: 0,
            board_size: board_size.max(1),
            mode: Mode::default(),
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Cursor as `(row, col)`
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Resolve a command; returns the session action it produces, if any
    pub fn handle(&mut self, command: UiCommand) -> Option<GameAction> {
        let last = self.board_size - 1;
        match command {
            UiCommand::Move(Direction::Up) => {
                self.row = self.row.saturating_sub(1);
                None
            }
            UiCommand::Move(Direction::Down) => {
                self.row = (self.row + 1).min(last);
                None
            }
            UiCommand::Move(Direction::Left) => {
                self.col = self.col.saturating_sub(1);
                None
            }
            UiCommand::Move(Direction::Right) => {
                self.col = (self.col + 1).min(last);
                None
            }
            UiCommand::Select(index) => Some(GameAction::Select(index)),
            UiCommand::Place => Some(GameAction::Place {
                row: self.row,
                col: self.col,
            }),
            UiCommand::Retry => Some(GameAction::Retry),
            UiCommand::ToggleMode => {
                self.mode = self.mode.toggle();
                None
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<GameAction> {
        handle_key_event(key).and_then(|command| self.handle(command))
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(BOARD_SIZE)
    }
}

//! Game session module - turn sequence and game lifecycle
//!
//! This module ties together the board, batch generation and scoring. A
//! session is either `Playing` (optionally with a hand slot selected) or
//! `GameOver`; only [`GameSession::retry`] leaves `GameOver`.
//!
//! A placement either commits fully or is rejected with the session
//! untouched. Side effects are queued as [`Effect`]s and collected by the
//! host with [`GameSession::take_effects`].

use tracing::{debug, info};

use crate::board::{Board, CompletedLines};
use crate::config::{ConfigError, GameConfig};
use crate::events::{placement_cues, Effect, Feedback};
use crate::pieces::Piece;
use crate::rng::{BatchGenerator, Hand, RandomSource, SimpleRng};
use crate::scoring::{calculate_turn_score, ScoreKeeper, TurnScore};
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, SoundCue};

/// Explicit session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Playing { selected: Option<usize> },
    GameOver,
}

/// Why a placement was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    NotPlayable,
    NoSelection,
    Blocked,
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::NotPlayable => "not_playable",
            PlaceError::NoSelection => "no_selection",
            PlaceError::Blocked => "invalid_place",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PlaceError::NotPlayable => "game is over",
            PlaceError::NoSelection => "no piece selected",
            PlaceError::Blocked => "piece is out of bounds or overlaps a filled cell",
        }
    }
}

/// Result of a committed placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementOutcome {
    pub piece: Piece,
    pub row: usize,
    pub col: usize,
    /// Lines completed by this placement (already cleared from the board)
    pub lines: CompletedLines,
    pub turn: TurnScore,
    pub feedback: Option<Feedback>,
    pub new_high_score: bool,
    /// The hand ran out and was replaced by the next hand
    pub hand_refilled: bool,
    pub game_over: bool,
}

/// One player's game, from retry to game over
#[derive(Debug, Clone)]
pub struct GameSession<R = SimpleRng> {
    config: GameConfig,
    board: Board,
    hand: Hand,
    next_hand: Hand,
    scores: ScoreKeeper,
    state: SessionState,
    feedback: Option<Feedback>,
    generator: BatchGenerator<R>,
    effects: Vec<Effect>,
    /// Monotonic episode id (increments on retry).
    episode_id: u32,
}

impl GameSession<SimpleRng> {
    /// Session over the seeded default RNG
    pub fn with_seed(
        config: GameConfig,
        seed: u32,
        high_score: u32,
    ) -> Result<Self, ConfigError> {
        Self::new(config, SimpleRng::new(seed), high_score)
    }
}

impl<R: RandomSource> GameSession<R> {
    /// Create a session and deal the first hands
    ///
    /// `high_score` is the best score loaded from storage. Fails when the
    /// config is out of range.
    pub fn new(config: GameConfig, rng: R, high_score: u32) -> Result<Self, ConfigError> {
        let config = config.validate()?;
        let mut session = Self {
            config,
            board: Board::new(config.board_size),
            hand: Hand::new(),
            next_hand: Hand::new(),
            scores: ScoreKeeper::new(high_score),
            state: SessionState::Playing { selected: None },
            feedback: None,
            generator: BatchGenerator::new(rng, config.batch_size),
            effects: Vec::new(),
            episode_id: 0,
        };
        session.retry();
        Ok(session)
    }

    /// Start from an arbitrary mid-game position.
    ///
    /// Used for scenario setups and tooling; the board's dimension overrides
    /// `config.board_size`. Score starts at zero. An empty `next_hand` is
    /// dealt from `rng`, and an empty `hand` takes the next hand.
    pub fn from_position(
        config: GameConfig,
        rng: R,
        board: Board,
        mut hand: Hand,
        mut next_hand: Hand,
        high_score: u32,
    ) -> Result<Self, ConfigError> {
        let config = GameConfig {
            board_size: board.size(),
            ..config
        }
        .validate()?;

        let mut generator = BatchGenerator::new(rng, config.batch_size);
        if next_hand.is_empty() {
            next_hand = generator.generate_batch();
        }
        if hand.is_empty() {
            hand = std::mem::replace(&mut next_hand, generator.generate_batch());
        }

        Ok(Self {
            config,
            board,
            hand,
            next_hand,
            scores: ScoreKeeper::new(high_score),
            state: SessionState::Playing { selected: None },
            feedback: None,
            generator,
            effects: Vec::new(),
            episode_id: 1,
        })
    }

    /// Reset board, score and hands; valid from any state
    pub fn retry(&mut self) {
        self.board = Board::new(self.config.board_size);
        self.scores.reset();
        self.hand = self.generator.generate_batch();
        self.next_hand = self.generator.generate_batch();
        self.state = SessionState::Playing { selected: None };
        self.feedback = None;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.effects.push(Effect::Sound(SoundCue::GameStart));

        debug!(
            episode = self.episode_id,
            board_size = self.config.board_size,
            hand = self.hand.len(),
            "game started"
        );
    }

    /// Toggle selection of a hand slot.
    ///
    /// Returns false (and does nothing) when the game is over or the index
    /// is not a hand slot.
    pub fn select_piece(&mut self, index: usize) -> bool {
        let SessionState::Playing { selected } = self.state else {
            return false;
        };
        if index >= self.hand.len() {
            return false;
        }

        if selected == Some(index) {
            self.state = SessionState::Playing { selected: None };
        } else {
            self.state = SessionState::Playing {
                selected: Some(index),
            };
            self.effects.push(Effect::Sound(SoundCue::Pickup));
        }
        true
    }

    /// Place the selected piece with its anchor at `(row, col)`
    pub fn attempt_placement(
        &mut self,
        row: usize,
        col: usize,
    ) -> Result<PlacementOutcome, PlaceError> {
        let SessionState::Playing { selected } = self.state else {
            return Err(PlaceError::NotPlayable);
        };
        let Some(index) = selected else {
            return Err(PlaceError::NoSelection);
        };
        let Some(&piece) = self.hand.get(index) else {
            return Err(PlaceError::NoSelection);
        };
        if !self.board.can_place(&piece.shape, row, col) {
            return Err(PlaceError::Blocked);
        }

        let placed = self.board.place(&piece.shape, row, col);
        let lines = placed.detect_completed_lines();
        let cleared = placed.clear_lines(&lines);
        let turn =
            calculate_turn_score(piece.shape.tile_count(), lines.count(), cleared.is_empty());

        self.board = cleared;
        let new_high_score = self.scores.add(&turn);
        self.feedback = Feedback::from_turn(&turn);

        self.effects.extend(placement_cues(&turn).map(Effect::Sound));
        if new_high_score {
            self.effects.push(Effect::PersistHighScore(self.scores.high_score()));
        }

        debug!(
            piece = piece.kind.as_str(),
            row,
            col,
            tiles = turn.tiles_placed,
            rows = ?lines.rows.as_slice(),
            cols = ?lines.cols.as_slice(),
            points = turn.total,
            score = self.scores.score(),
            "piece placed"
        );
        if new_high_score {
            info!(high_score = self.scores.high_score(), "new high score");
        }

        self.hand.remove(index);
        self.state = SessionState::Playing { selected: None };

        let mut hand_refilled = false;
        let mut game_over = false;
        if self.hand.is_empty() {
            let upcoming = self.generator.generate_batch();
            self.hand = std::mem::replace(&mut self.next_hand, upcoming);
            hand_refilled = true;
            debug!(hand = self.hand.len(), "hand refilled from next hand");
        } else if !self.is_still_playable() {
            // Judged against the visible hand only; the next hand is not consulted.
            self.state = SessionState::GameOver;
            self.effects.push(Effect::Sound(SoundCue::GameOver));
            game_over = true;
            info!(
                score = self.scores.score(),
                remaining = self.hand.len(),
                "game over"
            );
        }

        Ok(PlacementOutcome {
            piece,
            row,
            col,
            lines,
            turn,
            feedback: self.feedback,
            new_high_score,
            hand_refilled,
            game_over,
        })
    }

    /// Apply a player intent; returns whether the session changed
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Select(index) => self.select_piece(index),
            GameAction::Place { row, col } => self.attempt_placement(row, col).is_ok(),
            GameAction::Retry => {
                self.retry();
                true
            }
        }
    }

    /// Whether any piece in the current hand fits anywhere
    pub fn is_still_playable(&self) -> bool {
        self.hand
            .iter()
            .any(|piece| self.board.fits_anywhere(&piece.shape))
    }

    /// Take and clear queued side effects
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    /// Drop the current feedback message (presentation expiry)
    pub fn clear_feedback(&mut self) {
        self.feedback = None;
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn hand(&self) -> &[Piece] {
        &self.hand
    }

    pub fn next_hand(&self) -> &[Piece] {
        &self.next_hand
    }

    pub fn score(&self) -> u32 {
        self.scores.score()
    }

    pub fn high_score(&self) -> u32 {
        self.scores.high_score()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn selected(&self) -> Option<usize> {
        match self.state {
            SessionState::Playing { selected } => selected,
            SessionState::GameOver => None,
        }
    }

    pub fn selected_piece(&self) -> Option<&Piece> {
        self.selected().and_then(|i| self.hand.get(i))
    }

    pub fn game_over(&self) -> bool {
        self.state == SessionState::GameOver
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn rng(&self) -> &R {
        self.generator.rng()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board.clone_from(&self.board);
        out.board_hash = crate::snapshot::board_hash(&self.board);
        out.hand.clone_from(&self.hand);
        out.next_hand.clone_from(&self.next_hand);
        out.score = self.scores.score();
        out.high_score = self.scores.high_score();
        out.selected = self.selected();
        out.game_over = self.game_over();
        out.feedback = self.feedback;
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

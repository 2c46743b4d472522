//! Terminal application state: one session plus its front-end collaborators.

use crossterm::event::KeyEvent;
use tracing::debug;

use crate::adapter::EffectDispatcher;
use crate::core::{GameSession, GameSnapshot, RandomSource, SimpleRng};
use crate::input::InputHandler;
use crate::term::ViewState;
use crate::types::{GameAction, FEEDBACK_DURATION_MS};

/// Expires the feedback message a fixed time after the placement that set it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackTimer {
    duration_ms: u32,
    remaining_ms: Option<u32>,
}

impl FeedbackTimer {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            remaining_ms: None,
        }
    }

    /// Start (or restart) the countdown
    pub fn arm(&mut self) {
        self.remaining_ms = Some(self.duration_ms);
    }

    pub fn disarm(&mut self) {
        self.remaining_ms = None;
    }

    pub fn is_armed(&self) -> bool {
        self.remaining_ms.is_some()
    }

    /// Advance by `elapsed_ms`; returns true exactly once, when time runs out
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        match self.remaining_ms {
            Some(left) if left <= elapsed_ms => {
                self.remaining_ms = None;
                true
            }
            Some(left) => {
                self.remaining_ms = Some(left - elapsed_ms);
                false
            }
            None => false,
        }
    }
}

impl Default for FeedbackTimer {
    fn default() -> Self {
        Self::new(FEEDBACK_DURATION_MS)
    }
}

pub struct App<R = SimpleRng> {
    session: GameSession<R>,
    input: InputHandler,
    dispatcher: EffectDispatcher,
    feedback_timer: FeedbackTimer,
    snapshot: GameSnapshot,
}

impl<R: RandomSource> App<R> {
    /// Wire a session to its collaborators; effects queued so far are sent
    pub fn new(
        session: GameSession<R>,
        input: InputHandler,
        dispatcher: EffectDispatcher,
    ) -> Self {
        let mut app = Self {
            snapshot: session.snapshot(),
            session,
            input,
            dispatcher,
            feedback_timer: FeedbackTimer::default(),
        };
        app.flush_effects();
        app
    }

    /// Handle one key press; returns whether the session changed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match self.input.handle_key(key) {
            Some(action) => self.apply(action),
            None => false,
        }
    }

    /// Apply a session action and deliver the effects it queued
    pub fn apply(&mut self, action: GameAction) -> bool {
        let changed = match action {
            GameAction::Place { row, col } => match self.session.attempt_placement(row, col) {
                Ok(outcome) => {
                    if outcome.feedback.is_some() {
                        self.feedback_timer.arm();
                    }
                    true
                }
                Err(e) => {
                    debug!(code = e.code(), row, col, "placement rejected");
                    false
                }
            },
            GameAction::Retry => {
                self.feedback_timer.disarm();
                self.session.apply_action(action)
            }
            GameAction::Select(_) => self.session.apply_action(action),
        };
        self.flush_effects();
        changed
    }

    /// Advance front-end timers
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.feedback_timer.tick(elapsed_ms) {
            self.session.clear_feedback();
        }
    }

    /// Current snapshot, refreshed in place
    pub fn snapshot(&mut self) -> &GameSnapshot {
        self.session.snapshot_into(&mut self.snapshot);
        &self.snapshot
    }

    pub fn view_state(&self) -> ViewState {
        ViewState {
            cursor: self.input.cursor(),
            mode: self.input.mode(),
        }
    }

    pub fn session(&self) -> &GameSession<R> {
        &self.session
    }

    pub fn dispatcher(&self) -> &EffectDispatcher {
        &self.dispatcher
    }

    fn flush_effects(&mut self) {
        let effects = self.session.take_effects();
        if !effects.is_empty() {
            self.dispatcher.dispatch(effects);
        }
    }
}

//! Background delivery of session effects.
//!
//! The game loop hands effects to [`EffectDispatcher::dispatch`] and moves on;
//! a worker thread plays cues and persists high scores. Storage failures are
//! logged and never reach the game.

use std::sync::mpsc;
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use crate::audio::AudioSink;
use crate::core::Effect;
use crate::store::{save_high_score, KeyValueStore};

enum Job {
    Effect(Effect),
    Flush(mpsc::Sender<()>),
}

pub struct EffectDispatcher {
    tx: Option<mpsc::Sender<Job>>,
    worker: Option<JoinHandle<()>>,
}

impl EffectDispatcher {
    pub fn spawn(mut store: Box<dyn KeyValueStore>, mut audio: Box<dyn AudioSink>) -> Self {
        let (tx, rx) = mpsc::channel::<Job>();
        let worker = thread::spawn(move || {
            for job in rx {
                match job {
                    Job::Effect(Effect::Sound(cue)) => audio.play(cue),
                    Job::Effect(Effect::PersistHighScore(score)) => {
                        match save_high_score(store.as_mut(), score) {
                            Ok(()) => debug!(score, "high score saved"),
                            Err(e) => warn!(score, error = %e, "failed to save high score"),
                        }
                    }
                    Job::Flush(done) => {
                        let _ = done.send(());
                    }
                }
            }
        });

        Self {
            tx: Some(tx),
            worker: Some(worker),
        }
    }

    pub fn dispatch(&self, effects: impl IntoIterator<Item = Effect>) {
        let Some(tx) = &self.tx else {
            return;
        };
        for effect in effects {
            if tx.send(Job::Effect(effect)).is_err() {
                warn!("effect worker stopped; dropping effects");
                return;
            }
        }
    }

    /// Block until everything dispatched so far has been handled
    pub fn flush(&self) {
        let Some(tx) = &self.tx else {
            return;
        };
        let (done_tx, done_rx) = mpsc::channel();
        if tx.send(Job::Flush(done_tx)).is_ok() {
            let _ = done_rx.recv();
        }
    }
}

impl Drop for EffectDispatcher {
    fn drop(&mut self) {
        // Closing the channel ends the worker loop.
        self.tx.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

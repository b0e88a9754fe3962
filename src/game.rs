//! Game facade: state machine, intent capture, persistence wiring
//!
//! Owns the authoritative [`GameState`] and gates the simulation tick. An
//! external scheduler calls [`Game::step`] once per display refresh; the
//! presentation adapter raises zero-argument start/jump intents and reads a
//! [`Snapshot`] back each frame.

use crate::highscore::HighScore;
use crate::sim::{GamePhase, GameState, Snapshot, TickInput, tick};

/// Top-level game instance
///
/// Phase transitions: Start -> Playing -> GameOver -> Playing (retry goes
/// straight back into a fresh run through the same initialization path).
#[derive(Debug)]
pub struct Game {
    state: GameState,
    scores: HighScore,
    /// Base seed; each run derives its own so retries get fresh layouts
    seed: u64,
    runs: u64,
    /// Size-1 intent latch: only the latest unconsumed jump matters, extra
    /// requests before the next tick are dropped
    jump_pending: bool,
}

impl Game {
    /// Create an idle game with a random base seed
    pub fn new(scores: HighScore) -> Self {
        Self::with_seed(rand::random(), scores)
    }

    /// Create an idle game with a fixed base seed (reproducible runs)
    pub fn with_seed(seed: u64, scores: HighScore) -> Self {
        let state = GameState::idle(seed, scores.best());
        Self {
            state,
            scores,
            seed,
            runs: 0,
            jump_pending: false,
        }
    }

    /// Start a run, or restart after a game over. Ignored while a run is
    /// already in progress.
    pub fn start(&mut self) {
        if self.state.phase == GamePhase::Playing {
            return;
        }
        let run_seed = self.seed.wrapping_add(self.runs);
        self.runs += 1;
        self.jump_pending = false;
        self.state = GameState::new_run(run_seed, self.scores.best());
    }

    /// Latch a jump intent, consumed at the start of the next tick. No-op
    /// outside of Playing; a jump while airborne is dropped at consumption.
    pub fn request_jump(&mut self) {
        if self.state.phase == GamePhase::Playing {
            self.jump_pending = true;
        }
    }

    /// Advance one tick if a run is in progress
    pub fn step(&mut self) {
        if self.state.phase != GamePhase::Playing {
            self.jump_pending = false;
            return;
        }
        let input = TickInput {
            jump: std::mem::take(&mut self.jump_pending),
        };
        tick(&mut self.state, &input, &mut self.scores);
    }

    /// Read-only frame snapshot for the presentation adapter
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Direct view of the simulation state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Session-best score, in-memory authoritative
    pub fn high_score(&self) -> u32 {
        self.scores.best()
    }
}

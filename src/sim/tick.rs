//! Fixed timestep simulation tick
//!
//! Core loop that advances one frame of the run. The tick is a pure function
//! of the current state plus the frame's input, with a single side effect:
//! the high-score store is updated on the Playing -> GameOver transition.

use crate::consts::*;
use crate::highscore::HighScore;

use super::spawn::spawn_clock;
use super::state::{GamePhase, GameState};

/// Input intents for a single tick (edge-triggered, consumed at tick start)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump off the currently ridden clock (click/tap/space)
    pub jump: bool,
}

/// Advance the game state by one fixed timestep.
///
/// Does nothing unless the state is in the Playing phase; once the run ends
/// the state is frozen apart from the one-time high-score update performed
/// on the transition itself.
pub fn tick(state: &mut GameState, input: &TickInput, scores: &mut HighScore) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    // Consume the jump intent against the pre-advance angle, which is the
    // hand position the player saw when the intent was raised. A jump while
    // airborne is silently dropped.
    if input.jump
        && let Some(id) = state.hopper.attached_to
        && let Some(hand_angle) = state.clock_by_id(id).map(|c| c.angle)
    {
        state.hopper.launch(hand_angle);
    }

    // Every clock hand advances, every tick
    for clock in &mut state.clocks {
        clock.advance();
    }

    if let Some(id) = state.hopper.attached_to {
        match state.clock_by_id(id).map(|c| c.rim_point()) {
            // Riding: rigidly locked to the rim, rotating with the hand
            Some(rim) => state.hopper.pos = rim,
            // Window management should make this impossible; recover by
            // releasing the hopper instead of failing
            None => {
                log::warn!("attached clock {id} left the window, releasing hopper");
                state.hopper.attached_to = None;
            }
        }
    }

    if state.hopper.attached_to.is_none() {
        // Free flight: plain Euler step, no gravity
        state.hopper.pos += state.hopper.vel;

        // First clock within snap range wins, in window order. Deliberately
        // not nearest-match: the scan-order tie-break is part of the feel.
        let pos = state.hopper.pos;
        let hit = state
            .clocks
            .iter()
            .find(|c| pos.distance(c.pos) < c.radius + SNAP_TOLERANCE)
            .cloned();
        if let Some(clock) = hit {
            state.hopper.snap_to(&clock);
            // Score is the highest index ever reached; reattaching to an
            // already-visited clock changes nothing
            if clock.id > state.score {
                state.score = clock.id;
            }
        } else {
            // Out of bounds ends the run (only reachable while airborne)
            let fell_below = pos.y > state.camera_y + PLAYFIELD_HEIGHT + BOUNDS_MARGIN;
            if pos.x < -BOUNDS_MARGIN || pos.x > PLAYFIELD_WIDTH + BOUNDS_MARGIN || fell_below {
                state.phase = GamePhase::GameOver;
            }
        }
    }

    // Camera follows progress only (decreasing y), exponentially smoothed.
    // Runs every tick, including the one that ends the run.
    let target = (state.hopper.pos.y - PLAYFIELD_HEIGHT / 2.0).min(state.camera_y);
    state.camera_y += (target - state.camera_y) * CAMERA_SMOOTHING;

    // Stream maintenance: keep generating ahead of the camera, cull behind
    if let Some(newest) = state.clocks.last() {
        if newest.pos.y > state.camera_y - SPAWN_LOOKAHEAD {
            let next_index = newest.id + 1;
            let next_y = newest.pos.y - CLOCK_SPACING;
            let clock = spawn_clock(&mut state.rng, next_index, next_y);
            state.clocks.push(clock);
        }
    }
    if state.clocks.len() > MAX_CLOCKS {
        state.clocks.remove(0);
    }

    // One-time side effect on the run's end: persist a beaten best.
    // In-memory value stays authoritative if the write fails.
    if state.phase == GamePhase::GameOver {
        state.high_score = scores.record(state.score);
    }
}

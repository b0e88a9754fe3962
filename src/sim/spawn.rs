//! Clock generation and the difficulty ramp
//!
//! The placement policy (where the next clock goes vertically) lives in the
//! tick; this module only builds individual clocks for a given index.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use std::f32::consts::TAU;

use super::state::Clock;
use crate::consts::*;

/// Generate the clock for `index` at the caller-chosen height.
///
/// Horizontal position and initial hand phase are constrained-random; spin
/// speed grows 5% per index, alternating direction with index parity. This
/// ramp is the game's sole difficulty curve.
pub fn spawn_clock(rng: &mut Pcg32, index: u32, y: f32) -> Clock {
    let speed_scale = 1.0 + index as f32 * SPEED_GROWTH_PER_INDEX;
    let direction = if index.is_multiple_of(2) { 1.0 } else { -1.0 };

    Clock {
        id: index,
        pos: Vec2::new(
            rng.random_range(SPAWN_X_MARGIN..=PLAYFIELD_WIDTH - SPAWN_X_MARGIN),
            y,
        ),
        radius: CLOCK_RADIUS,
        angle: rng.random_range(0.0..TAU),
        rotation_speed: ROTATION_BASE_SPEED * speed_scale * direction,
        palette: (index % CLOCK_PALETTE.len() as u32) as u8,
    }
}

/// The deterministic starting perch (index 0): playfield center-bottom,
/// hand pointing straight up, base spin speed.
pub fn anchor_clock() -> Clock {
    Clock {
        id: 0,
        pos: Vec2::new(ANCHOR_X, ANCHOR_Y),
        radius: CLOCK_RADIUS,
        angle: crate::wrap_angle(ANCHOR_ANGLE),
        rotation_speed: ROTATION_BASE_SPEED,
        palette: 0,
    }
}

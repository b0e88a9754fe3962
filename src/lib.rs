//! Clock Hop - an endless clock-jumping arcade game core
//!
//! A character rides the rim of rotating clock faces and jumps from one to
//! the next, climbing an endless procedurally generated chain. This crate is
//! the headless core: rendering and raw input live in an external adapter
//! that reads a [`sim::Snapshot`] each frame and raises start/jump intents.
//!
//! Core modules:
//! - `sim`: deterministic simulation (clock rotation, attachment, scoring)
//! - `game`: state machine facade driven by an external frame scheduler
//! - `highscore`: single best-score persistence

pub mod game;
pub mod highscore;
pub mod sim;

pub use game::Game;
pub use highscore::HighScore;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (world units; y grows downward)
    pub const PLAYFIELD_WIDTH: f32 = 400.0;
    pub const PLAYFIELD_HEIGHT: f32 = 700.0;

    /// Clock defaults
    pub const CLOCK_RADIUS: f32 = 60.0;
    /// Base hand rotation speed (radians per tick)
    pub const ROTATION_BASE_SPEED: f32 = 0.05;
    /// Per-index speed ramp: clock N spins at base * (1 + N * growth)
    pub const SPEED_GROWTH_PER_INDEX: f32 = 0.05;
    /// Vertical distance between consecutive clocks
    pub const CLOCK_SPACING: f32 = 250.0;
    /// Spawn x is drawn inside [margin, width - margin]
    pub const SPAWN_X_MARGIN: f32 = 50.0;

    /// Anchor clock (index 0): the deterministic starting perch
    pub const ANCHOR_X: f32 = PLAYFIELD_WIDTH / 2.0;
    pub const ANCHOR_Y: f32 = PLAYFIELD_HEIGHT - 150.0;
    pub const ANCHOR_ANGLE: f32 = -std::f32::consts::FRAC_PI_2;

    /// Hopper launch speed (world units per tick)
    pub const JUMP_SPEED: f32 = 12.0;
    /// Extra reach beyond a clock's radius that still snaps the hopper on
    pub const SNAP_TOLERANCE: f32 = 10.0;

    /// How far past the playfield edge (or below the camera) ends the run
    pub const BOUNDS_MARGIN: f32 = 100.0;

    /// Camera exponential smoothing factor per tick
    pub const CAMERA_SMOOTHING: f32 = 0.1;

    /// Spawn a new clock while the newest is within this distance of the
    /// camera's top edge
    pub const SPAWN_LOOKAHEAD: f32 = 500.0;
    /// Sliding window bound; the oldest clock is culled past this
    pub const MAX_CLOCKS: usize = 15;
    /// Window size built by a fresh run (anchor included)
    pub const INITIAL_CLOCKS: u32 = 6;

    /// Cosmetic clock face palette, cycled by index
    pub const CLOCK_PALETTE: [&str; 6] = [
        "#F472B6", // pink
        "#60A5FA", // blue
        "#34D399", // green
        "#FBBF24", // yellow
        "#A78BFA", // purple
        "#FB923C", // orange
    ];
}

/// Wrap an angle to [0, 2π)
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    angle.rem_euclid(std::f32::consts::TAU)
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::TAU;

    proptest! {
        #[test]
        fn test_wrap_angle_range(angle in -1000.0f32..1000.0) {
            let wrapped = wrap_angle(angle);
            prop_assert!((0.0..TAU).contains(&wrapped));
        }

        #[test]
        fn test_wrap_angle_preserves_direction(angle in -10.0f32..10.0) {
            let wrapped = wrap_angle(angle);
            prop_assert!((wrapped.cos() - angle.cos()).abs() < 1e-4);
            prop_assert!((wrapped.sin() - angle.sin()).abs() < 1e-4);
        }
    }

    #[test]
    fn test_polar_to_cartesian_axes() {
        assert!((polar_to_cartesian(60.0, 0.0) - Vec2::new(60.0, 0.0)).length() < 1e-4);
        let up = polar_to_cartesian(60.0, -std::f32::consts::FRAC_PI_2);
        assert!((up - Vec2::new(0.0, -60.0)).length() < 1e-4);
    }
}

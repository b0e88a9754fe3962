//! Game state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawn::{anchor_clock, spawn_clock};
use crate::consts::*;
use crate::polar_to_cartesian;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Idle, awaiting the first start intent
    #[default]
    Start,
    /// Simulation active
    Playing,
    /// Run ended, simulation frozen, awaiting retry
    GameOver,
}

/// A rotating clock hazard
///
/// `radius` and `rotation_speed` are fixed at creation; only `angle` mutates,
/// once per tick. Ids are monotone creation indices across the whole run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clock {
    pub id: u32,
    /// Center position in world coordinates
    pub pos: Vec2,
    pub radius: f32,
    /// Current hand angle, wrapped to [0, 2π)
    pub angle: f32,
    /// Signed radians per tick; sign alternates with index parity
    pub rotation_speed: f32,
    /// Cosmetic palette index (see [`crate::consts::CLOCK_PALETTE`])
    pub palette: u8,
}

impl Clock {
    /// Advance the hand by one tick, keeping the angle in [0, 2π)
    pub fn advance(&mut self) {
        self.angle = crate::wrap_angle(self.angle + self.rotation_speed);
    }

    /// Point on the rim where the hand currently points (the hopper's perch)
    pub fn rim_point(&self) -> Vec2 {
        self.pos + polar_to_cartesian(self.radius, self.angle)
    }
}

/// The player character
///
/// Exactly one of two modes holds at any time: riding a clock (`attached_to`
/// set, velocity zero, position locked to the rim) or free-flying with a
/// constant velocity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hopper {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Non-owning reference to the clock currently ridden, by id
    pub attached_to: Option<u32>,
}

impl Hopper {
    /// Facing angle for rendering: direction of travel while airborne
    pub fn heading(&self) -> f32 {
        if self.attached_to.is_some() {
            0.0
        } else {
            self.vel.y.atan2(self.vel.x)
        }
    }

    /// Leave the current clock along its hand direction
    pub fn launch(&mut self, hand_angle: f32) {
        self.vel = polar_to_cartesian(JUMP_SPEED, hand_angle);
        self.attached_to = None;
    }

    /// Lock onto a clock's rim, killing all velocity
    pub fn snap_to(&mut self, clock: &Clock) {
        self.attached_to = Some(clock.id);
        self.vel = Vec2::ZERO;
        self.pos = clock.rim_point();
    }
}

/// Read-only view of the hopper for the presentation adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HopperPose {
    pub pos: Vec2,
    pub heading: f32,
    pub attached_to: Option<u32>,
}

/// Per-frame state snapshot consumed by the presentation adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub high_score: u32,
    pub camera_y: f32,
    pub hopper: HopperPose,
    /// Active window, ordered by creation index
    pub clocks: Vec<Clock>,
}

/// Complete simulation state for one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    /// Highest clock index attached to this run; monotone within a run
    pub score: u32,
    /// Session-best mirror of the persisted high score
    pub high_score: u32,
    pub hopper: Hopper,
    /// Sliding window over the unbounded clock stream, ordered by id
    pub clocks: Vec<Clock>,
    /// Viewport top edge; only ever moves toward progress (decreasing y)
    pub camera_y: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Idle pre-run state: no clocks, hopper parked on the anchor position
    pub fn idle(seed: u64, high_score: u32) -> Self {
        Self {
            seed,
            phase: GamePhase::Start,
            score: 0,
            high_score,
            hopper: Hopper {
                pos: Vec2::new(ANCHOR_X, ANCHOR_Y),
                vel: Vec2::ZERO,
                attached_to: None,
            },
            clocks: Vec::new(),
            camera_y: 0.0,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Fresh Playing state: anchor clock plus a lookahead of generated
    /// clocks, hopper attached to the anchor, score and camera reset
    pub fn new_run(seed: u64, high_score: u32) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);

        let mut clocks = vec![anchor_clock()];
        for index in 1..INITIAL_CLOCKS {
            let y = ANCHOR_Y - index as f32 * CLOCK_SPACING;
            clocks.push(spawn_clock(&mut rng, index, y));
        }

        let mut hopper = Hopper {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            attached_to: None,
        };
        hopper.snap_to(&clocks[0]);

        Self {
            seed,
            phase: GamePhase::Playing,
            score: 0,
            high_score,
            hopper,
            clocks,
            camera_y: 0.0,
            time_ticks: 0,
            rng,
        }
    }

    /// Look up a clock still in the window
    pub fn clock_by_id(&self, id: u32) -> Option<&Clock> {
        self.clocks.iter().find(|c| c.id == id)
    }

    /// Cheap owned copy for the presentation adapter
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            score: self.score,
            high_score: self.high_score,
            camera_y: self.camera_y,
            hopper: HopperPose {
                pos: self.hopper.pos,
                heading: self.hopper.heading(),
                attached_to: self.hopper.attached_to,
            },
            clocks: self.clocks.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    #[test]
    fn test_new_run_window_layout() {
        let state = GameState::new_run(7, 0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.clocks.len(), INITIAL_CLOCKS as usize);

        for (i, clock) in state.clocks.iter().enumerate() {
            assert_eq!(clock.id, i as u32);
            let expected_y = ANCHOR_Y - i as f32 * CLOCK_SPACING;
            assert!((clock.pos.y - expected_y).abs() < 1e-4);
        }
    }

    #[test]
    fn test_new_run_hopper_starts_on_anchor_rim() {
        let state = GameState::new_run(7, 0);
        assert_eq!(state.hopper.attached_to, Some(0));
        assert_eq!(state.hopper.vel, Vec2::ZERO);
        let rim = state.clocks[0].rim_point();
        assert!((state.hopper.pos - rim).length() < 1e-4);
    }

    #[test]
    fn test_clock_advance_wraps() {
        let mut clock = Clock {
            id: 0,
            pos: Vec2::ZERO,
            radius: CLOCK_RADIUS,
            angle: TAU - 0.01,
            rotation_speed: 0.05,
            palette: 0,
        };
        clock.advance();
        assert!((clock.angle - 0.04).abs() < 1e-3);

        clock.angle = 0.01;
        clock.rotation_speed = -0.05;
        clock.advance();
        assert!((clock.angle - (TAU - 0.04)).abs() < 1e-3);
    }

    #[test]
    fn test_snap_puts_hopper_on_rim() {
        let clock = Clock {
            id: 3,
            pos: Vec2::new(100.0, 200.0),
            radius: CLOCK_RADIUS,
            angle: 0.0,
            rotation_speed: 0.05,
            palette: 3,
        };
        let mut hopper = Hopper {
            pos: Vec2::new(150.0, 200.0),
            vel: Vec2::new(5.0, -3.0),
            attached_to: None,
        };
        hopper.snap_to(&clock);
        assert_eq!(hopper.attached_to, Some(3));
        assert_eq!(hopper.vel, Vec2::ZERO);
        assert!((hopper.pos - Vec2::new(160.0, 200.0)).length() < 1e-4);
    }

    #[test]
    fn test_heading_follows_velocity_when_airborne() {
        let mut hopper = Hopper {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            attached_to: Some(0),
        };
        assert_eq!(hopper.heading(), 0.0);

        hopper.launch(std::f32::consts::FRAC_PI_2);
        assert!((hopper.heading() - std::f32::consts::FRAC_PI_2).abs() < 1e-4);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let state = GameState::new_run(42, 9);
        let snap = state.snapshot();
        assert_eq!(snap.phase, GamePhase::Playing);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.high_score, 9);
        assert_eq!(snap.clocks.len(), state.clocks.len());
        assert_eq!(snap.hopper.attached_to, Some(0));
    }
}

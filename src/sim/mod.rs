//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (window ordered by clock id)
//! - No rendering or platform dependencies

pub mod spawn;
pub mod state;
pub mod tick;

pub use spawn::{anchor_clock, spawn_clock};
pub use state::{Clock, GamePhase, GameState, Hopper, HopperPose, Snapshot};
pub use tick::{TickInput, tick};

//! Simulation engine for Sierra.
//!
//! Owns the player, the enemy spawner and its hecs world, advances them
//! once per frame, and produces `SimulationSnapshot`s for the presentation
//! layer.

pub mod engine;
pub mod player;
pub mod projectile;
pub mod spawner;
pub mod systems;

pub use sierra_core as core;
pub use engine::SimulationEngine;

/// Frame time with negative or non-finite values replaced by zero.
pub(crate) fn clamp_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        log::warn!("rejecting delta time {dt}, using 0");
        0.0
    }
}

//! ECS systems that operate on the enemy world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only).
//! Timers and counters they need are passed in by the spawner that owns them.

pub mod cleanup;
pub mod collision;
pub mod pursuit;
pub mod snapshot;
pub mod spawn;

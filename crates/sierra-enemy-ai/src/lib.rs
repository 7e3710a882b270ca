//! Enemy behavior for Sierra.
//!
//! Pursuit steering, spawn placement and collision geometry. Pure
//! functions over plain data; no ECS dependency.

pub mod collision;
pub mod placement;
pub mod pursuit;

pub use sierra_core as core;

#[cfg(test)]
mod tests;

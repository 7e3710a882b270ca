//! ECS components for hecs enemy entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::types::Vector2D;

/// Marks an entity as a hostile actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    /// Session-unique id, assigned in spawn order.
    pub id: u32,
}

/// World-space position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vector2D);

/// Chases the player at a fixed speed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pursuit {
    /// World units per second.
    pub speed: f32,
}

/// Circular collision body.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hitbox {
    pub radius: f32,
}

/// Alive flag. Cleared by collision resolution; dead entities are
/// despawned by the cleanup system in a separate pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitality {
    pub alive: bool,
}

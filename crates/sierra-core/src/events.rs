//! Events emitted by the simulation for audio, UI and session feedback.

use serde::{Deserialize, Serialize};

use crate::types::Vector2D;

/// Discrete notifications raised during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// The player fired a round.
    ShotFired {
        position: Vector2D,
        direction: Vector2D,
    },
    /// A projectile killed an enemy.
    EnemyDied { enemy_id: u32, position: Vector2D },
    /// An enemy reached the player. Ends the session.
    PlayerDied { position: Vector2D },
}

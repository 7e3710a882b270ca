//! Simulation snapshot: the complete visible state handed to collaborators each tick.

use serde::{Deserialize, Serialize};

use crate::enums::SessionPhase;
use crate::events::SimEvent;
use crate::types::{SimTime, Vector2D};

/// Read-only copy of the simulation after a tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    pub time: SimTime,
    pub phase: SessionPhase,
    pub player_position: Vector2D,
    /// Facing angle in degrees, `[0, 360)`.
    pub player_facing_deg: f32,
    pub player_radius: f32,
    pub kill_count: u32,
    pub magazine: MagazineView,
    pub projectiles: Vec<ProjectileView>,
    /// Live enemies, sorted by id.
    pub enemies: Vec<EnemyView>,
    /// Events raised during this tick, in the order they occurred.
    pub events: Vec<SimEvent>,
}

/// Rounds loaded versus magazine size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagazineView {
    pub rounds: u32,
    pub capacity: u32,
}

/// A live projectile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Vector2D,
    pub direction: Vector2D,
    pub distance_traveled: f32,
}

/// A live enemy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub position: Vector2D,
    pub radius: f32,
}

/// Point-in-time positions of every actor, for save games.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameData {
    pub player_position: Vector2D,
    pub enemy_positions: Vec<Vector2D>,
    pub projectile_positions: Vec<Vector2D>,
}

impl SimulationSnapshot {
    /// Positions-only view of this snapshot.
    pub fn game_data(&self) -> GameData {
        GameData {
            player_position: self.player_position,
            enemy_positions: self.enemies.iter().map(|e| e.position).collect(),
            projectile_positions: self.projectiles.iter().map(|p| p.position).collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn player_died(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, SimEvent::PlayerDied { .. }))
    }
}

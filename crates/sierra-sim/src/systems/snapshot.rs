//! Snapshot system: copies player and enemy state into a `SimulationSnapshot`.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use sierra_core::components::{Enemy, Hitbox, Position, Vitality};
use sierra_core::enums::SessionPhase;
use sierra_core::events::SimEvent;
use sierra_core::state::{EnemyView, SimulationSnapshot};
use sierra_core::types::SimTime;

use crate::player::PlayerActor;

/// Build a complete snapshot from the current simulation state.
pub fn build_snapshot(
    world: &World,
    player: &PlayerActor,
    time: &SimTime,
    phase: SessionPhase,
    events: Vec<SimEvent>,
) -> SimulationSnapshot {
    SimulationSnapshot {
        time: *time,
        phase,
        player_position: player.position(),
        player_facing_deg: player.facing_deg(),
        player_radius: player.collision_radius(),
        kill_count: player.kill_count(),
        magazine: player.magazine(),
        projectiles: player.projectiles().iter().map(|p| p.view()).collect(),
        enemies: build_enemies(world),
        events,
    }
}

/// EnemyView list for every live enemy, sorted by id.
pub fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut query = world.query::<(&Enemy, &Position, &Hitbox, &Vitality)>();
    let mut enemies: Vec<EnemyView> = query
        .iter()
        .filter(|(_, (_, _, _, vitality))| vitality.alive)
        .map(|(_, (enemy, pos, hitbox, _))| EnemyView {
            id: enemy.id,
            position: pos.0,
            radius: hitbox.radius,
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}

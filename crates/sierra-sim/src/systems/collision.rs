//! Collision system: enemy contact with the player, and projectile hits on enemies.
//!
//! Resolution only marks enemies dead; the cleanup system removes them.

use hecs::{Entity, World};

use sierra_core::components::{Enemy, Hitbox, Position, Vitality};
use sierra_core::events::SimEvent;
use sierra_core::types::Vector2D;
use sierra_enemy_ai::collision::{circles_touch, nearest_containing};

use crate::projectile::Projectile;

/// Result of the projectile pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectileHits {
    /// Indices into the projectile slice that struck an enemy.
    pub consumed: Vec<usize>,
    pub kills: u32,
}

struct Target {
    entity: Entity,
    id: u32,
    position: Vector2D,
    radius: f32,
    killed: bool,
}

/// Id of the lowest-numbered live enemy touching the player, if any.
pub fn player_contact(world: &World, player_position: Vector2D, player_radius: f32) -> Option<u32> {
    world
        .query::<(&Enemy, &Position, &Hitbox, &Vitality)>()
        .iter()
        .filter(|(_, (_, pos, hitbox, vitality))| {
            vitality.alive && circles_touch(pos.0, hitbox.radius, player_position, player_radius)
        })
        .map(|(_, (enemy, _, _, _))| enemy.id)
        .min()
}

/// Match each projectile against live enemies. A projectile inside several
/// enemies hits only the nearest, and an enemy can be killed at most once.
/// Enemies with an id at or above `exclude_from_id` are ignored.
pub fn resolve_projectiles(
    world: &mut World,
    projectiles: &[Projectile],
    exclude_from_id: Option<u32>,
    events: &mut Vec<SimEvent>,
) -> ProjectileHits {
    let mut targets = collect_targets(world, exclude_from_id);
    let mut hits = ProjectileHits::default();

    for (index, projectile) in projectiles.iter().enumerate() {
        if projectile.is_expired() {
            continue;
        }
        let candidates = targets.iter().map(|t| (t.position, t.radius, !t.killed));
        let Some((target_index, _)) = nearest_containing(projectile.position(), candidates) else {
            continue;
        };

        let target = &mut targets[target_index];
        target.killed = true;
        hits.consumed.push(index);
        hits.kills += 1;
        events.push(SimEvent::EnemyDied {
            enemy_id: target.id,
            position: target.position,
        });
        log::debug!("enemy {} killed by projectile {index}", target.id);
    }

    for target in targets.iter().filter(|t| t.killed) {
        if let Ok(mut vitality) = world.get::<&mut Vitality>(target.entity) {
            vitality.alive = false;
        }
    }

    hits
}

/// Live, eligible enemies sorted by id so results do not depend on
/// archetype storage order.
fn collect_targets(world: &World, exclude_from_id: Option<u32>) -> Vec<Target> {
    let mut query = world.query::<(&Enemy, &Position, &Hitbox, &Vitality)>();
    let mut targets: Vec<Target> = query
        .iter()
        .filter(|(_, (enemy, _, _, vitality))| {
            vitality.alive && exclude_from_id.map_or(true, |first| enemy.id < first)
        })
        .map(|(entity, (enemy, pos, hitbox, _))| Target {
            entity,
            id: enemy.id,
            position: pos.0,
            radius: hitbox.radius,
            killed: false,
        })
        .collect();

    targets.sort_by_key(|t| t.id);
    targets
}

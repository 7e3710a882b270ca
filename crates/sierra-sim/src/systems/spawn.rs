//! Spawn system: adds one enemy per elapsed interval while under the population cap.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use sierra_core::components::{Enemy, Hitbox, Position, Pursuit, Vitality};
use sierra_core::config::SimConfig;
use sierra_core::types::Vector2D;
use sierra_enemy_ai::placement::ring_position;

/// Interval timer and population cap.
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    pub interval_secs: f32,
    pub max_population: u32,
    /// Seconds since the last spawn (or session start).
    pub elapsed_secs: f32,
}

/// Stats stamped onto every new enemy.
#[derive(Debug, Clone, Copy)]
pub struct EnemyTemplate {
    pub speed: f32,
    pub radius: f32,
    /// Distance from the player at which enemies appear.
    pub spawn_distance: f32,
}

impl SpawnTimer {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            interval_secs: config.spawn_interval_secs,
            max_population: config.max_enemies,
            elapsed_secs: 0.0,
        }
    }
}

impl EnemyTemplate {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            speed: config.enemy_speed,
            radius: config.enemy_radius,
            spawn_distance: config.spawn_distance,
        }
    }
}

/// Count enemy entities currently in the world.
pub fn population(world: &World) -> u32 {
    let mut query = world.query::<&Enemy>();
    query.iter().count() as u32
}

/// Create one enemy entity with the template's stats.
pub fn spawn_enemy(world: &mut World, id: u32, position: Vector2D, template: &EnemyTemplate) {
    world.spawn((
        Enemy { id },
        Position(position),
        Pursuit {
            speed: template.speed,
        },
        Hitbox {
            radius: template.radius,
        },
        Vitality { alive: true },
    ));
}

/// Advance the timer and spawn at most one enemy on the ring around the
/// player. Several elapsed intervals in one tick still yield a single spawn.
/// Returns the new enemy's id.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    timer: &mut SpawnTimer,
    template: &EnemyTemplate,
    next_id: &mut u32,
    player_position: Vector2D,
    dt: f32,
) -> Option<u32> {
    timer.elapsed_secs += dt;
    if timer.elapsed_secs < timer.interval_secs || population(world) >= timer.max_population {
        return None;
    }

    let id = *next_id;
    *next_id += 1;
    let position = ring_position(rng, player_position, template.spawn_distance);
    spawn_enemy(world, id, position, template);
    timer.elapsed_secs = 0.0;

    log::debug!(
        "enemy {id} spawned at ({:.1}, {:.1})",
        position.x,
        position.y
    );
    Some(id)
}

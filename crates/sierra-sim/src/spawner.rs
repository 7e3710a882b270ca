//! Enemy spawner: owns every enemy, spawns them on a timer, drives pursuit,
//! and resolves collisions against the player and the player's projectiles.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use sierra_core::config::SimConfig;
use sierra_core::enums::SessionPhase;
use sierra_core::events::SimEvent;
use sierra_core::state::EnemyView;
use sierra_core::types::Vector2D;

use crate::player::PlayerActor;
use crate::systems;
use crate::systems::collision::ProjectileHits;
use crate::systems::spawn::{EnemyTemplate, SpawnTimer};

/// What the spawner hands back to the player after a tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpawnerOutcome {
    /// Projectile indices that hit an enemy and must be removed.
    pub consumed_projectiles: Vec<usize>,
    /// Enemies killed this tick.
    pub kills: u32,
    /// An enemy reached the player this tick.
    pub player_died: bool,
}

/// Owns the enemy population for one session at a time.
pub struct EnemySpawner {
    world: World,
    rng: ChaCha8Rng,
    timer: SpawnTimer,
    template: EnemyTemplate,
    phase: SessionPhase,
    next_enemy_id: u32,
    despawn_buffer: Vec<hecs::Entity>,
}

impl EnemySpawner {
    /// `rng` drives spawn placement; seed it for reproducible sessions.
    pub fn new(config: &SimConfig, rng: ChaCha8Rng) -> Self {
        Self {
            world: World::new(),
            rng,
            timer: SpawnTimer::from_config(config),
            template: EnemyTemplate::from_config(config),
            phase: SessionPhase::Active,
            next_enemy_id: 0,
            despawn_buffer: Vec::new(),
        }
    }

    /// Advance one tick against the already-updated player.
    ///
    /// Order: spawn, pursue, enemy→player contact, projectile hits, cleanup.
    /// Does nothing once the player has died.
    pub fn update(
        &mut self,
        dt: f32,
        player: &PlayerActor,
        events: &mut Vec<SimEvent>,
    ) -> SpawnerOutcome {
        let mut outcome = SpawnerOutcome::default();
        if self.phase == SessionPhase::PlayerDied {
            return outcome;
        }
        let dt = crate::clamp_dt(dt);
        let player_position = player.position();

        // 1. Spawning
        let spawned = systems::spawn::run(
            &mut self.world,
            &mut self.rng,
            &mut self.timer,
            &self.template,
            &mut self.next_enemy_id,
            player_position,
            dt,
        );
        // 2. Pursuit
        systems::pursuit::run(&mut self.world, player_position, dt);
        // 3. Enemy contact with the player
        if let Some(enemy_id) = systems::collision::player_contact(
            &self.world,
            player_position,
            player.collision_radius(),
        ) {
            log::info!(
                "player killed by enemy {enemy_id} after {} kills",
                player.kill_count()
            );
            self.phase = SessionPhase::PlayerDied;
            outcome.player_died = true;
            events.push(SimEvent::PlayerDied {
                position: player_position,
            });
        }
        // 4. Projectile hits; enemies spawned this tick are out of reach
        let ProjectileHits { consumed, kills } = systems::collision::resolve_projectiles(
            &mut self.world,
            player.projectiles(),
            spawned,
            events,
        );
        outcome.consumed_projectiles = consumed;
        outcome.kills = kills;
        // 5. Cleanup
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);

        outcome
    }

    /// Clear enemies and timers for a new session. The RNG stream carries on.
    pub fn reset(&mut self) {
        self.world.clear();
        self.timer.elapsed_secs = 0.0;
        self.phase = SessionPhase::Active;
        self.next_enemy_id = 0;
    }

    /// Place an enemy directly, bypassing the timer. Returns its id, or
    /// `None` when the population is already at the cap.
    pub fn spawn_enemy_at(&mut self, position: Vector2D) -> Option<u32> {
        if self.enemy_count() >= self.timer.max_population {
            return None;
        }
        let id = self.next_enemy_id;
        self.next_enemy_id += 1;
        systems::spawn::spawn_enemy(&mut self.world, id, position, &self.template);
        Some(id)
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn enemy_count(&self) -> u32 {
        systems::spawn::population(&self.world)
    }

    pub fn max_population(&self) -> u32 {
        self.timer.max_population
    }

    pub fn time_since_last_spawn(&self) -> f32 {
        self.timer.elapsed_secs
    }

    /// Copies of every live enemy, sorted by id.
    pub fn enemies(&self) -> Vec<EnemyView> {
        systems::snapshot::build_enemies(&self.world)
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }
}

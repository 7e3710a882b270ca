//! Simulation engine: the per-frame orchestrator.
//!
//! `SimulationEngine` owns the player and the enemy spawner, runs one step
//! per rendered frame and produces `SimulationSnapshot`s. Completely headless
//! (no rendering or audio dependency), enabling deterministic testing.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use sierra_core::commands::TickInput;
use sierra_core::config::{ConfigError, SimConfig};
use sierra_core::enums::SessionPhase;
use sierra_core::events::SimEvent;
use sierra_core::state::SimulationSnapshot;
use sierra_core::types::SimTime;

use crate::player::PlayerActor;
use crate::spawner::EnemySpawner;
use crate::systems;

/// The simulation engine. Owns all sim state for the current session.
pub struct SimulationEngine {
    config: SimConfig,
    time: SimTime,
    player: PlayerActor,
    spawner: EnemySpawner,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create an engine and start the first session. Fails if the config
    /// is malformed, before any tick runs.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        log::info!("starting session (seed {})", config.seed);

        Ok(Self {
            time: SimTime::default(),
            player: PlayerActor::new(&config),
            spawner: EnemySpawner::new(&config, rng),
            events: Vec::new(),
            config,
        })
    }

    /// Advance the simulation by `dt` seconds and return the resulting snapshot.
    ///
    /// The player moves and fires first, then enemies spawn, pursue and
    /// collide against the updated player. After the player has died this
    /// returns an unchanged snapshot with no events.
    pub fn tick(&mut self, dt: f32, input: &TickInput) -> SimulationSnapshot {
        if self.phase() == SessionPhase::Active {
            let dt = crate::clamp_dt(dt);
            self.player.update(dt, input, &mut self.events);

            let outcome = self.spawner.update(dt, &self.player, &mut self.events);
            self.player.remove_projectiles(&outcome.consumed_projectiles);
            self.player.record_kills(outcome.kills);

            self.time.advance(dt);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            self.spawner.world(),
            &self.player,
            &self.time,
            self.phase(),
            events,
        )
    }

    /// Snapshot of the current state without advancing (no events).
    pub fn snapshot(&self) -> SimulationSnapshot {
        systems::snapshot::build_snapshot(
            self.spawner.world(),
            &self.player,
            &self.time,
            self.phase(),
            Vec::new(),
        )
    }

    /// Replace the player, clear all enemies and return to `Active`.
    pub fn new_session(&mut self) {
        self.player = PlayerActor::new(&self.config);
        self.spawner.reset();
        self.time = SimTime::default();
        self.events.clear();
        log::info!("new session started");
    }

    /// Get the current session phase.
    pub fn phase(&self) -> SessionPhase {
        self.spawner.phase()
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the player.
    pub fn player(&self) -> &PlayerActor {
        &self.player
    }

    /// Get a read-only reference to the enemy spawner.
    pub fn spawner(&self) -> &EnemySpawner {
        &self.spawner
    }

    /// Place an enemy directly (for tests needing exact geometry).
    #[cfg(test)]
    pub fn spawn_enemy_at(&mut self, position: sierra_core::types::Vector2D) -> Option<u32> {
        self.spawner.spawn_enemy_at(position)
    }

    /// Mutable player access for test setup.
    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut PlayerActor {
        &mut self.player
    }
}

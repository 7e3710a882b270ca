//! Session configuration, fixed when a session starts.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::types::Vector2D;

/// Errors raised while building a `SimConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("{field} must be non-negative and finite, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("{field} must be at least 1")]
    Zero { field: &'static str },
    #[error("spawn_distance {spawn_distance} must exceed player_radius + enemy_radius ({contact})")]
    SpawnTooClose { spawn_distance: f32, contact: f32 },
    #[error("player_start must be finite")]
    NonFiniteStart,
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tuning for one simulation session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same spawn positions.
    pub seed: u64,
    pub player_start: Vector2D,
    pub player_speed: f32,
    pub sprint_multiplier: f32,
    pub player_radius: f32,
    pub muzzle_offset: f32,
    pub fire_cooldown_secs: f32,
    pub magazine_capacity: u32,
    pub projectile_speed: f32,
    pub projectile_range: f32,
    pub spawn_interval_secs: f32,
    pub max_enemies: u32,
    pub enemy_speed: f32,
    pub enemy_radius: f32,
    pub spawn_distance: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            player_start: Vector2D::ZERO,
            player_speed: PLAYER_SPEED,
            sprint_multiplier: PLAYER_SPRINT_MULTIPLIER,
            player_radius: PLAYER_RADIUS,
            muzzle_offset: MUZZLE_OFFSET,
            fire_cooldown_secs: FIRE_COOLDOWN_SECS,
            magazine_capacity: MAGAZINE_CAPACITY,
            projectile_speed: PROJECTILE_SPEED,
            projectile_range: PROJECTILE_RANGE,
            spawn_interval_secs: SPAWN_INTERVAL_SECS,
            max_enemies: MAX_ENEMIES,
            enemy_speed: ENEMY_SPEED,
            enemy_radius: ENEMY_RADIUS,
            spawn_distance: SPAWN_DISTANCE,
        }
    }
}

impl SimConfig {
    /// Parse a JSON config (missing fields take defaults) and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every precondition a session relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("player_speed", self.player_speed)?;
        positive("sprint_multiplier", self.sprint_multiplier)?;
        positive("player_radius", self.player_radius)?;
        non_negative("muzzle_offset", self.muzzle_offset)?;
        non_negative("fire_cooldown_secs", self.fire_cooldown_secs)?;
        positive("projectile_speed", self.projectile_speed)?;
        positive("projectile_range", self.projectile_range)?;
        positive("spawn_interval_secs", self.spawn_interval_secs)?;
        positive("enemy_speed", self.enemy_speed)?;
        positive("enemy_radius", self.enemy_radius)?;
        positive("spawn_distance", self.spawn_distance)?;

        if self.magazine_capacity == 0 {
            return Err(ConfigError::Zero {
                field: "magazine_capacity",
            });
        }
        if self.max_enemies == 0 {
            return Err(ConfigError::Zero {
                field: "max_enemies",
            });
        }
        let contact = self.player_radius + self.enemy_radius;
        if self.spawn_distance <= contact {
            return Err(ConfigError::SpawnTooClose {
                spawn_distance: self.spawn_distance,
                contact,
            });
        }
        if !self.player_start.is_finite() {
            return Err(ConfigError::NonFiniteStart);
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

//! Default tuning parameters.
//!
//! These seed `SimConfig::default()`. A session reads its values from the
//! config, never from here directly.

// --- Player ---

/// Base movement speed (world units per second).
pub const PLAYER_SPEED: f32 = 300.0;

/// Speed multiplier while sprinting.
pub const PLAYER_SPRINT_MULTIPLIER: f32 = 1.5;

/// Player body size; the hitbox is 60% of it.
pub const PLAYER_SIZE: f32 = 30.0;

/// Player collision radius.
pub const PLAYER_RADIUS: f32 = PLAYER_SIZE * 0.6;

/// Distance in front of the player at which projectiles appear.
pub const MUZZLE_OFFSET: f32 = PLAYER_SIZE;

/// Minimum time between shots in seconds (ten frames at 60 Hz).
pub const FIRE_COOLDOWN_SECS: f32 = 1.0 / 6.0;

/// Rounds per magazine.
pub const MAGAZINE_CAPACITY: u32 = 10;

// --- Projectiles ---

/// Projectile speed (world units per second).
pub const PROJECTILE_SPEED: f32 = 500.0;

/// Distance a projectile travels before it expires.
pub const PROJECTILE_RANGE: f32 = 1000.0;

// --- Enemies ---

/// Seconds between spawn attempts.
pub const SPAWN_INTERVAL_SECS: f32 = 1.0;

/// Population cap.
pub const MAX_ENEMIES: u32 = 30;

/// Enemy pursuit speed (world units per second).
pub const ENEMY_SPEED: f32 = 220.0;

/// Enemy collision radius.
pub const ENEMY_RADIUS: f32 = 15.0;

/// Distance from the player at which new enemies are placed.
pub const SPAWN_DISTANCE: f32 = 600.0;

// --- Session ---

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;

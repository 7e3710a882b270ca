//! A single fired shot.

use sierra_core::state::ProjectileView;
use sierra_core::types::Vector2D;

/// Travels in a straight line until it has covered `max_range`.
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    position: Vector2D,
    direction: Vector2D,
    speed: f32,
    distance_traveled: f32,
    max_range: f32,
}

impl Projectile {
    /// `direction` is normalized here; callers may pass any non-zero vector.
    pub fn new(position: Vector2D, direction: Vector2D, speed: f32, max_range: f32) -> Self {
        Self {
            position,
            direction: direction.normalize_or_zero(),
            speed,
            distance_traveled: 0.0,
            max_range,
        }
    }

    /// Move along the direction for `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        let step = self.speed * dt;
        self.position += self.direction * step;
        self.distance_traveled += step;
    }

    /// Strictly past max range. Exactly at max range is still live.
    pub fn is_expired(&self) -> bool {
        self.distance_traveled > self.max_range
    }

    pub fn position(&self) -> Vector2D {
        self.position
    }

    pub fn direction(&self) -> Vector2D {
        self.direction
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn distance_traveled(&self) -> f32 {
        self.distance_traveled
    }

    pub fn max_range(&self) -> f32 {
        self.max_range
    }

    pub fn view(&self) -> ProjectileView {
        ProjectileView {
            position: self.position,
            direction: self.direction,
            distance_traveled: self.distance_traveled,
        }
    }
}

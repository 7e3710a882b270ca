//! Spawn placement policy.

use rand::Rng;
use sierra_core::types::Vector2D;

/// Pick a spawn point on the circle of radius `distance` around `anchor`,
/// at a uniformly random bearing.
pub fn ring_position<R: Rng + ?Sized>(rng: &mut R, anchor: Vector2D, distance: f32) -> Vector2D {
    let bearing_deg = rng.gen_range(0.0..360.0_f32);
    anchor + Vector2D::from_angle_deg(bearing_deg) * distance
}

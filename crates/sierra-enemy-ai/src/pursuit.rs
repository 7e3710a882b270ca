//! Pursuit steering: move straight toward the target at constant speed.

use sierra_core::types::Vector2D;

/// Position after chasing `target` for `dt` seconds at `speed`.
///
/// Returns `position` unchanged when it already coincides with the target,
/// so the direction is never normalized from a zero vector. The step stops
/// at the target instead of passing through it.
pub fn step_toward(position: Vector2D, target: Vector2D, speed: f32, dt: f32) -> Vector2D {
    let offset = target - position;
    if offset == Vector2D::ZERO {
        return position;
    }
    let remaining = offset.length();
    let step = speed * dt;
    if step >= remaining {
        return target;
    }
    position + offset.normalize_or_zero() * step
}

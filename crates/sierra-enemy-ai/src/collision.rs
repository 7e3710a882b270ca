//! Circle overlap tests. Boundaries are inclusive: touching counts as a hit.

use sierra_core::types::Vector2D;

/// True when two circles touch or overlap.
pub fn circles_touch(a: Vector2D, radius_a: f32, b: Vector2D, radius_b: f32) -> bool {
    a.distance(b) <= radius_a + radius_b
}

/// True when `point` lies inside or on the circle.
pub fn point_in_circle(point: Vector2D, center: Vector2D, radius: f32) -> bool {
    circles_touch(point, 0.0, center, radius)
}

/// Index and distance of the nearest circle containing `point`.
/// Candidates are `(center, radius, eligible)`; ineligible ones are skipped.
/// Ties go to the earlier candidate.
pub fn nearest_containing<I>(point: Vector2D, candidates: I) -> Option<(usize, f32)>
where
    I: IntoIterator<Item = (Vector2D, f32, bool)>,
{
    candidates
        .into_iter()
        .enumerate()
        .filter(|(_, (center, radius, eligible))| *eligible && point_in_circle(point, *center, *radius))
        .map(|(index, (center, _, _))| (index, point.distance(center)))
        .fold(None, |best: Option<(usize, f32)>, (index, dist)| match best {
            Some((_, best_dist)) if best_dist <= dist => best,
            _ => Some((index, dist)),
        })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use sierra_core::types::Vector2D;

    use crate::collision::{circles_touch, nearest_containing, point_in_circle};
    use crate::placement::ring_position;
    use crate::pursuit::step_toward;

    #[test]
    fn test_pursuit_moves_toward_target() {
        let pos = step_toward(Vector2D::new(10.0, 0.0), Vector2D::ZERO, 4.0, 0.5);
        assert_relative_eq!(pos.x, 8.0);
        assert_relative_eq!(pos.y, 0.0);
    }

    #[test]
    fn test_pursuit_diagonal_uses_unit_direction() {
        let start = Vector2D::new(0.0, 0.0);
        let pos = step_toward(start, Vector2D::new(30.0, 40.0), 10.0, 1.0);
        assert_relative_eq!(pos.x, 6.0, epsilon = 1e-5);
        assert_relative_eq!(pos.y, 8.0, epsilon = 1e-5);
        assert_relative_eq!(start.distance(pos), 10.0, epsilon = 1e-5);
    }

    #[test]
    fn test_pursuit_skips_when_on_target() {
        let here = Vector2D::new(3.0, 3.0);
        let pos = step_toward(here, here, 220.0, 0.016);
        assert_eq!(pos, here);
        assert!(pos.is_finite());
    }

    #[test]
    fn test_pursuit_zero_dt_is_stationary() {
        let here = Vector2D::new(-5.0, 2.0);
        assert_eq!(step_toward(here, Vector2D::ZERO, 220.0, 0.0), here);
    }

    #[test]
    fn test_pursuit_stops_at_target() {
        let target = Vector2D::new(0.0, 0.0);
        let pos = step_toward(Vector2D::new(100.0, 0.0), target, 220.0, 1.0);
        assert_eq!(pos, target);

        // Exactly reaching the target also lands on it
        let pos = step_toward(Vector2D::new(0.0, 50.0), target, 50.0, 1.0);
        assert_eq!(pos, target);
    }

    #[test]
    fn test_ring_position_at_exact_distance() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let anchor = Vector2D::new(100.0, -50.0);
        for _ in 0..100 {
            let p = ring_position(&mut rng, anchor, 600.0);
            assert_relative_eq!(p.distance(anchor), 600.0, epsilon = 1e-2);
        }
    }

    #[test]
    fn test_ring_position_is_seeded() {
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..10 {
            assert_eq!(
                ring_position(&mut a, Vector2D::ZERO, 10.0),
                ring_position(&mut b, Vector2D::ZERO, 10.0)
            );
        }
    }

    #[test]
    fn test_circles_touch_boundary_inclusive() {
        let a = Vector2D::new(0.0, 0.0);
        let b = Vector2D::new(5.0, 0.0);
        assert!(circles_touch(a, 2.0, b, 3.0));
        assert!(!circles_touch(a, 2.0, b, 2.9));
        assert!(point_in_circle(b, a, 5.0));
        assert!(!point_in_circle(b, a, 4.99));
    }

    #[test]
    fn test_nearest_containing_picks_closest() {
        let point = Vector2D::new(0.0, 0.0);
        let candidates = vec![
            (Vector2D::new(8.0, 0.0), 10.0, true),
            (Vector2D::new(-3.0, 0.0), 10.0, true),
            (Vector2D::new(50.0, 0.0), 10.0, true),
        ];
        let (index, dist) = nearest_containing(point, candidates).unwrap();
        assert_eq!(index, 1);
        assert_relative_eq!(dist, 3.0);
    }

    #[test]
    fn test_nearest_containing_skips_ineligible() {
        let point = Vector2D::new(0.0, 0.0);
        let candidates = vec![
            (Vector2D::new(1.0, 0.0), 10.0, false),
            (Vector2D::new(4.0, 0.0), 10.0, true),
        ];
        assert_eq!(nearest_containing(point, candidates).map(|(i, _)| i), Some(1));
    }

    #[test]
    fn test_nearest_containing_tie_goes_to_first() {
        let point = Vector2D::new(0.0, 0.0);
        let candidates = vec![
            (Vector2D::new(2.0, 0.0), 5.0, true),
            (Vector2D::new(-2.0, 0.0), 5.0, true),
        ];
        assert_eq!(nearest_containing(point, candidates).map(|(i, _)| i), Some(0));
    }

    #[test]
    fn test_nearest_containing_none_in_range() {
        let candidates = vec![(Vector2D::new(100.0, 0.0), 5.0, true)];
        assert!(nearest_containing(Vector2D::ZERO, candidates).is_none());
    }
}

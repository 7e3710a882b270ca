#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::commands::{HeldInput, InputLatch};
    use crate::config::{ConfigError, SimConfig};
    use crate::enums::SessionPhase;
    use crate::events::SimEvent;
    use crate::state::{EnemyView, ProjectileView, SimulationSnapshot};
    use crate::types::{SimTime, Vector2D};

    // ---- Vector2D ----

    #[test]
    fn test_vector_arithmetic() {
        let a = Vector2D::new(1.0, 2.0);
        let b = Vector2D::new(3.0, -1.0);
        assert_eq!(a + b, Vector2D::new(4.0, 1.0));
        assert_eq!(a - b, Vector2D::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Vector2D::new(2.0, 4.0));
        assert_eq!(-a, Vector2D::new(-1.0, -2.0));

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
    }

    #[test]
    fn test_vector_distance_and_length() {
        let a = Vector2D::new(0.0, 0.0);
        let b = Vector2D::new(3.0, 4.0);
        assert_relative_eq!(a.distance(b), 5.0);
        assert_relative_eq!(b.length(), 5.0);
        assert_relative_eq!(b.dot(Vector2D::new(1.0, 0.0)), 3.0);
    }

    #[test]
    fn test_normalize_zero_stays_zero() {
        assert_eq!(Vector2D::ZERO.normalize_or_zero(), Vector2D::ZERO);
        let n = Vector2D::new(10.0, 0.0).normalize_or_zero();
        assert_relative_eq!(n.x, 1.0);
        assert_relative_eq!(n.y, 0.0);
    }

    #[test]
    fn test_angle_deg_range() {
        assert_relative_eq!(Vector2D::new(1.0, 0.0).angle_deg(), 0.0);
        assert_relative_eq!(Vector2D::new(0.0, 1.0).angle_deg(), 90.0);
        assert_relative_eq!(Vector2D::new(-1.0, 0.0).angle_deg(), 180.0);
        // Below the x axis wraps into [180, 360)
        assert_relative_eq!(Vector2D::new(0.0, -1.0).angle_deg(), 270.0);
    }

    #[test]
    fn test_from_angle_is_unit() {
        let v = Vector2D::from_angle_deg(90.0);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(v.y, 1.0, epsilon = 1e-6);
        assert_relative_eq!(v.length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_glam_conversion() {
        let v = Vector2D::new(2.5, -7.0);
        let g: glam::Vec2 = v.into();
        assert_eq!(Vector2D::from(g), v);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        time.advance(0.5);
        time.advance(0.25);
        assert_eq!(time.tick, 2);
        assert_relative_eq!(time.elapsed_secs, 0.75);
    }

    // ---- Config ----

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_spawn_interval() {
        let config = SimConfig {
            spawn_interval_secs: 0.0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonPositive {
                field: "spawn_interval_secs",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_bad_radii_and_counts() {
        let config = SimConfig {
            enemy_radius: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SimConfig {
            player_radius: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SimConfig {
            magazine_capacity: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Zero {
                field: "magazine_capacity"
            })
        ));

        let config = SimConfig {
            max_enemies: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_spawn_distance_inside_contact_range() {
        // 18 + 15 = 33: spawning at 10 or exactly 33 would touch the player
        for spawn_distance in [10.0, 33.0] {
            let config = SimConfig {
                spawn_distance,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::SpawnTooClose { .. })
            ));
        }

        let config = SimConfig {
            spawn_distance: 33.5,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_fire_cooldown_allowed() {
        let config = SimConfig {
            fire_cooldown_secs: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_json_partial() {
        let config = SimConfig::from_json(r#"{ "seed": 7, "max_enemies": 5 }"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.max_enemies, 5);
        assert_eq!(config.magazine_capacity, SimConfig::default().magazine_capacity);
    }

    #[test]
    fn test_config_from_json_rejects_invalid() {
        assert!(matches!(
            SimConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            SimConfig::from_json(r#"{ "enemy_speed": 0.0 }"#),
            Err(ConfigError::NonPositive { .. })
        ));
    }

    // ---- Input latch ----

    #[test]
    fn test_fire_is_edge_triggered() {
        let mut latch = InputLatch::new();
        let held = HeldInput {
            fire_held: true,
            ..Default::default()
        };
        assert!(latch.latch(held).fire_requested);
        // Still held: no new request
        assert!(!latch.latch(held).fire_requested);
        // Released, then pressed again
        assert!(!latch.latch(HeldInput::default()).fire_requested);
        assert!(latch.latch(held).fire_requested);
    }

    #[test]
    fn test_reload_is_edge_triggered_and_movement_passes_through() {
        let mut latch = InputLatch::new();
        let held = HeldInput {
            reload_held: true,
            move_up: true,
            sprint: true,
            aim_point: Vector2D::new(4.0, 5.0),
            ..Default::default()
        };
        let first = latch.latch(held);
        assert!(first.reload_requested);
        assert!(first.move_up && first.sprint);
        assert_eq!(first.aim_point, Vector2D::new(4.0, 5.0));

        let second = latch.latch(held);
        assert!(!second.reload_requested);
        assert!(second.move_up);

        latch.reset();
        assert!(latch.latch(held).reload_requested);
    }

    // ---- Snapshot ----

    #[test]
    fn test_session_phase_serde() {
        for v in [SessionPhase::Active, SessionPhase::PlayerDied] {
            let json = serde_json::to_string(&v).unwrap();
            let back: SessionPhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_event_tagged_serialization() {
        let event = SimEvent::EnemyDied {
            enemy_id: 3,
            position: Vector2D::new(1.0, 2.0),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"EnemyDied""#));
    }

    #[test]
    fn test_game_data_collects_positions() {
        let snapshot = SimulationSnapshot {
            player_position: Vector2D::new(1.0, 1.0),
            enemies: vec![EnemyView {
                id: 0,
                position: Vector2D::new(5.0, 5.0),
                radius: 15.0,
            }],
            projectiles: vec![ProjectileView {
                position: Vector2D::new(2.0, 0.0),
                direction: Vector2D::new(1.0, 0.0),
                distance_traveled: 2.0,
            }],
            ..Default::default()
        };
        let data = snapshot.game_data();
        assert_eq!(data.player_position, Vector2D::new(1.0, 1.0));
        assert_eq!(data.enemy_positions, vec![Vector2D::new(5.0, 5.0)]);
        assert_eq!(data.projectile_positions, vec![Vector2D::new(2.0, 0.0)]);

        let json = snapshot.to_json().unwrap();
        let back: SimulationSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
        assert!(!back.player_died());
    }
}

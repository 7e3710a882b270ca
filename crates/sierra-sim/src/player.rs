//! The player-controlled actor: movement, aim, firing, reloading, kill count.

use sierra_core::commands::TickInput;
use sierra_core::config::SimConfig;
use sierra_core::events::SimEvent;
use sierra_core::state::MagazineView;
use sierra_core::types::Vector2D;

use crate::projectile::Projectile;

/// The player. Owns every projectile it has fired that is still in flight.
#[derive(Debug, Clone)]
pub struct PlayerActor {
    position: Vector2D,
    facing_deg: f32,
    base_speed: f32,
    sprint_multiplier: f32,
    collision_radius: f32,
    muzzle_offset: f32,
    fire_cooldown_secs: f32,
    time_since_last_shot: f32,
    magazine_capacity: u32,
    rounds_in_magazine: u32,
    projectile_speed: f32,
    projectile_range: f32,
    kill_count: u32,
    projectiles: Vec<Projectile>,
}

impl PlayerActor {
    /// Spawn at `config.player_start` facing +x with a full magazine,
    /// ready to fire immediately.
    pub fn new(config: &SimConfig) -> Self {
        Self {
            position: config.player_start,
            facing_deg: 0.0,
            base_speed: config.player_speed,
            sprint_multiplier: config.sprint_multiplier,
            collision_radius: config.player_radius,
            muzzle_offset: config.muzzle_offset,
            fire_cooldown_secs: config.fire_cooldown_secs,
            time_since_last_shot: config.fire_cooldown_secs,
            magazine_capacity: config.magazine_capacity,
            rounds_in_magazine: config.magazine_capacity,
            projectile_speed: config.projectile_speed,
            projectile_range: config.projectile_range,
            kill_count: 0,
            projectiles: Vec::new(),
        }
    }

    /// Advance one tick: move, aim, fire, reload, then fly projectiles.
    pub fn update(&mut self, dt: f32, input: &TickInput, events: &mut Vec<SimEvent>) {
        let dt = crate::clamp_dt(dt);

        self.apply_movement(dt, input);
        self.aim_at(input.aim_point);

        self.time_since_last_shot += dt;
        if input.fire_requested {
            self.try_fire(events);
        }
        if input.reload_requested {
            self.reload();
        }

        for projectile in &mut self.projectiles {
            projectile.advance(dt);
        }
        self.projectiles.retain(|p| !p.is_expired());
    }

    /// Each held direction moves independently along its axis, so diagonals
    /// travel at √2 × speed.
    fn apply_movement(&mut self, dt: f32, input: &TickInput) {
        let mut speed = self.base_speed;
        if input.sprint {
            speed *= self.sprint_multiplier;
        }
        let step = speed * dt;

        if input.move_up {
            self.position.y += step;
        }
        if input.move_down {
            self.position.y -= step;
        }
        if input.move_right {
            self.position.x += step;
        }
        if input.move_left {
            self.position.x -= step;
        }
    }

    /// Face the aim point. Facing is kept when aiming at our own position.
    fn aim_at(&mut self, aim_point: Vector2D) {
        let offset = aim_point - self.position;
        if offset != Vector2D::ZERO && offset.is_finite() {
            self.facing_deg = offset.angle_deg();
        }
    }

    /// Fire if the cooldown has elapsed and a round is loaded. An empty
    /// magazine is a silent no-op and leaves the cooldown timer untouched.
    fn try_fire(&mut self, events: &mut Vec<SimEvent>) {
        if self.time_since_last_shot < self.fire_cooldown_secs || self.rounds_in_magazine == 0 {
            return;
        }

        self.rounds_in_magazine -= 1;
        let direction = Vector2D::from_angle_deg(self.facing_deg);
        let muzzle = self.position + direction * self.muzzle_offset;
        self.projectiles.push(Projectile::new(
            muzzle,
            direction,
            self.projectile_speed,
            self.projectile_range,
        ));
        self.time_since_last_shot = 0.0;

        log::trace!(
            "shot fired at {:.0}°, {} rounds left",
            self.facing_deg,
            self.rounds_in_magazine
        );
        events.push(SimEvent::ShotFired {
            position: muzzle,
            direction,
        });
    }

    /// Instant reload to a full magazine.
    pub fn reload(&mut self) {
        self.rounds_in_magazine = self.magazine_capacity;
    }

    /// Drop projectiles consumed by hits. `indices` refer to the current
    /// projectile order.
    pub fn remove_projectiles(&mut self, indices: &[usize]) {
        if indices.is_empty() {
            return;
        }
        let mut index = 0;
        self.projectiles.retain(|_| {
            let keep = !indices.contains(&index);
            index += 1;
            keep
        });
    }

    pub fn record_kills(&mut self, kills: u32) {
        self.kill_count += kills;
    }

    pub fn position(&self) -> Vector2D {
        self.position
    }

    pub fn facing_deg(&self) -> f32 {
        self.facing_deg
    }

    pub fn collision_radius(&self) -> f32 {
        self.collision_radius
    }

    pub fn rounds_in_magazine(&self) -> u32 {
        self.rounds_in_magazine
    }

    pub fn magazine_capacity(&self) -> u32 {
        self.magazine_capacity
    }

    pub fn magazine(&self) -> MagazineView {
        MagazineView {
            rounds: self.rounds_in_magazine,
            capacity: self.magazine_capacity,
        }
    }

    pub fn time_since_last_shot(&self) -> f32 {
        self.time_since_last_shot
    }

    pub fn kill_count(&self) -> u32 {
        self.kill_count
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    /// Place the player directly (test setup).
    #[cfg(test)]
    pub fn set_position(&mut self, position: Vector2D) {
        self.position = position;
    }

    /// Empty the magazine without firing (test setup).
    #[cfg(test)]
    pub fn set_rounds(&mut self, rounds: u32) {
        self.rounds_in_magazine = rounds.min(self.magazine_capacity);
    }
}

//! Pursuit system: every live enemy steps toward the player.

use hecs::World;

use sierra_core::components::{Position, Pursuit, Vitality};
use sierra_core::types::Vector2D;
use sierra_enemy_ai::pursuit::step_toward;

pub fn run(world: &mut World, target: Vector2D, dt: f32) {
    for (_entity, (pos, pursuit, vitality)) in
        world.query_mut::<(&mut Position, &Pursuit, &Vitality)>()
    {
        if !vitality.alive {
            continue;
        }
        pos.0 = step_toward(pos.0, target, pursuit.speed, dt);
    }
}

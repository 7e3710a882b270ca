//! Cleanup system: despawns enemies marked dead by collision resolution.

use hecs::{Entity, World};

use sierra_core::components::Vitality;

/// Remove dead enemies after all resolution passes for the tick are done.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, vitality) in world.query_mut::<&Vitality>() {
        if !vitality.alive {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

use hecs::World;

use crate::components::{Body, PipePair, PowerUp};
use crate::map::GameMap;

/// Garbage collection: despawn pipes and items that left the screen
///
/// Collected items are despawned by `collect_pickups` in the same tick.
pub fn gc(world: &mut World, map: &GameMap) {
    let mut to_remove = Vec::new();

    for (entity, pipe) in world.query::<&PipePair>().iter() {
        if map.is_past_left_edge(&pipe.upper()) {
            to_remove.push(entity);
        }
    }

    for (entity, (_item, body)) in world.query::<(&PowerUp, &Body)>().iter() {
        if map.is_past_left_edge(&body.aabb()) {
            to_remove.push(entity);
        }
    }

    for entity in to_remove {
        let _ = world.despawn(entity);
    }
}

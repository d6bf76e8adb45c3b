use hecs::World;

use crate::player::Player;
use crate::resources::Events;

/// Apply a flap to the player; returns whether it took effect
pub fn apply_flap(world: &mut World, events: &mut Events) -> bool {
    let mut flapped = false;
    for (_entity, player) in world.query_mut::<&mut Player>() {
        flapped |= player.flap(events);
    }
    flapped
}

use crate::components::{Body, Floor, PipePair, Scroll};
use crate::player::Player;
use hecs::World;

/// Advance the player's motion model by one frame
pub fn move_player(world: &mut World) {
    for (_entity, player) in world.query_mut::<&mut Player>() {
        player.tick();
    }
}

/// Scroll pipes, power-up items and the floor
pub fn scroll_world(world: &mut World) {
    for (_entity, (pipe, scroll)) in world.query_mut::<(&mut PipePair, &Scroll)>() {
        pipe.x += scroll.vel_x;
    }
    for (_entity, (body, scroll)) in world.query_mut::<(&mut Body, &Scroll)>() {
        body.pos.x += scroll.vel_x;
    }
    scroll_floor(world);
}

/// Scroll only the floor (splash screen)
pub fn scroll_floor(world: &mut World) {
    for (_entity, (floor, scroll)) in world.query_mut::<(&mut Floor, &Scroll)>() {
        floor.advance(scroll.vel_x);
    }
}

/// Freeze everything that scrolls (used when the player crashes)
pub fn stop_scrolling(world: &mut World) {
    for (_entity, scroll) in world.query_mut::<&mut Scroll>() {
        scroll.stop();
    }
}

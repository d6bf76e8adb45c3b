use crate::components::{PipePair, Scroll};
use crate::player::Player;
use crate::resources::{Events, Score};
use hecs::World;

/// Score every pipe pair the player has just crossed
pub fn check_crossings(world: &mut World, score: &mut Score, events: &mut Events) {
    let player = match world.query::<&Player>().iter().next() {
        Some((_e, player)) => player.clone(),
        None => return,
    };

    for (_entity, (pipe, scroll)) in world.query_mut::<(&mut PipePair, &Scroll)>() {
        if !pipe.scored && player.crossed(pipe, scroll) {
            pipe.scored = true;
            score.add(events);
            events.pipes_passed += 1;
        }
    }
}

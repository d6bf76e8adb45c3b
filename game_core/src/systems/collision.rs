use crate::components::{Body, CrashKind, Floor, PipePair, PowerUp};
use crate::player::Player;
use crate::resources::{Events, Sound};
use hecs::World;

/// Fatal-collision test for one player
///
/// Floor first, then every pipe pair. Invincibility suppresses all hits.
pub fn collided<'a>(
    player: &Player,
    floor: &Floor,
    pipes: impl IntoIterator<Item = &'a PipePair>,
) -> Option<CrashKind> {
    if player.invincible {
        return None;
    }

    let bounds = player.aabb();
    if bounds.overlaps(&floor.aabb()) {
        return Some(CrashKind::Floor);
    }

    pipes
        .into_iter()
        .any(|pipe| bounds.overlaps(&pipe.upper()) || bounds.overlaps(&pipe.lower()))
        .then_some(CrashKind::Pipe)
}

/// Check the player against floor and pipes, recording what was hit
pub fn check_collisions(world: &mut World, events: &mut Events) -> Option<CrashKind> {
    let pipes: Vec<PipePair> = world
        .query::<&PipePair>()
        .iter()
        .map(|(_e, pipe)| *pipe)
        .collect();
    let floor = world
        .query::<&Floor>()
        .iter()
        .next()
        .map(|(_e, floor)| *floor)?;

    for (_entity, player) in world.query_mut::<&mut Player>() {
        if let Some(kind) = collided(player, &floor, &pipes) {
            player.crash = Some(kind);
            events.crashed = Some(kind);
            return Some(kind);
        }
    }
    None
}

/// Collect power-up items the player touches
pub fn collect_pickups(world: &mut World, events: &mut Events) {
    let player_box = match world.query::<&Player>().iter().next() {
        Some((_e, player)) => player.aabb(),
        None => return,
    };

    let mut items: Vec<_> = world
        .query_mut::<(&mut PowerUp, &Body)>()
        .into_iter()
        .filter(|(_e, (item, body))| !item.collected && player_box.overlaps(&body.aabb()))
        .map(|(entity, (item, _body))| {
            item.collected = true;
            (entity, item.kind)
        })
        .collect();
    // Deterministic: sort by entity ID
    items.sort_by_key(|(e, _)| e.id());

    for (entity, kind) in items {
        events.picked_up.push(kind);
        events.play(Sound::Pickup);
        let _ = world.despawn(entity);
    }
}

use glam::Vec2;
use hecs::World;

use crate::components::PowerUpKind;
use crate::config::Config;
use crate::create_powerup;
use crate::effects::ActiveEffects;
use crate::map::GameMap;
use crate::player::Player;
use crate::resources::*;

/// Advance the spawn timer and drop a random power-up in from the right
pub fn pickups_spawn(
    world: &mut World,
    time: &Time,
    map: &GameMap,
    config: &Config,
    spawner: &mut PowerUpSpawner,
    rng: &mut GameRng,
) {
    if !config.powerups_enabled {
        return;
    }

    spawner.update(time.dt_ms);
    if !spawner.is_ready() {
        return;
    }

    let kind = rng.pick_kind();
    let (band_top, band_bottom) = map.gap_band();
    let y = rng.gen_range_f32(band_top, band_bottom - config.powerup_size);
    create_powerup(world, config, kind, Vec2::new(map.width + 10.0, y.floor()));
    log::debug!("spawned {:?} power-up at y={}", kind, y);

    let (min, max) = config.powerup_spawn_range();
    spawner.start_delay(rng.gen_range_u32(min, max));
}

/// Apply freshly collected power-ups to the player and start their timers
pub fn apply_pickup_effects(
    world: &mut World,
    effects: &mut ActiveEffects,
    config: &Config,
    events: &Events,
) {
    for kind in &events.picked_up {
        effects.activate(*kind, config.effect_duration_ms(*kind));
        for (_entity, player) in world.query_mut::<&mut Player>() {
            player.apply_effect(*kind);
        }
    }
}

/// Count effect timers down and revoke whatever ran out
pub fn effects_tick(world: &mut World, effects: &mut ActiveEffects, time: &Time, events: &mut Events) {
    let expired = effects.tick(time.dt_ms);
    for kind in expired.iter() {
        for (_entity, player) in world.query_mut::<&mut Player>() {
            revoke_effect(player, effects, kind);
        }
        events.expired.push(kind);
    }
}

/// Drop every active effect (round over)
pub fn clear_effects(world: &mut World, effects: &mut ActiveEffects) {
    for (_entity, player) in world.query_mut::<&mut Player>() {
        for (kind, _) in effects.iter() {
            player.remove_effect(kind);
        }
    }
    effects.clear();
}

/// Remove one effect; the two speed effects hand over to each other
fn revoke_effect(player: &mut Player, effects: &ActiveEffects, kind: PowerUpKind) {
    match kind.speed_partner() {
        Some(other) if effects.is_active(other) => player.apply_effect(other),
        _ => player.remove_effect(kind),
    }
}

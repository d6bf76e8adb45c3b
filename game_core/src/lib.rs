pub mod components;
pub mod config;
pub mod effects;
pub mod game;
pub mod map;
pub mod params;
pub mod phase;
pub mod player;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use effects::*;
pub use game::*;
pub use map::*;
pub use params::*;
pub use phase::*;
pub use player::*;
pub use resources::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run one Playing tick of the Flappy simulation
///
/// Returns what the player crashed into, if anything.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &Time,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    effects: &mut ActiveEffects,
    spawner: &mut PowerUpSpawner,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<CrashKind> {
    // 1. Advance kinematics
    scroll_world(world);
    move_player(world);

    // 2. Power-up timers, then new pickups
    effects_tick(world, effects, time, events);
    collect_pickups(world, events);
    apply_pickup_effects(world, effects, config, events);

    // 3. Spawn pipes and items
    pipes_spawn(world, map, config, rng);
    pickups_spawn(world, time, map, config, spawner, rng);

    // 4. Score crossings
    check_crossings(world, score, events);

    // 5. Remove what scrolled away
    gc(world, map);

    // 6. Fatal collisions
    check_collisions(world, events)
}

/// Helper to create the player entity
pub fn create_player(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((Player::new(config),))
}

/// Helper to create the scrolling floor
pub fn create_floor(world: &mut World, config: &Config) -> hecs::Entity {
    let floor = Floor::new(
        config.floor_y(),
        config.floor_width,
        config.floor_height,
        config.window_width,
    );
    world.spawn((floor, Scroll::new(-config.floor_speed)))
}

/// Helper to create a pipe pair whose gap starts at `gap_y`
pub fn create_pipe_pair(world: &mut World, config: &Config, x: f32, gap_y: f32) -> hecs::Entity {
    let pipe = PipePair::new(x, gap_y, config.pipe_gap, config.pipe_width, config.pipe_height);
    world.spawn((pipe, Scroll::new(config.pipe_speed)))
}

/// Helper to create a power-up item at `pos` (top-left)
pub fn create_powerup(
    world: &mut World,
    config: &Config,
    kind: PowerUpKind,
    pos: Vec2,
) -> hecs::Entity {
    let body = Body::new(pos, Vec2::splat(config.powerup_size));
    world.spawn((PowerUp::new(kind), body, Scroll::new(config.pipe_speed)))
}

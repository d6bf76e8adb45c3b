use crate::components::PipePair;
use crate::config::Config;
use crate::map::GameMap;
use crate::resources::GameRng;
use crate::create_pipe_pair;
use hecs::World;

/// Random pipe gap top inside the middle band of the viewport
pub fn random_gap_y(map: &GameMap, config: &Config, rng: &mut GameRng) -> f32 {
    let (band_top, _) = map.gap_band();
    let span = (map.viewport_height * 0.6 - config.pipe_gap).max(1.0) as u32;
    rng.gen_range_u32(0, span - 1) as f32 + band_top.floor()
}

/// Two pipe pairs queued off the right edge at round start
pub fn spawn_initial_pipes(world: &mut World, map: &GameMap, config: &Config, rng: &mut GameRng) {
    let first_x = map.width + config.pipe_width * 3.0;
    let second_x = first_x + config.pipe_width * 3.5;
    for x in [first_x, second_x] {
        let gap_y = random_gap_y(map, config, rng);
        create_pipe_pair(world, config, x, gap_y);
    }
}

/// Spawn a new pair once the last one has moved far enough in
pub fn pipes_spawn(world: &mut World, map: &GameMap, config: &Config, rng: &mut GameRng) {
    let last_x = world
        .query::<&PipePair>()
        .iter()
        .map(|(_e, pipe)| pipe.x)
        .fold(None, |acc: Option<f32>, x| Some(acc.map_or(x, |a| a.max(x))));

    let w = config.pipe_width;
    let can_spawn = match last_x {
        Some(x) => map.width - (x + w) > w * 2.5,
        None => true,
    };

    if can_spawn {
        let gap_y = random_gap_y(map, config, rng);
        create_pipe_pair(world, config, map.width + 10.0, gap_y);
        log::debug!("spawned pipe pair with gap at {}", gap_y);
    }
}

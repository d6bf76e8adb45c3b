use crate::components::PowerUpKind;
use crate::params::Params;
use glam::Vec2;
use serde::Deserialize;

/// Game configuration
///
/// Defaults mirror [`Params`]; any field can be overridden from JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window_width: f32,
    pub window_height: f32,
    pub floor_width: f32,
    pub floor_height: f32,
    pub floor_speed: f32,
    pub pipe_width: f32,
    pub pipe_height: f32,
    pub pipe_gap: f32,
    pub pipe_speed: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub powerup_size: f32,
    pub speed_boost_ms: u32,
    pub invincible_ms: u32,
    pub slow_motion_ms: u32,
    pub small_size_ms: u32,
    pub powerup_spawn_min_ms: u32,
    pub powerup_spawn_max_ms: u32,
    pub powerups_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: Params::WINDOW_WIDTH,
            window_height: Params::WINDOW_HEIGHT,
            floor_width: Params::FLOOR_WIDTH,
            floor_height: Params::FLOOR_HEIGHT,
            floor_speed: Params::FLOOR_SPEED,
            pipe_width: Params::PIPE_WIDTH,
            pipe_height: Params::PIPE_HEIGHT,
            pipe_gap: Params::PIPE_GAP,
            pipe_speed: Params::PIPE_SPEED,
            player_width: Params::PLAYER_WIDTH,
            player_height: Params::PLAYER_HEIGHT,
            powerup_size: Params::POWERUP_SIZE,
            speed_boost_ms: Params::SPEED_BOOST_MS,
            invincible_ms: Params::INVINCIBLE_MS,
            slow_motion_ms: Params::SLOW_MOTION_MS,
            small_size_ms: Params::SMALL_SIZE_MS,
            powerup_spawn_min_ms: Params::POWERUP_SPAWN_MIN_MS,
            powerup_spawn_max_ms: Params::POWERUP_SPAWN_MAX_MS,
            powerups_enabled: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON override on top of the defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Height of the playfield above the floor
    pub fn viewport_height(&self) -> f32 {
        self.window_height - self.floor_height
    }

    /// Top edge of the floor
    pub fn floor_y(&self) -> f32 {
        self.viewport_height()
    }

    /// Where the player starts each round (top-left corner)
    pub fn player_start(&self) -> Vec2 {
        Vec2::new(
            (self.window_width * Params::PLAYER_X_RATIO).floor(),
            ((self.window_height - self.player_height) / 2.0).floor(),
        )
    }

    /// Effect length of a power-up kind
    pub fn effect_duration_ms(&self, kind: PowerUpKind) -> u32 {
        match kind {
            PowerUpKind::SpeedBoost => self.speed_boost_ms,
            PowerUpKind::Invincible => self.invincible_ms,
            PowerUpKind::SlowMotion => self.slow_motion_ms,
            PowerUpKind::SmallSize => self.small_size_ms,
        }
    }

    /// Spawn interval bounds, ordered so `min <= max`
    pub fn powerup_spawn_range(&self) -> (u32, u32) {
        let (a, b) = (self.powerup_spawn_min_ms, self.powerup_spawn_max_ms);
        (a.min(b), a.max(b))
    }
}

/// Game tuning parameters for Flappy
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Window (pixels)
    pub const WINDOW_WIDTH: f32 = 288.0;
    pub const WINDOW_HEIGHT: f32 = 512.0;

    // Floor
    pub const FLOOR_WIDTH: f32 = 336.0;
    pub const FLOOR_HEIGHT: f32 = 112.0;
    pub const FLOOR_SPEED: f32 = 4.0;

    // Pipes
    pub const PIPE_WIDTH: f32 = 52.0;
    pub const PIPE_HEIGHT: f32 = 320.0;
    pub const PIPE_GAP: f32 = 120.0;
    pub const PIPE_SPEED: f32 = -5.0;

    // Player sprite
    pub const PLAYER_WIDTH: f32 = 34.0;
    pub const PLAYER_HEIGHT: f32 = 24.0;
    pub const PLAYER_X_RATIO: f32 = 0.2;
    pub const WING_FRAME_TICKS: u32 = 5;

    // Power-ups
    pub const POWERUP_SIZE: f32 = 24.0;
    pub const SPEED_BOOST_MS: u32 = 5000;
    pub const INVINCIBLE_MS: u32 = 5000;
    pub const SLOW_MOTION_MS: u32 = 5000;
    pub const SMALL_SIZE_MS: u32 = 8000;
    pub const POWERUP_SPAWN_MIN_MS: u32 = 4000;
    pub const POWERUP_SPAWN_MAX_MS: u32 = 8000;

    pub const SPEED_BOOST_MODIFIER: f32 = 1.5;
    pub const SLOW_MOTION_MODIFIER: f32 = 0.5;
    pub const SMALL_SIZE_MODIFIER: f32 = 0.6;

    // Frame timing
    pub const FPS: u32 = 30;
    pub const MAX_DT_MS: u32 = 250; // Clamp to prevent large jumps after a stall
    pub const FLICKER_PERIOD_MS: u64 = 200;
}

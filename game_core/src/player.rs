//! Player kinematics and power-up modifiers.
//!
//! The bird moves only vertically. Each mode has its own motion model:
//! an idle bob on the splash screen, gravity plus flap impulses while
//! flying, and a faster fall with a nose-dive once it has crashed.

use glam::Vec2;

use crate::components::{CrashKind, PipePair, PowerUpKind, Scroll};
use crate::config::Config;
use crate::map::Aabb;
use crate::params::Params;
use crate::resources::{Events, Sound};

/// Sprite indices for the wing animation
const WING_CYCLE: [u8; 4] = [0, 1, 2, 1];

/// Nose-up angle set on every flap (degrees)
const FLAP_ROT: f32 = 80.0;

/// Player motion model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerMode {
    /// Bobbing on the splash screen
    Idle,
    /// Under player control
    Flying,
    /// Falling after a fatal collision
    Crashing,
    /// Resting on the floor
    Crashed,
}

/// Player component
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    pub min_y: f32,
    pub max_y: f32,

    pub vel_y: f32,
    pub max_vel_y: f32, // Max descend speed
    pub min_vel_y: f32, // Max ascend speed
    pub acc_y: f32,

    pub rot: f32,
    pub vel_rot: f32,
    pub rot_min: f32,
    pub rot_max: f32,

    pub flap_acc: f32,
    pub flapped: bool,

    pub mode: PlayerMode,
    pub crash: Option<CrashKind>,

    pub speed_modifier: f32,
    pub invincible: bool,
    pub size_modifier: f32,
    original_size: Option<Vec2>,

    frame: u32,
    wing_step: usize,
    wings_frozen: bool,
}

impl Player {
    pub fn new(config: &Config) -> Self {
        let size = Vec2::new(config.player_width, config.player_height);
        let mut player = Self {
            pos: config.player_start(),
            size,
            min_y: -2.0 * size.y,
            max_y: config.viewport_height() - size.y * 0.75,
            vel_y: 0.0,
            max_vel_y: 0.0,
            min_vel_y: 0.0,
            acc_y: 0.0,
            rot: 0.0,
            vel_rot: 0.0,
            rot_min: 0.0,
            rot_max: 0.0,
            flap_acc: 0.0,
            flapped: false,
            mode: PlayerMode::Idle,
            crash: None,
            speed_modifier: 1.0,
            invincible: false,
            size_modifier: 1.0,
            original_size: None,
            frame: 0,
            wing_step: 0,
            wings_frozen: false,
        };
        player.reset_idle();
        player
    }

    /// Switch motion model, emitting the mode's entry sounds
    pub fn set_mode(&mut self, mode: PlayerMode, events: &mut Events) {
        self.mode = mode;
        match mode {
            PlayerMode::Idle => self.reset_idle(),
            PlayerMode::Flying => {
                self.reset_flying();
                events.play(Sound::Wing);
            }
            PlayerMode::Crashing => {
                self.wings_frozen = true;
                events.play(Sound::Hit);
                if self.crash == Some(CrashKind::Pipe) {
                    events.play(Sound::Die);
                }
                self.reset_crashing();
            }
            PlayerMode::Crashed => {}
        }
    }

    fn reset_idle(&mut self) {
        self.vel_y = 1.0;
        self.max_vel_y = 4.0;
        self.min_vel_y = -4.0;
        self.acc_y = 0.5;

        self.rot = 0.0;
        self.vel_rot = 0.0;
        self.rot_min = 0.0;
        self.rot_max = 0.0;

        self.flap_acc = 0.0;
        self.flapped = false;
    }

    fn reset_flying(&mut self) {
        self.vel_y = -9.0;
        self.max_vel_y = 10.0;
        self.min_vel_y = -8.0;
        self.acc_y = 1.0;

        self.rot = FLAP_ROT;
        self.vel_rot = -3.0;
        self.rot_min = -90.0;
        self.rot_max = 20.0;

        self.flap_acc = -9.0;
        self.flapped = false;
    }

    fn reset_crashing(&mut self) {
        self.acc_y = 2.0;
        self.vel_y = 7.0;
        self.max_vel_y = 15.0;
        self.vel_rot = -8.0;
    }

    /// Advance one frame
    pub fn tick(&mut self) {
        self.animate_wings();
        match self.mode {
            PlayerMode::Idle => self.tick_idle(),
            PlayerMode::Flying => self.tick_flying(),
            PlayerMode::Crashing => self.tick_crashing(),
            PlayerMode::Crashed => {}
        }
    }

    fn tick_idle(&mut self) {
        if self.vel_y >= self.max_vel_y || self.vel_y <= self.min_vel_y {
            self.acc_y = -self.acc_y;
        }
        self.vel_y += self.acc_y;
        self.pos.y = (self.pos.y + self.vel_y).clamp(self.min_y, self.max_y);
    }

    fn tick_flying(&mut self) {
        if self.vel_y < self.max_vel_y && !self.flapped {
            self.vel_y += self.acc_y;
        }
        self.flapped = false;

        let dy = self.vel_y * self.speed_modifier;
        self.pos.y = (self.pos.y + dy).clamp(self.min_y, self.max_y);
        self.rotate();
    }

    fn tick_crashing(&mut self) {
        if self.min_y <= self.pos.y && self.pos.y <= self.max_y {
            self.pos.y = (self.pos.y + self.vel_y).clamp(self.min_y, self.max_y);
            // Floor crashes keep their angle; pipe crashes nose-dive
            if self.crash != Some(CrashKind::Floor) {
                self.rotate();
            }
        }

        if self.vel_y < self.max_vel_y {
            self.vel_y += self.acc_y;
        }

        let settled = self.crash == Some(CrashKind::Floor) || self.rot <= self.rot_min;
        if self.pos.y >= self.max_y && settled {
            self.mode = PlayerMode::Crashed;
        }
    }

    fn rotate(&mut self) {
        self.rot = (self.rot + self.vel_rot).clamp(self.rot_min, self.rot_max);
    }

    fn animate_wings(&mut self) {
        self.frame = self.frame.wrapping_add(1);
        if !self.wings_frozen && self.frame % Params::WING_FRAME_TICKS == 0 {
            self.wing_step = (self.wing_step + 1) % WING_CYCLE.len();
        }
    }

    /// Upward impulse; ignored once the player is above the top bound
    pub fn flap(&mut self, events: &mut Events) -> bool {
        if self.pos.y <= self.min_y {
            return false;
        }
        self.vel_y = self.flap_acc;
        self.flapped = true;
        self.rot = FLAP_ROT;
        events.play(Sound::Wing);
        true
    }

    /// Turn a power-up's modifier on
    pub fn apply_effect(&mut self, kind: PowerUpKind) {
        match kind {
            PowerUpKind::SpeedBoost => self.speed_modifier = Params::SPEED_BOOST_MODIFIER,
            PowerUpKind::SlowMotion => self.speed_modifier = Params::SLOW_MOTION_MODIFIER,
            PowerUpKind::Invincible => self.invincible = true,
            PowerUpKind::SmallSize => {
                // Only shrink from full size so repeated pickups don't compound
                if self.original_size.is_none() {
                    self.original_size = Some(self.size);
                    self.size_modifier = Params::SMALL_SIZE_MODIFIER;
                    self.resize((self.size * self.size_modifier).floor());
                }
            }
        }
    }

    /// Turn a power-up's modifier off
    pub fn remove_effect(&mut self, kind: PowerUpKind) {
        match kind {
            PowerUpKind::SpeedBoost | PowerUpKind::SlowMotion => self.speed_modifier = 1.0,
            PowerUpKind::Invincible => self.invincible = false,
            PowerUpKind::SmallSize => {
                if let Some(original) = self.original_size.take() {
                    self.size_modifier = 1.0;
                    self.resize(original);
                }
            }
        }
    }

    /// Change size, moving the vertical bounds with it
    fn resize(&mut self, size: Vec2) {
        let viewport_height = self.max_y + self.size.y * 0.75;
        self.size = size;
        self.min_y = -2.0 * size.y;
        self.max_y = viewport_height - size.y * 0.75;
        self.pos.y = self.pos.y.clamp(self.min_y, self.max_y);
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    /// Horizontal centre
    pub fn cx(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// True on the one tick the player's centre passes the pipe's centre
    pub fn crossed(&self, pipe: &PipePair, scroll: &Scroll) -> bool {
        let cx = self.cx();
        pipe.cx() <= cx && cx < pipe.cx() - scroll.vel_x
    }

    /// Current wing sprite (0..=2)
    pub fn sprite_index(&self) -> u8 {
        WING_CYCLE[self.wing_step]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flying_player() -> (Player, Events) {
        let mut events = Events::new();
        let mut player = Player::new(&Config::new());
        player.set_mode(PlayerMode::Flying, &mut events);
        (player, events)
    }

    #[test]
    fn test_idle_bob_stays_in_bounds() {
        let mut player = Player::new(&Config::new());
        for _ in 0..500 {
            player.tick();
            assert!(player.vel_y >= player.min_vel_y && player.vel_y <= player.max_vel_y);
            assert!(player.pos.y >= player.min_y && player.pos.y <= player.max_y);
            assert_eq!(player.rot, 0.0);
        }
    }

    #[test]
    fn test_idle_bob_oscillates() {
        let mut player = Player::new(&Config::new());
        let start_y = player.pos.y;
        let mut went_down = false;
        let mut went_up = false;
        for _ in 0..60 {
            player.tick();
            went_down |= player.pos.y > start_y;
            went_up |= player.pos.y < start_y;
        }
        assert!(went_down && went_up, "Idle player should bob both ways");
    }

    #[test]
    fn test_entering_flying_plays_wing() {
        let (player, events) = flying_player();
        assert_eq!(player.mode, PlayerMode::Flying);
        assert_eq!(events.sounds, vec![Sound::Wing]);
    }

    #[test]
    fn test_gravity_accumulates_to_max_descent() {
        let (mut player, _) = flying_player();
        for _ in 0..40 {
            player.tick();
        }
        assert_eq!(player.vel_y, player.max_vel_y);
    }

    #[test]
    fn test_flap_sets_velocity_and_nose_up() {
        let (mut player, mut events) = flying_player();
        for _ in 0..10 {
            player.tick();
        }
        events.clear();
        assert!(player.flap(&mut events));
        assert_eq!(player.vel_y, player.flap_acc);
        assert_eq!(player.rot, 80.0);
        assert_eq!(events.sounds, vec![Sound::Wing]);

        // The flap tick skips gravity
        player.tick();
        assert_eq!(player.vel_y, -9.0);
        assert_eq!(player.rot, player.rot_max, "Rotation clamps back into range");
    }

    #[test]
    fn test_flap_ignored_above_top_bound() {
        let (mut player, mut events) = flying_player();
        player.pos.y = player.min_y;
        events.clear();
        assert!(!player.flap(&mut events));
        assert!(events.sounds.is_empty());
    }

    #[test]
    fn test_rotation_always_in_range() {
        let (mut player, mut events) = flying_player();
        for i in 0..300 {
            if i % 7 == 0 {
                player.flap(&mut events);
            }
            player.tick();
            assert!(player.rot >= player.rot_min && player.rot <= player.rot_max);
            assert!(player.pos.y >= player.min_y && player.pos.y <= player.max_y);
        }
    }

    #[test]
    fn test_speed_modifier_scales_flight() {
        let (mut normal, _) = flying_player();
        let (mut slowed, _) = flying_player();
        slowed.apply_effect(PowerUpKind::SlowMotion);
        let (start_normal, start_slowed) = (normal.pos.y, slowed.pos.y);
        normal.tick();
        slowed.tick();
        let dn = normal.pos.y - start_normal;
        let ds = slowed.pos.y - start_slowed;
        assert_eq!(ds, dn * 0.5);
    }

    #[test]
    fn test_speed_modifier_ignored_when_idle() {
        let mut plain = Player::new(&Config::new());
        let mut boosted = Player::new(&Config::new());
        boosted.apply_effect(PowerUpKind::SpeedBoost);
        plain.tick();
        boosted.tick();
        assert_eq!(plain.pos.y, boosted.pos.y);
    }

    #[test]
    fn test_speed_effects_override() {
        let mut player = Player::new(&Config::new());
        player.apply_effect(PowerUpKind::SpeedBoost);
        assert_eq!(player.speed_modifier, 1.5);
        player.apply_effect(PowerUpKind::SlowMotion);
        assert_eq!(player.speed_modifier, 0.5, "Not additive or multiplicative");
        player.remove_effect(PowerUpKind::SlowMotion);
        assert_eq!(player.speed_modifier, 1.0);
    }

    #[test]
    fn test_small_size_is_idempotent() {
        let mut player = Player::new(&Config::new());
        player.apply_effect(PowerUpKind::SmallSize);
        player.apply_effect(PowerUpKind::SmallSize);
        assert_eq!(player.size_modifier, 0.6);
        assert_eq!(player.size, Vec2::new(20.0, 14.0));
    }

    #[test]
    fn test_small_size_restores_exact_dimensions() {
        let mut player = Player::new(&Config::new());
        let original = player.size;
        for _ in 0..3 {
            player.apply_effect(PowerUpKind::SmallSize);
            player.remove_effect(PowerUpKind::SmallSize);
            assert_eq!(player.size, original);
            assert_eq!(player.size_modifier, 1.0);
        }
        // Removing without an active shrink is a no-op
        player.remove_effect(PowerUpKind::SmallSize);
        assert_eq!(player.size, original);
    }

    #[test]
    fn test_small_size_moves_bounds() {
        let config = Config::new();
        let mut player = Player::new(&config);
        let (min_y, max_y) = (player.min_y, player.max_y);

        player.apply_effect(PowerUpKind::SmallSize);
        assert_eq!(player.min_y, -2.0 * player.size.y);
        assert_eq!(player.max_y, config.viewport_height() - player.size.y * 0.75);
        // Resting at the bottom still reaches into the floor
        player.pos.y = player.max_y;
        assert!(player.bottom() > config.floor_y());

        player.remove_effect(PowerUpKind::SmallSize);
        assert_eq!((player.min_y, player.max_y), (min_y, max_y));
        assert_eq!(player.pos.y, max_y, "Growing back pulls the player inside the bounds");
    }

    #[test]
    fn test_pipe_crash_plays_die_and_nose_dives() {
        let (mut player, mut events) = flying_player();
        player.tick();
        events.clear();
        player.crash = Some(CrashKind::Pipe);
        player.set_mode(PlayerMode::Crashing, &mut events);
        assert_eq!(events.sounds, vec![Sound::Hit, Sound::Die]);

        let rot_before = player.rot;
        player.tick();
        assert!(player.rot < rot_before);
    }

    #[test]
    fn test_floor_crash_freezes_rotation() {
        let (mut player, mut events) = flying_player();
        player.tick();
        events.clear();
        player.crash = Some(CrashKind::Floor);
        player.set_mode(PlayerMode::Crashing, &mut events);
        assert_eq!(events.sounds, vec![Sound::Hit]);

        let rot_before = player.rot;
        for _ in 0..5 {
            player.tick();
            assert_eq!(player.rot, rot_before);
        }
    }

    #[test]
    fn test_crash_settles_on_floor() {
        let (mut player, mut events) = flying_player();
        player.tick();
        player.crash = Some(CrashKind::Pipe);
        player.set_mode(PlayerMode::Crashing, &mut events);
        for _ in 0..200 {
            player.tick();
            assert!(player.rot >= player.rot_min && player.rot <= player.rot_max);
        }
        assert_eq!(player.mode, PlayerMode::Crashed);
        assert_eq!(player.pos.y, player.max_y);
        assert_eq!(player.rot, player.rot_min);
    }

    #[test]
    fn test_wings_cycle_and_freeze() {
        let (mut player, mut events) = flying_player();
        let mut seen = Vec::new();
        for _ in 0..20 {
            player.tick();
            seen.push(player.sprite_index());
        }
        assert!(seen.contains(&0) && seen.contains(&1) && seen.contains(&2));

        player.crash = Some(CrashKind::Floor);
        player.set_mode(PlayerMode::Crashing, &mut events);
        let frozen = player.sprite_index();
        for _ in 0..20 {
            player.tick();
            assert_eq!(player.sprite_index(), frozen);
        }
    }

    #[test]
    fn test_crossed_once_per_pipe() {
        let mut player = Player::new(&Config::new());
        let scroll = Scroll::new(-4.0);
        // Pipe centre at 100
        let mut pipe = PipePair::new(100.0 - 26.0, 150.0, 120.0, 52.0, 320.0);
        player.pos.x = 100.0 - player.size.x / 2.0;
        assert!(player.crossed(&pipe, &scroll));

        pipe.x += scroll.vel_x;
        assert_eq!(pipe.cx(), 96.0);
        assert!(!player.crossed(&pipe, &scroll));
    }

    #[test]
    fn test_not_crossed_before_centre() {
        let mut player = Player::new(&Config::new());
        let scroll = Scroll::new(-4.0);
        let pipe = PipePair::new(100.0 - 26.0, 150.0, 120.0, 52.0, 320.0);
        player.pos.x = 99.0 - player.size.x / 2.0;
        assert!(!player.crossed(&pipe, &scroll));
    }
}

//! Frame protocol for the Flappy browser host
//!
//! One [`Frame`] per tick describes everything the page has to draw and
//! play. Uses postcard for compact binary serialization.

use postcard::{from_bytes, to_allocvec};

// ============================================================================
// Frame contents
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Phase {
    Splash,
    Playing,
    GameOver,
}

/// Power-up kinds, in HUD order
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PowerUp {
    SpeedBoost,
    Invincible,
    SlowMotion,
    SmallSize,
}

/// Which image a sprite uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SpriteKind {
    Background,
    Floor,
    PipeUpper,
    PipeLower,
    /// Wing frame 0..=2
    Player { frame: u8 },
    PowerUp(PowerUp),
    Welcome,
    GameOver,
    /// Score digit 0..=9
    Digit(u8),
}

/// One image placed in window coordinates (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// Degrees, counter-clockwise
    pub rotation: f32,
    pub alpha: u8,
    /// Draw a gold outline around the sprite
    pub glow: bool,
}

impl Sprite {
    pub fn new(kind: SpriteKind, x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            kind,
            x,
            y,
            w,
            h,
            rotation: 0.0,
            alpha: 255,
            glow: false,
        }
    }
}

/// A line of HUD text
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Text {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub color: [u8; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SoundCue {
    Wing,
    Hit,
    Die,
    Point,
    Pickup,
    Swoosh,
}

/// Everything the host needs for one tick, in draw order
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    pub tick: u32,
    pub phase: Phase,
    pub score: u32,
    pub sprites: Vec<Sprite>,
    pub texts: Vec<Text>,
    pub sounds: Vec<SoundCue>,
    /// Host should stop the loop and close
    pub quit: bool,
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl Frame {
    /// Serialize frame to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize frame from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

use crate::map::Aabb;
use glam::Vec2;

/// Positioned box - power-up items and anything else drawn from its corner
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub pos: Vec2,  // Top-left corner
    pub size: Vec2, // Width, height
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

/// Horizontal scroll velocity (pixels per tick, negative = leftwards)
#[derive(Debug, Clone, Copy, Default)]
pub struct Scroll {
    pub vel_x: f32,
}

impl Scroll {
    pub fn new(vel_x: f32) -> Self {
        Self { vel_x }
    }

    pub fn stop(&mut self) {
        self.vel_x = 0.0;
    }
}

/// Upper and lower pipe sharing one gap
#[derive(Debug, Clone, Copy)]
pub struct PipePair {
    pub x: f32,
    pub gap_y: f32, // Top of the gap
    pub gap: f32,   // Gap height
    pub width: f32,
    pub height: f32,
    pub scored: bool,
}

impl PipePair {
    pub fn new(x: f32, gap_y: f32, gap: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            gap_y,
            gap,
            width,
            height,
            scored: false,
        }
    }

    pub fn upper(&self) -> Aabb {
        Aabb::from_pos_size(
            Vec2::new(self.x, self.gap_y - self.height),
            Vec2::new(self.width, self.height),
        )
    }

    pub fn lower(&self) -> Aabb {
        Aabb::from_pos_size(
            Vec2::new(self.x, self.gap_y + self.gap),
            Vec2::new(self.width, self.height),
        )
    }

    /// Horizontal centre
    pub fn cx(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

/// Scrolling ground strip
#[derive(Debug, Clone, Copy)]
pub struct Floor {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub extra: f32, // How far the strip can shift before wrapping
}

impl Floor {
    pub fn new(y: f32, width: f32, height: f32, window_width: f32) -> Self {
        Self {
            x: 0.0,
            y,
            width,
            height,
            extra: (width - window_width).max(1.0),
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(Vec2::new(self.x, self.y), Vec2::new(self.width, self.height))
    }

    /// Shift by `vel_x` and wrap into `(-extra, 0]`
    pub fn advance(&mut self, vel_x: f32) {
        self.x = -((-self.x - vel_x).rem_euclid(self.extra));
    }
}

/// Power-up kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerUpKind {
    SpeedBoost,
    Invincible,
    SlowMotion,
    SmallSize,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::SpeedBoost,
        PowerUpKind::Invincible,
        PowerUpKind::SlowMotion,
        PowerUpKind::SmallSize,
    ];

    pub fn index(self) -> usize {
        match self {
            PowerUpKind::SpeedBoost => 0,
            PowerUpKind::Invincible => 1,
            PowerUpKind::SlowMotion => 2,
            PowerUpKind::SmallSize => 3,
        }
    }

    /// HUD label
    pub fn label(self) -> &'static str {
        match self {
            PowerUpKind::SpeedBoost => "Speed Boost",
            PowerUpKind::Invincible => "Invincible",
            PowerUpKind::SlowMotion => "Slow Motion",
            PowerUpKind::SmallSize => "Small Size",
        }
    }

    /// HUD text colour (RGB)
    pub fn color(self) -> [u8; 3] {
        match self {
            PowerUpKind::SpeedBoost => [255, 165, 0],
            PowerUpKind::Invincible => [255, 215, 0],
            PowerUpKind::SlowMotion => [0, 191, 255],
            PowerUpKind::SmallSize => [147, 112, 219],
        }
    }

    /// The other kind that drives the speed modifier, if this is one of them
    pub fn speed_partner(self) -> Option<PowerUpKind> {
        match self {
            PowerUpKind::SpeedBoost => Some(PowerUpKind::SlowMotion),
            PowerUpKind::SlowMotion => Some(PowerUpKind::SpeedBoost),
            PowerUpKind::Invincible | PowerUpKind::SmallSize => None,
        }
    }
}

/// Collectable power-up item
#[derive(Debug, Clone, Copy)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    pub collected: bool,
}

impl PowerUp {
    pub fn new(kind: PowerUpKind) -> Self {
        Self {
            kind,
            collected: false,
        }
    }
}

/// What the player crashed into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashKind {
    Floor,
    Pipe,
}

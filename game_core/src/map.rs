use crate::config::Config;
use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box from its top-left corner and size (screen coordinates, y down)
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Strict overlap: boxes that only share an edge do not intersect
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// Playfield bounds for one round
#[derive(Debug, Clone, Copy)]
pub struct GameMap {
    pub width: f32,
    pub viewport_height: f32,
}

impl GameMap {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.window_width,
            viewport_height: config.viewport_height(),
        }
    }

    /// Vertical band that pipe gaps and power-ups are placed in
    pub fn gap_band(&self) -> (f32, f32) {
        (self.viewport_height * 0.2, self.viewport_height * 0.8)
    }

    /// True once a box has fully scrolled past the left edge
    pub fn is_past_left_edge(&self, aabb: &Aabb) -> bool {
        aabb.max.x < 0.0
    }
}

//! Fundamental geometric types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 2D position on the playing field (display points).
/// x grows to the right, y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// Visible playing field anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldBounds {
    pub width: f32,
    pub height: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another position.
    pub fn distance_to(&self, other: &Position) -> f32 {
        Vec2::from(*self).distance(Vec2::from(*other))
    }
}

impl From<Position> for Vec2 {
    fn from(p: Position) -> Self {
        Vec2::new(p.x, p.y)
    }
}

impl From<Vec2> for Position {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl Default for FieldBounds {
    fn default() -> Self {
        Self {
            width: crate::constants::DEFAULT_FIELD_WIDTH,
            height: crate::constants::DEFAULT_FIELD_HEIGHT,
        }
    }
}

impl FieldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether a position lies inside the field.
    pub fn contains(&self, p: &Position) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }

    /// Clamp a position into the field.
    pub fn clamp(&self, p: Position) -> Position {
        let max = Vec2::new(self.width.max(0.0), self.height.max(0.0));
        Vec2::from(p).clamp(Vec2::ZERO, max).into()
    }

    /// Both dimensions strictly positive and finite.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

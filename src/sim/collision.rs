//! Axis-aligned bounding box overlap and penetration resolution
//!
//! The one reusable piece of collision math: the ball-vs-brick resolver.
//! The paddle deliberately does not use it - its response is angle control,
//! not a reflection - so that test stays hand-inlined in `tick`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box stored as center + half extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, half: Vec2) -> Self {
        Self { center, half }
    }

    /// Build from a center and full width/height.
    pub fn from_size(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            half: size * 0.5,
        }
    }

    pub fn left(&self) -> f32 {
        self.center.x - self.half.x
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.half.x
    }

    pub fn top(&self) -> f32 {
        self.center.y + self.half.y
    }

    pub fn bottom(&self) -> f32 {
        self.center.y - self.half.y
    }
}

/// Resolve a moving square ball against a static box.
///
/// Returns true on overlap. On a hit the ball is pushed out along the axis
/// of least penetration and that velocity component is inverted, leaving the
/// ball tangent to the face it struck. A miss mutates nothing.
///
/// Equal penetration on both axes resolves on Y (the comparison is
/// `px < py`, not `<=`) - arbitrary, but kept exactly for reproducibility.
pub fn ball_aabb_collision(
    pos: &mut Vec2,
    half_extent: f32,
    vel: &mut Vec2,
    target: &Aabb,
) -> bool {
    let overlap_x =
        (pos.x + half_extent) >= target.left() && (pos.x - half_extent) <= target.right();
    let overlap_y =
        (pos.y + half_extent) >= target.bottom() && (pos.y - half_extent) <= target.top();

    if !(overlap_x && overlap_y) {
        return false;
    }

    let dx = pos.x - target.center.x;
    let px = (target.half.x + half_extent) - dx.abs();

    let dy = pos.y - target.center.y;
    let py = (target.half.y + half_extent) - dy.abs();

    if px < py {
        vel.x = -vel.x;
        pos.x += if dx > 0.0 { px } else { -px };
    } else {
        vel.y = -vel.y;
        pos.y += if dy > 0.0 { py } else { -py };
    }
    true
}

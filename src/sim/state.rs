//! Entity state for the simulation
//!
//! Everything the per-frame step mutates lives in one `GameState` aggregate,
//! owned by the main loop and read by the presentation adapter.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::field;
use crate::consts::*;

/// The bounded rectangular play area; all wall and brick-band math derives
/// from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub center: Vec2,
    pub size: Vec2,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            center: Vec2::new(PLAYFIELD_CENTER_X, PLAYFIELD_CENTER_Y),
            size: Vec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT),
        }
    }
}

impl Playfield {
    pub fn left(&self) -> f32 {
        self.center.x - self.size.x * 0.5
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.size.x * 0.5
    }

    pub fn top(&self) -> f32 {
        self.center.y + self.size.y * 0.5
    }

    /// No wall here - a ball crossing this line is a miss.
    pub fn bottom(&self) -> f32 {
        self.center.y - self.size.y * 0.5
    }
}

/// The player's paddle. Only x moves; the geometry is fixed and the paddle
/// lives for the whole session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
}

impl Paddle {
    pub fn half_width(&self) -> f32 {
        PADDLE_WIDTH * 0.5
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_size(
            Vec2::new(self.x, PADDLE_Y),
            Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
        )
    }
}

/// The ball: a small axis-aligned square.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Vec2::new(BALL_SPAWN_X, BALL_SPAWN_Y),
            vel: Vec2::new(BALL_SPAWN_VX, BALL_SPAWN_VY),
        }
    }
}

impl Ball {
    pub fn half_extent(&self) -> f32 {
        BALL_SIZE * 0.5
    }

    /// Restore the fixed spawn position and velocity (after a miss).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_size(self.pos, Vec2::splat(BALL_SIZE))
    }
}

/// A destructible brick. Built once by the field generator; removal is
/// permanent for the session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: [f32; 3],
    pub destroyed: bool,
}

impl Brick {
    pub fn aabb(&self) -> Aabb {
        Aabb::from_size(self.pos, self.size)
    }
}

/// Complete game state; the single simulation aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub playfield: Playfield,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: Vec<Brick>,
    pub score: u64,
    pub bricks_destroyed: u32,
}

impl GameState {
    /// Fresh session: full brick field, ball at spawn, score zero.
    pub fn new() -> Self {
        let playfield = Playfield::default();
        let mut bricks = Vec::new();
        field::build_bricks(&mut bricks, &playfield);

        Self {
            playfield,
            paddle: Paddle::default(),
            ball: Ball::default(),
            bricks,
            score: 0,
            bricks_destroyed: 0,
        }
    }

    /// Live bricks still on the field (for the title line).
    pub fn remaining_bricks(&self) -> usize {
        self.bricks.len()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ball_reset_restores_spawn_exactly() {
        let mut ball = Ball {
            pos: Vec2::new(0.5, -1.3),
            vel: Vec2::new(-1.1, -0.4),
        };
        ball.reset();
        assert_eq!(ball.pos, Vec2::new(BALL_SPAWN_X, BALL_SPAWN_Y));
        assert_eq!(ball.vel, Vec2::new(BALL_SPAWN_VX, BALL_SPAWN_VY));
    }

    #[test]
    fn playfield_walls_derive_from_center_and_size() {
        let pf = Playfield::default();
        assert!((pf.left() - -0.97).abs() < 1e-6);
        assert!((pf.right() - 0.97).abs() < 1e-6);
        assert!((pf.top() - 0.98).abs() < 1e-6);
        assert!((pf.bottom() - -1.0).abs() < 1e-6);
    }

    #[test]
    fn paddle_aabb_tracks_x() {
        let paddle = Paddle { x: 0.3 };
        let aabb = paddle.aabb();
        assert_eq!(aabb.center, Vec2::new(0.3, PADDLE_Y));
        assert_eq!(aabb.half, Vec2::new(PADDLE_WIDTH * 0.5, PADDLE_HEIGHT * 0.5));
    }

    #[test]
    fn new_state_starts_with_a_full_field() {
        let state = GameState::new();
        assert_eq!(state.score, 0);
        assert_eq!(state.bricks_destroyed, 0);
        assert_eq!(state.remaining_bricks(), 112);
        assert_eq!(state.ball, Ball::default());
    }
}

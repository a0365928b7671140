//! Breakout - a classic Atari-style brick-breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddle, ball, bricks, collisions, scoring)
//! - `renderer`: Presentation adapter (state -> colored rectangles + title text)
//!
//! Window and GPU context creation live in the platform layer hosting this
//! crate; nothing in here touches a graphics API.

pub mod renderer;
pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Upper bound on the per-frame delta (seconds); a frame hitch must not
    /// let the ball tunnel through geometry
    pub const MAX_DT: f32 = 0.05;

    /// Playfield dimensions - a black field slightly inset from the window,
    /// leaving a thin visible wall
    pub const PLAYFIELD_WIDTH: f32 = 1.94;
    pub const PLAYFIELD_HEIGHT: f32 = 1.98;
    pub const PLAYFIELD_CENTER_X: f32 = 0.0;
    pub const PLAYFIELD_CENTER_Y: f32 = -0.01;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 0.25;
    pub const PADDLE_HEIGHT: f32 = 0.06;
    pub const PADDLE_Y: f32 = -0.88;
    pub const PADDLE_SPEED: f32 = 1.6;

    /// Ball defaults (the ball is a small axis-aligned square)
    pub const BALL_SIZE: f32 = 0.04;
    pub const BALL_SPAWN_X: f32 = 0.0;
    pub const BALL_SPAWN_Y: f32 = -0.2;
    pub const BALL_SPAWN_VX: f32 = 0.7;
    pub const BALL_SPAWN_VY: f32 = 1.0;

    /// Horizontal exit speed when the ball strikes the paddle edge
    pub const PADDLE_DEFLECT_MAX: f32 = 1.2;
    /// Minimum horizontal speed after a paddle bounce (keeps the ball out of
    /// a near-vertical bounce loop)
    pub const PADDLE_DEFLECT_MIN: f32 = 0.2;

    /// Points per destroyed brick
    pub const BRICK_SCORE: u64 = 10;

    /// Window title prefix
    pub const GAME_TITLE: &str = "Breakout";
}

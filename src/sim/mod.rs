//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - No rendering or platform dependencies
//! - Single writer: the main loop ticks it to completion each frame before
//!   the presentation layer reads the result
//! - Deterministic: identical inputs produce identical state

pub mod collision;
pub mod field;
pub mod state;
pub mod tick;

pub use collision::{Aabb, ball_aabb_collision};
pub use field::{BAND_COLORS, BRICK_COLS, BRICK_ROWS, build_bricks};
pub use state::{Ball, Brick, GameState, Paddle, Playfield};
pub use tick::{TickInput, tick};

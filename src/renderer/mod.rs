//! Presentation adapter
//!
//! Maps an immutable snapshot of the simulation state to flat-colored
//! rectangles plus the window-title line. Creating the window and GPU
//! context and issuing the actual draw calls is the hosting platform layer's
//! job, never this crate's.

pub mod shapes;
pub mod vertex;

use glam::Vec2;

use crate::consts::GAME_TITLE;
use crate::sim::GameState;
use shapes::push_rect;
use vertex::{Vertex, colors};

/// The full-window background quad spans the whole NDC range
const BACKGROUND_SIZE: f32 = 2.0;

/// Build the vertex list for one frame, back to front: background,
/// playfield, bricks, paddle, ball. Read-only over the state.
pub fn build_frame(state: &GameState) -> Vec<Vertex> {
    let mut vertices =
        Vec::with_capacity((state.bricks.len() + 4) * shapes::VERTS_PER_RECT);

    push_rect(
        &mut vertices,
        Vec2::ZERO,
        Vec2::splat(BACKGROUND_SIZE),
        colors::BACKGROUND,
    );
    push_rect(
        &mut vertices,
        state.playfield.center,
        state.playfield.size,
        colors::PLAYFIELD,
    );

    for brick in &state.bricks {
        let [r, g, b] = brick.color;
        push_rect(&mut vertices, brick.pos, brick.size, [r, g, b, 1.0]);
    }

    let paddle = state.paddle.aabb();
    push_rect(&mut vertices, paddle.center, paddle.half * 2.0, colors::PADDLE);

    let ball = state.ball.aabb();
    push_rect(&mut vertices, ball.center, ball.half * 2.0, colors::BALL);

    vertices
}

/// Title-bar line: name, score, remaining bricks.
pub fn window_title(state: &GameState) -> String {
    format!(
        "{}  |  Score: {}  |  Bricks: {}",
        GAME_TITLE,
        state.score,
        state.remaining_bricks()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_covers_every_element() {
        let state = GameState::new();
        let frame = build_frame(&state);
        // background + playfield + 112 bricks + paddle + ball
        assert_eq!(frame.len(), (112 + 4) * shapes::VERTS_PER_RECT);
    }

    #[test]
    fn frame_shrinks_as_bricks_disappear() {
        let mut state = GameState::new();
        state.bricks.truncate(10);
        let frame = build_frame(&state);
        assert_eq!(frame.len(), (10 + 4) * shapes::VERTS_PER_RECT);
    }

    #[test]
    fn title_line_matches_the_reference_format() {
        let mut state = GameState::new();
        assert_eq!(window_title(&state), "Breakout  |  Score: 0  |  Bricks: 112");

        state.score = 250;
        state.bricks.truncate(87);
        assert_eq!(window_title(&state), "Breakout  |  Score: 250  |  Bricks: 87");
    }
}

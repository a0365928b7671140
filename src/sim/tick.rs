//! Per-frame simulation step
//!
//! Advances the whole game by one frame: input -> paddle movement -> ball
//! integration -> collision resolution (walls, paddle, bricks) -> scoring ->
//! reset-on-miss. There is no larger state machine: the game is always
//! "playing" and the ball respawns indefinitely.

use serde::{Deserialize, Serialize};

use super::collision::ball_aabb_collision;
use super::state::GameState;
use crate::consts::*;

/// Input sampled for a single frame.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
}

impl TickInput {
    /// Discrete horizontal direction: -1, 0 or +1. Opposite keys cancel.
    pub fn horizontal_dir(&self) -> f32 {
        let mut dir = 0.0;
        if self.left {
            dir -= 1.0;
        }
        if self.right {
            dir += 1.0;
        }
        dir
    }
}

/// Advance the game state by one frame.
///
/// `dt` is clamped to [`MAX_DT`] so a frame hitch cannot tunnel the ball
/// through geometry. Collisions are resolved post-hoc by clamping after an
/// explicit Euler move; there is no swept detection.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let dt = dt.min(MAX_DT);

    // Paddle movement, clamped into the walls
    let half_pw = state.paddle.half_width();
    state.paddle.x += input.horizontal_dir() * PADDLE_SPEED * dt;
    state.paddle.x = state.paddle.x.clamp(
        state.playfield.left() + half_pw,
        state.playfield.right() - half_pw,
    );

    // Ball integration
    let half_ball = state.ball.half_extent();
    let ball = &mut state.ball;
    ball.pos += ball.vel * dt;

    // Walls. No bottom wall: below the playfield is a miss, not a bounce.
    if ball.pos.y + half_ball > state.playfield.top() {
        ball.pos.y = state.playfield.top() - half_ball;
        ball.vel.y = -ball.vel.y;
    }
    if ball.pos.x - half_ball < state.playfield.left() {
        ball.pos.x = state.playfield.left() + half_ball;
        ball.vel.x = -ball.vel.x;
    }
    if ball.pos.x + half_ball > state.playfield.right() {
        ball.pos.x = state.playfield.right() - half_ball;
        ball.vel.x = -ball.vel.x;
    }

    // Paddle bounce, gated on a falling ball so one bounce cannot retrigger
    // while still overlapping. Deliberately not the generic AABB resolver:
    // the response is angle control, not a reflection.
    let half_ph = PADDLE_HEIGHT * 0.5;
    let overlap_x = (ball.pos.x + half_ball) >= (state.paddle.x - half_pw)
        && (ball.pos.x - half_ball) <= (state.paddle.x + half_pw);
    let overlap_y = (ball.pos.y - half_ball) <= (PADDLE_Y + half_ph)
        && (ball.pos.y + half_ball) >= (PADDLE_Y - half_ph);

    if overlap_x && overlap_y && ball.vel.y < 0.0 {
        // Snap onto the paddle top to avoid a sticky gap
        ball.pos.y = PADDLE_Y + half_ph + half_ball;
        ball.vel.y = -ball.vel.y;

        // The exit angle follows where the paddle was struck
        let offset = ((ball.pos.x - state.paddle.x) / half_pw).clamp(-1.0, 1.0);
        ball.vel.x = offset * PADDLE_DEFLECT_MAX;

        // Prevent a too-straight vertical bounce; exactly-zero offset goes
        // to the positive side
        if ball.vel.x.abs() < PADDLE_DEFLECT_MIN {
            ball.vel.x = if ball.vel.x < 0.0 {
                -PADDLE_DEFLECT_MIN
            } else {
                PADDLE_DEFLECT_MIN
            };
        }
    }

    // Bricks: first hit only per frame (simple + stable), scanned in
    // generator order
    let mut hit_brick = false;
    for brick in state.bricks.iter_mut() {
        if brick.destroyed {
            continue;
        }
        if ball_aabb_collision(&mut ball.pos, half_ball, &mut ball.vel, &brick.aabb()) {
            brick.destroyed = true;
            state.score += BRICK_SCORE;
            state.bricks_destroyed += 1;
            hit_brick = true;
            log::debug!(
                "brick destroyed at ({:.3}, {:.3}), score {}",
                brick.pos.x,
                brick.pos.y,
                state.score
            );
            break;
        }
    }
    if hit_brick {
        state.bricks.retain(|b| !b.destroyed);
    }

    // Miss: respawn once the ball has fully dropped below the playfield
    if ball.pos.y < state.playfield.bottom() - half_ball {
        log::debug!("miss, ball reset");
        ball.reset();
    }
}

//! Breakout entry point
//!
//! Runs the simulation headless with an autopilot input: the paddle tracks
//! the ball at a fixed frame rate. A windowed build hosts the exact same
//! loop around `tick` + `renderer::build_frame`, feeding real key state and
//! the measured frame delta instead.

use breakout::renderer;
use breakout::sim::{GameState, TickInput, tick};

/// Nominal frame delta for the headless loop (60 fps)
const FRAME_DT: f32 = 1.0 / 60.0;

/// Bound on the demo session length
const DEMO_FRAMES: u32 = 60 * 120;

fn main() {
    env_logger::init();

    let mut state = GameState::new();
    log::info!("{}", renderer::window_title(&state));

    let mut last_score = state.score;
    for _ in 0..DEMO_FRAMES {
        let input = TickInput {
            left: state.ball.pos.x < state.paddle.x,
            right: state.ball.pos.x > state.paddle.x,
        };
        tick(&mut state, &input, FRAME_DT);

        if state.score != last_score {
            last_score = state.score;
            log::info!("{}", renderer::window_title(&state));
        }
        if state.bricks.is_empty() {
            break;
        }
    }

    let frame = renderer::build_frame(&state);
    log::debug!("final frame: {} vertices", frame.len());
    println!("{}", renderer::window_title(&state));
}

//! Brick field generation
//!
//! Builds the fixed 14x8 grid: four two-row color bands filling a brick band
//! below a reserved score band at the top of the playfield.

use glam::Vec2;

use super::state::{Brick, Playfield};

/// Grid shape
pub const BRICK_COLS: usize = 14;
pub const ROWS_PER_BAND: usize = 2;
pub const BRICK_BANDS: usize = 4;
pub const BRICK_ROWS: usize = ROWS_PER_BAND * BRICK_BANDS;

/// Reserved strip at the top of the playfield for the score display
const SCORE_BAND_HEIGHT: f32 = 0.18;

/// Layout margins and gaps: small side margin, tiny gaps, so the grid fills
/// the width nicely
const MARGIN_X: f32 = 0.02;
const MARGIN_TOP: f32 = 0.06;
const GAP_X: f32 = 0.006;
const GAP_Y: f32 = 0.012;

/// Total height of the brick band
const AREA_HEIGHT: f32 = 0.42;

/// Band colors, top to bottom: red, orange, green, yellow
pub const BAND_COLORS: [[f32; 3]; BRICK_BANDS] = [
    [0.86, 0.10, 0.10],
    [0.92, 0.55, 0.10],
    [0.10, 0.70, 0.20],
    [0.90, 0.85, 0.15],
];

/// Fill `bricks` with the full grid for the given playfield.
///
/// Clears the output first, so calling it again is a full level reset.
/// Deterministic: identical playfields produce identical brick lists,
/// row-major from the top-left.
pub fn build_bricks(bricks: &mut Vec<Brick>, playfield: &Playfield) {
    bricks.clear();

    let left = playfield.left();
    let right = playfield.right();
    let top = playfield.top();

    // Bricks start below the reserved score band
    let bricks_top = top - SCORE_BAND_HEIGHT;

    let area_w = (right - left) - MARGIN_X * 2.0;
    let brick_w = (area_w - GAP_X * (BRICK_COLS - 1) as f32) / BRICK_COLS as f32;
    let brick_h = (AREA_HEIGHT - GAP_Y * (BRICK_ROWS - 1) as f32) / BRICK_ROWS as f32;
    debug_assert!(
        brick_w > 0.0 && brick_h > 0.0,
        "playfield too small for the {BRICK_COLS}x{BRICK_ROWS} brick grid"
    );

    let start_x = left + MARGIN_X + brick_w * 0.5;
    let start_y = bricks_top - MARGIN_TOP - brick_h * 0.5;

    bricks.reserve(BRICK_COLS * BRICK_ROWS);

    for row in 0..BRICK_ROWS {
        let color = BAND_COLORS[row / ROWS_PER_BAND];
        let y = start_y - row as f32 * (brick_h + GAP_Y);

        for col in 0..BRICK_COLS {
            let x = start_x + col as f32 * (brick_w + GAP_X);
            bricks.push(Brick {
                pos: Vec2::new(x, y),
                size: Vec2::new(brick_w, brick_h),
                color,
                destroyed: false,
            });
        }
    }

    log::info!("built {} bricks ({BRICK_COLS}x{BRICK_ROWS})", bricks.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_the_full_grid() {
        let mut bricks = Vec::new();
        build_bricks(&mut bricks, &Playfield::default());
        assert_eq!(bricks.len(), BRICK_COLS * BRICK_ROWS);
        assert_eq!(bricks.len(), 112);
        assert!(bricks.iter().all(|b| !b.destroyed));
    }

    #[test]
    fn deterministic_and_clears_stale_output() {
        let playfield = Playfield::default();

        let mut a = Vec::new();
        build_bricks(&mut a, &playfield);

        // Pre-populated output must be discarded, not appended to
        let mut b = vec![Brick {
            pos: Vec2::ZERO,
            size: Vec2::ONE,
            color: [0.0; 3],
            destroyed: true,
        }];
        build_bricks(&mut b, &playfield);

        assert_eq!(a, b);
    }

    #[test]
    fn rows_are_colored_in_bands_top_to_bottom() {
        let mut bricks = Vec::new();
        build_bricks(&mut bricks, &Playfield::default());

        for (i, brick) in bricks.iter().enumerate() {
            let row = i / BRICK_COLS;
            assert_eq!(brick.color, BAND_COLORS[row / ROWS_PER_BAND]);
        }

        // Row-major: columns go left to right, rows descend
        assert!(bricks[0].pos.x < bricks[1].pos.x);
        assert!(bricks[0].pos.y > bricks[BRICK_COLS].pos.y);
        assert_eq!(bricks[0].color, BAND_COLORS[0]);
        assert_eq!(bricks.last().unwrap().color, BAND_COLORS[BRICK_BANDS - 1]);
    }

    #[test]
    fn grid_fits_inside_the_playfield() {
        let playfield = Playfield::default();
        let mut bricks = Vec::new();
        build_bricks(&mut bricks, &playfield);

        for brick in &bricks {
            let aabb = brick.aabb();
            assert!(aabb.left() >= playfield.left());
            assert!(aabb.right() <= playfield.right());
            assert!(aabb.top() <= playfield.top() - SCORE_BAND_HEIGHT);
            assert!(aabb.bottom() >= playfield.bottom());
        }
    }
}

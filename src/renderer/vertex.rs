//! Vertex data for the presentation layer

use bytemuck::{Pod, Zeroable};

/// Flat-colored 2D vertex, laid out for direct upload to a GPU vertex buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for the fixed game elements (bricks carry their own)
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.95, 0.95, 0.95, 1.0];
    pub const PLAYFIELD: [f32; 4] = [0.02, 0.02, 0.02, 1.0];
    pub const PADDLE: [f32; 4] = [0.20, 0.70, 1.00, 1.0];
    pub const BALL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}

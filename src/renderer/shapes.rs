//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;

/// Vertices per rectangle (two triangles)
pub const VERTS_PER_RECT: usize = 6;

/// Append a filled axis-aligned rectangle as two triangles.
pub fn push_rect(out: &mut Vec<Vertex>, center: Vec2, size: Vec2, color: [f32; 4]) {
    let hw = size.x * 0.5;
    let hh = size.y * 0.5;

    let bl = Vertex::new(center.x - hw, center.y - hh, color);
    let br = Vertex::new(center.x + hw, center.y - hh, color);
    let tr = Vertex::new(center.x + hw, center.y + hh, color);
    let tl = Vertex::new(center.x - hw, center.y + hh, color);

    out.extend_from_slice(&[bl, br, tr, bl, tr, tl]);
}

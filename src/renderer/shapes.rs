//! Triangle-fan conversion for GPU backends
//!
//! wgpu only has list and strip topologies, so fans are expanded into
//! independent triangles that all share the fan's first vertex.

use glam::Vec2;

use super::vertex::Vertex;

/// Expand a fan into a triangle list: `(p0, p[i], p[i + 1])` for each `i >= 1`
///
/// Fewer than three points produce no triangles.
pub fn fan_to_triangle_list(points: &[Vec2]) -> Vec<Vertex> {
    let Some((&hub, rim)) = points.split_first() else {
        return Vec::new();
    };
    if rim.len() < 2 {
        return Vec::new();
    }

    let mut vertices = Vec::with_capacity((rim.len() - 1) * 3);
    for edge in rim.windows(2) {
        vertices.push(Vertex::from(hub));
        vertices.push(Vertex::from(edge[0]));
        vertices.push(Vertex::from(edge[1]));
    }
    vertices
}

//! Vertex and uniform types for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// 2D vertex in simulation space (pixels, origin bottom-left)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
}

impl Vertex {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { position: [x, y] }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x2,
            }],
        }
    }
}

impl From<Vec2> for Vertex {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

/// Per-draw uniform block: shape color and framebuffer resolution
///
/// Padded to 32 bytes for WGSL uniform alignment.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ShapeUniforms {
    pub color: [f32; 4],
    pub resolution: [f32; 2],
    pub _padding: [f32; 2],
}

impl ShapeUniforms {
    pub fn new(color: [f32; 3], resolution: Vec2) -> Self {
        Self {
            color: [color[0], color[1], color[2], 1.0],
            resolution: resolution.to_array(),
            _padding: [0.0; 2],
        }
    }
}

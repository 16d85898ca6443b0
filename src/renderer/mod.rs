//! Rendering surface
//!
//! The window and GPU context live outside the crate. They implement
//! [`RenderSurface`], and [`draw_frame`] issues one triangle-fan draw per shape.
//! Vertex data is handed over again every frame since shapes move every frame.

pub mod shapes;
pub mod vertex;

use std::ops::Range;

use glam::Vec2;

use crate::sim::SimState;
pub use shapes::fan_to_triangle_list;
pub use vertex::{ShapeUniforms, Vertex};

/// Something that accepts per-shape draw calls
pub trait RenderSurface {
    /// Forward the current framebuffer size to resolution-dependent uniforms
    fn set_resolution(&mut self, width: f32, height: f32);

    /// Called once before the frame's draw calls
    fn begin_frame(&mut self) {}

    /// Draw a convex fan in the given color
    fn draw_triangle_fan(&mut self, color: [f32; 3], vertices: &[Vec2]);
}

/// Draw every shape in spawn order
pub fn draw_frame<S: RenderSurface + ?Sized>(state: &SimState, surface: &mut S) {
    surface.set_resolution(state.bounds.x, state.bounds.y);
    surface.begin_frame();
    for shape in &state.shapes {
        surface.draw_triangle_fan(shape.color, shape.vertices());
    }
}

/// A recorded draw: uniforms plus a range into the frame's vertex buffer
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub uniforms: ShapeUniforms,
    pub vertices: Range<u32>,
}

/// CPU-side surface that stages a frame as one triangle-list vertex buffer
///
/// This is what a wgpu backend uploads: `vertex_bytes()` goes into the vertex
/// buffer and each `DrawCall` becomes a uniform write plus a ranged draw.
#[derive(Debug, Default)]
pub struct StagingSurface {
    pub resolution: Vec2,
    pub vertices: Vec<Vertex>,
    pub draws: Vec<DrawCall>,
    /// Frames begun since creation
    pub frames: u64,
}

impl StagingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertex buffer contents ready for upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl RenderSurface for StagingSurface {
    fn set_resolution(&mut self, width: f32, height: f32) {
        let resolution = Vec2::new(width, height);
        if resolution != self.resolution {
            log::debug!("Surface resolution {width}x{height}");
            self.resolution = resolution;
        }
    }

    fn begin_frame(&mut self) {
        self.vertices.clear();
        self.draws.clear();
        self.frames += 1;
    }

    fn draw_triangle_fan(&mut self, color: [f32; 3], vertices: &[Vec2]) {
        let start = self.vertices.len() as u32;
        self.vertices.extend(fan_to_triangle_list(vertices));
        let end = self.vertices.len() as u32;
        self.draws.push(DrawCall {
            uniforms: ShapeUniforms::new(color, self.resolution),
            vertices: start..end,
        });
    }
}

//! Pointer and resize events from the windowing layer

use glam::Vec2;

/// Mouse buttons the sandbox reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Spawns a circle
    Left,
    /// Spawns a square
    Right,
    /// Ignored
    Middle,
}

/// A pointer button press in window coordinates (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPress {
    pub button: PointerButton,
    pub screen_pos: Vec2,
}

impl PointerPress {
    pub fn new(button: PointerButton, x: f32, y: f32) -> Self {
        Self {
            button,
            screen_pos: Vec2::new(x, y),
        }
    }
}

/// Framebuffer resize
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resize {
    /// Framebuffer size in pixels
    pub width: f32,
    pub height: f32,
    /// Framebuffer pixels per window coordinate unit
    pub scale_factor: f32,
}

/// Convert a window-space position into simulation space
///
/// Simulation space is framebuffer pixels with the origin bottom-left.
#[inline]
pub fn screen_to_sim(screen_pos: Vec2, scale_factor: f32, bounds_height: f32) -> Vec2 {
    let px = screen_pos * scale_factor;
    Vec2::new(px.x, bounds_height - px.y)
}

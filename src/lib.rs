//! Collision Sandbox - 2D shapes that bounce off the window border and repel on overlap
//!
//! Core modules:
//! - `sim`: Simulation kernel (geometry, shapes, motion, collision, repulsion)
//! - `renderer`: Draw-call surface and GPU vertex types
//! - `platform`: Pointer/resize events and screen-space conversion
//! - `settings`: Data-driven sandbox configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{ConfigError, SandboxConfig};

/// Sandbox configuration constants
pub mod consts {
    /// Default simulation bounds (window size in pixels)
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    /// Multiplier applied to random spawn velocities
    pub const SPEED_SCALE: f32 = 0.2;
    /// Impulse magnitude applied per colliding pair per frame
    pub const FORCE_SCALE: f32 = 0.1;

    /// Circle defaults
    pub const CIRCLE_RADIUS: f32 = 30.0;
    pub const CIRCLE_SEGMENTS: u32 = 36;
    pub const CIRCLE_COLOR: [f32; 3] = [1.0, 0.0, 0.0];

    /// Square defaults (side length)
    pub const SQUARE_SIZE: f32 = 40.0;
    pub const SQUARE_COLOR: [f32; 3] = [0.0, 0.0, 1.0];

    /// Seed population spawned at startup
    pub const SEED_CIRCLES: u32 = 5;
    pub const SEED_SQUARES: u32 = 5;
    /// Seed spawn area (inclusive integer ranges)
    pub const SPAWN_X: (i32, i32) = (100, 700);
    pub const SPAWN_Y: (i32, i32) = (100, 500);
}

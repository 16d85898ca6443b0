//! Sandbox configuration
//!
//! Loaded from a JSON file; every field falls back to the built-in default.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::CollisionMode;
use crate::sim::geometry::{MAX_SEGMENTS, MIN_SEGMENTS};

/// Errors loading or validating a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Sandbox settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    /// RNG seed for spawn positions, velocities and degenerate repulsion
    pub seed: u64,

    // === Bounds ===
    pub width: f32,
    pub height: f32,

    // === Physics ===
    /// Multiplier applied to random spawn velocities
    pub speed_scale: f32,
    /// Impulse magnitude per colliding pair per frame
    pub force_scale: f32,
    /// Which kind pairings collide
    pub collision_mode: CollisionMode,

    // === Shapes ===
    pub circle_radius: f32,
    pub circle_segments: u32,
    pub circle_color: [f32; 3],
    pub square_size: f32,
    pub square_color: [f32; 3],

    // === Seed population ===
    pub seed_circles: u32,
    pub seed_squares: u32,
    pub spawn_x: (i32, i32),
    pub spawn_y: (i32, i32),

    // === Headless runner ===
    /// Frames simulated by the native binary
    pub frames: u64,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            seed: 0,

            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,

            speed_scale: SPEED_SCALE,
            force_scale: FORCE_SCALE,
            collision_mode: CollisionMode::AllKinds,

            circle_radius: CIRCLE_RADIUS,
            circle_segments: CIRCLE_SEGMENTS,
            circle_color: CIRCLE_COLOR,
            square_size: SQUARE_SIZE,
            square_color: SQUARE_COLOR,

            seed_circles: SEED_CIRCLES,
            seed_squares: SEED_SQUARES,
            spawn_x: SPAWN_X,
            spawn_y: SPAWN_Y,

            frames: 600,
        }
    }
}

impl SandboxConfig {
    /// Read and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a JSON config string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "bounds must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.circle_radius > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "circle_radius must be positive, got {}",
                self.circle_radius
            )));
        }
        if !(MIN_SEGMENTS..=MAX_SEGMENTS).contains(&self.circle_segments) {
            return Err(ConfigError::Invalid(format!(
                "circle_segments must be in {MIN_SEGMENTS}..={MAX_SEGMENTS}, got {}",
                self.circle_segments
            )));
        }
        if !(self.square_size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "square_size must be positive, got {}",
                self.square_size
            )));
        }
        if !(self.force_scale.is_finite() && self.force_scale >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "force_scale must be finite and non-negative, got {}",
                self.force_scale
            )));
        }
        if !self.speed_scale.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "speed_scale must be finite, got {}",
                self.speed_scale
            )));
        }
        if self.spawn_x.0 > self.spawn_x.1 || self.spawn_y.0 > self.spawn_y.1 {
            return Err(ConfigError::Invalid("spawn ranges must be ordered".to_string()));
        }
        Ok(())
    }
}

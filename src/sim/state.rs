//! Simulation state and shape spawning

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use thiserror::Error;

use super::geometry::GeometryError;
use super::shape::Shape;
use crate::settings::{ConfigError, SandboxConfig};

/// Errors setting up a simulation
#[derive(Error, Debug)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Shape to spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnKind {
    Circle,
    Square,
}

/// Complete simulation state
///
/// Owns the shape list; shapes are appended and never removed.
#[derive(Debug, Clone)]
pub struct SimState {
    pub config: SandboxConfig,
    /// Simulation bounds `[0, x] x [0, y]`
    pub bounds: Vec2,
    /// Framebuffer pixels per window unit, for pointer conversion
    pub scale_factor: f32,
    /// Shapes in spawn order
    pub shapes: Vec<Shape>,
    /// Frames simulated so far
    pub frame: u64,
    /// Seeded RNG for spawns and degenerate repulsion
    pub rng: Pcg32,
    next_id: u32,
}

impl SimState {
    /// Empty state with bounds taken from the config
    pub fn new(config: SandboxConfig) -> Self {
        Self {
            bounds: Vec2::new(config.width, config.height),
            scale_factor: 1.0,
            shapes: Vec::new(),
            frame: 0,
            rng: Pcg32::seed_from_u64(config.seed),
            next_id: 1,
            config,
        }
    }

    /// State with the configured seed population already spawned
    pub fn with_population(config: SandboxConfig) -> Result<Self, SimError> {
        let mut state = Self::new(config);
        state.seed_population()?;
        Ok(state)
    }

    /// Allocate a new shape ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Uniform velocity in [-1, 1]² scaled by `speed_scale`
    pub fn random_velocity(&mut self) -> Vec2 {
        let v = Vec2::new(
            self.rng.random_range(-1.0..=1.0),
            self.rng.random_range(-1.0..=1.0),
        );
        v * self.config.speed_scale
    }

    /// Spawn a shape with an explicit velocity, returning its ID
    pub fn spawn(
        &mut self,
        kind: SpawnKind,
        center: Vec2,
        velocity: Vec2,
    ) -> Result<u32, GeometryError> {
        let id = self.next_entity_id();
        let shape = match kind {
            SpawnKind::Circle => Shape::circle(
                id,
                center,
                self.config.circle_radius,
                self.config.circle_segments,
                self.config.circle_color,
                velocity,
            )?,
            SpawnKind::Square => Shape::rectangle(
                id,
                center,
                self.config.square_size,
                self.config.square_size,
                self.config.square_color,
                velocity,
            )?,
        };
        log::debug!(
            "Spawned {} {} at ({:.1}, {:.1})",
            shape.kind().name(),
            id,
            center.x,
            center.y
        );
        self.shapes.push(shape);
        Ok(id)
    }

    /// Spawn a shape with a random scaled velocity
    pub fn spawn_random_velocity(
        &mut self,
        kind: SpawnKind,
        center: Vec2,
    ) -> Result<u32, GeometryError> {
        let velocity = self.random_velocity();
        self.spawn(kind, center, velocity)
    }

    /// Spawn the configured circles, then the configured squares
    ///
    /// Positions are random integers inside the spawn ranges. The config is
    /// validated first so an empty range is reported instead of sampled.
    pub fn seed_population(&mut self) -> Result<(), SimError> {
        self.config.validate()?;
        let plan = [
            (SpawnKind::Circle, self.config.seed_circles),
            (SpawnKind::Square, self.config.seed_squares),
        ];
        for (kind, count) in plan {
            for _ in 0..count {
                let center = self.random_spawn_point();
                self.spawn_random_velocity(kind, center)?;
            }
        }
        log::info!("Seeded {} shapes", self.shapes.len());
        Ok(())
    }

    fn random_spawn_point(&mut self) -> Vec2 {
        let (x0, x1) = self.config.spawn_x;
        let (y0, y1) = self.config.spawn_y;
        Vec2::new(
            self.rng.random_range(x0..=x1) as f32,
            self.rng.random_range(y0..=y1) as f32,
        )
    }

    /// Update bounds after a framebuffer resize
    pub fn set_bounds(&mut self, width: f32, height: f32, scale_factor: f32) {
        self.bounds = Vec2::new(width, height);
        self.scale_factor = scale_factor;
        log::debug!("Bounds resized to {width}x{height} (scale {scale_factor})");
    }

    pub fn find(&self, id: u32) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ShapeKind;

    #[test]
    fn test_seed_population() {
        let state = SimState::with_population(SandboxConfig::default()).unwrap();
        assert_eq!(state.shapes.len(), 10);
        assert!(state.shapes[..5].iter().all(|s| s.kind().is_circle()));
        assert!(state.shapes[5..].iter().all(|s| !s.kind().is_circle()));

        for shape in &state.shapes {
            let c = shape.centroid();
            assert!(c.x > 90.0 && c.x < 710.0);
            assert!(c.y > 90.0 && c.y < 510.0);
            assert!(shape.velocity.x.abs() <= 0.2 && shape.velocity.y.abs() <= 0.2);
        }
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let state = SimState::with_population(SandboxConfig::default()).unwrap();
        let ids: Vec<u32> = state.shapes.iter().map(|s| s.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_same_seed_same_population() {
        let a = SimState::with_population(SandboxConfig::default()).unwrap();
        let b = SimState::with_population(SandboxConfig::default()).unwrap();
        for (sa, sb) in a.shapes.iter().zip(&b.shapes) {
            assert_eq!(sa.vertices(), sb.vertices());
            assert_eq!(sa.velocity, sb.velocity);
        }
    }

    #[test]
    fn test_spawn_uses_config() {
        let config = SandboxConfig {
            square_size: 10.0,
            ..Default::default()
        };
        let mut state = SimState::new(config);
        let id = state.spawn(SpawnKind::Square, Vec2::new(50.0, 50.0), Vec2::ZERO).unwrap();
        assert_eq!(
            state.find(id).unwrap().kind(),
            ShapeKind::Rectangle {
                half_width: 5.0,
                half_height: 5.0
            }
        );
    }

    #[test]
    fn test_spawn_rejects_bad_config() {
        let config = SandboxConfig {
            circle_segments: 1,
            ..Default::default()
        };
        let mut state = SimState::new(config);
        assert_eq!(
            state.spawn(SpawnKind::Circle, Vec2::ZERO, Vec2::ZERO),
            Err(GeometryError::TooFewSegments(1))
        );
        assert!(state.shapes.is_empty());
    }

    #[test]
    fn test_reversed_spawn_range_is_an_error() {
        let config = SandboxConfig {
            spawn_x: (700, 100),
            ..Default::default()
        };
        assert!(matches!(
            SimState::with_population(config),
            Err(SimError::Config(ConfigError::Invalid(_)))
        ));
    }

    #[test]
    fn test_empty_population_is_valid() {
        let config = SandboxConfig {
            seed_circles: 0,
            seed_squares: 0,
            ..Default::default()
        };
        let state = SimState::with_population(config).unwrap();
        assert!(state.shapes.is_empty());
    }
}

//! Shape entity and its per-frame motion step

use glam::Vec2;
use serde::Serialize;

use super::geometry::{
    GeometryError, RECTANGLE_VERTEX_COUNT, build_circle, build_rectangle, centroid, max_distance,
};

/// Smallest valid circle fan: center + 3 segments + closing rim point
const MIN_CIRCLE_VERTICES: usize = 5;

/// Kind-specific data for a shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum ShapeKind {
    /// Radius is derived from the vertices every step
    Circle { radius: f32 },
    /// Half extents are fixed at creation
    Rectangle { half_width: f32, half_height: f32 },
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Circle { .. } => "circle",
            ShapeKind::Rectangle { .. } => "rectangle",
        }
    }

    pub fn is_circle(&self) -> bool {
        matches!(self, ShapeKind::Circle { .. })
    }
}

/// Which velocity components were reflected during a step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounce {
    pub x: bool,
    pub y: bool,
}

impl Bounce {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// One simulated body
///
/// `centroid` and the circle radius are derived from `vertices`; they are
/// refreshed by [`Shape::step`] and cannot be set directly.
#[derive(Debug, Clone, Serialize)]
pub struct Shape {
    pub id: u32,
    kind: ShapeKind,
    vertices: Vec<Vec2>,
    centroid: Vec2,
    pub velocity: Vec2,
    pub color: [f32; 3],
}

impl Shape {
    /// Validate the vertex fan and compute the derived quantities
    ///
    /// For circles the radius carried by `kind` is ignored and re-derived.
    pub fn new(
        id: u32,
        kind: ShapeKind,
        vertices: Vec<Vec2>,
        color: [f32; 3],
        velocity: Vec2,
    ) -> Result<Self, GeometryError> {
        if vertices.is_empty() {
            return Err(GeometryError::Empty);
        }
        if let Some(i) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(GeometryError::NonFinite(i));
        }

        match kind {
            ShapeKind::Circle { .. } if vertices.len() < MIN_CIRCLE_VERTICES => {
                return Err(GeometryError::VertexCount {
                    kind: kind.name(),
                    expected: MIN_CIRCLE_VERTICES,
                    got: vertices.len(),
                });
            }
            ShapeKind::Rectangle { .. } if vertices.len() != RECTANGLE_VERTEX_COUNT => {
                return Err(GeometryError::VertexCount {
                    kind: kind.name(),
                    expected: RECTANGLE_VERTEX_COUNT,
                    got: vertices.len(),
                });
            }
            ShapeKind::Rectangle {
                half_width,
                half_height,
            } if !(half_width > 0.0 && half_height > 0.0) => {
                return Err(GeometryError::NonPositiveSize {
                    width: half_width * 2.0,
                    height: half_height * 2.0,
                });
            }
            _ => {}
        }

        let mut shape = Self {
            id,
            kind,
            vertices,
            centroid: Vec2::ZERO,
            velocity,
            color,
        };
        shape.refresh_derived();
        Ok(shape)
    }

    /// Circle fan around `center`
    pub fn circle(
        id: u32,
        center: Vec2,
        radius: f32,
        segments: u32,
        color: [f32; 3],
        velocity: Vec2,
    ) -> Result<Self, GeometryError> {
        let vertices = build_circle(center, radius, segments)?;
        Self::new(id, ShapeKind::Circle { radius }, vertices, color, velocity)
    }

    /// Axis-aligned rectangle fan around `center`
    pub fn rectangle(
        id: u32,
        center: Vec2,
        width: f32,
        height: f32,
        color: [f32; 3],
        velocity: Vec2,
    ) -> Result<Self, GeometryError> {
        let vertices = build_rectangle(center, width, height)?;
        let kind = ShapeKind::Rectangle {
            half_width: width / 2.0,
            half_height: height / 2.0,
        };
        Self::new(id, kind, vertices, color, velocity)
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Mean of the vertex positions as of the last step
    pub fn centroid(&self) -> Vec2 {
        self.centroid
    }

    /// Derived radius for circles, `None` for rectangles
    pub fn radius(&self) -> Option<f32> {
        match self.kind {
            ShapeKind::Circle { radius } => Some(radius),
            ShapeKind::Rectangle { .. } => None,
        }
    }

    /// Fixed half extents for rectangles, `None` for circles
    pub fn half_extents(&self) -> Option<Vec2> {
        match self.kind {
            ShapeKind::Circle { .. } => None,
            ShapeKind::Rectangle {
                half_width,
                half_height,
            } => Some(Vec2::new(half_width, half_height)),
        }
    }

    /// Advance one frame inside `[0, bounds.x] x [0, bounds.y]`
    ///
    /// Translates by the current velocity, refreshes derived state, then
    /// reflects each velocity component whose axis has a vertex outside the
    /// bounds. The check runs after the move, so a shape overshoots by one
    /// frame before turning around; a corner overshoot flips both axes.
    pub fn step(&mut self, bounds: Vec2) -> Bounce {
        let velocity = self.velocity;
        for v in &mut self.vertices {
            *v += velocity;
        }
        self.refresh_derived();

        let bounce = Bounce {
            x: self.vertices.iter().any(|v| v.x < 0.0 || v.x > bounds.x),
            y: self.vertices.iter().any(|v| v.y < 0.0 || v.y > bounds.y),
        };
        if bounce.x {
            self.velocity.x = -self.velocity.x;
        }
        if bounce.y {
            self.velocity.y = -self.velocity.y;
        }
        bounce
    }

    fn refresh_derived(&mut self) {
        self.centroid = centroid(&self.vertices);
        if let ShapeKind::Circle { radius } = &mut self.kind {
            *radius = max_distance(&self.vertices, self.centroid);
        }
    }
}

//! Simulation kernel
//!
//! Shape motion, overlap detection and repulsion. No rendering or platform
//! dependencies beyond the event types in `platform`:
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - Derived shape state is recomputed once per step

pub mod collision;
pub mod geometry;
pub mod repulsion;
pub mod shape;
pub mod state;
pub mod tick;

pub use collision::{CollisionMode, colliding_pairs, overlaps};
pub use geometry::{GeometryError, build_circle, build_rectangle};
pub use repulsion::repel;
pub use shape::{Bounce, Shape, ShapeKind};
pub use state::{SimError, SimState, SpawnKind};
pub use tick::{FrameInput, FrameReport, tick};

//! Per-frame simulation tick
//!
//! Frame order: apply input, move every shape, detect every overlapping pair,
//! then repel the pairs one after another. Repulsion is order-dependent: a
//! later pair sees velocities already changed by an earlier pair.

use glam::Vec2;

use super::collision::colliding_pairs;
use super::repulsion::repel;
use super::shape::Shape;
use super::state::{SimState, SpawnKind};
use crate::platform::{PointerButton, PointerPress, Resize, screen_to_sim};

/// Events delivered by the windowing layer since the last frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Pointer presses in arrival order
    pub presses: Vec<PointerPress>,
    /// Latest framebuffer resize, if any
    pub resize: Option<Resize>,
}

/// What happened during a frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Frame number (1-based)
    pub frame: u64,
    /// Shapes spawned from pointer presses
    pub spawned: usize,
    /// Shapes that reflected off the border
    pub bounces: usize,
    /// Repelled pairs as shape IDs, in resolution order
    pub collisions: Vec<(u32, u32)>,
}

/// Advance the simulation by one frame
pub fn tick(state: &mut SimState, input: &FrameInput) -> FrameReport {
    state.frame += 1;
    let mut report = FrameReport {
        frame: state.frame,
        ..Default::default()
    };

    report.spawned = apply_input(state, input);
    report.bounces = motion_step(state);

    let pairs = colliding_pairs(&state.shapes, state.config.collision_mode);
    let force = state.config.force_scale;
    for (i, j) in pairs {
        let (a, b) = pair_mut(&mut state.shapes, i, j);
        let impulse = repel(a, b, force, &mut state.rng);
        log::trace!(
            "Frame {}: repel {} / {} impulse ({:.3}, {:.3})",
            state.frame,
            a.id,
            b.id,
            impulse.x,
            impulse.y
        );
        report.collisions.push((a.id, b.id));
    }

    report
}

/// Apply resize then pointer presses, returning the number of spawned shapes
pub fn apply_input(state: &mut SimState, input: &FrameInput) -> usize {
    if let Some(resize) = input.resize {
        state.set_bounds(resize.width, resize.height, resize.scale_factor);
    }

    let mut spawned = 0;
    for press in &input.presses {
        let kind = match press.button {
            PointerButton::Left => SpawnKind::Circle,
            PointerButton::Right => SpawnKind::Square,
            PointerButton::Middle => continue,
        };
        let pos = screen_to_sim(press.screen_pos, state.scale_factor, state.bounds.y);
        match state.spawn_random_velocity(kind, pos) {
            Ok(_) => spawned += 1,
            Err(e) => log::warn!("Failed to spawn at ({:.1}, {:.1}): {e}", pos.x, pos.y),
        }
    }
    spawned
}

/// Move every shape and reflect off the bounds, returning how many bounced
pub fn motion_step(state: &mut SimState) -> usize {
    let bounds: Vec2 = state.bounds;
    state
        .shapes
        .iter_mut()
        .map(|shape| shape.step(bounds))
        .filter(|bounce| bounce.any())
        .count()
}

/// Two distinct mutable shapes, `i < j`
fn pair_mut(shapes: &mut [Shape], i: usize, j: usize) -> (&mut Shape, &mut Shape) {
    debug_assert!(i < j);
    let (left, right) = shapes.split_at_mut(j);
    (&mut left[i], &mut right[0])
}

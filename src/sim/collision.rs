//! Pairwise overlap detection
//!
//! Every test is closed-form and read-only. Dispatch is a plain match on the
//! pair of shape kinds.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::shape::{Shape, ShapeKind};

/// Which kind pairings are checked for overlap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionMode {
    /// Only circle/circle pairs collide
    CirclesOnly,
    /// Circle/circle, rectangle/rectangle and circle/rectangle pairs collide
    #[default]
    AllKinds,
}

/// True if the two circles overlap (touching does not count)
#[inline]
pub fn circles_overlap(a_center: Vec2, a_radius: f32, b_center: Vec2, b_radius: f32) -> bool {
    a_center.distance(b_center) < a_radius + b_radius
}

/// True if the two axis-aligned boxes overlap (touching edges do not count)
#[inline]
pub fn boxes_overlap(a_center: Vec2, a_half: Vec2, b_center: Vec2, b_half: Vec2) -> bool {
    let gap = (a_center - b_center).abs();
    let reach = a_half + b_half;
    gap.x < reach.x && gap.y < reach.y
}

/// True if the circle overlaps the box
///
/// Clamps the circle center into the box to find the closest point, then
/// compares squared distances.
#[inline]
pub fn circle_box_overlap(center: Vec2, radius: f32, box_center: Vec2, box_half: Vec2) -> bool {
    let closest = center.clamp(box_center - box_half, box_center + box_half);
    center.distance_squared(closest) < radius * radius
}

/// Check whether two shapes overlap under the given mode
pub fn overlaps(a: &Shape, b: &Shape, mode: CollisionMode) -> bool {
    use ShapeKind::*;

    match (a.kind(), b.kind()) {
        (Circle { radius: ra }, Circle { radius: rb }) => {
            circles_overlap(a.centroid(), ra, b.centroid(), rb)
        }
        _ if mode == CollisionMode::CirclesOnly => false,
        (
            Rectangle {
                half_width: aw,
                half_height: ah,
            },
            Rectangle {
                half_width: bw,
                half_height: bh,
            },
        ) => boxes_overlap(
            a.centroid(),
            Vec2::new(aw, ah),
            b.centroid(),
            Vec2::new(bw, bh),
        ),
        (
            Circle { radius },
            Rectangle {
                half_width,
                half_height,
            },
        ) => circle_box_overlap(
            a.centroid(),
            radius,
            b.centroid(),
            Vec2::new(half_width, half_height),
        ),
        (
            Rectangle {
                half_width,
                half_height,
            },
            Circle { radius },
        ) => circle_box_overlap(
            b.centroid(),
            radius,
            a.centroid(),
            Vec2::new(half_width, half_height),
        ),
    }
}

/// All overlapping unordered pairs `(i, j)` with `i < j`, in scan order
pub fn colliding_pairs(shapes: &[Shape], mode: CollisionMode) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..shapes.len() {
        for j in (i + 1)..shapes.len() {
            if overlaps(&shapes[i], &shapes[j], mode) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

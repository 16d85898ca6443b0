//! Vertex builders for the two primitive shapes
//!
//! Both builders emit triangle-fan orderings: every triangle shares the first
//! vertex, so consumers must draw in emission order.

use glam::Vec2;
use std::f32::consts::TAU;
use thiserror::Error;

/// Minimum number of rim segments for a circle fan
pub const MIN_SEGMENTS: u32 = 3;

/// Upper bound on rim segments, keeps fan buffers small
pub const MAX_SEGMENTS: u32 = 1024;

/// Rectangle fans always have four corners plus the closing corner
pub const RECTANGLE_VERTEX_COUNT: usize = 5;

/// Errors from shape construction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Circle needs at least 3 segments, got {0}")]
    TooFewSegments(u32),

    #[error("Circle allows at most 1024 segments, got {0}")]
    TooManySegments(u32),

    #[error("Circle radius must be positive, got {0}")]
    NonPositiveRadius(f32),

    #[error("Rectangle size must be positive, got {width}x{height}")]
    NonPositiveSize { width: f32, height: f32 },

    #[error("Shape has no vertices")]
    Empty,

    #[error("Expected {expected} vertices for a {kind}, got {got}")]
    VertexCount {
        kind: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Vertex {0} has a non-finite coordinate")]
    NonFinite(usize),
}

/// Build a circle fan: center, then `segments + 1` rim points starting at angle 0
///
/// The last rim point repeats the first so the fan closes.
pub fn build_circle(center: Vec2, radius: f32, segments: u32) -> Result<Vec<Vec2>, GeometryError> {
    if segments < MIN_SEGMENTS {
        return Err(GeometryError::TooFewSegments(segments));
    }
    if segments > MAX_SEGMENTS {
        return Err(GeometryError::TooManySegments(segments));
    }
    if !(radius > 0.0) {
        return Err(GeometryError::NonPositiveRadius(radius));
    }

    let mut points = Vec::with_capacity(segments as usize + 2);
    points.push(center);
    for i in 0..=segments {
        let theta = TAU * i as f32 / segments as f32;
        points.push(center + Vec2::new(theta.cos(), theta.sin()) * radius);
    }
    Ok(points)
}

/// Build a rectangle fan: four corners counter-clockwise from bottom-left, first repeated
pub fn build_rectangle(center: Vec2, width: f32, height: f32) -> Result<Vec<Vec2>, GeometryError> {
    if !(width > 0.0) || !(height > 0.0) {
        return Err(GeometryError::NonPositiveSize { width, height });
    }

    let half = Vec2::new(width, height) / 2.0;
    Ok(vec![
        Vec2::new(center.x - half.x, center.y - half.y),
        Vec2::new(center.x + half.x, center.y - half.y),
        Vec2::new(center.x + half.x, center.y + half.y),
        Vec2::new(center.x - half.x, center.y + half.y),
        Vec2::new(center.x - half.x, center.y - half.y),
    ])
}

/// Arithmetic mean of the points (zero for an empty slice)
///
/// Duplicated fan vertices are counted every time they appear, so this is not
/// the geometric center of the shape.
pub fn centroid(points: &[Vec2]) -> Vec2 {
    if points.is_empty() {
        return Vec2::ZERO;
    }
    points.iter().copied().sum::<Vec2>() / points.len() as f32
}

/// Largest distance from `from` to any of the points
pub fn max_distance(points: &[Vec2], from: Vec2) -> f32 {
    points
        .iter()
        .map(|p| p.distance(from))
        .fold(0.0, f32::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Signed area of a closed polygon (shoelace formula)
    fn polygon_area(points: &[Vec2]) -> f32 {
        let Some(&origin) = points.first() else {
            return 0.0;
        };
        // Relative to the first point to keep f32 products small
        points
            .windows(2)
            .map(|w| (w[0] - origin).perp_dot(w[1] - origin))
            .sum::<f32>()
            / 2.0
    }

    #[test]
    fn test_circle_layout() {
        let center = Vec2::new(100.0, 50.0);
        let points = build_circle(center, 30.0, 36).unwrap();

        assert_eq!(points.len(), 38);
        assert_eq!(points[0], center);
        assert!((points[1] - Vec2::new(130.0, 50.0)).length() < 1e-4);
        assert!((points[1] - points[37]).length() < 1e-3);
    }

    #[test]
    fn test_circle_rejects_bad_input() {
        assert_eq!(
            build_circle(Vec2::ZERO, 10.0, 2),
            Err(GeometryError::TooFewSegments(2))
        );
        assert_eq!(
            build_circle(Vec2::ZERO, 0.0, 8),
            Err(GeometryError::NonPositiveRadius(0.0))
        );
        assert!(build_circle(Vec2::ZERO, f32::NAN, 8).is_err());
        assert_eq!(
            build_circle(Vec2::ZERO, 10.0, u32::MAX),
            Err(GeometryError::TooManySegments(u32::MAX))
        );
    }

    #[test]
    fn test_rectangle_layout() {
        let points = build_rectangle(Vec2::new(10.0, 20.0), 40.0, 20.0).unwrap();

        assert_eq!(points.len(), RECTANGLE_VERTEX_COUNT);
        assert_eq!(points[0], points[4]);
        assert_eq!(points[0], Vec2::new(-10.0, 10.0));
        assert_eq!(points[2], Vec2::new(30.0, 30.0));
    }

    #[test]
    fn test_rectangle_rejects_bad_size() {
        assert!(matches!(
            build_rectangle(Vec2::ZERO, -1.0, 5.0),
            Err(GeometryError::NonPositiveSize { .. })
        ));
    }

    #[test]
    fn test_centroid_counts_duplicates() {
        // Closing corner is counted twice, pulling the mean toward it
        let points = build_rectangle(Vec2::ZERO, 40.0, 40.0).unwrap();
        let c = centroid(&points);
        assert!((c - Vec2::new(-4.0, -4.0)).length() < 1e-5);
        assert_eq!(centroid(&[]), Vec2::ZERO);
    }

    proptest! {
        #[test]
        fn circle_rim_on_radius(
            cx in -500.0f32..500.0,
            cy in -500.0f32..500.0,
            r in 1.0f32..200.0,
            n in 3u32..128,
        ) {
            let center = Vec2::new(cx, cy);
            let points = build_circle(center, r, n).unwrap();
            prop_assert_eq!(points.len(), n as usize + 2);
            for p in &points[1..] {
                prop_assert!((p.distance(center) - r).abs() < 1e-3 * r.max(1.0));
            }
        }

        #[test]
        fn rectangle_area_and_center(
            cx in -500.0f32..500.0,
            cy in -500.0f32..500.0,
            w in 1.0f32..300.0,
            h in 1.0f32..300.0,
        ) {
            let center = Vec2::new(cx, cy);
            let points = build_rectangle(center, w, h).unwrap();
            prop_assert_eq!(points.first(), points.last());

            let area = polygon_area(&points);
            prop_assert!((area - w * h).abs() < 1e-2 * (w * h).max(1.0));

            // The four distinct corners average to the requested center
            let corners = centroid(&points[..4]);
            prop_assert!((corners - center).length() < 1e-2);
        }
    }
}

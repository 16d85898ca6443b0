//! Impulse response for overlapping shapes
//!
//! A single equal-and-opposite velocity kick along the line between centroids.
//! There is no positional correction, so shapes that stay overlapped receive
//! the same kick again next frame.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use super::shape::Shape;

/// Unit direction pushing `a` away from `b`
///
/// Coincident centroids fall back to a random direction.
pub fn separation_direction<R: Rng>(a: Vec2, b: Vec2, rng: &mut R) -> Vec2 {
    let delta = a - b;
    let dist = delta.length();
    if dist == 0.0 {
        let theta = rng.random_range(0.0..TAU);
        return Vec2::new(theta.cos(), theta.sin());
    }
    delta / dist
}

/// Push `a` and `b` apart, returning the impulse added to `a`
///
/// `b` receives the negated impulse, so total momentum is unchanged.
pub fn repel<R: Rng>(a: &mut Shape, b: &mut Shape, force: f32, rng: &mut R) -> Vec2 {
    let impulse = separation_direction(a.centroid(), b.centroid(), rng) * force;
    a.velocity += impulse;
    b.velocity -= impulse;
    impulse
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const GREEN: [f32; 3] = [0.0, 1.0, 0.0];

    fn circle_at(center: Vec2, velocity: Vec2) -> Shape {
        Shape::circle(0, center, 30.0, 36, GREEN, velocity).unwrap()
    }

    #[test]
    fn test_repel_along_centroid_line() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut a = circle_at(Vec2::new(100.0, 100.0), Vec2::ZERO);
        let mut b = circle_at(Vec2::new(120.0, 100.0), Vec2::ZERO);

        let impulse = repel(&mut a, &mut b, 0.1, &mut rng);
        assert!((impulse - Vec2::new(-0.1, 0.0)).length() < 1e-6);
        assert!((a.velocity - Vec2::new(-0.1, 0.0)).length() < 1e-6);
        assert!((b.velocity - Vec2::new(0.1, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_coincident_centroids_use_random_direction() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut a = circle_at(Vec2::new(200.0, 200.0), Vec2::ZERO);
        let mut b = circle_at(Vec2::new(200.0, 200.0), Vec2::ZERO);

        let impulse = repel(&mut a, &mut b, 0.1, &mut rng);
        assert!(impulse.is_finite());
        assert!((impulse.length() - 0.1).abs() < 1e-6);
        assert_eq!(a.velocity, -b.velocity);
    }

    #[test]
    fn test_fallback_is_seeded() {
        let mut rng1 = Pcg32::seed_from_u64(42);
        let mut rng2 = Pcg32::seed_from_u64(42);
        let p = Vec2::new(5.0, 5.0);
        assert_eq!(
            separation_direction(p, p, &mut rng1),
            separation_direction(p, p, &mut rng2)
        );
    }

    proptest! {
        #[test]
        fn repel_is_symmetric(
            ax in 0.0f32..800.0, ay in 0.0f32..600.0,
            bx in 0.0f32..800.0, by in 0.0f32..600.0,
            vax in -1.0f32..1.0, vay in -1.0f32..1.0,
            vbx in -1.0f32..1.0, vby in -1.0f32..1.0,
            seed in any::<u64>(),
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let va = Vec2::new(vax, vay);
            let vb = Vec2::new(vbx, vby);
            let mut a = circle_at(Vec2::new(ax, ay), va);
            let mut b = circle_at(Vec2::new(bx, by), vb);

            let impulse = repel(&mut a, &mut b, 0.1, &mut rng);
            let delta_a = a.velocity - va;
            let delta_b = b.velocity - vb;
            prop_assert!((delta_a + delta_b).length() < 1e-5);
            prop_assert!((impulse.length() - 0.1).abs() < 1e-5);
        }
    }
}

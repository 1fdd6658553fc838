//! Collision detection
//!
//! `overlaps` is the narrow test for one pair. A [`Detector`] enumerates the
//! pairs to test each tick; [`BruteForce`] checks every unordered pair.

use super::states::Body;

/// True iff the two discs overlap (centre distance strictly below the sum of radii)
pub fn overlaps(a: &Body, b: &Body) -> bool {
    (b.x - a.x).norm() < a.radius() + b.radius()
}

/// Trait for collision candidate enumeration over a body slice
/// Implementations push overlapping `(i, j)` pairs with `i < j` into `out`
/// in the order they should be resolved
pub trait Detector {
    fn detect(&self, bodies: &[Body], out: &mut Vec<(usize, usize)>);
}

/// Exhaustive O(n²) scan over all pairs `i < j`
#[derive(Debug, Default, Clone, Copy)]
pub struct BruteForce;

impl Detector for BruteForce {
    fn detect(&self, bodies: &[Body], out: &mut Vec<(usize, usize)>) {
        let n = bodies.len();
        for i in 0..n {
            for j in (i + 1)..n {
                if overlaps(&bodies[i], &bodies[j]) {
                    out.push((i, j));
                }
            }
        }
    }
}

//! Elastic collision response along the line of centres
//!
//! Both velocities are rotated into a frame whose x-axis points from `a` to
//! `b`, the 1D elastic formula is applied to the x components, and the result
//! is rotated back. The perpendicular components pass through unchanged and
//! positions are not separated afterwards.

use nalgebra::Rotation2;

use super::states::{Body, NVec2};

/// Rotate `v` counter-clockwise by `theta` radians
/// (x cosθ - y sinθ, x sinθ + y cosθ)
pub fn rotate(v: NVec2, theta: f64) -> NVec2 {
    Rotation2::new(theta) * v
}

/// 1D elastic collision of two masses; returns the new velocities
pub fn elastic_1d(m1: f64, u1: f64, m2: f64, u2: f64) -> (f64, f64) {
    let total = m1 + m2;
    let v1 = ((m1 - m2) * u1 + 2.0 * m2 * u2) / total;
    let v2 = ((m2 - m1) * u2 + 2.0 * m1 * u1) / total;
    (v1, v2)
}

/// Resolve a collision between `a` and `b`, updating both velocities
pub fn resolve(a: &mut Body, b: &mut Body) {
    let d = b.x - a.x;
    let angle = d.y.atan2(d.x);

    // collision axis -> x
    let mut v1 = rotate(a.v, -angle);
    let mut v2 = rotate(b.v, -angle);

    let (v1x, v2x) = elastic_1d(a.mass(), v1.x, b.mass(), v2.x);
    v1.x = v1x;
    v2.x = v2x;

    a.v = rotate(v1, angle);
    b.v = rotate(v2, angle);
}

/// Mutable references to two distinct bodies, `i < j < bodies.len()`
///
/// Panics on any other pair.
pub fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    assert!(
        i < j && j < bodies.len(),
        "pair must satisfy i < j < {}, got ({i}, {j})",
        bodies.len()
    );
    let (left, right) = bodies.split_at_mut(j);
    (&mut left[i], &mut right[0])
}

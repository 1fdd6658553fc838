//! Per-body integration and wall bounce
//!
//! Fixed timestep of one tick, explicit Euler. Walls reflect the velocity
//! component of the axis that was crossed; positions are never clamped, so a
//! body may sit slightly past a wall for one frame before moving back.

use super::params::Bounds;
use super::states::Body;

/// Advance one body by one tick and reflect off the playfield edges
/// Both wall tests use the post-move position, each axis independently
pub fn step(body: &mut Body, bounds: &Bounds) {
    // x_n+1 = x_n + v_n
    body.x += body.v;

    let r = body.radius();
    if body.x.x + r > bounds.width || body.x.x - r < 0.0 {
        body.v.x = -body.v.x;
    }
    if body.x.y + r > bounds.height || body.x.y - r < 0.0 {
        body.v.y = -body.v.y;
    }
}

/// Step every body in collection order
pub fn step_all(bodies: &mut [Body], bounds: &Bounds) {
    for b in bodies.iter_mut() {
        step(b, bounds);
    }
}

//! Cosmetic shading from a static light source
//!
//! Works on a snapshot of body centres and returns one colour per body; the
//! caller writes them back through `Scenario::set_color`. Physics never reads
//! the result.

use crate::simulation::params::Bounds;
use crate::simulation::states::{NVec2, Rgb};

/// Darkest blue a body can get, as a fraction of full brightness
const MIN_BRIGHTNESS: f64 = 0.35;

/// Light sits centred horizontally, a quarter of the way down
pub fn light_source(bounds: &Bounds) -> NVec2 {
    NVec2::new(bounds.width / 2.0, bounds.height / 4.0)
}

/// Blue tone fading linearly with distance from `light`
pub fn gradient(position: &NVec2, light: &NVec2, bounds: &Bounds) -> Rgb {
    let reach = bounds.width.hypot(bounds.height);
    let falloff = ((position - light).norm() / reach).clamp(0.0, 1.0);
    let brightness = 1.0 - (1.0 - MIN_BRIGHTNESS) * falloff;
    [0, 0, (255.0 * brightness).round() as u8]
}

pub fn shade(positions: &[NVec2], bounds: &Bounds) -> Vec<Rgb> {
    let light = light_source(bounds);
    positions
        .iter()
        .map(|p| gradient(p, &light, bounds))
        .collect()
}

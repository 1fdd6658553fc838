//! Decorative water surface
//!
//! The phase is elapsed seconds, recomputed every frame, so nothing about the
//! wave is stored between frames.

use crate::configuration::config::WaveConfig;
use crate::simulation::params::Bounds;

/// Surface height (window space, y down) at column `x` after `elapsed` seconds
pub fn surface_y(x: f64, elapsed: f64, wave: &WaveConfig, bounds: &Bounds) -> f64 {
    let level = bounds.height - wave.depth;
    wave.amplitude * (wave.frequency * x + elapsed).sin() + level
}

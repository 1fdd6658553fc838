//! Runtime parameters for the simulation
//!
//! `Bounds` is the playfield size shared by spawning and kinematics.
//! `Parameters` holds the ranges used to randomise the initial bodies.
//! Both are produced by validating a `ScenarioConfig`.

use std::ops::RangeInclusive;

/// Playfield size in window units: x in `[0, width]`, y in `[0, height]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub count: RangeInclusive<usize>, // number of bodies drawn from here
    pub radius: RangeInclusive<f64>,  // radius range
    pub speed: f64,                   // max |v| per axis
    pub seed: Option<u64>,            // None -> entropy
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            count: 5..=10,
            radius: 10.0..=30.0,
            speed: 5.0,
            seed: None,
        }
    }
}

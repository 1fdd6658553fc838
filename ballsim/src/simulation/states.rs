//! Core state types for the ball simulation.
//!
//! - `Body`   one simulated disc (position, velocity, radius, mass, colour)
//! - `System` the fixed collection of bodies and the completed tick count `t`
//!
//! Positions live in window space: origin at the top-left corner, y growing
//! downward, one unit per pixel.

use std::f64::consts::PI;

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// 8-bit RGB triple
pub type Rgb = [u8; 3];

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity, units per tick
    radius: f64,
    m: f64,
    pub color: Rgb, // cosmetic, never read by physics
}

impl Body {
    /// Create a body; mass is derived once as `π·r²`
    ///
    /// Panics if `radius` is not a positive finite number. Configuration
    /// validation rejects such values before any body is built.
    pub fn new(x: NVec2, v: NVec2, radius: f64, color: Rgb) -> Self {
        assert!(
            radius.is_finite() && radius > 0.0,
            "body radius must be positive and finite, got {radius}"
        );
        Self {
            x,
            v,
            radius,
            m: PI * radius * radius,
            color,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    /// Linear momentum `m·v`
    pub fn momentum(&self) -> NVec2 {
        self.m * self.v
    }

    /// Kinetic energy `½·m·|v|²`
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // fixed for the whole run
    pub t: u64,            // completed ticks
}

//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. Every section has defaults matching the classic demo, so an
//! empty document is a valid scenario:
//!
//! - [`WindowConfig`]  – playfield size, fixed for the run
//! - [`BodiesConfig`]  – ranges for the randomised bodies and the seed
//! - [`BodyConfig`]    – an explicitly placed body (replaces random spawning)
//! - [`WaveConfig`]    – decorative water surface
//! - [`ShadingConfig`] – cosmetic colour pass
//!
//! # YAML format
//!
//! ```yaml
//! window:
//!   width: 800.0
//!   height: 600.0
//!
//! bodies:
//!   count_min: 5          # or `count: 7` for a fixed number
//!   count_max: 10
//!   radius_min: 10.0
//!   radius_max: 30.0
//!   speed: 5.0            # per-axis velocity in [-speed, speed]
//!   seed: 42              # omit for a fresh random run
//!
//! explicit:               # optional, overrides `bodies` when non-empty
//!   - x: [100.0, 100.0]
//!     v: [5.0, 0.0]
//!     radius: 10.0
//!     color: [255, 0, 0]
//!
//! wave:
//!   amplitude: 10.0
//!   frequency: 0.02
//!   depth: 100.0          # water level measured up from the bottom edge
//!
//! shading:
//!   enabled: true
//! ```
//!
//! [`ScenarioConfig::validate`] turns this into the runtime `Bounds` and
//! `Parameters`, rejecting degenerate input instead of clamping it.

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::simulation::params::{Bounds, Parameters};
use crate::simulation::states::Rgb;

/// Playfield size
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Ranges for the randomised initial bodies
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct BodiesConfig {
    pub count: Option<usize>, // fixed count, wins over the range
    pub count_min: usize,
    pub count_max: usize,
    pub radius_min: f64,
    pub radius_max: f64,
    pub speed: f64,        // per-axis velocity bound
    pub seed: Option<u64>, // deterministic seed to make runs reproducible
}

impl Default for BodiesConfig {
    fn default() -> Self {
        Self {
            count: None,
            count_min: 5,
            count_max: 10,
            radius_min: 10.0,
            radius_max: 30.0,
            speed: 5.0,
            seed: None,
        }
    }
}

/// Initial state of one explicitly placed body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: [f64; 2],         // position in window units
    pub v: [f64; 2],         // velocity in units per tick
    pub radius: f64,         // mass follows as pi * r^2
    pub color: Option<Rgb>,  // random when omitted
}

/// Decorative sine-wave water surface
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WaveConfig {
    pub amplitude: f64,
    pub frequency: f64, // radians per window unit
    pub depth: f64,     // water level above the bottom edge
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            amplitude: 10.0,
            frequency: 0.02,
            depth: 100.0,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ShadingConfig {
    pub enabled: bool,
}

impl Default for ShadingConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub window: WindowConfig,
    pub bodies: BodiesConfig,
    pub explicit: Vec<BodyConfig>,
    pub wave: WaveConfig,
    pub shading: ShadingConfig,
}

/// Reasons a scenario is rejected at start-up
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Window too small to hold the largest body, or not finite.
    Window { width: f64, height: f64, min: f64 },
    /// Radius range empty or not strictly positive.
    RadiusRange { min: f64, max: f64 },
    /// Speed bound negative or not finite.
    Speed(f64),
    /// Body count range empty.
    CountRange { min: usize, max: usize },
    /// Explicit body with a radius that is not positive and finite.
    BodyRadius { index: usize, radius: f64 },
    /// Explicit body whose disc does not lie inside the window.
    BodyOutside { index: usize, x: [f64; 2], radius: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Window { width, height, min } => write!(
                f,
                "window {}x{} is degenerate: both sides must be finite and at least {}",
                width, height, min
            ),
            ConfigError::RadiusRange { min, max } => {
                write!(f, "radius range [{}, {}] must satisfy 0 < min <= max", min, max)
            }
            ConfigError::Speed(s) => write!(f, "speed {} must be finite and non-negative", s),
            ConfigError::CountRange { min, max } => {
                write!(f, "body count range [{}, {}] is empty", min, max)
            }
            ConfigError::BodyRadius { index, radius } => {
                write!(f, "explicit body {} has invalid radius {}", index, radius)
            }
            ConfigError::BodyOutside { index, x, radius } => write!(
                f,
                "explicit body {} at ({}, {}) with radius {} does not fit inside the window",
                index, x[0], x[1], radius
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl ScenarioConfig {
    /// Parse a scenario from YAML text
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    /// Read and parse a scenario file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        let cfg = Self::from_yaml(&text).with_context(|| format!("parsing {}", path.display()))?;
        Ok(cfg)
    }

    /// Check the configuration and build the runtime bounds and spawn parameters
    pub fn validate(&self) -> Result<(Bounds, Parameters), ConfigError> {
        let b = &self.bodies;

        let radius_ok = b.radius_min.is_finite()
            && b.radius_max.is_finite()
            && b.radius_min > 0.0
            && b.radius_min <= b.radius_max;
        if !radius_ok {
            return Err(ConfigError::RadiusRange {
                min: b.radius_min,
                max: b.radius_max,
            });
        }

        // the largest disc has to fit, so the spawn ranges stay non-empty
        let min_side = 2.0 * b.radius_max;
        let w = &self.window;
        let window_ok = w.width.is_finite()
            && w.height.is_finite()
            && w.width >= min_side
            && w.height >= min_side;
        if !window_ok {
            return Err(ConfigError::Window {
                width: w.width,
                height: w.height,
                min: min_side,
            });
        }

        if !(b.speed.is_finite() && b.speed >= 0.0) {
            return Err(ConfigError::Speed(b.speed));
        }

        let count = match b.count {
            Some(n) => n..=n,
            None if b.count_min <= b.count_max => b.count_min..=b.count_max,
            None => {
                return Err(ConfigError::CountRange {
                    min: b.count_min,
                    max: b.count_max,
                })
            }
        };

        for (index, body) in self.explicit.iter().enumerate() {
            if !(body.radius.is_finite() && body.radius > 0.0) {
                return Err(ConfigError::BodyRadius {
                    index,
                    radius: body.radius,
                });
            }

            // whole disc inside [r, W-r] x [r, H-r]; NaN fails these too
            let r = body.radius;
            let inside = (r..=w.width - r).contains(&body.x[0])
                && (r..=w.height - r).contains(&body.x[1]);
            if !inside {
                return Err(ConfigError::BodyOutside {
                    index,
                    x: body.x,
                    radius: r,
                });
            }
        }

        let bounds = Bounds::new(w.width, w.height);
        let parameters = Parameters {
            count,
            radius: b.radius_min..=b.radius_max,
            speed: b.speed,
            seed: b.seed,
        };
        Ok((bounds, parameters))
    }
}

/// Scenario file used when none is named
pub const DEFAULT_SCENARIO: &str = "default.yaml";

/// Load a scenario from `dir`
///
/// A named file must exist and parse. With no name, `DEFAULT_SCENARIO` is
/// read if present, otherwise the built-in defaults are returned.
pub fn load_scenario(dir: &Path, file_name: Option<&str>) -> Result<ScenarioConfig> {
    match file_name {
        Some(name) => ScenarioConfig::from_file(&dir.join(name)),
        None => {
            let path = dir.join(DEFAULT_SCENARIO);
            if path.exists() {
                ScenarioConfig::from_file(&path)
            } else {
                eprintln!("{} not found, using built-in defaults", path.display());
                Ok(ScenarioConfig::default())
            }
        }
    }
}

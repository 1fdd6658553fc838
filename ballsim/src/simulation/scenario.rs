//! Simulation driver built from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing), validates it and produces a
//! `Scenario`: the runtime bundle that owns the bodies and advances them
//! one tick at a time:
//!
//! 1. `kinematics::step` on every body, in collection order
//! 2. the detector lists overlapping pairs `i < j` (any other pair is skipped)
//! 3. `resolver::resolve` on each pair, sequentially in that order
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! viewer and headless runner. Renderers only read bodies between ticks and
//! may overwrite colours through [`Scenario::set_color`].

use bevy::log::{debug, info, warn};
use bevy::prelude::Resource;

use crate::configuration::config::{ConfigError, ScenarioConfig, ShadingConfig, WaveConfig};
use crate::simulation::detector::{BruteForce, Detector};
use crate::simulation::engine::{Engine, RunState};
use crate::simulation::kinematics;
use crate::simulation::params::{Bounds, Parameters};
use crate::simulation::resolver::{pair_mut, resolve};
use crate::simulation::spawn::Spawner;
use crate::simulation::states::{Body, NVec2, Rgb, System};

/// What happened during one completed tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickStats {
    pub tick: u64,         // tick number just completed, starting at 1
    pub collisions: usize, // pairs resolved
}

#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub bounds: Bounds,
    pub parameters: Parameters,
    pub wave: WaveConfig,
    pub shading: ShadingConfig,
    system: System,
    detector: Box<dyn Detector + Send + Sync>,
    pairs: Vec<(usize, usize)>, // reused between ticks
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        let (bounds, parameters) = cfg.validate()?;
        let mut spawner = Spawner::for_parameters(&parameters);

        // Bodies: explicit list as given, otherwise random inside the bounds
        let bodies: Vec<Body> = if cfg.explicit.is_empty() {
            spawner.bodies(&bounds, &parameters)
        } else {
            cfg.explicit
                .iter()
                .map(|bc| {
                    let color = bc.color.unwrap_or_else(|| spawner.color());
                    Body::new(
                        NVec2::new(bc.x[0], bc.x[1]),
                        NVec2::new(bc.v[0], bc.v[1]),
                        bc.radius,
                        color,
                    )
                })
                .collect()
        };

        let mut scenario = Self::from_bodies(bodies, bounds);
        scenario.parameters = parameters;
        scenario.wave = cfg.wave;
        scenario.shading = cfg.shading;
        Ok(scenario)
    }

    /// Scenario over a prepared body list with default parameters
    pub fn from_bodies(bodies: Vec<Body>, bounds: Bounds) -> Self {
        Self {
            engine: Engine::default(),
            bounds,
            parameters: Parameters::default(),
            wave: WaveConfig::default(),
            shading: ShadingConfig::default(),
            system: System { bodies, t: 0 },
            detector: Box::new(BruteForce),
            pairs: Vec::new(),
        }
    }

    /// Swap in another pair enumeration strategy
    pub fn with_detector<D>(mut self, detector: D) -> Self
    where
        D: Detector + Send + Sync + 'static,
    {
        self.detector = Box::new(detector);
        self
    }

    /// Advance one full tick; `None` once stopped
    pub fn tick(&mut self) -> Option<TickStats> {
        if !self.engine.is_running() {
            return None;
        }

        let bodies = &mut self.system.bodies;
        kinematics::step_all(bodies, &self.bounds);

        self.pairs.clear();
        self.detector.detect(bodies, &mut self.pairs);

        // later pairs see velocities already updated by earlier ones
        let n = bodies.len();
        let mut collisions = 0;
        for &(i, j) in &self.pairs {
            if !(i < j && j < n) {
                warn!("detector returned invalid pair ({}, {}) for {} bodies, skipped", i, j, n);
                continue;
            }
            let (a, b) = pair_mut(bodies, i, j);
            resolve(a, b);
            collisions += 1;
        }

        self.system.t += 1;
        let stats = TickStats {
            tick: self.system.t,
            collisions,
        };
        if stats.collisions > 0 {
            debug!("tick {}: {} collisions", stats.tick, stats.collisions);
        }
        Some(stats)
    }

    /// Close requested; terminal
    pub fn stop(&mut self) {
        if self.engine.stop() {
            info!("scenario stopped after {} ticks", self.system.t);
        }
    }

    pub fn state(&self) -> RunState {
        self.engine.state()
    }

    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    /// Completed ticks
    pub fn ticks(&self) -> u64 {
        self.system.t
    }

    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    /// Snapshot of body centres, in body order
    pub fn positions(&self) -> Vec<NVec2> {
        self.system.bodies.iter().map(|b| b.x).collect()
    }

    /// Cosmetic hook: overwrite one body's colour. Out-of-range indices are ignored.
    pub fn set_color(&mut self, i: usize, color: Rgb) {
        if let Some(b) = self.system.bodies.get_mut(i) {
            b.color = color;
        }
    }

    /// Total linear momentum
    pub fn momentum(&self) -> NVec2 {
        self.system
            .bodies
            .iter()
            .fold(NVec2::zeros(), |acc, b| acc + b.momentum())
    }

    /// Total kinetic energy
    pub fn kinetic_energy(&self) -> f64 {
        self.system.bodies.iter().map(Body::kinetic_energy).sum()
    }
}

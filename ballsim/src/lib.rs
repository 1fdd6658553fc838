pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec2, Rgb};
pub use simulation::params::{Bounds, Parameters};
pub use simulation::engine::{Engine, RunState};
pub use simulation::spawn::Spawner;
pub use simulation::kinematics::step;
pub use simulation::detector::{overlaps, Detector, BruteForce};
pub use simulation::resolver::{resolve, rotate};
pub use simulation::scenario::{Scenario, TickStats};

pub use configuration::config::{load_scenario, ScenarioConfig, ConfigError, WindowConfig, BodiesConfig, BodyConfig, WaveConfig, ShadingConfig};

pub use visualization::{viewer::run_2d, headless::run_headless};

pub use benchmark::benchmark::bench_tick;

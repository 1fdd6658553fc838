pub mod states;
pub mod params;
pub mod engine;
pub mod spawn;
pub mod kinematics;
pub mod detector;
pub mod resolver;
pub mod scenario;

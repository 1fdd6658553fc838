use std::time::Instant;

use crate::simulation::params::{Bounds, Parameters};
use crate::simulation::scenario::Scenario;
use crate::simulation::spawn::Spawner;

/// Time full ticks (step + O(n²) detect + resolve) for growing body counts
pub fn bench_tick() {
    let ns = [10, 50, 100, 200, 400, 800];
    let steps = 200; // ticks timed per size

    for n in ns {
        // Larger playfield for larger n so density stays comparable
        let side = 200.0 * (n as f64).sqrt();
        let bounds = Bounds::new(side, side);
        let params = Parameters {
            count: n..=n,
            seed: Some(42),
            ..Parameters::default()
        };

        let mut spawner = Spawner::for_parameters(&params);
        let bodies = spawner.bodies(&bounds, &params);
        let mut scenario = Scenario::from_bodies(bodies, bounds);

        // Warm up
        scenario.tick();

        let mut collisions = 0;
        let t0 = Instant::now();
        for _ in 0..steps {
            if let Some(stats) = scenario.tick() {
                collisions += stats.collisions;
            }
        }
        let per_tick = t0.elapsed().as_secs_f64() / steps as f64;

        println!(
            "N = {n:5}, tick = {:10.3} us, collisions/tick = {:6.2}",
            per_tick * 1e6,
            collisions as f64 / steps as f64
        );
    }
}

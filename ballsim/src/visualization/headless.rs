//! Windowless runner
//!
//! Same scenario resource as the viewer, driven by `MinimalPlugins` until a
//! tick budget is used up, then stopped with a short summary.

use bevy::log::LogPlugin;
use bevy::prelude::*;

use crate::simulation::scenario::Scenario;

#[derive(Resource)]
struct TickBudget(u64);

#[derive(Resource, Default)]
struct CollisionCount(usize);

pub fn run_headless(scenario: Scenario, ticks: u64) {
    App::new()
        .insert_resource(scenario)
        .insert_resource(TickBudget(ticks))
        .init_resource::<CollisionCount>()
        .add_plugins((MinimalPlugins, LogPlugin::default()))
        .add_systems(Startup, start_system)
        .add_systems(Update, headless_step_system)
        .run();
}

fn start_system(scenario: Res<Scenario>, budget: Res<TickBudget>) {
    info!(
        "headless: {} bodies, {} ticks (seed {:?}), momentum {:?}, energy {:.3}",
        scenario.bodies().len(),
        budget.0,
        scenario.parameters.seed,
        scenario.momentum(),
        scenario.kinetic_energy()
    );
}

fn headless_step_system(
    mut scenario: ResMut<Scenario>,
    budget: Res<TickBudget>,
    mut collisions: ResMut<CollisionCount>,
    mut exit: EventWriter<AppExit>,
) {
    if scenario.ticks() < budget.0 {
        if let Some(stats) = scenario.tick() {
            collisions.0 += stats.collisions;
        }
    }

    if scenario.ticks() >= budget.0 && scenario.is_running() {
        info!(
            "headless: done, {} collisions, momentum {:?}, energy {:.3}",
            collisions.0,
            scenario.momentum(),
            scenario.kinetic_energy()
        );
        scenario.stop();
        exit.send(AppExit::Success);
    }
}

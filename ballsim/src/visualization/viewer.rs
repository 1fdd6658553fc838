use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::{WindowCloseRequested, WindowResolution};

use crate::simulation::params::Bounds;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{NVec2, Rgb};
use crate::visualization::{shading, wave};

/// Component tagging each circle with its body index into the scenario
#[derive(Component)]
struct BodyIndex(pub usize);

/// Physics ticks per second
const TICK_HZ: f64 = 60.0;

const WATER: Color = Color::srgb(0.0, 105.0 / 255.0, 148.0 / 255.0);

pub fn run_2d(scenario: Scenario) {
    let resolution = WindowResolution::new(scenario.bounds.width as f32, scenario.bounds.height as f32);

    App::new()
        .insert_resource(ClearColor(Color::WHITE))
        .insert_resource(Time::<Fixed>::from_hz(TICK_HZ))
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "ballsim".into(),
                resolution,
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, setup_bodies_system)
        .add_systems(FixedUpdate, physics_step_system)
        .add_systems(
            Update,
            (shading_system, sync_bodies_system, draw_water_system, quit_system).chain(),
        )
        .run();
}

/// Window space (origin top-left, y down) to Bevy world space (origin centre, y up)
fn to_world(p: NVec2, bounds: &Bounds) -> Vec2 {
    Vec2::new(
        (p.x - bounds.width / 2.0) as f32,
        (bounds.height / 2.0 - p.y) as f32,
    )
}

fn to_color(c: Rgb) -> Color {
    Color::srgb_u8(c[0], c[1], c[2])
}

fn setup_bodies_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    info!(
        "run_2d: {} bodies in {}x{} (seed {:?})",
        scenario.bodies().len(),
        scenario.bounds.width,
        scenario.bounds.height,
        scenario.parameters.seed
    );

    commands.spawn(Camera2dBundle::default());

    for (i, body) in scenario.bodies().iter().enumerate() {
        let pos = to_world(body.x, &scenario.bounds);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(body.radius() as f32))),
                material: materials.add(ColorMaterial::from(to_color(body.color))),
                transform: Transform::from_xyz(pos.x, pos.y, 1.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    scenario.tick();
}

/// Recolour every body from the light source, using a position snapshot
fn shading_system(mut scenario: ResMut<Scenario>) {
    if !scenario.shading.enabled {
        return;
    }
    let colors = shading::shade(&scenario.positions(), &scenario.bounds);
    for (i, c) in colors.into_iter().enumerate() {
        scenario.set_color(i, c);
    }
}

fn sync_bodies_system(
    scenario: Res<Scenario>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut query: Query<(&BodyIndex, &mut Transform, &Handle<ColorMaterial>)>,
) {
    for (BodyIndex(i), mut transform, handle) in &mut query {
        if let Some(b) = scenario.bodies().get(*i) {
            let pos = to_world(b.x, &scenario.bounds);
            transform.translation.x = pos.x;
            transform.translation.y = pos.y;
            if let Some(material) = materials.get_mut(handle) {
                material.color = to_color(b.color);
            }
        }
    }
}

/// One vertical line per column, from the surface down to the bottom edge
fn draw_water_system(scenario: Res<Scenario>, time: Res<Time>, mut gizmos: Gizmos) {
    let bounds = &scenario.bounds;
    let elapsed = time.elapsed_seconds_f64();
    let columns = bounds.width as u32;

    for col in 0..columns {
        let x = f64::from(col);
        let y = wave::surface_y(x, elapsed, &scenario.wave, bounds);
        gizmos.line_2d(
            to_world(NVec2::new(x, y), bounds),
            to_world(NVec2::new(x, bounds.height), bounds),
            WATER,
        );
    }
}

/// End-of-frame quit check: window close or Escape stops the scenario
fn quit_system(
    mut scenario: ResMut<Scenario>,
    mut close_requests: EventReader<WindowCloseRequested>,
    keys: Res<ButtonInput<KeyCode>>,
    mut exit: EventWriter<AppExit>,
) {
    let closing = close_requests.read().count() > 0;
    if keys.just_pressed(KeyCode::Escape) {
        scenario.stop();
        exit.send(AppExit::Success);
    } else if closing {
        scenario.stop();
    }
}

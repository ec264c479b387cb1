use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use tracing::{debug, info};

use super::gizmo::GizmoSink;
use super::interaction::PointerInput;
use super::pendulum::Pendulum;
use super::simulation::Simulation;

/// Resource: window half-extents, used to map simulation space onto the
/// centred Bevy 2D world.
#[derive(Resource, Default, Copy, Clone, Debug)]
pub struct WorldBounds {
    pub half: Vec2,
}

/// Latest pointer sample in simulation space (window pixels, +Y down).
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct Pointer(pub PointerInput);

/// The cloth scene plus the factor turning fixed-clock seconds into its dt.
#[derive(Resource, Debug)]
pub struct ClothScene {
    pub sim: Simulation,
    pub dt_scale: f32,
}

#[derive(Resource, Debug)]
pub struct PendulumScene {
    pub pendulum: Pendulum,
    pub dt_scale: f32,
}

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Keep `WorldBounds` up to date (resizes / DPI changes).
pub fn update_world_bounds(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut bounds: ResMut<WorldBounds>,
) {
    if let Ok(w) = windows.single() {
        bounds.half = 0.5 * w.size();
    }
}

/// Sample cursor and left button. `cursor_position` is already top-left
/// origin with +Y down, which is the simulation's own space.
pub fn update_pointer(
    windows: Query<&Window, With<PrimaryWindow>>,
    buttons: Res<ButtonInput<MouseButton>>,
    mut pointer: ResMut<Pointer>,
) {
    pointer.0.primary_held = buttons.pressed(MouseButton::Left);

    let Ok(window) = windows.single() else {
        return;
    };
    if let Some(screen_pos) = window.cursor_position() {
        pointer.0.position = screen_pos;
    }
}

pub fn cloth_step(time: Res<Time>, pointer: Res<Pointer>, mut scene: ResMut<ClothScene>) {
    let dt = time.delta_secs() * scene.dt_scale;
    let report = scene.sim.step(dt, &pointer.0);

    if report.culled > 0 || report.settled > 0 {
        debug!(
            culled = report.culled,
            settled = report.settled,
            frame = scene.sim.frame(),
            "cloth topology changed"
        );
    }
}

pub fn pendulum_step(time: Res<Time>, pointer: Res<Pointer>, mut scene: ResMut<PendulumScene>) {
    let dt = time.delta_secs() * scene.dt_scale;
    scene.pendulum.step(dt, &pointer.0);
}

pub fn draw_cloth(mut gizmos: Gizmos, bounds: Res<WorldBounds>, scene: Res<ClothScene>) {
    let mut sink = GizmoSink::new(&mut gizmos, bounds.half);
    scene.sim.draw(&mut sink);
}

pub fn draw_pendulum_scene(
    mut gizmos: Gizmos,
    bounds: Res<WorldBounds>,
    scene: Res<PendulumScene>,
) {
    let mut sink = GizmoSink::new(&mut gizmos, bounds.half);
    scene.pendulum.draw(&mut sink);
}

/// Show the live particle count in the window title.
pub fn update_particle_title(
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
    scene: Res<ClothScene>,
    mut last: Local<Option<usize>>,
) {
    let count = scene.sim.grid.particle_count();
    if *last == Some(count) {
        return;
    }
    *last = Some(count);
    info!(particles = count, springs = scene.sim.grid.spring_count(), "cloth size");

    if let Ok(mut window) = windows.single_mut() {
        window.title = count.to_string();
    }
}

/// Native-only quit: press Esc or Q to exit the app.
/// (No-op on wasm32.)
pub fn exit_on_esc_or_q_if_native(
    keys: Res<ButtonInput<KeyCode>>,
    mut exit: MessageWriter<AppExit>,
) {
    if cfg!(not(target_arch = "wasm32")) && keys.any_just_pressed([KeyCode::Escape, KeyCode::KeyQ]) {
        exit.write(AppExit::Success);
    }
}

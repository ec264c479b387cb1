use bevy::prelude::*;
use slotmap::{SlotMap, new_key_type};

pub mod gizmo;
pub mod grid;
pub mod interaction;
pub mod particle;
pub mod pendulum;
pub mod render;
pub mod simulation;
pub mod spring;
pub mod systems;

use crate::config::{CLOTH_DT_SCALE, GridConfig, PENDULUM_DT_SCALE, PendulumConfig, SimConfig};
use particle::Particle;
use pendulum::Pendulum;
use simulation::Simulation;
use spring::Spring;
use systems::{ClothScene, PendulumScene, Pointer, WorldBounds};

new_key_type! {
    /// Stable handle to a particle in a [`grid::SimulationGrid`].
    pub struct ParticleKey;
    /// Stable handle to a spring in a [`grid::SimulationGrid`].
    pub struct SpringKey;
}

pub type Particles = SlotMap<ParticleKey, Particle>;
pub type Springs = SlotMap<SpringKey, Spring>;

/// Window, input, and drawing plumbing shared by both scenes.
fn add_host_systems(app: &mut App) {
    app.init_resource::<WorldBounds>()
        .init_resource::<Pointer>()
        .add_systems(Startup, systems::spawn_camera)
        .add_systems(
            Update,
            (
                systems::update_world_bounds,
                systems::update_pointer,
                systems::exit_on_esc_or_q_if_native,
            ),
        );
}

/// Hanging cloth you can cut with the left mouse button.
///
/// The step runs on the fixed clock (set its rate in main via `Time::<Fixed>`);
/// drawing happens once per render frame.
pub struct ClothPlugin {
    pub config: SimConfig,
    pub grid: GridConfig,
    pub dt_scale: f32,
}

impl Default for ClothPlugin {
    fn default() -> Self {
        Self {
            config: SimConfig::default(),
            grid: GridConfig::default(),
            dt_scale: CLOTH_DT_SCALE,
        }
    }
}

impl Plugin for ClothPlugin {
    fn build(&self, app: &mut App) {
        add_host_systems(app);
        app.insert_resource(ClothScene {
            sim: Simulation::new(self.config.clone(), &self.grid),
            dt_scale: self.dt_scale,
        })
        .add_systems(FixedUpdate, systems::cloth_step)
        .add_systems(
            Update,
            (systems::draw_cloth, systems::update_particle_title)
                .after(systems::update_world_bounds),
        );
    }
}

/// A spring pendulum whose anchor follows the mouse while the left button is held.
pub struct PendulumPlugin {
    pub config: PendulumConfig,
    pub dt_scale: f32,
}

impl Default for PendulumPlugin {
    fn default() -> Self {
        Self {
            config: PendulumConfig::default(),
            dt_scale: PENDULUM_DT_SCALE,
        }
    }
}

impl Plugin for PendulumPlugin {
    fn build(&self, app: &mut App) {
        add_host_systems(app);
        app.insert_resource(PendulumScene {
            pendulum: Pendulum::new(&self.config),
            dt_scale: self.dt_scale,
        })
        .add_systems(FixedUpdate, systems::pendulum_step)
        .add_systems(
            Update,
            systems::draw_pendulum_scene.after(systems::update_world_bounds),
        );
    }
}

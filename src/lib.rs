//! Explicit mass-spring simulation of a cuttable cloth and a spring pendulum.
//!
//! The core (`physics::{particle, spring, grid, simulation, interaction,
//! pendulum, render}`) is plain data plus semi-implicit Euler and can be
//! driven headless. `physics::systems` and the plugins wire it into a Bevy
//! app for windowing, input, timing, and gizmo drawing.

pub mod config;
pub mod error;
pub mod physics;

pub use config::{GridConfig, PendulumConfig, SimConfig};
pub use error::ConfigError;
pub use physics::grid::SimulationGrid;
pub use physics::interaction::{InteractionController, PointerInput, distance_to_segment};
pub use physics::particle::{GroundContact, Particle};
pub use physics::pendulum::Pendulum;
pub use physics::render::{DrawCommand, DrawList, DrawSink};
pub use physics::simulation::{Simulation, StepReport};
pub use physics::spring::{Spring, hooke_force};
pub use physics::{ClothPlugin, ParticleKey, PendulumPlugin, SpringKey};

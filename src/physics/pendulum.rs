use bevy::math::Vec2;

use super::interaction::PointerInput;
use super::particle::Particle;
use super::render::{DrawSink, draw_pendulum};
use super::spring::hooke_force;
use crate::config::{PendulumConfig, SimConfig};

/// One bob on one spring, hanging from an anchor the pointer can drag.
///
/// The anchor is a bare pin target rather than a particle: it has no mass or
/// velocity and only moves when reassigned.
#[derive(Clone, Debug, PartialEq)]
pub struct Pendulum {
    pub anchor: Vec2,
    pub bob: Particle,
    pub stiffness: f32,
    pub rest_length: f32,
    pub physics: SimConfig,
}

impl Pendulum {
    pub fn new(config: &PendulumConfig) -> Self {
        Self {
            anchor: config.anchor,
            bob: Particle::new(config.bob, config.mass),
            stiffness: config.stiffness,
            rest_length: config.rest_length,
            physics: config.physics.clone(),
        }
    }

    /// Current spring force on the bob.
    pub fn force(&self) -> Option<Vec2> {
        hooke_force(self.anchor, self.bob.position, self.stiffness, self.rest_length)
    }

    /// Drag, spring impulse, then integrate the bob.
    ///
    /// Dragging only rebinds the anchor; it never touches the bob's velocity.
    pub fn step(&mut self, dt: f32, input: &PointerInput) {
        if input.primary_held {
            self.anchor = input.position;
        }
        if let Some(force) = self.force() {
            if !self.bob.pinned {
                self.bob.velocity += force / self.bob.mass * dt;
            }
        }
        self.bob.update(dt, &self.physics);
    }

    pub fn draw(&self, sink: &mut impl DrawSink) {
        draw_pendulum(self, sink);
    }
}

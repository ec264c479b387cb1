use bevy::math::Vec2;

use super::{ParticleKey, Particles};

/// Hookean force on `b` for a spring between `a` and `b`:
/// F = -k * (|b - a| - rest) * (b - a) / |b - a|
///
/// Attractive when stretched, repulsive when compressed. Returns `None` when
/// the endpoints coincide, since the direction is undefined.
pub fn hooke_force(a: Vec2, b: Vec2, stiffness: f32, rest_length: f32) -> Option<Vec2> {
    let separation = b - a;
    let distance = separation.length();
    if distance == 0.0 {
        return None;
    }
    Some(-stiffness * (distance - rest_length) * (separation / distance))
}

/// A linear elastic link between two particles of a [`SimulationGrid`].
///
/// Endpoints are arena keys; the spring never owns its particles.
///
/// [`SimulationGrid`]: super::grid::SimulationGrid
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub a: ParticleKey,
    pub b: ParticleKey,
    pub stiffness: f32,
    pub rest_length: f32,
}

impl Spring {
    pub fn new(a: ParticleKey, b: ParticleKey, stiffness: f32, rest_length: f32) -> Self {
        Self {
            a,
            b,
            stiffness,
            rest_length,
        }
    }

    pub fn touches(&self, key: ParticleKey) -> bool {
        self.a == key || self.b == key
    }

    /// Current endpoint positions, or `None` if either endpoint is gone.
    pub fn endpoints(&self, particles: &Particles) -> Option<(Vec2, Vec2)> {
        let a = particles.get(self.a)?;
        let b = particles.get(self.b)?;
        Some((a.position, b.position))
    }

    /// The force this spring currently exerts on `b` (and, negated, on `a`).
    pub fn force(&self, particles: &Particles) -> Option<Vec2> {
        let (a, b) = self.endpoints(particles)?;
        hooke_force(a, b, self.stiffness, self.rest_length)
    }

    /// Apply one frame of opposite impulses to the unpinned endpoints.
    /// Positions are not touched; that happens in [`Particle::update`].
    ///
    /// [`Particle::update`]: super::particle::Particle::update
    pub fn update(&self, dt: f32, particles: &mut Particles) {
        let Some(force) = self.force(particles) else {
            return;
        };

        if let Some(b) = particles.get_mut(self.b) {
            if !b.pinned {
                b.velocity += force / b.mass * dt;
            }
        }
        if let Some(a) = particles.get_mut(self.a) {
            if !a.pinned {
                a.velocity -= force / a.mass * dt;
            }
        }
    }
}

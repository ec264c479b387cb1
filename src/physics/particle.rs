use bevy::math::Vec2;

use crate::config::SimConfig;

/// A point mass integrated with semi-implicit Euler.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    /// Accumulates spring impulses and gravity; only collisions reset it.
    pub velocity: Vec2,
    /// Always > 0.
    pub mass: f32,
    /// Pinned particles are skipped by integration and by spring impulses.
    pub pinned: bool,
}

/// What a ground check did to a particle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroundContact {
    Airborne,
    Bounced,
    /// The bounce was too weak; the particle is now pinned for good.
    Settled,
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            mass: 1.0,
            pinned: false,
        }
    }
}

impl Particle {
    /// A free particle at rest at `pos`.
    pub fn new(pos: Vec2, mass: f32) -> Self {
        Self {
            position: pos,
            mass,
            ..Default::default()
        }
    }

    /// A particle that starts pinned at `pos`.
    pub fn pinned(pos: Vec2, mass: f32) -> Self {
        Self {
            pinned: true,
            ..Self::new(pos, mass)
        }
    }

    pub fn pin(&mut self) {
        self.pinned = true;
    }

    /// Move a particle from outside the step (e.g. dragging a pin).
    /// Velocity is left alone.
    pub fn move_to(&mut self, pos: Vec2) {
        self.position = pos;
    }

    /// Damp, add gravity, then advance with the updated velocity:
    /// v' = v * damping + g, x' = x + v' * dt
    pub fn update(&mut self, dt: f32, config: &SimConfig) {
        if self.pinned {
            return;
        }
        self.velocity *= config.damping;
        self.velocity += config.gravity;
        self.position += self.velocity * dt;
    }

    /// Clamp to the ground line and reflect vertical velocity.
    ///
    /// A reflected speed below `rest_speed` is zeroed and the particle pinned,
    /// which is irreversible.
    pub fn collide_ground(&mut self, ground: f32, restitution: f32, rest_speed: f32) -> GroundContact {
        if self.position.y <= ground {
            return GroundContact::Airborne;
        }

        self.position.y = ground;
        self.velocity.y = -self.velocity.y * restitution;

        if self.velocity.y.abs() < rest_speed {
            self.velocity.y = 0.0;
            self.pinned = true;
            GroundContact::Settled
        } else {
            GroundContact::Bounced
        }
    }
}

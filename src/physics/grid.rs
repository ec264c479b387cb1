use bevy::math::Vec2;
use tracing::debug;

use super::particle::Particle;
use super::spring::Spring;
use super::{ParticleKey, Particles, SpringKey, Springs};
use crate::config::GridConfig;

/// The particle lattice of a cloth and the springs between its nodes.
///
/// Particles and springs live in slotmap arenas: removal is O(1), keys are
/// stable across removals, and a stale key never resolves to a newer particle.
#[derive(Debug, Clone, Default)]
pub struct SimulationGrid {
    pub particles: Particles,
    pub springs: Springs,
    /// Row-major `(col, row) -> key` map from build time. Culled entries
    /// resolve to `None` through `particles`.
    lattice: Vec<ParticleKey>,
    width: usize,
    height: usize,
}

impl SimulationGrid {
    /// Build a `width x height` lattice with springs to the right and below
    /// each node (plus both diagonals when `config.diagonal_springs` is set).
    ///
    /// `config` is assumed valid; see [`GridConfig::validate`].
    pub fn new(config: &GridConfig) -> Self {
        let (width, height) = (config.width, config.height);
        let mut particles = Particles::with_capacity_and_key(width * height);
        let mut lattice = Vec::with_capacity(width * height);

        for row in 0..height {
            for col in 0..width {
                let pos = config.origin + Vec2::new(col as f32, row as f32) * config.spacing;
                let particle = if config.is_pinned(col, row) {
                    Particle::pinned(pos, config.mass)
                } else {
                    Particle::new(pos, config.mass)
                };
                lattice.push(particles.insert(particle));
            }
        }

        let mut grid = Self {
            particles,
            springs: Springs::with_key(),
            lattice,
            width,
            height,
        };

        let k = config.stiffness;
        let rest = config.spacing;
        let diagonal = config.spacing * std::f32::consts::SQRT_2;
        for row in 0..height {
            for col in 0..width {
                let here = grid.lattice[row * width + col];
                if col + 1 < width {
                    grid.connect(here, grid.lattice[row * width + col + 1], k, rest);
                }
                if row + 1 < height {
                    grid.connect(here, grid.lattice[(row + 1) * width + col], k, rest);
                }
                if config.diagonal_springs && row + 1 < height {
                    if col + 1 < width {
                        grid.connect(here, grid.lattice[(row + 1) * width + col + 1], k, diagonal);
                    }
                    if col > 0 {
                        grid.connect(here, grid.lattice[(row + 1) * width + col - 1], k, diagonal);
                    }
                }
            }
        }

        debug!(
            particles = grid.particles.len(),
            springs = grid.springs.len(),
            "built {}x{} grid",
            width,
            height
        );
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Key of the particle built at `(col, row)`, if it still exists.
    pub fn key_at(&self, col: usize, row: usize) -> Option<ParticleKey> {
        if col >= self.width || row >= self.height {
            return None;
        }
        let key = self.lattice[row * self.width + col];
        self.particles.contains_key(key).then_some(key)
    }

    pub fn particle_at(&self, col: usize, row: usize) -> Option<&Particle> {
        self.key_at(col, row).and_then(|key| self.particles.get(key))
    }

    pub fn particle_at_mut(&mut self, col: usize, row: usize) -> Option<&mut Particle> {
        let key = self.key_at(col, row)?;
        self.particles.get_mut(key)
    }

    /// Add a spring between two live particles. Returns `None` if either is gone.
    pub fn connect(
        &mut self,
        a: ParticleKey,
        b: ParticleKey,
        stiffness: f32,
        rest_length: f32,
    ) -> Option<SpringKey> {
        if !self.particles.contains_key(a) || !self.particles.contains_key(b) {
            return None;
        }
        Some(self.springs.insert(Spring::new(a, b, stiffness, rest_length)))
    }

    /// Remove one spring. Its particles are untouched.
    pub fn remove_spring(&mut self, key: SpringKey) -> Option<Spring> {
        self.springs.remove(key)
    }

    /// Remove a particle along with every spring that references it.
    pub fn remove_particle(&mut self, key: ParticleKey) -> Option<Particle> {
        let particle = self.particles.remove(key)?;
        let before = self.springs.len();
        self.springs.retain(|_, spring| !spring.touches(key));
        debug!(
            springs_removed = before - self.springs.len(),
            "removed particle at {:?}",
            particle.position
        );
        Some(particle)
    }

    /// Springs attached to `key`.
    pub fn springs_of(&self, key: ParticleKey) -> impl Iterator<Item = (SpringKey, &Spring)> + '_ {
        self.springs
            .iter()
            .filter(move |(_, spring)| spring.touches(key))
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn spring_count(&self) -> usize {
        self.springs.len()
    }
}

use bevy::math::{Rect, Vec2};
use tracing::{debug, trace};

use super::grid::SimulationGrid;
use super::interaction::{InteractionController, PointerInput};
use super::particle::GroundContact;
use super::render::{DrawSink, draw_grid};
use super::{ParticleKey, SpringKey};
use crate::config::{GridConfig, SimConfig};

/// What one call to [`Simulation::step`] changed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepReport {
    /// The spring removed by the pointer this frame, if any.
    pub cut: Option<SpringKey>,
    /// Particles removed for leaving the cull bounds.
    pub culled: usize,
    /// Particles that came to rest on the ground and got pinned.
    pub settled: usize,
}

/// A cloth scene: grid, tuning, and pointer edits, advanced by [`Simulation::step`].
#[derive(Debug, Clone)]
pub struct Simulation {
    pub grid: SimulationGrid,
    pub config: SimConfig,
    pub interaction: InteractionController,
    frame: u64,
}

impl Simulation {
    /// `config` and `grid` are assumed valid; see their `validate` methods.
    pub fn new(config: SimConfig, grid: &GridConfig) -> Self {
        Self::from_grid(config, SimulationGrid::new(grid))
    }

    /// Wrap an already-built grid (e.g. one with hand-made topology).
    pub fn from_grid(config: SimConfig, grid: SimulationGrid) -> Self {
        let interaction = InteractionController::new(config.cut_radius);
        Self {
            grid,
            config,
            interaction,
            frame: 0,
        }
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Advance one frame:
    /// 1. pointer edit against the current spring set
    /// 2. every spring adds its impulses to particle velocities
    /// 3. every particle is culled, or collided with the ground and integrated
    ///
    /// Both passes walk a key snapshot taken before they start, so removals
    /// inside a pass never disturb its iteration.
    pub fn step(&mut self, dt: f32, input: &PointerInput) -> StepReport {
        let mut report = StepReport {
            cut: self.interaction.apply(&mut self.grid, input),
            ..Default::default()
        };

        let springs: Vec<SpringKey> = self.grid.springs.keys().collect();
        for key in springs {
            if let Some(spring) = self.grid.springs.get(key).copied() {
                spring.update(dt, &mut self.grid.particles);
            }
        }

        let particles: Vec<ParticleKey> = self.grid.particles.keys().collect();
        for key in particles {
            let Some(position) = self.grid.particles.get(key).map(|p| p.position) else {
                continue;
            };

            if self.out_of_bounds(position) {
                self.grid.remove_particle(key);
                report.culled += 1;
                continue;
            }

            let Some(particle) = self.grid.particles.get_mut(key) else {
                continue;
            };
            // Pinned particles are inputs to the step, ground included.
            if let Some(ground) = self.config.ground_level.filter(|_| !particle.pinned) {
                let contact = particle.collide_ground(
                    ground,
                    self.config.restitution,
                    self.config.rest_speed,
                );
                if contact == GroundContact::Settled {
                    debug!("particle settled at {:?}", particle.position);
                    report.settled += 1;
                }
            }
            particle.update(dt, &self.config);
        }

        self.frame += 1;
        trace!(
            frame = self.frame,
            particles = self.grid.particle_count(),
            springs = self.grid.spring_count(),
            culled = report.culled,
            "step"
        );
        report
    }

    /// Emit the current state to the host renderer.
    pub fn draw(&self, sink: &mut impl DrawSink) {
        draw_grid(&self.grid, sink);
    }

    fn out_of_bounds(&self, position: Vec2) -> bool {
        self.config
            .cull_bounds
            .is_some_and(|bounds| !strictly_inside(bounds, position))
    }
}

/// `Rect::contains` is inclusive; culling keeps only the open interior.
fn strictly_inside(bounds: Rect, p: Vec2) -> bool {
    bounds.min.x < p.x && p.x < bounds.max.x && bounds.min.y < p.y && p.y < bounds.max.y
}

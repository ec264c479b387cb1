use bevy::math::Vec2;
use tracing::debug;

use super::SpringKey;
use super::grid::SimulationGrid;
use crate::config::CUT_RADIUS;

/// Pointer state sampled by the host once per frame, in simulation space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerInput {
    pub position: Vec2,
    pub primary_held: bool,
}

impl PointerInput {
    pub fn new(position: Vec2, primary_held: bool) -> Self {
        Self {
            position,
            primary_held,
        }
    }

    /// No button held; edits are skipped.
    pub fn idle() -> Self {
        Self::default()
    }
}

/// Distance from `p` to the segment `a..b`, or `None` if the segment has no length.
#[inline]
pub fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> Option<f32> {
    let ab = b - a;
    let length = ab.length();
    if length == 0.0 {
        return None;
    }
    let dir = ab / length;
    let along = dir.dot(p - a).clamp(0.0, length);
    let closest = a + dir * along;
    Some(closest.distance(p))
}

/// Cuts springs under the pointer while the primary button is held.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionController {
    pub cut_radius: f32,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self {
            cut_radius: CUT_RADIUS,
        }
    }
}

impl InteractionController {
    pub fn new(cut_radius: f32) -> Self {
        Self { cut_radius }
    }

    /// The first spring (in arena order) lying within `cut_radius` of `pointer`.
    pub fn pick(&self, grid: &SimulationGrid, pointer: Vec2) -> Option<SpringKey> {
        grid.springs.iter().find_map(|(key, spring)| {
            let (a, b) = spring.endpoints(&grid.particles)?;
            let distance = distance_to_segment(pointer, a, b)?;
            (distance <= self.cut_radius).then_some(key)
        })
    }

    /// Remove at most one spring under the pointer. Particles are never removed.
    pub fn apply(&self, grid: &mut SimulationGrid, input: &PointerInput) -> Option<SpringKey> {
        if !input.primary_held {
            return None;
        }
        let key = self.pick(grid, input.position)?;
        grid.remove_spring(key)?;
        debug!("cut spring {:?} at {:?}", key, input.position);
        Some(key)
    }
}

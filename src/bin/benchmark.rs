//! Headless cloth run with random cut strokes, for timing the solver
//! without a window.

use std::time::Instant;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use rand::prelude::*;
use spring_cloth::config::{CLOTH_DT_SCALE, CLOTH_WINDOW, PHYSICS_HZ};
use spring_cloth::{GridConfig, PointerInput, SimConfig, Simulation};
use tracing::info;

const FRAMES: u64 = 2_000;
/// Frames per random stroke; the button is held for the first half.
const STROKE_FRAMES: u64 = 60;
const SEED: u64 = 42;

fn main() {
    // Only for the tracing subscriber.
    App::new().add_plugins(LogPlugin::default());

    let mut sim = Simulation::new(SimConfig::default(), &GridConfig::default());
    let mut rng = StdRng::seed_from_u64(SEED);
    let (w, h) = (CLOTH_WINDOW.0 as f32, CLOTH_WINDOW.1 as f32);
    let dt = CLOTH_DT_SCALE / PHYSICS_HZ as f32;

    let mut from = Vec2::ZERO;
    let mut to = Vec2::ZERO;
    let mut cuts = 0usize;
    let mut culled = 0usize;
    let start = Instant::now();

    for frame in 0..FRAMES {
        let phase = frame % STROKE_FRAMES;
        if phase == 0 {
            from = Vec2::new(rng.random_range(0.0..w), rng.random_range(0.0..h));
            to = Vec2::new(rng.random_range(0.0..w), rng.random_range(0.0..h));
        }
        let held = phase < STROKE_FRAMES / 2;
        let t = phase as f32 / (STROKE_FRAMES / 2) as f32;
        let input = PointerInput::new(from.lerp(to, t.min(1.0)), held);

        let report = sim.step(dt, &input);
        cuts += usize::from(report.cut.is_some());
        culled += report.culled;
    }

    let elapsed = start.elapsed();
    info!(
        frames = FRAMES,
        cuts,
        culled,
        particles = sim.grid.particle_count(),
        springs = sim.grid.spring_count(),
        "finished in {:?} ({:.1} us/frame)",
        elapsed,
        elapsed.as_secs_f64() * 1e6 / FRAMES as f64
    );
}

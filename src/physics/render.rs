//! Host-agnostic draw commands.
//!
//! The core never talks to a renderer directly. It describes a frame as
//! circles and lines in simulation space (origin top-left, +Y down) and hands
//! them to a [`DrawSink`] supplied by the host.

use bevy::color::Color;
use bevy::math::Vec2;

use super::grid::SimulationGrid;
use super::pendulum::Pendulum;

pub const PARTICLE_FILL: Color = Color::srgb(0.0, 0.0, 1.0);
pub const OUTLINE: Color = Color::WHITE;
pub const BACKGROUND: Color = Color::srgb(0.165, 0.165, 0.165);

pub const PARTICLE_RADIUS: f32 = 5.0;
pub const PARTICLE_STROKE: f32 = 2.0;
pub const SPRING_WIDTH: f32 = 1.0;

pub const ANCHOR_RADIUS: f32 = 10.0;
pub const BOB_RADIUS: f32 = 30.0;
pub const PENDULUM_STROKE: f32 = 3.0;
pub const PENDULUM_LINE_WIDTH: f32 = 4.0;

/// Fire-and-forget drawing primitives.
pub trait DrawSink {
    /// `stroke == 0.0` draws a filled disc; anything else an outline of that width.
    fn circle(&mut self, center: Vec2, radius: f32, color: Color, stroke: f32);
    fn line(&mut self, a: Vec2, b: Vec2, color: Color, width: f32);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
        stroke: f32,
    },
    Line {
        a: Vec2,
        b: Vec2,
        color: Color,
        width: f32,
    },
}

/// A sink that just records what it was asked to draw.
#[derive(Clone, Debug, Default)]
pub struct DrawList(pub Vec<DrawCommand>);

impl DrawList {
    pub fn lines(&self) -> usize {
        self.0
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }

    pub fn circles(&self) -> usize {
        self.0
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }
}

impl DrawSink for DrawList {
    fn circle(&mut self, center: Vec2, radius: f32, color: Color, stroke: f32) {
        self.0.push(DrawCommand::Circle {
            center,
            radius,
            color,
            stroke,
        });
    }

    fn line(&mut self, a: Vec2, b: Vec2, color: Color, width: f32) {
        self.0.push(DrawCommand::Line { a, b, color, width });
    }
}

/// Springs first, particles on top.
pub fn draw_grid(grid: &SimulationGrid, sink: &mut impl DrawSink) {
    for spring in grid.springs.values() {
        if let Some((a, b)) = spring.endpoints(&grid.particles) {
            sink.line(a, b, OUTLINE, SPRING_WIDTH);
        }
    }
    for particle in grid.particles.values() {
        sink.circle(particle.position, PARTICLE_RADIUS, PARTICLE_FILL, 0.0);
        sink.circle(particle.position, PARTICLE_RADIUS, OUTLINE, PARTICLE_STROKE);
    }
}

pub fn draw_pendulum(pendulum: &Pendulum, sink: &mut impl DrawSink) {
    let (anchor, bob) = (pendulum.anchor, pendulum.bob.position);
    sink.line(anchor, bob, OUTLINE, PENDULUM_LINE_WIDTH);
    sink.circle(anchor, ANCHOR_RADIUS, PARTICLE_FILL, 0.0);
    sink.circle(anchor, ANCHOR_RADIUS, OUTLINE, PENDULUM_STROKE);
    sink.circle(bob, BOB_RADIUS, PARTICLE_FILL, 0.0);
    sink.circle(bob, BOB_RADIUS, OUTLINE, PENDULUM_STROKE);
}

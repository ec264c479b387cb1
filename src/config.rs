use bevy::math::{Rect, Vec2};

use crate::error::ConfigError;

/// Physics timing
pub const PHYSICS_HZ: f64 = 60.0;
pub const PENDULUM_HZ: f64 = 120.0;
/// The host multiplies wall-clock seconds by this before handing dt to the core.
pub const CLOTH_DT_SCALE: f32 = 80.0;
pub const PENDULUM_DT_SCALE: f32 = 70.0;

/// Window sizes (logical pixels)
pub const CLOTH_WINDOW: (u32, u32) = (800, 600);
pub const PENDULUM_WINDOW: (u32, u32) = (1280, 720);

/// Gravity (screen units per tick; +Y down)
pub const GRAVITY: Vec2 = Vec2::new(0.0, 0.08);
pub const DAMPING: f32 = 0.96;

/// Ground contact
pub const GROUND_LEVEL: f32 = 450.0;
pub const RESTITUTION: f32 = 0.5;
/// Bounce speed under which a grounded particle is locked in place.
pub const REST_SPEED: f32 = 0.1;

/// Particles further than this past any window edge are culled.
pub const CULL_MARGIN: f32 = 200.0;

/// Pointer distance (pixels) at which a spring gets cut.
pub const CUT_RADIUS: f32 = 5.0;

/// Cloth lattice
pub const GRID_WIDTH: usize = 41;
pub const GRID_HEIGHT: usize = 20;
pub const PARTICLE_SPACING: f32 = 15.0;
pub const GRID_ORIGIN: Vec2 = Vec2::new(60.0, 10.0);
pub const CLOTH_STIFFNESS: f32 = 0.222;
pub const DEFAULT_MASS: f32 = 1.0;

/// Spring pendulum
pub const PENDULUM_ANCHOR: Vec2 = Vec2::new(400.0, 200.0);
pub const PENDULUM_BOB: Vec2 = Vec2::new(400.0, 350.0);
pub const PENDULUM_GRAVITY: Vec2 = Vec2::new(0.0, 0.07);
pub const PENDULUM_DAMPING: f32 = 0.999;
pub const PENDULUM_MASS: f32 = 10.0;
pub const PENDULUM_STIFFNESS: f32 = 0.2;
pub const PENDULUM_REST_LENGTH: f32 = 100.0;

/// Global tuning shared by every particle in a scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub gravity: Vec2,
    /// Velocity multiplier applied every update, in `[0, 1]`.
    pub damping: f32,
    /// `None` disables ground contact.
    pub ground_level: Option<f32>,
    pub restitution: f32,
    pub rest_speed: f32,
    /// Particles not strictly inside this rectangle are culled. `None` disables culling.
    pub cull_bounds: Option<Rect>,
    pub cut_radius: f32,
}

impl SimConfig {
    pub fn new() -> Self {
        let (w, h) = CLOTH_WINDOW;
        Self {
            gravity: GRAVITY,
            damping: DAMPING,
            ground_level: Some(GROUND_LEVEL),
            restitution: RESTITUTION,
            rest_speed: REST_SPEED,
            cull_bounds: Some(viewport_with_margin(w as f32, h as f32, CULL_MARGIN)),
            cut_radius: CUT_RADIUS,
        }
    }

    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_ground_level(mut self, ground_level: Option<f32>) -> Self {
        self.ground_level = ground_level;
        self
    }

    pub fn with_restitution(mut self, restitution: f32) -> Self {
        self.restitution = restitution;
        self
    }

    pub fn with_rest_speed(mut self, rest_speed: f32) -> Self {
        self.rest_speed = rest_speed;
        self
    }

    pub fn with_cull_bounds(mut self, cull_bounds: Option<Rect>) -> Self {
        self.cull_bounds = cull_bounds;
        self
    }

    pub fn with_cut_radius(mut self, cut_radius: f32) -> Self {
        self.cut_radius = cut_radius;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(ConfigError::InvalidDamping(self.damping));
        }
        if let Some(bounds) = self.cull_bounds {
            if bounds.is_empty() {
                return Err(ConfigError::InvalidBounds);
            }
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// The region `[-margin, width + margin] x [-margin, height + margin]`.
pub fn viewport_with_margin(width: f32, height: f32, margin: f32) -> Rect {
    Rect::new(-margin, -margin, width + margin, height + margin)
}

/// Lattice layout and material of a cloth.
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
    pub spacing: f32,
    /// Screen position of the top-left particle.
    pub origin: Vec2,
    pub stiffness: f32,
    pub mass: f32,
    /// Every `n`-th particle of the top row is pinned. `None` picks `width / 10 + 1`.
    pub pin_stride: Option<usize>,
    /// Adds both diagonals per cell, giving a springy jelly instead of cloth.
    pub diagonal_springs: bool,
}

impl GridConfig {
    pub fn new() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            spacing: PARTICLE_SPACING,
            origin: GRID_ORIGIN,
            stiffness: CLOTH_STIFFNESS,
            mass: DEFAULT_MASS,
            pin_stride: None,
            diagonal_springs: false,
        }
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_stiffness(mut self, stiffness: f32) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_pin_stride(mut self, stride: usize) -> Self {
        self.pin_stride = Some(stride.max(1));
        self
    }

    pub fn with_diagonal_springs(mut self, enabled: bool) -> Self {
        self.diagonal_springs = enabled;
        self
    }

    pub fn pin_stride(&self) -> usize {
        self.pin_stride.unwrap_or(self.width / 10 + 1)
    }

    /// Whether the particle at `(col, row)` starts pinned.
    pub fn is_pinned(&self, col: usize, row: usize) -> bool {
        row == 0 && col % self.pin_stride() == 0
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidGridDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.mass > 0.0 && self.mass.is_finite()) {
            return Err(ConfigError::InvalidMass(self.mass));
        }
        if !(self.stiffness > 0.0) {
            return Err(ConfigError::InvalidStiffness(self.stiffness));
        }
        if !(self.spacing >= 0.0) {
            return Err(ConfigError::InvalidRestLength(self.spacing));
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A single bob hanging from a mouse-driven anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct PendulumConfig {
    pub anchor: Vec2,
    pub bob: Vec2,
    pub mass: f32,
    pub stiffness: f32,
    pub rest_length: f32,
    pub physics: SimConfig,
}

impl PendulumConfig {
    pub fn new() -> Self {
        Self {
            anchor: PENDULUM_ANCHOR,
            bob: PENDULUM_BOB,
            mass: PENDULUM_MASS,
            stiffness: PENDULUM_STIFFNESS,
            rest_length: PENDULUM_REST_LENGTH,
            physics: SimConfig::new()
                .with_gravity(PENDULUM_GRAVITY)
                .with_damping(PENDULUM_DAMPING)
                .with_ground_level(None)
                .with_cull_bounds(None),
        }
    }

    pub fn with_anchor(mut self, anchor: Vec2) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_bob(mut self, bob: Vec2) -> Self {
        self.bob = bob;
        self
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_spring(mut self, stiffness: f32, rest_length: f32) -> Self {
        self.stiffness = stiffness;
        self.rest_length = rest_length;
        self
    }

    pub fn with_physics(mut self, physics: SimConfig) -> Self {
        self.physics = physics;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.mass > 0.0 && self.mass.is_finite()) {
            return Err(ConfigError::InvalidMass(self.mass));
        }
        if !(self.stiffness > 0.0) {
            return Err(ConfigError::InvalidStiffness(self.stiffness));
        }
        if !(self.rest_length >= 0.0) {
            return Err(ConfigError::InvalidRestLength(self.rest_length));
        }
        self.physics.validate()
    }
}

impl Default for PendulumConfig {
    fn default() -> Self {
        Self::new()
    }
}

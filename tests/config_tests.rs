use bevy::math::Vec2;
use spring_cloth::config::*;
use spring_cloth::ConfigError;

#[test]
fn defaults_are_valid() {
    assert_eq!(SimConfig::default().validate(), Ok(()));
    assert_eq!(GridConfig::default().validate(), Ok(()));
    assert_eq!(PendulumConfig::default().validate(), Ok(()));
}

#[test]
fn default_cull_bounds_extend_the_viewport_by_the_margin() {
    let bounds = SimConfig::default().cull_bounds.expect("cloth culls");
    assert_eq!(bounds.min, Vec2::new(-200.0, -200.0));
    assert_eq!(bounds.max, Vec2::new(1000.0, 800.0));
}

#[test]
fn pendulum_has_no_ground_or_culling() {
    let config = PendulumConfig::default();
    assert_eq!(config.physics.ground_level, None);
    assert_eq!(config.physics.cull_bounds, None);
    assert_eq!(config.physics.gravity, PENDULUM_GRAVITY);
    assert_eq!(config.physics.damping, PENDULUM_DAMPING);
}

#[test]
fn rejects_bad_grid_values() {
    assert_eq!(
        GridConfig::new().with_size(0, 3).validate(),
        Err(ConfigError::InvalidGridDimensions { width: 0, height: 3 })
    );
    assert_eq!(
        GridConfig::new().with_mass(0.0).validate(),
        Err(ConfigError::InvalidMass(0.0))
    );
    assert_eq!(
        GridConfig::new().with_stiffness(-1.0).validate(),
        Err(ConfigError::InvalidStiffness(-1.0))
    );
    assert_eq!(
        GridConfig::new().with_spacing(-2.0).validate(),
        Err(ConfigError::InvalidRestLength(-2.0))
    );
    assert!(GridConfig::new().with_mass(f32::NAN).validate().is_err());
}

#[test]
fn rejects_bad_physics_values() {
    assert_eq!(
        SimConfig::new().with_damping(1.5).validate(),
        Err(ConfigError::InvalidDamping(1.5))
    );
    let flat = bevy::math::Rect::new(0.0, 0.0, 10.0, 0.0);
    assert_eq!(
        SimConfig::new().with_cull_bounds(Some(flat)).validate(),
        Err(ConfigError::InvalidBounds)
    );
    assert_eq!(
        PendulumConfig::new().with_spring(0.2, -1.0).validate(),
        Err(ConfigError::InvalidRestLength(-1.0))
    );
}

#[test]
fn errors_render_readable_messages() {
    let msg = ConfigError::InvalidGridDimensions { width: 0, height: 2 }.to_string();
    assert_eq!(msg, "grid must be at least 1x1 (got 0x2)");
    assert!(ConfigError::InvalidMass(-1.0).to_string().contains("-1"));
}

#[test]
fn pin_stride_is_clamped_to_one() {
    let config = GridConfig::new().with_pin_stride(0);
    assert_eq!(config.pin_stride(), 1);
    assert!(config.is_pinned(7, 0));
    assert!(!config.is_pinned(7, 1));
}

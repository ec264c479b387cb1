use bevy::math::Vec2;
use spring_cloth::config::{PENDULUM_ANCHOR, PENDULUM_BOB};
use spring_cloth::{Pendulum, PendulumConfig, PointerInput};

#[test]
fn stretched_spring_lifts_the_bob() {
    let mut pendulum = Pendulum::new(&PendulumConfig::default());
    // 150 apart with rest 100: F = -0.2 * 50 = -10 along +y.
    let force = pendulum.force().expect("non-degenerate");
    assert!((force.y + 10.0).abs() < 1e-4);

    pendulum.step(1.0, &PointerInput::idle());

    // v = F / m * dt = -1, damped by 0.999, plus gravity 0.07.
    let expected = -1.0 * 0.999 + 0.07;
    assert!((pendulum.bob.velocity.y - expected).abs() < 1e-5);
    assert!((pendulum.bob.position.y - (PENDULUM_BOB.y + expected)).abs() < 1e-4);
    assert_eq!(pendulum.anchor, PENDULUM_ANCHOR);
}

#[test]
fn anchor_only_moves_while_held() {
    let mut pendulum = Pendulum::new(&PendulumConfig::default());
    let target = Vec2::new(640.0, 100.0);

    pendulum.step(1.0, &PointerInput::new(target, false));
    assert_eq!(pendulum.anchor, PENDULUM_ANCHOR);

    pendulum.step(1.0, &PointerInput::new(target, true));
    assert_eq!(pendulum.anchor, target);

    pendulum.step(1.0, &PointerInput::new(Vec2::ZERO, false));
    assert_eq!(pendulum.anchor, target, "anchor stays where it was released");
}

#[test]
fn dragging_injects_no_velocity() {
    let target = Vec2::new(700.0, 300.0);
    let mut dragged = Pendulum::new(&PendulumConfig::default());
    let mut placed = Pendulum::new(&PendulumConfig::default().with_anchor(target));

    dragged.step(1.0, &PointerInput::new(target, true));
    placed.step(1.0, &PointerInput::idle());

    assert_eq!(dragged.bob, placed.bob);
}

#[test]
fn coincident_anchor_and_bob_only_feel_gravity() {
    let config = PendulumConfig::default().with_bob(PENDULUM_ANCHOR);
    let mut pendulum = Pendulum::new(&config);
    assert_eq!(pendulum.force(), None);

    pendulum.step(1.0, &PointerInput::idle());

    assert_eq!(pendulum.bob.velocity, config.physics.gravity);
}

#[test]
fn bob_overshoots_then_settles_at_equilibrium() {
    let mut pendulum = Pendulum::new(&PendulumConfig::default());
    let dt = 70.0 / 120.0;
    // Rest: (F / m * dt) * 0.999 + 0.07 = 0, i.e. about 6 units past the rest length.
    let equilibrium = 200.0 + 100.0 + 0.07 / 0.999 * 10.0 / (0.2 * dt);

    let mut highest = f32::MAX;
    for _ in 0..200 {
        pendulum.step(dt, &PointerInput::idle());
        highest = highest.min(pendulum.bob.position.y);
    }
    assert!(highest < equilibrium - 10.0, "swings past equilibrium, peaked at {highest}");

    for _ in 0..10_000 {
        pendulum.step(dt, &PointerInput::idle());
    }
    assert!((pendulum.bob.position.y - equilibrium).abs() < 1.0);
    assert!((pendulum.bob.position.x - 400.0).abs() < 1e-3);
}

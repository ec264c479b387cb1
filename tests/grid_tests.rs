use bevy::math::Vec2;
use spring_cloth::{GridConfig, Particle, SimulationGrid};

fn small(width: usize, height: usize) -> GridConfig {
    GridConfig::new()
        .with_size(width, height)
        .with_spacing(10.0)
        .with_origin(Vec2::ZERO)
}

#[test]
fn lattice_positions_follow_spacing_and_origin() {
    let grid = SimulationGrid::new(&GridConfig::default());
    assert_eq!(grid.particle_count(), 41 * 20);

    let p = grid.particle_at(3, 2).expect("exists");
    assert_eq!(p.position, Vec2::new(60.0 + 45.0, 10.0 + 30.0));
    assert!(grid.particle_at(41, 0).is_none());
    assert!(grid.particle_at(0, 20).is_none());
}

#[test]
fn four_neighbourhood_spring_count() {
    let grid = SimulationGrid::new(&small(3, 2));
    // right: 2 per row * 2 rows, below: 3 per column pair
    assert_eq!(grid.spring_count(), 2 * 2 + 3);
    assert!(grid.springs.values().all(|s| s.rest_length == 10.0));
}

#[test]
fn diagonal_springs_add_two_per_cell() {
    let grid = SimulationGrid::new(&small(3, 2).with_diagonal_springs(true));
    assert_eq!(grid.spring_count(), 7 + 2 * 2);

    let diagonal = 10.0 * std::f32::consts::SQRT_2;
    let diagonals = grid
        .springs
        .values()
        .filter(|s| (s.rest_length - diagonal).abs() < 1e-5)
        .count();
    assert_eq!(diagonals, 4);
}

#[test]
fn default_pins_every_fifth_top_node() {
    let config = GridConfig::default();
    assert_eq!(config.pin_stride(), 5);

    let grid = SimulationGrid::new(&config);
    let pinned: Vec<usize> = (0..grid.width())
        .filter(|&col| grid.particle_at(col, 0).is_some_and(|p| p.pinned))
        .collect();
    assert_eq!(pinned, vec![0, 5, 10, 15, 20, 25, 30, 35, 40]);
    assert!(grid.particles.values().filter(|p| p.pinned).count() == 9);
    assert!(!grid.particle_at(0, 1).is_some_and(|p| p.pinned));
}

#[test]
fn removing_a_particle_cascades_only_its_springs() {
    let mut grid = SimulationGrid::new(&small(3, 3));
    assert_eq!(grid.spring_count(), 12);

    let centre = grid.key_at(1, 1).expect("exists");
    let corner = grid.key_at(0, 0).expect("exists");
    let unrelated: Vec<_> = grid
        .springs
        .iter()
        .filter(|(_, s)| !s.touches(centre))
        .map(|(k, _)| k)
        .collect();
    assert_eq!(grid.springs_of(centre).count(), 4);

    assert!(grid.remove_particle(centre).is_some());

    assert_eq!(grid.particle_count(), 8);
    assert_eq!(grid.spring_count(), 8);
    assert!(grid.springs.values().all(|s| !s.touches(centre)));
    assert!(unrelated.iter().all(|&k| grid.springs.contains_key(k)));
    assert!(grid.key_at(1, 1).is_none());
    assert_eq!(grid.springs_of(corner).count(), 2);

    // Every surviving spring still points at live particles.
    assert!(grid
        .springs
        .values()
        .all(|s| grid.particles.contains_key(s.a) && grid.particles.contains_key(s.b)));
}

#[test]
fn removing_twice_is_a_no_op() {
    let mut grid = SimulationGrid::new(&small(2, 2));
    let key = grid.key_at(1, 1).expect("exists");
    assert!(grid.remove_particle(key).is_some());
    assert!(grid.remove_particle(key).is_none());
    assert_eq!(grid.spring_count(), 2);
}

#[test]
fn removing_a_spring_keeps_particles() {
    let mut grid = SimulationGrid::new(&small(2, 2));
    let key = grid.springs.keys().next().expect("has springs");

    assert!(grid.remove_spring(key).is_some());

    assert_eq!(grid.spring_count(), 3);
    assert_eq!(grid.particle_count(), 4);
}

#[test]
fn stale_keys_never_alias_new_particles() {
    let mut grid = SimulationGrid::new(&small(2, 1));
    let old = grid.key_at(1, 0).expect("exists");
    grid.remove_particle(old);

    let fresh = grid.particles.insert(Particle::new(Vec2::new(99.0, 99.0), 1.0));

    assert_ne!(old, fresh);
    assert!(grid.particles.get(old).is_none());
    assert!(grid.key_at(1, 0).is_none());
    let survivor = grid.key_at(0, 0).expect("exists");
    assert!(grid.connect(old, survivor, 1.0, 10.0).is_none());
    assert!(grid.connect(fresh, survivor, 1.0, 10.0).is_some());
}

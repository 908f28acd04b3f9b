//! Wave Field Property Tests
//!
//! These tests pin down the observable contracts of the wave field:
//! deterministic bounded noise, clamped springs, stable lattice layout,
//! and pointer behaviour. Random inputs come from a seeded generator.
//!
//! # Running tests
//! ```bash
//! cargo test --test field_properties
//! ```

use glam::DVec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use wavefield::noise::NoiseField;
use wavefield::rendering::trace_columns;
use wavefield::wave::{Lattice, WaveSimulation, DEFAULT_SEED};

// ==================== UNIVERSAL CONSTANTS ====================

/// Allowed overshoot beyond [-1, 1] for simplex noise
const NOISE_BOUND: f64 = 1.05;

/// Spring displacement clamp on each axis (px)
const SPRING_LIMIT: f64 = 200.0;

/// Frame interval used by scenario tests (ms)
const FRAME_MS: f64 = 16.0;

// ==================== HELPER FUNCTIONS ====================

fn assert_springs_clamped(lattice: &Lattice, tick: usize) {
    for (idx, p) in lattice.points().iter().enumerate() {
        assert!(
            p.spring_offset.x.abs() <= SPRING_LIMIT && p.spring_offset.y.abs() <= SPRING_LIMIT,
            "point {} escaped clamp on tick {}: {:?}",
            idx,
            tick,
            p.spring_offset
        );
    }
}

// ==================== NOISE ====================

#[test]
fn test_noise_is_deterministic_for_a_seed() {
    let a = NoiseField::new(DEFAULT_SEED);
    let b = NoiseField::new(DEFAULT_SEED);
    let mut rng = StdRng::seed_from_u64(1);

    for _ in 0..1000 {
        let x = rng.gen_range(-500.0..500.0);
        let y = rng.gen_range(-500.0..500.0);
        let first = a.sample(x, y);
        assert_eq!(first.to_bits(), a.sample(x, y).to_bits());
        assert_eq!(first.to_bits(), b.sample(x, y).to_bits());
    }
}

#[test]
fn test_noise_is_bounded() {
    let field = NoiseField::new(DEFAULT_SEED);
    let mut rng = StdRng::seed_from_u64(2);

    for _ in 0..10_000 {
        let x = rng.gen_range(-10_000.0..10_000.0);
        let y = rng.gen_range(-10_000.0..10_000.0);
        let v = field.sample(x, y);
        assert!(
            (-NOISE_BOUND..=NOISE_BOUND).contains(&v),
            "sample({}, {}) = {} out of bounds",
            x,
            y,
            v
        );
    }
}

#[test]
fn test_noise_is_continuous() {
    let field = NoiseField::new(DEFAULT_SEED);
    let mut rng = StdRng::seed_from_u64(3);
    let eps = 1e-4;

    for _ in 0..10_000 {
        let x = rng.gen_range(-100.0..100.0);
        let y = rng.gen_range(-100.0..100.0);
        let dx = (field.sample(x, y) - field.sample(x + eps, y)).abs();
        let dy = (field.sample(x, y) - field.sample(x, y + eps)).abs();
        assert!(dx < 0.01, "jump of {} at ({}, {}) along x", dx, x, y);
        assert!(dy < 0.01, "jump of {} at ({}, {}) along y", dy, x, y);
    }
}

#[test]
fn test_noise_continuous_across_cell_edges() {
    // Walk a fine line that crosses many simplex cell boundaries
    let field = NoiseField::new(DEFAULT_SEED);
    let step = 1e-4;
    let mut prev = field.sample(0.0, 0.3);
    for k in 1..50_000 {
        let v = field.sample(k as f64 * step, 0.3);
        assert!((v - prev).abs() < 0.01, "jump at x = {}", k as f64 * step);
        prev = v;
    }
}

// ==================== LATTICE ====================

#[test]
fn test_resize_twice_gives_identical_lattice() {
    let mut sim = WaveSimulation::new(DEFAULT_SEED);

    sim.resize(800.0, 600.0);
    let first = sim.lattice().clone();
    sim.resize(800.0, 600.0);
    let second = sim.lattice();

    assert_eq!(first.len(), second.len());
    assert_eq!(first.column_count(), second.column_count());
    for (a, b) in first.points().iter().zip(second.points()) {
        assert_eq!(a.base, b.base);
    }
}

#[test]
fn test_lattice_density_follows_width() {
    let mut sim = WaveSimulation::new(DEFAULT_SEED);
    sim.resize(1920.0, 1080.0);
    let wide_gap = sim.lattice().gap();
    sim.resize(480.0, 1080.0);
    let narrow_gap = sim.lattice().gap();

    assert_eq!(wide_gap, DVec2::new(15.0, 40.0));
    assert_eq!(narrow_gap, DVec2::new(10.0, 32.0));
}

// ==================== SPRINGS ====================

#[test]
fn test_spring_clamp_under_teleporting_pointer() {
    let mut sim = WaveSimulation::new(DEFAULT_SEED);
    sim.resize(300.0, 200.0);
    let mut rng = StdRng::seed_from_u64(4);

    for tick in 0..10_000 {
        let x = rng.gen_range(-2000.0..2000.0);
        let y = rng.gen_range(-2000.0..2000.0);
        sim.on_pointer_move(x, y);
        let lattice = sim.tick(tick as f64 * FRAME_MS);
        assert_springs_clamped(lattice, tick);
    }
}

#[test]
fn test_same_inputs_same_lattice() {
    let mut a = WaveSimulation::new(DEFAULT_SEED);
    let mut b = WaveSimulation::new(DEFAULT_SEED);
    a.resize(400.0, 300.0);
    b.resize(400.0, 300.0);

    for tick in 0..120 {
        let p = (tick as f64 * 3.0, 150.0 + (tick as f64 * 0.1).sin() * 100.0);
        a.on_pointer_move(p.0, p.1);
        b.on_pointer_move(p.0, p.1);
        a.tick(tick as f64 * FRAME_MS);
        b.tick(tick as f64 * FRAME_MS);
    }

    assert_eq!(a.lattice(), b.lattice());
}

// ==================== POINTER ====================

#[test]
fn test_first_pointer_event_seeds_smoothed_position() {
    let mut sim = WaveSimulation::new(DEFAULT_SEED);
    sim.resize(800.0, 600.0);
    sim.on_pointer_move(640.0, 420.0);
    assert_eq!(sim.pointer().smoothed(), DVec2::new(640.0, 420.0));

    sim.tick(0.0);

    let pointer = DVec2::new(640.0, 420.0);
    assert_eq!(sim.pointer().smoothed(), pointer);

    // Hover is measured from the pointer, not from the origin
    let radius = sim.influence_radius();
    for p in sim.lattice().points() {
        assert_eq!(p.is_hovered, p.base.distance(pointer) < radius);
    }
    assert!(sim.lattice().points().iter().any(|p| p.is_hovered));
    let origin = sim.lattice().nearest(DVec2::ZERO).unwrap();
    assert!(!sim.lattice().points()[origin].is_hovered);
}

// ==================== SCENARIOS ====================

#[test]
fn test_idle_field_moves_only_with_noise() {
    let mut sim = WaveSimulation::new(DEFAULT_SEED);
    sim.resize(800.0, 600.0);

    let n = sim.lattice().len();
    let mut min_x = vec![f64::INFINITY; n];
    let mut max_x = vec![f64::NEG_INFINITY; n];

    for tick in 0..300 {
        let lattice = sim.tick(tick as f64 * FRAME_MS);
        for (idx, p) in lattice.points().iter().enumerate() {
            assert_eq!(p.spring_offset, DVec2::ZERO);
            assert_eq!(p.spring_velocity, DVec2::ZERO);
            assert!(!p.is_hovered);
            assert!(p.noise_offset.x.abs() <= 32.0 + 1e-9);
            assert!(p.noise_offset.y.abs() <= 16.0 + 1e-9);
            min_x[idx] = min_x[idx].min(p.noise_offset.x);
            max_x[idx] = max_x[idx].max(p.noise_offset.x);
        }
    }

    // Noise animates the field over time
    let moving = (0..n).filter(|&i| max_x[i] - min_x[i] > 0.5).count();
    assert!(moving > n / 2, "only {} of {} points moved", moving, n);
}

#[test]
fn test_single_pointer_pulse() {
    let mut sim = WaveSimulation::new(DEFAULT_SEED);
    sim.resize(200.0, 200.0);
    sim.on_pointer_move(100.0, 100.0);

    let lattice = sim.lattice();
    let centre = lattice.nearest(DVec2::new(100.0, 100.0)).unwrap();
    let corners = [
        lattice.nearest(DVec2::new(0.0, 0.0)).unwrap(),
        lattice.nearest(DVec2::new(200.0, 0.0)).unwrap(),
        lattice.nearest(DVec2::new(0.0, 200.0)).unwrap(),
        lattice.nearest(DVec2::new(200.0, 200.0)).unwrap(),
    ];

    let mut centre_hovered = false;
    let mut centre_peak = 0.0f64;
    let mut corner_peak = 0.0f64;

    for tick in 0..60 {
        let lattice = sim.tick(tick as f64 * FRAME_MS);
        let points = lattice.points();
        centre_hovered |= points[centre].is_hovered;
        centre_peak = centre_peak.max(points[centre].spring_offset.length());
        for &c in &corners {
            corner_peak = corner_peak.max(points[c].spring_offset.length());
        }
    }

    assert!(centre_hovered);
    assert!(centre_peak > 0.0);
    assert!(
        centre_peak > corner_peak,
        "centre {} should exceed corners {}",
        centre_peak,
        corner_peak
    );
}

// ==================== RENDERING CONTRACT ====================

#[test]
fn test_column_paths_anchor_last_point_to_wave() {
    let mut sim = WaveSimulation::new(DEFAULT_SEED);
    sim.resize(400.0, 300.0);
    sim.on_pointer_move(50.0, 50.0);
    sim.on_pointer_move(300.0, 250.0);
    for tick in 0..30 {
        sim.tick(tick as f64 * FRAME_MS);
    }

    let lattice = sim.lattice();
    let paths = trace_columns(lattice);
    assert_eq!(paths.len(), lattice.column_count());

    for (i, path) in paths.iter().enumerate() {
        let column = lattice.column(i);
        let last = column[column.len() - 1];
        assert_eq!(*path.points.last().unwrap(), last.position(false));
        assert_eq!(path.points[0], column[0].position(false));
        assert_eq!(path.points[1], column[0].position(true));
        assert_eq!(path.hovered, column.iter().any(|p| p.is_hovered));
    }
}

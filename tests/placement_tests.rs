// Host-side tests for the pure placement math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod placement {
    include!("../src/core/placement.rs");
}

use constants::*;
use glam::DVec2;
use placement::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn initial_placement_stays_inside_edge_margin() {
    let viewport = Viewport {
        width: 800.0,
        height: 600.0,
    };
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let p = initial_placement(viewport, &mut rng);
        assert!(
            p.position.x >= 50.0 && p.position.x <= 750.0,
            "seed {}: x={} out of [50, 750]",
            seed,
            p.position.x
        );
        assert!(
            p.position.y >= 50.0 && p.position.y <= 550.0,
            "seed {}: y={} out of [50, 550]",
            seed,
            p.position.y
        );
        assert!(
            p.rotation_deg.abs() <= SCATTER_ROTATION_DEG,
            "seed {}: rotation {} out of range",
            seed,
            p.rotation_deg
        );
    }
}

#[test]
fn initial_placement_clusters_around_center() {
    let viewport = Viewport {
        width: 800.0,
        height: 600.0,
    };
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let p = initial_placement(viewport, &mut rng);
        assert!((p.position.x - 400.0).abs() <= SCATTER_RANGE_PX);
        assert!((p.position.y - 300.0).abs() <= SCATTER_RANGE_PX);
    }
}

#[test]
fn initial_placement_degenerate_viewport_does_not_panic() {
    // Narrower than twice the edge margin: min > max, the upper bound wins.
    let viewport = Viewport {
        width: 60.0,
        height: 40.0,
    };
    let mut rng = StdRng::seed_from_u64(7);
    let p = initial_placement(viewport, &mut rng);
    assert_eq!(p.position.x, viewport.width - EDGE_MARGIN_PX);
    assert_eq!(p.position.y, viewport.height - EDGE_MARGIN_PX);
}

#[test]
fn parse_px_reads_pixel_lengths() {
    assert_eq!(parse_px("123px"), 123.0);
    assert_eq!(parse_px("12.5px"), 12.5);
    assert_eq!(parse_px("100"), 100.0);
    assert_eq!(parse_px(" 40px "), 40.0);
    assert_eq!(parse_px("-30px"), -30.0);
}

#[test]
fn parse_px_defaults_to_zero() {
    assert_eq!(parse_px(""), 0.0);
    assert_eq!(parse_px("px"), 0.0);
    assert_eq!(parse_px("abc"), 0.0);
    assert_eq!(parse_px("12em"), 0.0);
}

#[test]
fn jitter_step_keeps_bounding_box_inside_viewport() {
    let viewport = Viewport {
        width: 800.0,
        height: 600.0,
    };
    let size = DVec2::new(100.0, 80.0);

    // Pushed past the far corner: clamps to viewport minus element size
    let next = jitter_step(DVec2::new(798.0, 598.0), DVec2::new(5.0, 5.0), viewport, size);
    assert_eq!(next, DVec2::new(700.0, 520.0));

    // Pushed past the origin: clamps to zero
    let next = jitter_step(DVec2::new(1.0, 1.0), DVec2::new(-5.0, -5.0), viewport, size);
    assert_eq!(next, DVec2::ZERO);

    // Well inside: the step applies unchanged
    let next = jitter_step(DVec2::new(300.0, 200.0), DVec2::new(3.0, -4.0), viewport, size);
    assert_eq!(next, DVec2::new(303.0, 196.0));
}

#[test]
fn jitter_step_random_walk_never_escapes() {
    let viewport = Viewport {
        width: 800.0,
        height: 600.0,
    };
    let size = DVec2::new(120.0, 90.0);
    let mut rng = StdRng::seed_from_u64(42);
    let mut pos = DVec2::new(400.0, 300.0);
    for _ in 0..2000 {
        pos = jitter_step(pos, jitter_vector(&mut rng), viewport, size);
        assert!(pos.x >= 0.0 && pos.x <= viewport.width - size.x);
        assert!(pos.y >= 0.0 && pos.y <= viewport.height - size.y);
    }
}

#[test]
fn jitter_vector_stays_within_step_range() {
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..500 {
        let v = jitter_vector(&mut rng);
        assert!(v.x.abs() <= JITTER_STEP_PX);
        assert!(v.y.abs() <= JITTER_STEP_PX);
    }
}

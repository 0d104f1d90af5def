// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(SCATTER_RANGE_PX > 0.0);
    assert!(SCATTER_ROTATION_DEG > 0.0);
    assert!(EDGE_MARGIN_PX > 0.0);
    assert!(JITTER_STEP_PX > 0.0);
    assert!(JITTER_TICK_MS > 0);
    assert!(MOTION_DURATION_MS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // A single jitter step should never be able to jump the edge margin
    assert!(JITTER_STEP_PX < EDGE_MARGIN_PX);

    // The burst outlives many ticks
    assert!(MOTION_DURATION_MS > JITTER_TICK_MS);
    assert!(MOTION_DURATION_MS % JITTER_TICK_MS == 0);

    // Scattering reaches beyond the edge margin, so clamping is meaningful
    assert!(SCATTER_RANGE_PX > EDGE_MARGIN_PX);
}

use super::constants::{EDGE_MARGIN_PX, JITTER_STEP_PX, SCATTER_RANGE_PX, SCATTER_ROTATION_DEG};
use glam::DVec2;
use rand::Rng;

/// Viewport dimensions in CSS pixels, read once at startup.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Initial placement of a picture: top-left anchored position (paired with a
/// centering transform) plus a one-time rotation.
#[derive(Clone, Copy, Debug)]
pub struct Placement {
    pub position: DVec2,
    pub rotation_deg: f64,
}

// Saturating clamp. Unlike `f64::clamp` this never panics when the viewport
// is too small for the margins (min > max); the upper bound wins.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Parse a CSS pixel length such as "123px". Unset or malformed input
/// defaults to 0 rather than signaling failure.
#[inline]
pub fn parse_px(raw: &str) -> f64 {
    raw.trim()
        .trim_end_matches("px")
        .parse::<f64>()
        .unwrap_or(0.0)
}

/// Scatter a picture around the viewport center: random offset within
/// ±`SCATTER_RANGE_PX` per axis, rotation within ±`SCATTER_ROTATION_DEG`,
/// position clamped to keep at least `EDGE_MARGIN_PX` from every edge.
pub fn initial_placement(viewport: Viewport, rng: &mut impl Rng) -> Placement {
    let offset_x = rng.gen_range(-SCATTER_RANGE_PX..=SCATTER_RANGE_PX);
    let offset_y = rng.gen_range(-SCATTER_RANGE_PX..=SCATTER_RANGE_PX);
    let rotation_deg = rng.gen_range(-SCATTER_ROTATION_DEG..=SCATTER_ROTATION_DEG);

    let x = clamp(
        viewport.width / 2.0 + offset_x,
        EDGE_MARGIN_PX,
        viewport.width - EDGE_MARGIN_PX,
    );
    let y = clamp(
        viewport.height / 2.0 + offset_y,
        EDGE_MARGIN_PX,
        viewport.height - EDGE_MARGIN_PX,
    );

    Placement {
        position: DVec2::new(x, y),
        rotation_deg,
    }
}

/// Random per-tick displacement within ±`JITTER_STEP_PX` per axis.
#[inline]
pub fn jitter_vector(rng: &mut impl Rng) -> DVec2 {
    DVec2::new(
        rng.gen_range(-JITTER_STEP_PX..=JITTER_STEP_PX),
        rng.gen_range(-JITTER_STEP_PX..=JITTER_STEP_PX),
    )
}

/// Apply a jitter displacement, keeping the picture's bounding box fully
/// inside the viewport. Tighter than the initial edge margin, and unlike
/// free-drag this path is always clamped.
pub fn jitter_step(
    current: DVec2,
    step: DVec2,
    viewport: Viewport,
    element_size: DVec2,
) -> DVec2 {
    DVec2::new(
        clamp(current.x + step.x, 0.0, viewport.width - element_size.x),
        clamp(current.y + step.y, 0.0, viewport.height - element_size.y),
    )
}

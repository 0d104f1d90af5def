// Shared placement/motion tuning constants used by the web frontend.

// Initial scatter
pub const SCATTER_RANGE_PX: f64 = 100.0; // offset from viewport center, per axis
pub const SCATTER_ROTATION_DEG: f64 = 25.0; // rotation range, symmetric about 0
pub const EDGE_MARGIN_PX: f64 = 50.0; // min distance from every viewport edge

// Jitter burst
pub const JITTER_STEP_PX: f64 = 5.0; // per-tick displacement range, per axis
pub const JITTER_TICK_MS: i32 = 100; // tick period per picture
pub const MOTION_DURATION_MS: i32 = 5000; // session length before expiry fires

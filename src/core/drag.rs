use glam::DVec2;

/// Ephemeral per-drag state. At most one drag is active at a time; the
/// previous touch coordinate lives here so touch deltas from a later drag
/// never see a stale sample.
#[derive(Default, Clone, Copy, Debug)]
pub struct DragSession {
    previous_touch: Option<DVec2>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mouse moves report their own instantaneous delta.
    #[inline]
    pub fn pointer_delta(movement: DVec2) -> DVec2 {
        movement
    }

    /// Touch moves only report absolute coordinates; the delta is the
    /// difference from the previously recorded sample. The first sample of a
    /// drag yields no displacement.
    pub fn touch_delta(&mut self, touch: DVec2) -> DVec2 {
        let delta = match self.previous_touch {
            Some(prev) => touch - prev,
            None => DVec2::ZERO,
        };
        self.previous_touch = Some(touch);
        delta
    }

    /// Clear the recorded touch coordinate. Safe to call when no touch was
    /// ever recorded.
    pub fn release(&mut self) {
        self.previous_touch = None;
    }
}

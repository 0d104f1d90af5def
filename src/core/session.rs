/// What the caller must do after a toggle: spawn tick timers and schedule
/// the expiry, or cancel the pending expiry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    Started,
    Stopped,
}

/// Motion session state machine: {Inactive, Active}, initially Inactive.
///
/// The flag is owned by a single controller and shared by handle with the
/// per-picture tick timers, which self-cancel cooperatively on their next
/// firing once the flag flips to Inactive.
#[derive(Default, Clone, Copy, Debug)]
pub struct MotionSession {
    active: bool,
}

impl MotionSession {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn start(&mut self) {
        self.active = true;
    }

    /// Idempotent: stopping an inactive session changes nothing.
    pub fn stop(&mut self) {
        self.active = false;
    }

    /// The expiry timer's transition. Mirrors `stop`'s flag change; the
    /// firing timer is its own cancellation so nothing else is cleared.
    pub fn expire(&mut self) {
        self.active = false;
    }

    pub fn toggle(&mut self) -> ToggleAction {
        if self.active {
            self.stop();
            ToggleAction::Stopped
        } else {
            self.start();
            ToggleAction::Started
        }
    }
}

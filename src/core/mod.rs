pub mod constants;
pub mod drag;
pub mod placement;
pub mod session;

pub use constants::*;
pub use drag::DragSession;
pub use placement::{initial_placement, jitter_step, jitter_vector, parse_px, Placement, Viewport};
pub use session::{MotionSession, ToggleAction};

mod drag;

pub use drag::wire_drag_handlers;

use crate::core::{
    jitter_step, jitter_vector, MotionSession, ToggleAction, Viewport, JITTER_TICK_MS,
    MOTION_DURATION_MS,
};
use crate::dom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Owns the motion session flag, the picture handles, and the pending
/// timers. Toggled from the play button.
pub struct MotionController {
    session: Rc<RefCell<MotionSession>>,
    pictures: Vec<web::HtmlElement>,
    viewport: Viewport,
    expiry_handle: Option<i32>,
    tick_handles: Vec<i32>,
}

impl MotionController {
    pub fn new(pictures: Vec<web::HtmlElement>, viewport: Viewport) -> Self {
        Self {
            session: Rc::new(RefCell::new(MotionSession::new())),
            pictures,
            viewport,
            expiry_handle: None,
            tick_handles: Vec::new(),
        }
    }

    /// Start the jitter burst (and its 5s expiry) or stop an active one.
    pub fn toggle(&mut self) {
        let action = self.session.borrow_mut().toggle();
        match action {
            ToggleAction::Started => {
                log::info!("[motion] burst started");
                // An expired burst's ticks may still be pending their final
                // firing; clear them so a quick restart cannot double the
                // timers per picture.
                self.clear_tick_timers();
                for picture in &self.pictures {
                    if let Some(id) =
                        spawn_jitter_timer(self.session.clone(), picture.clone(), self.viewport)
                    {
                        self.tick_handles.push(id);
                    }
                }
                self.schedule_expiry();
            }
            ToggleAction::Stopped => {
                log::info!("[motion] burst stopped");
                self.clear_tick_timers();
                self.cancel_expiry();
            }
        }
    }

    fn schedule_expiry(&mut self) {
        let Some(window) = web::window() else {
            return;
        };
        let session = self.session.clone();
        // The firing timer is its own cancellation; it only flips the flag.
        let closure = Closure::wrap(Box::new(move || {
            log::info!("[motion] burst expired");
            session.borrow_mut().expire();
        }) as Box<dyn FnMut()>);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            MOTION_DURATION_MS,
        ) {
            Ok(handle) => self.expiry_handle = Some(handle),
            Err(e) => log::error!("expiry timer error: {:?}", e),
        }
        closure.forget();
    }

    fn cancel_expiry(&mut self) {
        if let Some(handle) = self.expiry_handle.take() {
            if let Some(window) = web::window() {
                window.clear_timeout_with_handle(handle);
            }
        }
    }

    // Eager cancellation; clearing an interval that already cancelled
    // itself is harmless.
    fn clear_tick_timers(&mut self) {
        if let Some(window) = web::window() {
            for handle in self.tick_handles.drain(..) {
                window.clear_interval_with_handle(handle);
            }
        } else {
            self.tick_handles.clear();
        }
    }
}

// Each picture gets its own 100ms tick. Ticks check the shared flag and
// clear their own interval once it flips (the expiry timer only flips the
// flag), so an expired burst has up to one tick of lag before full
// cessation; an explicit stop clears the handles eagerly.
fn spawn_jitter_timer(
    session: Rc<RefCell<MotionSession>>,
    picture: web::HtmlElement,
    viewport: Viewport,
) -> Option<i32> {
    let window = web::window()?;
    let handle = Rc::new(Cell::new(0));
    let handle_for_tick = handle.clone();
    let mut rng = StdRng::from_entropy();

    let closure = Closure::wrap(Box::new(move || {
        if !session.borrow().is_active() {
            if let Some(w) = web::window() {
                w.clear_interval_with_handle(handle_for_tick.get());
            }
            return;
        }
        let current = dom::position_of(&picture);
        let next = jitter_step(
            current,
            jitter_vector(&mut rng),
            viewport,
            dom::element_size(&picture),
        );
        dom::set_position(&picture, next);
    }) as Box<dyn FnMut()>);

    let registered = window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        JITTER_TICK_MS,
    );
    closure.forget();
    match registered {
        Ok(id) => {
            handle.set(id);
            Some(id)
        }
        Err(e) => {
            log::error!("jitter timer error: {:?}", e);
            None
        }
    }
}

use crate::constants::{LABEL_PAUSE, LABEL_PLAY};
use crate::motion::MotionController;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wire the play/pause button: each activation inverts the audio element's
/// paused state, relabels the button to match, and toggles the motion
/// session exactly once.
///
/// Audio and motion state are deliberately decoupled: a session that ends
/// by expiry leaves the audio playing, so the next press pauses it while
/// starting a fresh burst.
pub fn wire_play_button(
    button: &web::HtmlElement,
    audio: web::HtmlAudioElement,
    motion: Rc<RefCell<MotionController>>,
) {
    let label = button.clone();
    let closure = Closure::wrap(Box::new(move || {
        if audio.paused() {
            if let Err(e) = audio.play() {
                log::error!("audio play error: {:?}", e);
            }
            label.set_text_content(Some(LABEL_PAUSE));
        } else {
            if let Err(e) = audio.pause() {
                log::error!("audio pause error: {:?}", e);
            }
            label.set_text_content(Some(LABEL_PLAY));
        }
        motion.borrow_mut().toggle();
    }) as Box<dyn FnMut()>);
    _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

use crate::core::DragSession;
use crate::dom;
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The picture currently being dragged plus its touch-delta state. `None`
/// between a release and the next press.
struct ActiveDrag {
    target: web::HtmlElement,
    session: DragSession,
}

type DragCell = Rc<RefCell<Option<ActiveDrag>>>;

/// Register press-start listeners on each picture and shared move/release
/// listeners at the document scope.
///
/// Move and release live on the document so a drag keeps tracking when the
/// pointer outruns the picture's bounds. The listeners are permanent and
/// gated on the drag cell: moves with no active drag are ignored, and a
/// release with no active drag is a no-op. One drag at a time; a press
/// while another picture is held is ignored.
pub fn wire_drag_handlers(document: &web::Document, pictures: &[web::HtmlElement]) {
    let active: DragCell = Rc::new(RefCell::new(None));

    for picture in pictures {
        wire_press_start(picture, &active);
    }
    wire_document_move(document, &active);
    wire_document_release(document, &active);
}

fn begin_drag(active: &DragCell, target: &web::HtmlElement) {
    let mut cell = active.borrow_mut();
    if cell.is_some() {
        return;
    }
    log::info!("[drag] begin");
    *cell = Some(ActiveDrag {
        target: target.clone(),
        session: DragSession::new(),
    });
}

fn end_drag(active: &DragCell) {
    if let Some(mut drag) = active.borrow_mut().take() {
        drag.session.release();
        log::info!("[drag] end");
    }
}

// Free-drag is unclamped; the picture may be pulled outside the viewport.
fn nudge(target: &web::HtmlElement, delta: DVec2) {
    dom::set_position(target, dom::position_of(target) + delta);
}

fn wire_press_start(picture: &web::HtmlElement, active: &DragCell) {
    {
        let active = active.clone();
        let target = picture.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
            begin_drag(&active, &target);
        }) as Box<dyn FnMut(_)>);
        _ = picture
            .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let active = active.clone();
        let target = picture.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
            begin_drag(&active, &target);
        }) as Box<dyn FnMut(_)>);
        _ = picture
            .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn wire_document_move(document: &web::Document, active: &DragCell) {
    {
        let active = active.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            if let Some(drag) = active.borrow_mut().as_mut() {
                let movement = DVec2::new(ev.movement_x() as f64, ev.movement_y() as f64);
                nudge(&drag.target, DragSession::pointer_delta(movement));
            }
        }) as Box<dyn FnMut(_)>);
        _ = document
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let active = active.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            if let Some(drag) = active.borrow_mut().as_mut() {
                if let Some(touch) = ev.touches().get(0) {
                    let point = DVec2::new(touch.client_x() as f64, touch.client_y() as f64);
                    let delta = drag.session.touch_delta(point);
                    nudge(&drag.target, delta);
                }
            }
        }) as Box<dyn FnMut(_)>);
        _ = document
            .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn wire_document_release(document: &web::Document, active: &DragCell) {
    for event in ["mouseup", "touchend"] {
        let active = active.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
            end_drag(&active);
        }) as Box<dyn FnMut(_)>);
        _ = document.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

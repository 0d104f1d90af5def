use crate::core::{parse_px, Placement, Viewport};
use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Viewport dimensions in CSS pixels. Read once at startup; the page does
/// not react to resizes.
pub fn viewport_size(window: &web::Window) -> anyhow::Result<Viewport> {
    let width = window
        .inner_width()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .as_f64()
        .ok_or_else(|| anyhow::anyhow!("innerWidth is not a number"))?;
    let height = window
        .inner_height()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .as_f64()
        .ok_or_else(|| anyhow::anyhow!("innerHeight is not a number"))?;
    Ok(Viewport { width, height })
}

/// Collect the draggable pictures by class selector.
pub fn query_pictures(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let mut pictures = Vec::new();
    if let Ok(nodes) = document.query_selector_all(selector) {
        for i in 0..nodes.length() {
            if let Some(el) = nodes
                .get(i)
                .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
            {
                pictures.push(el);
            }
        }
    }
    pictures
}

/// Current inline position, parsed from `left`/`top`. Unset or malformed
/// values read as 0.
pub fn position_of(el: &web::HtmlElement) -> DVec2 {
    let style = el.style();
    let left = style.get_property_value("left").unwrap_or_default();
    let top = style.get_property_value("top").unwrap_or_default();
    DVec2::new(parse_px(&left), parse_px(&top))
}

pub fn set_position(el: &web::HtmlElement, position: DVec2) {
    let style = el.style();
    _ = style.set_property("left", &format!("{}px", position.x));
    _ = style.set_property("top", &format!("{}px", position.y));
}

/// Apply an initial placement: position plus the one-time centering
/// transform and rotation.
pub fn apply_placement(el: &web::HtmlElement, placement: &Placement) {
    set_position(el, placement.position);
    _ = el.style().set_property(
        "transform",
        &format!(
            "translate(-50%, -50%) rotate({}deg)",
            placement.rotation_deg
        ),
    );
}

/// Rendered size of a picture, for keeping its bounding box inside the
/// viewport during the jitter burst.
#[inline]
pub fn element_size(el: &web::HtmlElement) -> DVec2 {
    DVec2::new(el.client_width() as f64, el.client_height() as f64)
}

#![cfg(target_arch = "wasm32")]
use crate::constants::{AUDIO_ID, PICTURE_SELECTOR, PLAY_BUTTON_ID};
use crate::core::initial_placement;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod motion;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scatter-wall starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Read once; the wall does not react to resizes.
    let viewport = dom::viewport_size(&window)?;

    let pictures = dom::query_pictures(&document, PICTURE_SELECTOR);
    if pictures.is_empty() {
        log::warn!("no '{}' elements found", PICTURE_SELECTOR);
    }

    // Scatter the pictures around the viewport center, then make them
    // draggable.
    let mut rng = StdRng::from_entropy();
    for picture in &pictures {
        let placement = initial_placement(viewport, &mut rng);
        dom::apply_placement(picture, &placement);
    }
    events::wire_drag_handlers(&document, &pictures);
    log::info!("[init] placed {} pictures", pictures.len());

    let button = document
        .get_element_by_id(PLAY_BUTTON_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", PLAY_BUTTON_ID))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let audio_el = document
        .get_element_by_id(AUDIO_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", AUDIO_ID))?
        .dyn_into::<web::HtmlAudioElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let controller = Rc::new(RefCell::new(motion::MotionController::new(
        pictures, viewport,
    )));
    audio::wire_play_button(&button, audio_el, controller);

    Ok(())
}

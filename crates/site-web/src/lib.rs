#![cfg(target_arch = "wasm32")]

mod audio;
mod carousel;
mod confetti;
mod dom;
mod events;
mod frame;
mod hero;
mod modal;
mod observer;
mod rsvp;

use std::cell::RefCell;
use std::rc::Rc;

use instant::Instant;
use site_core::{ButterflyMotion, Viewport};
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // The scroll story always starts from the top.
    window.scroll_to_with_x_and_y(0.0, 0.0);

    let size = dom::viewport_size(&window);
    let mut viewport = Viewport::new(size.x, size.y);
    let (scroll_y, scroll_height) = dom::scroll_metrics(&window, &document);
    viewport.scroll_y = scroll_y;
    viewport.scroll_height = scroll_height;
    let controller = Rc::new(RefCell::new(ButterflyMotion::new(viewport)));

    let butterfly = dom::element_by_id(&document, "butterfly")
        .ok_or_else(|| anyhow::anyhow!("missing #butterfly"))?;

    events::wire_scroll(controller.clone());
    events::wire_resize(controller.clone());
    events::wire_escape_closes_modals(&document);
    observer::observe_envelope(&document, controller.clone());
    observer::observe_reveals(&document);
    audio::wire_music_player(&document);
    hero::wire_hero_rotation(&document);
    rsvp::wire_rsvp(&document);

    // The envelope opens the letter; its close button puts it away.
    {
        let doc = document.clone();
        dom::add_click_listener(&document, "envelope-button", move || {
            modal::open(&doc, modal::INVITATION_MODAL_ID);
        });
        let doc = document.clone();
        dom::add_click_listener(&document, "invitation-close", move || {
            modal::close(&doc, modal::INVITATION_MODAL_ID);
        });
    }

    let carousel = carousel::wire_carousel(&document);

    let ctx = frame::FrameContext {
        controller,
        butterfly,
        carousel,
        document,
        last_instant: Instant::now(),
    };
    let frame_loop = frame::FrameLoop::start(ctx);
    events::wire_teardown(frame_loop);

    Ok(())
}

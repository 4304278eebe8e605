use std::cell::RefCell;
use std::rc::Rc;

use site_core::{CarouselStrip, CAROUSEL_SPEED_PX_PER_SEC};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

pub struct CarouselWiring {
    pub strip: Rc<RefCell<CarouselStrip>>,
    pub track: web::HtmlElement,
}

/// Set up the looping photo strip: count the rendered items (the markup holds
/// two copies of the image list), wire hover/touch pause and per-image
/// fallbacks. The frame loop advances the strip and writes the transform.
pub fn wire_carousel(document: &web::Document) -> Option<CarouselWiring> {
    let track = dom::element_by_id(document, "carousel-track")?;
    let viewport = dom::element_by_id(document, "carousel-viewport")?;

    let rendered = document
        .query_selector_all("#carousel-track .carousel-item")
        .ok()?;
    let item_count = rendered.length() as usize / 2;
    if item_count == 0 {
        log::warn!("[carousel] no items in #carousel-track");
        return None;
    }

    let strip = Rc::new(RefCell::new(CarouselStrip::new(
        item_count,
        CAROUSEL_SPEED_PX_PER_SEC,
    )));

    for (event, paused) in [
        ("mouseenter", true),
        ("mouseleave", false),
        ("touchstart", true),
        ("touchend", false),
    ] {
        let strip = strip.clone();
        let closure = Closure::wrap(Box::new(move || {
            strip.borrow_mut().set_paused(paused);
        }) as Box<dyn FnMut()>);
        let _ = viewport.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    wire_image_fallbacks(document);

    Some(CarouselWiring { strip, track })
}

/// A photo that fails to load flips its item to the styled placeholder
/// instead of showing a broken image.
fn wire_image_fallbacks(document: &web::Document) {
    let Ok(images) = document.query_selector_all("#carousel-track img") else {
        return;
    };
    for i in 0..images.length() {
        let Some(img) = images.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let item = img.parent_element();
        let closure = Closure::wrap(Box::new(move || {
            if let Some(item) = &item {
                let _ = item.class_list().add_1("show-placeholder");
            }
        }) as Box<dyn FnMut()>);
        let _ = img.add_event_listener_with_callback("error", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

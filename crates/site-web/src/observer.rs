use std::cell::RefCell;
use std::rc::Rc;

use site_core::{ButterflyMotion, ENVELOPE_VIEW_FRACTION};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::dom;

const ENVELOPE_SECTION_ID: &str = "invitation-envelope";

/// Watch the envelope section and feed its (raw) visibility into the
/// controller's landing latch. The latch applies the debounce; this side only
/// reports threshold crossings.
pub fn observe_envelope(document: &web::Document, controller: Rc<RefCell<ButterflyMotion>>) {
    let Some(section) = document.get_element_by_id(ENVELOPE_SECTION_ID) else {
        log::warn!(
            "[landing] missing #{}; butterfly never lands",
            ENVELOPE_SECTION_ID
        );
        return;
    };

    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            let now_ms = dom::now_ms();
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let in_view = entry.is_intersecting()
                    && entry.intersection_ratio() >= ENVELOPE_VIEW_FRACTION;
                controller.borrow_mut().set_section_in_view(in_view, now_ms);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&js_sys::Array::of1(&JsValue::from_f64(
        ENVELOPE_VIEW_FRACTION,
    )));
    match web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(&section);
            closure.forget();
        }
        Err(e) => log::error!("[landing] IntersectionObserver error: {:?}", e),
    }
}

/// One-shot reveal: elements marked `data-reveal` get the `is-visible` class
/// the first time enough of them scrolls into view, then stop being observed.
pub fn observe_reveals(document: &web::Document) {
    let Ok(nodes) = document.query_selector_all("[data-reveal]") else {
        return;
    };
    if nodes.length() == 0 {
        return;
    }

    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1("is-visible");
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&js_sys::Array::of1(&JsValue::from_f64(
        ENVELOPE_VIEW_FRACTION,
    )));
    match web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            for i in 0..nodes.length() {
                if let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                    observer.observe(&el);
                }
            }
            closure.forget();
        }
        Err(e) => log::error!("[reveal] IntersectionObserver error: {:?}", e),
    }
}

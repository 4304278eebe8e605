use std::cell::RefCell;
use std::rc::Rc;

use site_core::ButterflyMotion;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::frame::FrameLoop;
use crate::modal;

/// Feed every scroll sample into the motion controller. The controller only
/// stores the raw measurement; smoothing happens in the frame loop.
pub fn wire_scroll(controller: Rc<RefCell<ButterflyMotion>>) {
    let closure = Closure::wrap(Box::new(move || {
        if let (Some(w), Some(d)) = (web::window(), dom::window_document()) {
            let (scroll_y, scroll_height) = dom::scroll_metrics(&w, &d);
            controller.borrow_mut().set_scroll(scroll_y, scroll_height);
        }
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        let _ = w.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Resize re-measures the viewport (the controller re-centers its horizontal
/// channel) and refreshes the scroll metrics, which change with layout.
pub fn wire_resize(controller: Rc<RefCell<ButterflyMotion>>) {
    let closure = Closure::wrap(Box::new(move || {
        if let (Some(w), Some(d)) = (web::window(), dom::window_document()) {
            let size = dom::viewport_size(&w);
            let (scroll_y, scroll_height) = dom::scroll_metrics(&w, &d);
            let mut motion = controller.borrow_mut();
            motion.resize(size.x, size.y);
            motion.set_scroll(scroll_y, scroll_height);
        }
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        let _ = w.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

pub fn wire_escape_closes_modals(document: &web::Document) {
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.key() == "Escape" {
            modal::close_all(&doc);
        }
    }) as Box<dyn FnMut(_)>);
    let _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Cancel the pending frame request when the page goes away; a dangling
/// callback after teardown is a resource leak.
pub fn wire_teardown(frame_loop: FrameLoop) {
    let closure = Closure::wrap(Box::new(move || {
        frame_loop.stop();
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        let _ = w.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

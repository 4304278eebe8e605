use std::cell::{Cell, RefCell};
use std::rc::Rc;

use instant::Instant;
use site_core::{ButterflyMotion, FlightPhase};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::carousel::CarouselWiring;
use crate::dom;

// The invitation heading the butterfly lands next to.
const LANDING_ANCHOR_ID: &str = "youre-invited-title";

pub struct FrameContext {
    pub controller: Rc<RefCell<ButterflyMotion>>,
    pub butterfly: web::HtmlElement,
    pub carousel: Option<CarouselWiring>,
    pub document: web::Document,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32();

        // The anchor is re-resolved every frame; it moves on resize and may
        // be absent entirely, in which case the controller keeps flying.
        let anchor = dom::anchor_rect(&self.document, LANDING_ANCHOR_ID);
        let sample = self
            .controller
            .borrow_mut()
            .step(dt_sec, dom::now_ms(), anchor.as_ref());
        dom::apply_motion_transform(&self.butterfly, &sample);

        // The wing-flutter animation in CSS pauses while landed.
        let landed = self.controller.borrow().phase() == FlightPhase::Landed;
        let _ = self
            .butterfly
            .set_attribute("data-landed", if landed { "1" } else { "0" });

        if let Some(carousel) = &self.carousel {
            let mut strip = carousel.strip.borrow_mut();
            strip.advance(dt_sec);
            let _ = carousel.track.style().set_property(
                "transform",
                &format!("translateX({:.1}px)", strip.translate_x()),
            );
        }
    }
}

/// Owner of the requestAnimationFrame recursion. `stop` cancels the pending
/// frame request and drops the tick closure; without that the callback would
/// keep firing after teardown.
#[derive(Clone)]
pub struct FrameLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    pub fn start(ctx: FrameContext) -> Self {
        let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let raf_for_tick = raf_id.clone();
        let tick_clone = tick.clone();
        let mut ctx = ctx;
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            ctx.frame();
            if let Some(w) = web::window() {
                if let Some(cb) = tick_clone.borrow().as_ref() {
                    match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                        Ok(id) => raf_for_tick.set(Some(id)),
                        Err(e) => log::error!("request_animation_frame error: {:?}", e),
                    }
                }
            }
        }) as Box<dyn FnMut()>));

        let frame_loop = Self { raf_id, tick };
        if let Some(w) = web::window() {
            if let Some(cb) = frame_loop.tick.borrow().as_ref() {
                if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    frame_loop.raf_id.set(Some(id));
                }
            }
        }
        frame_loop
    }

    pub fn stop(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
    }
}

use glam::Vec2;
use site_core::{AnchorRect, MotionSample};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn element_by_id(document: &web::Document, element_id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// CSS viewport size in px.
pub fn viewport_size(window: &web::Window) -> Vec2 {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Vec2::new(width as f32, height as f32)
}

/// Current scroll offset and total document scroll height.
pub fn scroll_metrics(window: &web::Window, document: &web::Document) -> (f32, f32) {
    let scroll_y = window.scroll_y().unwrap_or(0.0) as f32;
    let scroll_height = document
        .document_element()
        .map(|el| el.scroll_height())
        .unwrap_or(0) as f32;
    (scroll_y, scroll_height)
}

/// Bounding rectangle of an element as a platform-free `AnchorRect`.
/// `None` when the element is not (or not yet) in the DOM.
pub fn anchor_rect(document: &web::Document, element_id: &str) -> Option<AnchorRect> {
    let rect = document.get_element_by_id(element_id)?.get_bounding_client_rect();
    Some(AnchorRect {
        left: rect.left() as f32,
        top: rect.top() as f32,
        width: rect.width() as f32,
        height: rect.height() as f32,
    })
}

pub fn now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Write the four motion channels onto the fixed-position element. The
/// translate(-50%, -50%) keeps left/top addressing the element's center.
pub fn apply_motion_transform(el: &web::HtmlElement, sample: &MotionSample) {
    let style = el.style();
    let _ = style.set_property("left", &format!("{:.1}px", sample.pos.x));
    let _ = style.set_property("top", &format!("{:.1}px", sample.pos.y));
    let _ = style.set_property(
        "transform",
        &format!(
            "translate(-50%, -50%) rotate({:.2}deg) scale({:.3})",
            sample.rotation_deg, sample.scale
        ),
    );
}

pub fn set_timeout(ms: i32, handler: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let closure = Closure::once_into_js(handler);
        let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.unchecked_ref(),
            ms,
        );
    }
}

/// Resolve after `ms`, off a plain `setTimeout`.
pub async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(w) = web::window() {
            let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

pub fn input_value(document: &web::Document, element_id: &str) -> String {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

pub fn select_value(document: &web::Document, element_id: &str) -> String {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlSelectElement>().ok())
        .map(|select| select.value())
        .unwrap_or_default()
}

pub fn textarea_value(document: &web::Document, element_id: &str) -> String {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlTextAreaElement>().ok())
        .map(|area| area.value())
        .unwrap_or_default()
}

pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

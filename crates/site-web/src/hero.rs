use site_core::HERO_CROSSFADE_MS;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use crate::dom;

/// Two stacked hero videos taking turns: when the visible one ends, the other
/// starts from the top and a CSS crossfade swaps them.
pub fn wire_hero_rotation(document: &web::Document) {
    let Some(front) = media(document, "hero-video-a") else {
        log::warn!("[hero] missing #hero-video-a");
        return;
    };
    let Some(back) = media(document, "hero-video-b") else {
        log::warn!("[hero] missing #hero-video-b");
        return;
    };

    play_silently(&front);
    wire_ended(front.clone(), back.clone());
    wire_ended(back, front);
}

fn media(document: &web::Document, element_id: &str) -> Option<web::HtmlMediaElement> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlMediaElement>().ok())
}

fn play_silently(el: &web::HtmlMediaElement) {
    if let Ok(promise) = el.play() {
        spawn_local(async move {
            // Autoplay rejection leaves the poster frame showing.
            let _ = JsFuture::from(promise).await;
        });
    }
}

fn wire_ended(finished: web::HtmlMediaElement, next: web::HtmlMediaElement) {
    let target = finished.clone();
    let closure = Closure::wrap(Box::new(move || {
        next.set_current_time(0.0);
        play_silently(&next);
        let _ = finished.class_list().add_1("is-hidden");
        let _ = next.class_list().remove_1("is-hidden");

        // Once the crossfade is over, rewind the retired video for its next turn.
        let rewind = finished.clone();
        dom::set_timeout(HERO_CROSSFADE_MS, move || rewind.set_current_time(0.0));
    }) as Box<dyn FnMut()>);
    let _ = target.add_event_listener_with_callback("ended", closure.as_ref().unchecked_ref());
    closure.forget();
}

use site_core::MUSIC_PROMPT_HIDE_MS;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use crate::dom;

/// Looping background music behind a single toggle button. Autoplay policy
/// may reject `play()`; the rejection is swallowed and the player stays
/// stopped.
pub fn wire_music_player(document: &web::Document) {
    let Some(audio) = document
        .get_element_by_id("wedding-audio")
        .and_then(|el| el.dyn_into::<web::HtmlMediaElement>().ok())
    else {
        log::warn!("[music] missing #wedding-audio");
        return;
    };
    let Some(button) = dom::element_by_id(document, "music-toggle") else {
        log::warn!("[music] missing #music-toggle");
        return;
    };

    // The "play music" bubble retires on its own after a few seconds.
    {
        let doc = document.clone();
        dom::set_timeout(MUSIC_PROMPT_HIDE_MS, move || hide_prompt(&doc));
    }

    let doc = document.clone();
    let button_in_click = button.clone();
    let closure = Closure::wrap(Box::new(move || {
        hide_prompt(&doc);
        if audio.paused() {
            let _ = button_in_click.set_attribute("data-playing", "1");
            match audio.play() {
                Ok(promise) => {
                    let button = button_in_click.clone();
                    spawn_local(async move {
                        if JsFuture::from(promise).await.is_err() {
                            log::warn!("[music] playback rejected");
                            let _ = button.set_attribute("data-playing", "0");
                        }
                    });
                }
                Err(e) => {
                    log::warn!("[music] play error: {:?}", e);
                    let _ = button_in_click.set_attribute("data-playing", "0");
                }
            }
        } else {
            let _ = audio.pause();
            let _ = button_in_click.set_attribute("data-playing", "0");
        }
    }) as Box<dyn FnMut()>);
    let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn hide_prompt(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("music-prompt") {
        let _ = el.set_attribute("style", "display:none");
    }
}

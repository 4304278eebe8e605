use site_core::rsvp::{Attendance, FieldErrors, RsvpForm};
use site_core::RSVP_SUBMIT_DELAY_MS;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use crate::confetti;
use crate::dom;
use crate::modal;

/// Wire the RSVP modal: open/close buttons, the attendance-dependent guest
/// row, field-error clearing and the submit flow with its simulated
/// round-trip.
pub fn wire_rsvp(document: &web::Document) {
    {
        let doc = document.clone();
        dom::add_click_listener(document, "open-rsvp", move || {
            modal::close(&doc, modal::INVITATION_MODAL_ID);
            modal::open(&doc, modal::RSVP_MODAL_ID);
        });
    }
    {
        let doc = document.clone();
        dom::add_click_listener(document, "rsvp-close", move || {
            modal::close(&doc, modal::RSVP_MODAL_ID);
        });
    }
    {
        let doc = document.clone();
        dom::add_click_listener(document, "rsvp-success-close", move || {
            modal::close(&doc, modal::RSVP_MODAL_ID);
        });
    }

    wire_attendance_toggle(document);
    wire_error_clearing(document);
    wire_submit(document);
}

fn read_form(document: &web::Document) -> RsvpForm {
    RsvpForm {
        full_name: dom::input_value(document, "rsvp-name"),
        email: dom::input_value(document, "rsvp-email"),
        attendance: checked_attendance(document),
        guest_count: dom::select_value(document, "rsvp-guests").parse().unwrap_or(1),
        message: dom::textarea_value(document, "rsvp-message"),
    }
}

fn checked_attendance(document: &web::Document) -> Option<Attendance> {
    document
        .query_selector("input[name='attendance']:checked")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        .and_then(|input| Attendance::from_value(&input.value()))
}

fn render_errors(document: &web::Document, errors: &FieldErrors) {
    let message = |e: Option<site_core::rsvp::FieldError>| e.map(|e| e.to_string()).unwrap_or_default();
    dom::set_text(document, "rsvp-name-error", &message(errors.full_name));
    dom::set_text(document, "rsvp-attendance-error", &message(errors.attendance));
    dom::set_text(document, "rsvp-guests-error", &message(errors.guest_count));
}

/// The guest-count row only applies when attending; radio changes also clear
/// the attendance error message.
fn wire_attendance_toggle(document: &web::Document) {
    let Ok(radios) = document.query_selector_all("input[name='attendance']") else {
        return;
    };
    for i in 0..radios.length() {
        let Some(radio) = radios.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move || {
            dom::set_text(&doc, "rsvp-attendance-error", "");
            let attending = checked_attendance(&doc) == Some(Attendance::Attending);
            if let Some(row) = doc.get_element_by_id("rsvp-guests-row") {
                let _ = row.set_attribute("style", if attending { "" } else { "display:none" });
            }
        }) as Box<dyn FnMut()>);
        let _ = radio.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn wire_error_clearing(document: &web::Document) {
    if let Some(name) = document.get_element_by_id("rsvp-name") {
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move || {
            dom::set_text(&doc, "rsvp-name-error", "");
        }) as Box<dyn FnMut()>);
        let _ = name.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn wire_submit(document: &web::Document) {
    let Some(form) = document.get_element_by_id("rsvp-form") else {
        log::warn!("[rsvp] missing #rsvp-form");
        return;
    };
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
        let data = read_form(&doc);
        match data.validate() {
            Err(errors) => render_errors(&doc, &errors),
            Ok(()) => {
                render_errors(&doc, &FieldErrors::default());
                let doc = doc.clone();
                spawn_local(async move {
                    set_busy(&doc, true);
                    dom::sleep_ms(RSVP_SUBMIT_DELAY_MS).await;
                    set_busy(&doc, false);
                    log::info!("[rsvp] response received from {}", data.full_name.trim());
                    show_success(&doc);
                    confetti::burst(&doc);
                    reset_form(&doc);
                });
            }
        }
    }) as Box<dyn FnMut(_)>);
    let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn set_busy(document: &web::Document, busy: bool) {
    if let Some(button) = document.get_element_by_id("rsvp-submit") {
        if busy {
            let _ = button.set_attribute("data-busy", "1");
            let _ = button.set_attribute("disabled", "");
        } else {
            let _ = button.set_attribute("data-busy", "0");
            let _ = button.remove_attribute("disabled");
        }
    }
}

fn show_success(document: &web::Document) {
    if let Some(form) = document.get_element_by_id("rsvp-form") {
        let _ = form.set_attribute("style", "display:none");
    }
    if let Some(panel) = document.get_element_by_id("rsvp-success") {
        let _ = panel.set_attribute("style", "");
    }
}

fn reset_form(document: &web::Document) {
    for id in ["rsvp-name", "rsvp-email"] {
        if let Some(input) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        {
            input.set_value("");
        }
    }
    if let Ok(radios) = document.query_selector_all("input[name='attendance']") {
        for i in 0..radios.length() {
            if let Some(radio) = radios
                .get(i)
                .and_then(|n| n.dyn_into::<web::HtmlInputElement>().ok())
            {
                radio.set_checked(false);
            }
        }
    }
    if let Some(select) = document
        .get_element_by_id("rsvp-guests")
        .and_then(|el| el.dyn_into::<web::HtmlSelectElement>().ok())
    {
        select.set_value("1");
    }
    if let Some(area) = document
        .get_element_by_id("rsvp-message")
        .and_then(|el| el.dyn_into::<web::HtmlTextAreaElement>().ok())
    {
        area.set_value("");
    }
}

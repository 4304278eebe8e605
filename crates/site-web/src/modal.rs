use web_sys as web;

pub const INVITATION_MODAL_ID: &str = "invitation-modal";
pub const RSVP_MODAL_ID: &str = "rsvp-modal";

const MODAL_IDS: [&str; 2] = [INVITATION_MODAL_ID, RSVP_MODAL_ID];

#[inline]
pub fn open(document: &web::Document, modal_id: &str) {
    if let Some(el) = document.get_element_by_id(modal_id) {
        let _ = el.set_attribute("style", "");
    }
    set_body_scroll_locked(document, true);
}

#[inline]
pub fn close(document: &web::Document, modal_id: &str) {
    if let Some(el) = document.get_element_by_id(modal_id) {
        let _ = el.set_attribute("style", "display:none");
    }
    if !MODAL_IDS.iter().any(|id| is_open(document, id)) {
        set_body_scroll_locked(document, false);
    }
}

#[inline]
pub fn is_open(document: &web::Document, modal_id: &str) -> bool {
    document
        .get_element_by_id(modal_id)
        .map(|el| {
            !el.get_attribute("style")
                .map(|s| s.contains("display:none"))
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

pub fn close_all(document: &web::Document) {
    for id in MODAL_IDS {
        close(document, id);
    }
}

fn set_body_scroll_locked(document: &web::Document, locked: bool) {
    if let Some(body) = document.body() {
        if locked {
            let _ = body.style().set_property("overflow", "hidden");
        } else {
            let _ = body.style().remove_property("overflow");
        }
    }
}

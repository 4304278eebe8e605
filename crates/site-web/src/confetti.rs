use rand::rngs::StdRng;
use rand::SeedableRng;
use site_core::{confetti::spawn_burst, CONFETTI_CLEAR_AFTER_MS};
use web_sys as web;

use crate::dom;

/// Drop a burst of confetti pieces into the overlay layer. Each piece is a
/// plain div animated by the stylesheet's fall keyframes; the layer empties
/// itself once the burst is over.
pub fn burst(document: &web::Document) {
    let Some(layer) = dom::element_by_id(document, "confetti-layer") else {
        return;
    };

    let mut rng = StdRng::seed_from_u64(js_sys::Date::now() as u64);
    for particle in spawn_burst(&mut rng) {
        let Ok(piece) = document.create_element("div") else {
            continue;
        };
        piece.set_class_name(if particle.clockwise {
            "confetti-piece spin-cw"
        } else {
            "confetti-piece spin-ccw"
        });
        let style = format!(
            "left:{:.1}%;width:{:.0}px;height:{:.0}px;background-color:{};animation-delay:{:.2}s;animation-duration:{:.2}s;",
            particle.x_percent,
            particle.size_px,
            particle.size_px,
            particle.color,
            particle.delay_sec,
            particle.duration_sec,
        );
        let _ = piece.set_attribute("style", &style);
        let _ = layer.append_child(&piece);
    }

    let layer_to_clear = layer.clone();
    dom::set_timeout(CONFETTI_CLEAR_AFTER_MS, move || {
        layer_to_clear.set_inner_html("");
    });
}

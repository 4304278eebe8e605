//! Confetti burst parameters for the RSVP success screen.

use rand::Rng;

use crate::constants::{
    CONFETTI_COLORS, CONFETTI_DURATION_SPAN_SEC, CONFETTI_MAX_DELAY_SEC, CONFETTI_MIN_DURATION_SEC,
    CONFETTI_MIN_SIZE_PX, CONFETTI_PARTICLE_COUNT, CONFETTI_SIZE_SPAN_PX,
};

#[derive(Clone, Copy, Debug)]
pub struct ConfettiParticle {
    /// Horizontal start position as a percentage of viewport width.
    pub x_percent: f32,
    pub color: &'static str,
    pub delay_sec: f32,
    pub duration_sec: f32,
    pub size_px: f32,
    pub clockwise: bool,
}

/// Generate one burst. The caller owns the RNG so bursts are reproducible
/// under test and time-seeded in the browser.
pub fn spawn_burst<R: Rng>(rng: &mut R) -> Vec<ConfettiParticle> {
    (0..CONFETTI_PARTICLE_COUNT)
        .map(|_| ConfettiParticle {
            x_percent: rng.gen_range(0.0..100.0),
            color: CONFETTI_COLORS[rng.gen_range(0..CONFETTI_COLORS.len())],
            delay_sec: rng.gen_range(0.0..CONFETTI_MAX_DELAY_SEC),
            duration_sec: CONFETTI_MIN_DURATION_SEC + rng.gen_range(0.0..CONFETTI_DURATION_SPAN_SEC),
            size_px: CONFETTI_MIN_SIZE_PX + rng.gen_range(0.0..CONFETTI_SIZE_SPAN_PX),
            clockwise: rng.gen_bool(0.5),
        })
        .collect()
}

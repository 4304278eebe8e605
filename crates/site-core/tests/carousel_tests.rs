use rand::rngs::StdRng;
use rand::SeedableRng;

use site_core::carousel::CarouselStrip;
use site_core::confetti::spawn_burst;
use site_core::constants::{
    CAROUSEL_SPEED_PX_PER_SEC, CONFETTI_COLORS, CONFETTI_MAX_DELAY_SEC, CONFETTI_PARTICLE_COUNT,
};

#[test]
fn strip_width_covers_one_copy_of_the_images() {
    let strip = CarouselStrip::new(6, CAROUSEL_SPEED_PX_PER_SEC);
    // 6 items at 320px with a 24px gap each.
    assert_eq!(strip.strip_width(), 6.0 * 344.0);
}

#[test]
fn advance_moves_at_the_configured_speed() {
    let mut strip = CarouselStrip::new(6, 50.0);
    strip.advance(1.0);
    assert!((strip.offset() - 50.0).abs() < 1e-4);
    assert!((strip.translate_x() + 50.0).abs() < 1e-4);
}

#[test]
fn offset_wraps_at_the_strip_width() {
    let mut strip = CarouselStrip::new(2, 100.0);
    let width = strip.strip_width();
    // Long enough to wrap several times.
    strip.advance(width / 100.0 * 3.5);
    assert!(strip.offset() >= 0.0 && strip.offset() < width);
    assert!((strip.offset() - width / 2.0).abs() < 1e-2);
}

#[test]
fn paused_strip_does_not_move() {
    let mut strip = CarouselStrip::new(6, 50.0);
    strip.set_paused(true);
    strip.advance(2.0);
    assert_eq!(strip.offset(), 0.0);
    strip.set_paused(false);
    strip.advance(2.0);
    assert!(strip.offset() > 0.0);
}

#[test]
fn empty_strip_is_inert() {
    let mut strip = CarouselStrip::new(0, 50.0);
    strip.advance(1.0);
    assert_eq!(strip.offset(), 0.0);
}

#[test]
fn confetti_burst_stays_within_bounds() {
    let mut rng = StdRng::seed_from_u64(7);
    let burst = spawn_burst(&mut rng);
    assert_eq!(burst.len(), CONFETTI_PARTICLE_COUNT);
    for p in &burst {
        assert!((0.0..100.0).contains(&p.x_percent));
        assert!(p.delay_sec >= 0.0 && p.delay_sec < CONFETTI_MAX_DELAY_SEC);
        assert!(p.duration_sec >= 2.0 && p.duration_sec < 4.0);
        assert!(p.size_px >= 6.0 && p.size_px < 14.0);
        assert!(CONFETTI_COLORS.contains(&p.color));
    }
}

#[test]
fn confetti_bursts_are_reproducible_for_a_seed() {
    let a = spawn_burst(&mut StdRng::seed_from_u64(42));
    let b = spawn_burst(&mut StdRng::seed_from_u64(42));
    for (pa, pb) in a.iter().zip(&b) {
        assert_eq!(pa.x_percent, pb.x_percent);
        assert_eq!(pa.color, pb.color);
        assert_eq!(pa.size_px, pb.size_px);
    }
}

use site_core::butterfly::{ButterflyMotion, FlightPhase, LandingLatch};
use site_core::constants::{
    APPROACH_FACTOR_LANDED, APPROACH_FACTOR_SCROLLING, LANDING_ROTATION_DEG, LANDING_SCALE,
};
use site_core::state::{AnchorRect, Viewport};

const DT: f32 = 1.0 / 60.0;

fn heading_rect() -> AnchorRect {
    AnchorRect {
        left: 400.0,
        top: 300.0,
        width: 200.0,
        height: 50.0,
    }
}

#[test]
fn latch_debounces_the_true_transition() {
    let mut latch = LandingLatch::default();
    latch.set_raw(true, 0.0);
    assert!(!latch.poll(100.0));
    assert!(!latch.poll(199.0));
    assert!(latch.poll(200.0));
    assert!(latch.is_landed());
}

#[test]
fn latch_drops_immediately_on_the_false_transition() {
    let mut latch = LandingLatch::default();
    latch.set_raw(true, 0.0);
    assert!(latch.poll(250.0));
    latch.set_raw(false, 260.0);
    assert!(!latch.is_landed());
    assert!(!latch.poll(261.0));
}

#[test]
fn latch_restarts_the_window_after_a_blip() {
    let mut latch = LandingLatch::default();
    latch.set_raw(true, 0.0);
    latch.set_raw(false, 100.0);
    latch.set_raw(true, 150.0);
    // Only 150 ms of sustained visibility by t=300.
    assert!(!latch.poll(300.0));
    assert!(latch.poll(350.0));
}

#[test]
fn scroll_target_follows_the_flight_path() {
    let mut vp = Viewport::new(1000.0, 800.0);
    vp.scroll_height = 2800.0; // scrollable = 2000
    let mut motion = ButterflyMotion::new(vp);
    motion.set_scroll(1400.0, 2800.0); // progress = 0.7

    for _ in 0..600 {
        motion.step(DT, 0.0, None);
    }

    // At smoothed progress 0.7 the vertical fraction is 0.55 of an 800px
    // viewport, i.e. y = 440.
    let (target, factor) = motion.resolve_target(None);
    assert!((target.pos.y - 440.0).abs() < 1e-3, "y = {}", target.pos.y);
    assert_eq!(factor, APPROACH_FACTOR_SCROLLING);
    assert_eq!(target.scale, 1.0);

    // The interpolated channels have converged onto the target too.
    let current = motion.current();
    assert!((current.pos.y - 440.0).abs() < 1.0);
}

#[test]
fn zero_scrollable_height_pins_progress_to_the_path_start() {
    let vp = Viewport::new(1000.0, 800.0); // scroll_height == height
    let mut motion = ButterflyMotion::new(vp);
    for _ in 0..120 {
        motion.step(DT, 0.0, None);
    }
    let (target, _) = motion.resolve_target(None);
    assert!((target.pos.y - 0.15 * 800.0).abs() < 1e-3);
}

#[test]
fn landing_tracks_the_anchor_rect() {
    let mut motion = ButterflyMotion::new(Viewport::new(1000.0, 800.0));
    let rect = heading_rect();

    motion.set_section_in_view(true, 0.0);
    motion.step(DT, 250.0, Some(&rect));
    assert_eq!(motion.phase(), FlightPhase::Landed);

    let (target, factor) = motion.resolve_target(Some(&rect));
    assert_eq!(target.pos.x, rect.right() + 10.0);
    assert_eq!(target.pos.y, rect.vertical_center() - 25.0);
    assert_eq!(target.rotation_deg, LANDING_ROTATION_DEG);
    assert_eq!(target.scale, LANDING_SCALE);
    assert_eq!(factor, APPROACH_FACTOR_LANDED);
}

#[test]
fn landing_target_moves_with_the_anchor() {
    let mut motion = ButterflyMotion::new(Viewport::new(1000.0, 800.0));
    motion.set_section_in_view(true, 0.0);
    motion.step(DT, 250.0, Some(&heading_rect()));

    // The anchor element shifted (e.g. the window resized); the target is
    // recomputed from the fresh rect, never cached.
    let moved = AnchorRect {
        top: 500.0,
        ..heading_rect()
    };
    let (target, _) = motion.resolve_target(Some(&moved));
    assert_eq!(target.pos.y, moved.vertical_center() - 25.0);
}

#[test]
fn absent_anchor_degrades_to_the_scroll_target() {
    let mut motion = ButterflyMotion::new(Viewport::new(1000.0, 800.0));
    motion.set_section_in_view(true, 0.0);

    // Latched, but the heading element is not in the DOM.
    let sample = motion.step(DT, 250.0, None);
    assert_eq!(motion.phase(), FlightPhase::Scrolling);
    assert!(sample.pos.x.is_finite() && sample.pos.y.is_finite());

    let (target, factor) = motion.resolve_target(None);
    assert_eq!(target.scale, 1.0);
    assert_eq!(factor, APPROACH_FACTOR_SCROLLING);
}

#[test]
fn leaving_the_section_returns_to_scrolling_on_the_next_frame() {
    let mut motion = ButterflyMotion::new(Viewport::new(1000.0, 800.0));
    let rect = heading_rect();

    motion.set_section_in_view(true, 0.0);
    motion.step(DT, 250.0, Some(&rect));
    assert_eq!(motion.phase(), FlightPhase::Landed);

    motion.set_section_in_view(false, 260.0);
    motion.step(DT, 261.0, Some(&rect));
    assert_eq!(motion.phase(), FlightPhase::Scrolling);
}

#[test]
fn resize_recenters_the_horizontal_channel() {
    let mut motion = ButterflyMotion::new(Viewport::new(1000.0, 800.0));
    motion.step(DT, 0.0, None);
    motion.resize(600.0, 800.0);
    assert_eq!(motion.current().pos.x, 300.0);
}

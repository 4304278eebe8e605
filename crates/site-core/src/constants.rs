// Tuning constants shared by the motion controller and the web frontend.

// Scroll-progress smoothing spring
pub const SPRING_STIFFNESS: f32 = 100.0;
pub const SPRING_DAMPING: f32 = 30.0;
pub const SPRING_REST_DELTA: f32 = 0.001; // snap-to-target threshold on position
pub const SPRING_REST_SPEED: f32 = 0.01; // snap-to-target threshold on velocity
pub const SPRING_MAX_STEP_SEC: f32 = 0.1; // dt ceiling so a background tab can't destabilize the integration

// Flight path over normalized scroll progress. The vertical table is a
// fraction of viewport height; drift and rotation are absolute offsets.
pub const FLIGHT_VERTICAL_FRACTION: &[(f32, f32)] = &[(0.0, 0.15), (0.7, 0.55), (1.0, 0.70)];
pub const FLIGHT_DRIFT_X_PX: &[(f32, f32)] = &[
    (0.0, 0.0),
    (0.25, 15.0),
    (0.5, -10.0),
    (0.75, 12.0),
    (1.0, 0.0),
];
pub const FLIGHT_ROTATION_DEG: &[(f32, f32)] = &[
    (0.0, -5.0),
    (0.25, 8.0),
    (0.5, -3.0),
    (0.75, 6.0),
    (1.0, 0.0),
];

// Landing on the invitation heading
pub const LANDING_DEBOUNCE_MS: f64 = 200.0; // sustained visibility before the landing latch engages
pub const LANDING_OFFSET_X_PX: f32 = 10.0; // to the right of the heading's edge
pub const LANDING_OFFSET_Y_PX: f32 = -25.0; // above the heading's vertical center
pub const LANDING_ROTATION_DEG: f32 = 5.0;
pub const LANDING_SCALE: f32 = 0.9;
pub const ENVELOPE_VIEW_FRACTION: f64 = 0.3; // intersection ratio that counts as "in view"

// Per-frame approach factors for the four motion channels
pub const APPROACH_FACTOR_SCROLLING: f32 = 0.10;
pub const APPROACH_FACTOR_LANDED: f32 = 0.08; // softer touch-down

// Photo carousel
pub const CAROUSEL_ITEM_WIDTH_PX: f32 = 320.0;
pub const CAROUSEL_ITEM_GAP_PX: f32 = 24.0;
pub const CAROUSEL_SPEED_PX_PER_SEC: f32 = 50.0;

// RSVP form
pub const RSVP_MAX_GUESTS: u8 = 5;
pub const RSVP_SUBMIT_DELAY_MS: i32 = 1500; // simulated round-trip, no retry

// Confetti burst on RSVP success
pub const CONFETTI_PARTICLE_COUNT: usize = 50;
pub const CONFETTI_MAX_DELAY_SEC: f32 = 0.5;
pub const CONFETTI_MIN_DURATION_SEC: f32 = 2.0;
pub const CONFETTI_DURATION_SPAN_SEC: f32 = 2.0;
pub const CONFETTI_MIN_SIZE_PX: f32 = 6.0;
pub const CONFETTI_SIZE_SPAN_PX: f32 = 8.0;
pub const CONFETTI_CLEAR_AFTER_MS: i32 = 4000;
pub const CONFETTI_COLORS: [&str; 6] = [
    "#C9A962", "#B76E79", "#E8D5D3", "#F5F0E8", "#FFD700", "#FFC0CB",
];

// Media
pub const MUSIC_PROMPT_HIDE_MS: i32 = 5000;
pub const HERO_CROSSFADE_MS: i32 = 1000;

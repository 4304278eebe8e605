// Sanity checks on the tuning constants and their relationships.

use site_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn approach_factors_are_sane() {
    assert!(APPROACH_FACTOR_SCROLLING > 0.0 && APPROACH_FACTOR_SCROLLING < 1.0);
    assert!(APPROACH_FACTOR_LANDED > 0.0 && APPROACH_FACTOR_LANDED < 1.0);
    // The touch-down approach is deliberately softer than free flight.
    assert!(APPROACH_FACTOR_LANDED < APPROACH_FACTOR_SCROLLING);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn spring_tuning_cannot_overshoot() {
    assert!(SPRING_STIFFNESS > 0.0);
    assert!(SPRING_DAMPING > 0.0);
    assert!(SPRING_REST_DELTA > 0.0);
    // Overdamped: damping^2 >= 4k, so a monotonic ramp stays monotonic.
    assert!(SPRING_DAMPING * SPRING_DAMPING >= 4.0 * SPRING_STIFFNESS);
}

fn assert_table_is_a_valid_curve(table: &[(f32, f32)]) {
    assert!(table.len() >= 2);
    assert_eq!(table[0].0, 0.0);
    assert_eq!(table[table.len() - 1].0, 1.0);
    for pair in table.windows(2) {
        assert!(pair[0].0 < pair[1].0, "breakpoints must strictly increase");
    }
}

#[test]
fn flight_tables_span_the_progress_range() {
    assert_table_is_a_valid_curve(FLIGHT_VERTICAL_FRACTION);
    assert_table_is_a_valid_curve(FLIGHT_DRIFT_X_PX);
    assert_table_is_a_valid_curve(FLIGHT_ROTATION_DEG);

    // Vertical positions are fractions of the viewport.
    for &(_, y) in FLIGHT_VERTICAL_FRACTION {
        assert!(y > 0.0 && y < 1.0);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn landing_tuning_is_sane() {
    assert!(LANDING_DEBOUNCE_MS > 0.0);
    assert!(ENVELOPE_VIEW_FRACTION > 0.0 && ENVELOPE_VIEW_FRACTION < 1.0);
    assert!(LANDING_SCALE > 0.0 && LANDING_SCALE <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn layout_and_form_constants_are_sane() {
    assert!(CAROUSEL_ITEM_WIDTH_PX > 0.0);
    assert!(CAROUSEL_ITEM_GAP_PX >= 0.0);
    assert!(CAROUSEL_SPEED_PX_PER_SEC > 0.0);
    assert!(RSVP_MAX_GUESTS >= 1);
    assert!(RSVP_SUBMIT_DELAY_MS > 0);
    assert!(CONFETTI_PARTICLE_COUNT > 0);
    assert!(CONFETTI_CLEAR_AFTER_MS > 0);
    for color in CONFETTI_COLORS {
        assert!(color.starts_with('#') && color.len() == 7);
    }
}

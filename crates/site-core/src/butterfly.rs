//! Scroll-synchronized motion controller for the decorative butterfly.
//!
//! The pipeline runs once per animation frame: the raw scroll progress is
//! smoothed through a spring filter, mapped through the flight-path curves,
//! and the resulting target (or, once landed, the invitation heading's
//! on-screen position) is approached exponentially on four independent
//! channels. The landing latch debounces the envelope section's visibility
//! signal so a fast scroll-through does not trigger a touch-down.

use glam::Vec2;

use crate::constants::{
    APPROACH_FACTOR_LANDED, APPROACH_FACTOR_SCROLLING, FLIGHT_DRIFT_X_PX, FLIGHT_ROTATION_DEG,
    FLIGHT_VERTICAL_FRACTION, LANDING_DEBOUNCE_MS, LANDING_OFFSET_X_PX, LANDING_OFFSET_Y_PX,
    LANDING_ROTATION_DEG, LANDING_SCALE,
};
use crate::motion::{approach, PiecewiseCurve, Spring};
use crate::state::{AnchorRect, MotionSample, Viewport};

const VERTICAL_CURVE: PiecewiseCurve = PiecewiseCurve::new(FLIGHT_VERTICAL_FRACTION);
const DRIFT_CURVE: PiecewiseCurve = PiecewiseCurve::new(FLIGHT_DRIFT_X_PX);
const ROTATION_CURVE: PiecewiseCurve = PiecewiseCurve::new(FLIGHT_ROTATION_DEG);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlightPhase {
    Scrolling,
    Landed,
}

/// Debounce latch for the envelope section's visibility signal.
///
/// The true transition is accepted only after the signal has been held for
/// the debounce window; the false transition is accepted immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct LandingLatch {
    raw: bool,
    raw_since_ms: f64,
    landed: bool,
}

impl LandingLatch {
    pub fn set_raw(&mut self, in_view: bool, now_ms: f64) {
        if in_view && !self.raw {
            self.raw_since_ms = now_ms;
        }
        self.raw = in_view;
        if !in_view {
            self.landed = false;
        }
    }

    pub fn poll(&mut self, now_ms: f64) -> bool {
        if self.raw && !self.landed && now_ms - self.raw_since_ms >= LANDING_DEBOUNCE_MS {
            self.landed = true;
        }
        self.landed
    }

    pub fn is_landed(&self) -> bool {
        self.landed
    }
}

pub struct ButterflyMotion {
    viewport: Viewport,
    smoother: Spring,
    latch: LandingLatch,
    current: MotionSample,
    phase: FlightPhase,
}

impl ButterflyMotion {
    pub fn new(viewport: Viewport) -> Self {
        let start = Vec2::new(viewport.center_x(), 0.0);
        Self {
            viewport,
            smoother: Spring::progress_smoother(viewport.scroll_progress()),
            latch: LandingLatch::default(),
            current: MotionSample::at(start),
            phase: FlightPhase::Scrolling,
        }
    }

    pub fn phase(&self) -> FlightPhase {
        self.phase
    }

    pub fn current(&self) -> MotionSample {
        self.current
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Latest scroll measurements from the frontend's scroll listener.
    pub fn set_scroll(&mut self, scroll_y: f32, scroll_height: f32) {
        self.viewport.scroll_y = scroll_y;
        self.viewport.scroll_height = scroll_height;
    }

    /// Window resize; the horizontal channel re-centers immediately so the
    /// butterfly does not drift across half the page to the new center.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport.width = width;
        self.viewport.height = height;
        self.current.pos.x = self.viewport.center_x();
    }

    /// Raw (un-debounced) visibility of the envelope section.
    pub fn set_section_in_view(&mut self, in_view: bool, now_ms: f64) {
        self.latch.set_raw(in_view, now_ms);
    }

    /// Resolve this frame's target and approach factor.
    ///
    /// A latched landing with no resolvable anchor degrades to the
    /// scroll-derived target; the caller never sees an absent target.
    pub fn resolve_target(&self, anchor: Option<&AnchorRect>) -> (MotionSample, f32) {
        match anchor {
            Some(rect) if self.latch.is_landed() => {
                (Self::landing_target(rect), APPROACH_FACTOR_LANDED)
            }
            _ => (self.scroll_target(), APPROACH_FACTOR_SCROLLING),
        }
    }

    fn scroll_target(&self) -> MotionSample {
        let p = self.smoother.position();
        MotionSample {
            pos: Vec2::new(
                self.viewport.center_x() + DRIFT_CURVE.sample(p),
                VERTICAL_CURVE.sample(p) * self.viewport.height,
            ),
            rotation_deg: ROTATION_CURVE.sample(p),
            scale: 1.0,
        }
    }

    fn landing_target(rect: &AnchorRect) -> MotionSample {
        MotionSample {
            pos: Vec2::new(
                rect.right() + LANDING_OFFSET_X_PX,
                rect.vertical_center() + LANDING_OFFSET_Y_PX,
            ),
            rotation_deg: LANDING_ROTATION_DEG,
            scale: LANDING_SCALE,
        }
    }

    /// Advance one frame: poll the latch, smooth the scroll signal, resolve
    /// the target and move all four channels toward it. The returned sample
    /// is the complete frame state; the renderer never observes a partially
    /// updated set.
    pub fn step(&mut self, dt_sec: f32, now_ms: f64, anchor: Option<&AnchorRect>) -> MotionSample {
        self.latch.poll(now_ms);
        self.smoother.set_target(self.viewport.scroll_progress());
        self.smoother.step(dt_sec);

        let (target, factor) = self.resolve_target(anchor);
        let phase = if self.latch.is_landed() && anchor.is_some() {
            FlightPhase::Landed
        } else {
            FlightPhase::Scrolling
        };
        if phase != self.phase {
            log::debug!("[landing] phase -> {:?}", phase);
            self.phase = phase;
        }

        self.current.pos.x = approach(self.current.pos.x, target.pos.x, factor);
        self.current.pos.y = approach(self.current.pos.y, target.pos.y, factor);
        self.current.rotation_deg = approach(self.current.rotation_deg, target.rotation_deg, factor);
        self.current.scale = approach(self.current.scale, target.scale, factor);
        self.current
    }
}

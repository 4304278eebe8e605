//! Carrier types shared with the web frontend.
//!
//! These types intentionally avoid referencing platform-specific APIs so the
//! motion controller can be exercised on the host. The frontend fills them
//! from `window`/`document` measurements each time the page scrolls or
//! resizes.

use glam::Vec2;

/// Window geometry and scroll offsets, owned by the motion controller and
/// updated only through its entry points.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub scroll_y: f32,
    pub scroll_height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            scroll_y: 0.0,
            scroll_height: height,
        }
    }

    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }

    /// Normalized scroll position in [0, 1]; 0 when nothing is scrollable.
    pub fn scroll_progress(&self) -> f32 {
        let scrollable = self.scroll_height - self.height;
        if scrollable <= 0.0 {
            return 0.0;
        }
        (self.scroll_y / scrollable).clamp(0.0, 1.0)
    }
}

/// Platform-free mirror of a DOM bounding rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl AnchorRect {
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn vertical_center(&self) -> f32 {
        self.top + self.height / 2.0
    }
}

/// The four motion channels the presentation layer renders as a 2D transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSample {
    pub pos: Vec2,
    pub rotation_deg: f32,
    pub scale: f32,
}

impl MotionSample {
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            rotation_deg: 0.0,
            scale: 1.0,
        }
    }
}

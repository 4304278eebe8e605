//! Offset arithmetic for the infinitely looping photo strip.
//!
//! The markup renders the image list twice back to back; wrapping the offset
//! at the width of one copy makes the loop seamless.

use crate::constants::{CAROUSEL_ITEM_GAP_PX, CAROUSEL_ITEM_WIDTH_PX};

#[derive(Clone, Copy, Debug)]
pub struct CarouselStrip {
    item_count: usize,
    item_width: f32,
    gap: f32,
    speed: f32,
    offset: f32,
    paused: bool,
}

impl CarouselStrip {
    /// `item_count` is the number of distinct images (one copy of the strip).
    pub fn new(item_count: usize, speed_px_per_sec: f32) -> Self {
        Self {
            item_count,
            item_width: CAROUSEL_ITEM_WIDTH_PX,
            gap: CAROUSEL_ITEM_GAP_PX,
            speed: speed_px_per_sec,
            offset: 0.0,
            paused: false,
        }
    }

    /// Width of one copy of the strip.
    pub fn strip_width(&self) -> f32 {
        self.item_count as f32 * (self.item_width + self.gap)
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Horizontal translation to apply to the track element.
    pub fn translate_x(&self) -> f32 {
        -self.offset
    }

    /// Advance by `dt_sec` unless paused, wrapping at the strip width.
    pub fn advance(&mut self, dt_sec: f32) {
        if self.paused || self.item_count == 0 {
            return;
        }
        let width = self.strip_width();
        self.offset = (self.offset + self.speed * dt_sec).rem_euclid(width);
    }
}

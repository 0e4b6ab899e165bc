//! Damped scroll offset sampled once per frame.
//!
//! The host scrolling surface pushes a raw normalized target; `advance`
//! low-passes the published offset toward it so the scene never snaps when
//! the user flicks the wheel.

use crate::constants::SCROLL_DAMPING_RATE;
use crate::math::smooth_alpha;

#[derive(Clone, Debug)]
pub struct ScrollState {
    target: f32,
    offset: f32,
    damping_rate: f32,
    section_count: usize,
}

impl ScrollState {
    pub fn new(section_count: usize) -> Self {
        Self::with_damping(section_count, SCROLL_DAMPING_RATE)
    }

    pub fn with_damping(section_count: usize, damping_rate: f32) -> Self {
        Self {
            target: 0.0,
            offset: 0.0,
            damping_rate,
            section_count: section_count.max(1),
        }
    }

    /// Publish the raw scroll position; clamped to \[0, 1\].
    pub fn set_target(&mut self, progress: f32) {
        self.target = progress.clamp(0.0, 1.0);
    }

    /// Snap both target and offset, bypassing damping (initial mount).
    pub fn jump_to(&mut self, progress: f32) {
        self.target = progress.clamp(0.0, 1.0);
        self.offset = self.target;
    }

    /// Advance the damped offset toward the target. Called once per frame.
    pub fn advance(&mut self, dt_sec: f32) {
        let alpha = smooth_alpha(self.damping_rate, dt_sec);
        self.offset += (self.target - self.offset) * alpha;
    }

    #[inline]
    pub fn offset(&self) -> f32 {
        self.offset.clamp(0.0, 1.0)
    }

    #[inline]
    pub fn section_count(&self) -> usize {
        self.section_count
    }

    /// Remap the sub-range `[start, start + span]` of the offset to a local
    /// \[0, 1\] value, saturating outside it.
    pub fn range(&self, start: f32, span: f32) -> f32 {
        if span <= 0.0 {
            return if self.offset() >= start { 1.0 } else { 0.0 };
        }
        ((self.offset() - start) / span).clamp(0.0, 1.0)
    }

    /// Index of the section nearest the damped offset.
    pub fn current_section(&self) -> usize {
        let last = self.section_count - 1;
        ((self.offset() * last as f32).round() as usize).min(last)
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(crate::constants::SECTION_COUNT)
    }
}

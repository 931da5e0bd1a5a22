use crate::constants::{ZOOM_SCALE_MAX, ZOOM_SCALE_MIN};
use glam::Vec2;

/// Pan offset and uniform scale applied to every scaled position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomTransform {
    pub translate: Vec2,
    pub scale: f32,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ZoomTransform {
    pub const IDENTITY: ZoomTransform = ZoomTransform {
        translate: Vec2::ZERO,
        scale: 1.0,
    };

    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        p * self.scale + self.translate
    }

    #[inline]
    pub fn invert(&self, p: Vec2) -> Vec2 {
        (p - self.translate) / self.scale
    }

    /// Scales by `factor` while keeping `anchor` (plot pixels) in place.
    /// The resulting scale is clamped to the zoom extent.
    pub fn zoom_about(&mut self, anchor: Vec2, factor: f32) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let fixed = self.invert(anchor);
        self.scale = (self.scale * factor).clamp(ZOOM_SCALE_MIN, ZOOM_SCALE_MAX);
        self.translate = anchor - fixed * self.scale;
    }

    pub fn pan_by(&mut self, delta: Vec2) {
        self.translate += delta;
    }

    pub fn reset(&mut self) {
        *self = Self::IDENTITY;
    }
}

//! Mapping from normalized point coordinates to plot pixels.

use crate::constants::{
    DEFAULT_MARGIN_PX, POINT_PADDING_PX, RADIUS_MAX_PX, RADIUS_MIN_PX, SPARSE_POINT_THRESHOLD,
};
use glam::Vec2;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl Default for Margin {
    fn default() -> Self {
        Self::uniform(DEFAULT_MARGIN_PX)
    }
}

impl Margin {
    pub const fn uniform(px: f32) -> Self {
        Self {
            top: px,
            left: px,
            bottom: px,
            right: px,
        }
    }

    /// Container size minus the margins.
    #[inline]
    pub fn inner(&self, total: Vec2) -> Vec2 {
        Vec2::new(
            total.x - self.left - self.right,
            total.y - self.top - self.bottom,
        )
    }

    #[inline]
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }
}

/// Linear map from `domain` onto `range`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: [f32; 2],
    pub range: [f32; 2],
}

impl LinearScale {
    pub const fn new(domain: [f32; 2], range: [f32; 2]) -> Self {
        Self { domain, range }
    }

    /// A zero-width domain maps everything onto the start of the range.
    #[inline]
    pub fn apply(&self, value: f32) -> f32 {
        let span = self.domain[1] - self.domain[0];
        if span == 0.0 || !span.is_finite() {
            return self.range[0];
        }
        let t = (value - self.domain[0]) / span;
        self.range[0] + t * (self.range[1] - self.range[0])
    }
}

/// The x, y and radius scales for one layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportScales {
    pub x: LinearScale,
    pub y: LinearScale,
    pub radius: LinearScale,
}

impl ViewportScales {
    /// Lays out `point_count` points inside a `width` x `height` plot area.
    ///
    /// Sparse sets sit in a centered band a third of the shorter side wide;
    /// denser sets fill the largest centered square. Both keep a fixed pixel
    /// padding inside their bounds.
    pub fn compute(width: f32, height: f32, point_count: usize, max_views: f64) -> Self {
        let pad = POINT_PADDING_PX;
        let min_xy = (width - height).abs() / 2.0;
        let max_xy = (width + height).abs() / 2.0;

        let (x_range, y_range) = if point_count < SPARSE_POINT_THRESHOLD {
            if width <= height {
                (
                    [width / 3.0 + pad, 2.0 * width / 3.0 - pad],
                    [
                        (3.0 * height - width) / 6.0 + pad,
                        (3.0 * height + width) / 6.0 - pad,
                    ],
                )
            } else {
                (
                    [
                        (3.0 * width - height) / 6.0 + pad,
                        (3.0 * width + height) / 6.0 - pad,
                    ],
                    [height / 3.0 + pad, 2.0 * height / 3.0 - pad],
                )
            }
        } else if width <= height {
            ([pad, width - pad], [min_xy + pad, max_xy - pad])
        } else {
            ([min_xy + pad, max_xy - pad], [pad, height - pad])
        };

        Self {
            x: LinearScale::new([0.0, 1.0], x_range),
            y: LinearScale::new([0.0, 1.0], y_range),
            radius: LinearScale::new([0.0, max_views as f32], [RADIUS_MIN_PX, RADIUS_MAX_PX]),
        }
    }

    #[inline]
    pub fn position(&self, normalized: Vec2) -> Vec2 {
        Vec2::new(self.x.apply(normalized.x), self.y.apply(normalized.y))
    }

    /// Drawn radius, evaluated at `views + 1`.
    #[inline]
    pub fn point_radius(&self, views: f64) -> f32 {
        self.radius.apply(views as f32 + 1.0)
    }

    /// Radius used to offset the tooltip from the point.
    #[inline]
    pub fn tooltip_radius(&self, views: f64) -> f32 {
        self.radius.apply(views as f32)
    }
}

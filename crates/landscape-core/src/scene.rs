//! Retained scene the SVG adapter mirrors every frame.
//!
//! Nodes carry displayed values in plot pixels (zoom already applied). Each
//! node has a stable id so the adapter can keep one element per node across
//! joins and drop elements whose node is gone.

use crate::color::Rgb;
use crate::overlap::BoundingBox;
use crate::viewport::Margin;
use glam::Vec2;

/// Animated scalar with cubic in-out easing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub elapsed_ms: f32,
    pub duration_ms: f32,
}

impl Tween {
    pub const fn fixed(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            elapsed_ms: 0.0,
            duration_ms: 0.0,
        }
    }

    pub const fn new(from: f32, to: f32, duration_ms: f32) -> Self {
        Self {
            from,
            to,
            elapsed_ms: 0.0,
            duration_ms,
        }
    }

    pub fn value(&self) -> f32 {
        if self.is_done() {
            return self.to;
        }
        let t = ease_cubic_in_out(self.elapsed_ms / self.duration_ms);
        self.from + (self.to - self.from) * t
    }

    /// Starts a new transition from the current value; any running one is
    /// replaced.
    pub fn retarget(&mut self, to: f32, duration_ms: f32) {
        *self = Self::new(self.value(), to, duration_ms);
    }

    /// Jumps straight to `value`, cancelling any transition.
    pub fn set(&mut self, value: f32) {
        *self = Self::fixed(value);
    }

    pub fn advance(&mut self, dt_ms: f32) {
        if !self.is_done() {
            self.elapsed_ms = (self.elapsed_ms + dt_ms).min(self.duration_ms);
        }
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.duration_ms <= 0.0 || self.elapsed_ms >= self.duration_ms
    }
}

fn ease_cubic_in_out(t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let t2 = t * 2.0;
    if t2 < 1.0 {
        0.5 * t2 * t2 * t2
    } else {
        let u = t2 - 2.0;
        0.5 * (u * u * u + 2.0)
    }
}

/// One lecture point.
#[derive(Clone, Debug, PartialEq)]
pub struct CircleNode {
    pub id: u64,
    pub cx: Tween,
    pub cy: Tween,
    pub r: Tween,
    pub fill: Rgb,
    pub highlighted: bool,
}

impl CircleNode {
    fn advance(&mut self, dt_ms: f32) {
        self.cx.advance(dt_ms);
        self.cy.advance(dt_ms);
        self.r.advance(dt_ms);
    }

    fn is_settled(&self) -> bool {
        self.cx.is_done() && self.cy.is_done() && self.r.is_done()
    }
}

/// One landmark label. `x` is the left edge and `y` the baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelNode {
    pub id: u64,
    pub text: String,
    pub x: Tween,
    pub y: Tween,
    pub width: f32,
    pub height: f32,
    pub opacity: Tween,
    pub hidden: bool,
}

impl LabelNode {
    /// Box at the transition target, which is where the label settles.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.x.to, self.y.to - self.height, self.width, self.height)
    }

    fn advance(&mut self, dt_ms: f32) {
        self.x.advance(dt_ms);
        self.y.advance(dt_ms);
        self.opacity.advance(dt_ms);
    }
}

#[derive(Clone, Debug)]
pub struct Scene {
    /// Full container size; the SVG element gets this size.
    pub total_size: Vec2,
    /// Plot area inside the margins; background and clip rects get this size.
    pub plot_size: Vec2,
    pub margin: Margin,
    pub background: Rgb,
    /// Circles joined to the current points, by index.
    pub circles: Vec<CircleNode>,
    /// Circles shrinking away; dropped once their transition ends.
    pub exiting: Vec<CircleNode>,
    pub labels: Vec<LabelNode>,
    pub has_tooltip: bool,
    pub tooltip_visible: bool,
    next_id: u64,
}

impl Scene {
    pub fn new(total_size: Vec2, margin: Margin, background: Rgb, has_tooltip: bool) -> Self {
        Self {
            total_size,
            plot_size: margin.inner(total_size),
            margin,
            background,
            circles: Vec::new(),
            exiting: Vec::new(),
            labels: Vec::new(),
            has_tooltip,
            tooltip_visible: false,
            next_id: 0,
        }
    }

    pub fn resize(&mut self, total_size: Vec2) {
        self.total_size = total_size;
        self.plot_size = self.margin.inner(total_size);
    }

    pub fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Steps every running transition and drops finished exits.
    pub fn advance(&mut self, dt_ms: f32) {
        for c in &mut self.circles {
            c.advance(dt_ms);
        }
        for c in &mut self.exiting {
            c.advance(dt_ms);
        }
        self.exiting.retain(|c| !c.is_settled());
        for l in &mut self.labels {
            l.advance(dt_ms);
        }
    }

    pub fn is_animating(&self) -> bool {
        !self.exiting.is_empty()
            || self.circles.iter().any(|c| !c.is_settled())
            || self
                .labels
                .iter()
                .any(|l| !(l.x.is_done() && l.y.is_done() && l.opacity.is_done()))
    }

    pub fn visible_label_count(&self) -> usize {
        self.labels.iter().filter(|l| !l.hidden).count()
    }
}

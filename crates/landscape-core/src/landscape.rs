//! The render orchestrator: owns the points and drives the scene.
//!
//! The graph starts inactive. The first successful draw builds the surface
//! (scene, zoom, tooltip slot) exactly once; every later data set or resize
//! only relayouts and re-joins the existing surface.

use crate::color::Rgb;
use crate::config::LandscapeConfig;
use crate::constants::{
    DEFAULT_BACKGROUND_COLOR, DEFAULT_POINT_COLOR, HOVER_BRIGHTEN, LANDMARK_NAMING_RADIUS_PX,
    LANDMARK_PRUNE_RADIUS_PX, LANDMARK_REFRESH_DELAY_MS, TOOLTIP_VERTICAL_OFFSET_PX, TRANSITION_MS,
};
use crate::error::{LandscapeError, Result};
use crate::landmark::{pick_text, points_within, seed_anchors, Landmark};
use crate::language::LanguageTable;
use crate::overlap::{visible_mask, BoundingBox};
use crate::point::{LandscapeData, Point};
use crate::scene::{CircleNode, LabelNode, Scene, Tween};
use crate::tooltip::TooltipFormatter;
use crate::viewport::{Margin, ViewportScales};
use crate::zoom::ZoomTransform;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;

/// The page the landscape lives in: container size and text metrics.
pub trait LayoutHost {
    /// Container size in CSS pixels, margins included.
    fn container_size(&self) -> Vec2;
    /// Rendered width and height of a landmark label.
    fn measure_label(&self, text: &str) -> Vec2;
}

/// The "show landmarks" control.
pub trait LandmarkToggle {
    fn is_checked(&self) -> bool;
}

pub struct LandmarkSettings {
    pub max_landmarks: usize,
    pub toggle: Option<Box<dyn LandmarkToggle>>,
}

pub struct LandscapeOptions {
    pub host: Option<Box<dyn LayoutHost>>,
    pub margin: Margin,
    pub point_color: Rgb,
    pub background_color: Rgb,
    pub tooltip: Option<TooltipFormatter>,
    pub landmarks: Option<LandmarkSettings>,
    pub detail_base_url: String,
}

impl Default for LandscapeOptions {
    fn default() -> Self {
        Self::from_config(&LandscapeConfig::default())
    }
}

impl LandscapeOptions {
    /// Options without a host or toggle; attach those with the `with_*`
    /// builders.
    pub fn from_config(config: &LandscapeConfig) -> Self {
        Self {
            host: None,
            margin: config.margin,
            point_color: parse_color(&config.colors.points, DEFAULT_POINT_COLOR),
            background_color: parse_color(&config.colors.background, DEFAULT_BACKGROUND_COLOR),
            tooltip: config.tooltip.enabled.then(|| {
                TooltipFormatter::new(LanguageTable::common())
                    .with_database_date(config.tooltip.database_date.clone())
            }),
            landmarks: config.landmarks.enabled.then(|| LandmarkSettings {
                max_landmarks: config.landmarks.max_landmarks,
                toggle: None,
            }),
            detail_base_url: config.detail_base_url.clone(),
        }
    }

    pub fn with_host(mut self, host: Box<dyn LayoutHost>) -> Self {
        self.host = Some(host);
        self
    }

    /// Attaches the toggle; no effect when landmarks are disabled.
    pub fn with_landmark_toggle(mut self, toggle: Box<dyn LandmarkToggle>) -> Self {
        if let Some(settings) = self.landmarks.as_mut() {
            settings.toggle = Some(toggle);
        }
        self
    }

    pub fn with_languages(mut self, languages: LanguageTable) -> Self {
        if let Some(formatter) = self.tooltip.as_mut() {
            formatter.languages = languages;
        }
        self
    }
}

fn parse_color(hex: &str, fallback: &str) -> Rgb {
    Rgb::from_hex(hex)
        .or_else(|| {
            log::warn!("[config] unparsable color {:?}, using {}", hex, fallback);
            Rgb::from_hex(fallback)
        })
        .unwrap_or(Rgb::WHITE)
}

/// Follow-up work a redraw asks the adapter to schedule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RedrawOutcome {
    /// Re-run [`LandscapeGraph::toggle_landmarks`] after this delay, once
    /// the label transitions have settled.
    pub refresh_landmarks_after_ms: Option<u32>,
}

struct Surface {
    scene: Scene,
    zoom: ZoomTransform,
    scales: ViewportScales,
}

enum Phase {
    Inactive,
    Active(Surface),
}

pub struct LandscapeGraph {
    options: LandscapeOptions,
    phase: Phase,
    points: Option<Vec<Point>>,
    landmarks: Vec<Landmark>,
    new_data: bool,
    rng: StdRng,
    activations: u32,
}

impl LandscapeGraph {
    pub fn new(options: LandscapeOptions, rng: StdRng) -> Self {
        Self {
            options,
            phase: Phase::Inactive,
            points: None,
            landmarks: Vec::new(),
            new_data: false,
            rng,
            activations: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Active(_))
    }

    /// How many times the surface has been built.
    pub fn activations(&self) -> u32 {
        self.activations
    }

    pub fn points(&self) -> &[Point] {
        self.points.as_deref().unwrap_or_default()
    }

    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    pub fn scene(&self) -> Option<&Scene> {
        match &self.phase {
            Phase::Active(s) => Some(&s.scene),
            Phase::Inactive => None,
        }
    }

    pub fn scales(&self) -> Option<&ViewportScales> {
        match &self.phase {
            Phase::Active(s) => Some(&s.scales),
            Phase::Inactive => None,
        }
    }

    pub fn zoom(&self) -> ZoomTransform {
        match &self.phase {
            Phase::Active(s) => s.zoom,
            Phase::Inactive => ZoomTransform::IDENTITY,
        }
    }

    /// Replaces the whole point set and draws it.
    pub fn set_data(&mut self, data: LandscapeData) -> Result<RedrawOutcome> {
        let points = data.points.ok_or(LandscapeError::MissingPoints)?;
        log::debug!("[landscape] set_data points={}", points.len());
        self.points = Some(points);
        self.new_data = true;
        self.draw_landscape()
    }

    pub fn draw_landscape(&mut self) -> Result<RedrawOutcome> {
        if self.points.is_none() {
            return Err(LandscapeError::MissingPoints);
        }
        if !self.is_active() {
            self.prepare_display()?;
        }
        self.redraw()
    }

    /// Re-reads the container size and relayouts. No-op while inactive.
    pub fn resize(&mut self) -> Result<RedrawOutcome> {
        let Phase::Active(surface) = &mut self.phase else {
            return Ok(RedrawOutcome::default());
        };
        let host = self
            .options
            .host
            .as_deref()
            .ok_or(LandscapeError::MissingContainer)?;
        surface.scene.resize(host.container_size());
        self.redraw()
    }

    fn prepare_display(&mut self) -> Result<()> {
        let host = self
            .options
            .host
            .as_deref()
            .ok_or(LandscapeError::MissingContainer)?;
        let total = host.container_size();
        let scene = Scene::new(
            total,
            self.options.margin,
            self.options.background_color,
            self.options.tooltip.is_some(),
        );
        let plot = scene.plot_size;
        self.phase = Phase::Active(Surface {
            scene,
            zoom: ZoomTransform::IDENTITY,
            scales: ViewportScales::compute(plot.x, plot.y, 0, 0.0),
        });
        self.activations += 1;
        log::info!("[landscape] surface built {:.0}x{:.0}", total.x, total.y);
        Ok(())
    }

    fn redraw(&mut self) -> Result<RedrawOutcome> {
        let Self {
            options,
            phase,
            points,
            landmarks,
            new_data,
            rng,
            ..
        } = self;
        let points = points.as_deref().ok_or(LandscapeError::MissingPoints)?;
        let Phase::Active(surface) = phase else {
            return Err(LandscapeError::MissingContainer);
        };

        let plot = surface.scene.plot_size;
        let max_views = points.iter().map(|p| p.views).fold(0.0, f64::max);
        surface.scales = ViewportScales::compute(plot.x, plot.y, points.len(), max_views);
        // rebinding the scales resets any pan/zoom
        surface.zoom.reset();

        join_circles(&mut surface.scene, &surface.scales, points, options.point_color);

        let mut outcome = RedrawOutcome::default();
        if let Some(settings) = options.landmarks.as_ref() {
            if *new_data {
                let host = options
                    .host
                    .as_deref()
                    .ok_or(LandscapeError::MissingContainer)?;
                *landmarks =
                    place_landmarks(points, &surface.scales, settings.max_landmarks, host, rng);
                build_labels(&mut surface.scene, &surface.scales, landmarks);
                if let Some(toggle) = settings.toggle.as_deref() {
                    apply_toggle(&mut surface.scene, toggle);
                }
            } else {
                rescale_labels(&mut surface.scene, &surface.scales, landmarks);
                if settings.toggle.is_some() {
                    outcome.refresh_landmarks_after_ms = Some(LANDMARK_REFRESH_DELAY_MS);
                }
            }
        }
        *new_data = false;

        log::debug!(
            "[landscape] redraw points={} circles={} exiting={} labels={}",
            points.len(),
            surface.scene.circles.len(),
            surface.scene.exiting.len(),
            surface.scene.labels.len()
        );
        Ok(outcome)
    }

    /// Applies the landmark toggle: all hidden when unchecked, otherwise
    /// un-hidden and then thinned by the overlap filter. Returns the number
    /// of visible labels.
    pub fn toggle_landmarks(&mut self) -> usize {
        let Some(toggle) = self
            .options
            .landmarks
            .as_ref()
            .and_then(|s| s.toggle.as_deref())
        else {
            return 0;
        };
        match &mut self.phase {
            Phase::Active(surface) => apply_toggle(&mut surface.scene, toggle),
            Phase::Inactive => 0,
        }
    }

    /// Topmost point under `container_point` (container pixels).
    pub fn hit_test(&self, container_point: Vec2) -> Option<usize> {
        let Phase::Active(surface) = &self.phase else {
            return None;
        };
        let p = container_point - self.options.margin.offset();
        surface
            .scene
            .circles
            .iter()
            .rposition(|c| Vec2::new(c.cx.value(), c.cy.value()).distance(p) <= c.r.value())
    }

    /// Highlights a point and returns its tooltip text, if tooltips are
    /// configured.
    pub fn hover(&mut self, index: usize) -> Result<Option<String>> {
        let point = self
            .points
            .as_deref()
            .and_then(|p| p.get(index))
            .ok_or(LandscapeError::UnknownPoint(index))?;
        let Phase::Active(surface) = &mut self.phase else {
            return Err(LandscapeError::UnknownPoint(index));
        };
        let circle = surface
            .scene
            .circles
            .get_mut(index)
            .ok_or(LandscapeError::UnknownPoint(index))?;
        circle.highlighted = true;
        circle.fill = self.options.point_color.brighter(HOVER_BRIGHTEN);

        let Some(formatter) = &self.options.tooltip else {
            return Ok(None);
        };
        let html = formatter.create_text(point)?;
        surface.scene.tooltip_visible = true;
        Ok(Some(html))
    }

    pub fn unhover(&mut self, index: usize) {
        let Phase::Active(surface) = &mut self.phase else {
            return;
        };
        if let Some(circle) = surface.scene.circles.get_mut(index) {
            circle.highlighted = false;
            circle.fill = self.options.point_color;
        }
        surface.scene.tooltip_visible = false;
    }

    /// Top-left corner for a tooltip of `tooltip_size`, in container pixels.
    ///
    /// The box flips to the left of the point on the right half of the
    /// container and above it on the bottom half.
    pub fn place_tooltip(&self, index: usize, tooltip_size: Vec2) -> Result<Vec2> {
        let point = self
            .points()
            .get(index)
            .ok_or(LandscapeError::UnknownPoint(index))?;
        let Phase::Active(surface) = &self.phase else {
            return Err(LandscapeError::UnknownPoint(index));
        };
        let coords = surface
            .zoom
            .apply(surface.scales.position(Vec2::new(point.x, point.y)));
        let reach = surface.scales.tooltip_radius(point.views) * surface.zoom.scale;
        let half = surface.scene.total_size / 2.0;
        let dx = if coords.x > half.x {
            -tooltip_size.x - reach
        } else {
            reach
        };
        let dy = if coords.y > half.y {
            -tooltip_size.y + TOOLTIP_VERTICAL_OFFSET_PX
        } else {
            -TOOLTIP_VERTICAL_OFFSET_PX
        };
        Ok(coords + self.options.margin.offset() + Vec2::new(dx, dy))
    }

    /// Detail page of the clicked lecture.
    pub fn click(&self, index: usize) -> Result<String> {
        let point = self
            .points()
            .get(index)
            .ok_or(LandscapeError::UnknownPoint(index))?;
        Ok(format!("{}{}", self.options.detail_base_url, point.slug))
    }

    /// Zooms about `container_point` by `factor`.
    pub fn zoom_at(&mut self, container_point: Vec2, factor: f32) {
        let anchor = container_point - self.options.margin.offset();
        self.update_zoom(|z| z.zoom_about(anchor, factor));
    }

    pub fn pan_by(&mut self, delta: Vec2) {
        self.update_zoom(|z| z.pan_by(delta));
    }

    fn update_zoom(&mut self, change: impl FnOnce(&mut ZoomTransform)) {
        let Phase::Active(surface) = &mut self.phase else {
            return;
        };
        change(&mut surface.zoom);
        let points = self.points.as_deref().unwrap_or_default();
        for (circle, point) in surface.scene.circles.iter_mut().zip(points) {
            let pos = surface
                .zoom
                .apply(surface.scales.position(Vec2::new(point.x, point.y)));
            circle.cx.set(pos.x);
            circle.cy.set(pos.y);
        }
        for (label, landmark) in surface.scene.labels.iter_mut().zip(&self.landmarks) {
            let pos = surface.zoom.apply(surface.scales.position(landmark.anchor));
            label.x.set(pos.x - label.width / 2.0);
            label.y.set(pos.y);
        }
    }

    /// Steps running transitions by `dt_ms`.
    pub fn advance(&mut self, dt_ms: f32) {
        if let Phase::Active(surface) = &mut self.phase {
            surface.scene.advance(dt_ms);
        }
    }
}

/// Index join: persisting circles move, new ones grow from zero, surplus
/// ones shrink away.
fn join_circles(scene: &mut Scene, scales: &ViewportScales, points: &[Point], fill: Rgb) {
    let existing = scene.circles.len();
    for (i, point) in points.iter().enumerate() {
        let pos = scales.position(Vec2::new(point.x, point.y));
        let r = scales.point_radius(point.views);
        if i < existing {
            let circle = &mut scene.circles[i];
            circle.cx.retarget(pos.x, TRANSITION_MS);
            circle.cy.retarget(pos.y, TRANSITION_MS);
            circle.r.retarget(r, TRANSITION_MS);
        } else {
            let id = scene.alloc_id();
            scene.circles.push(CircleNode {
                id,
                cx: Tween::fixed(pos.x),
                cy: Tween::fixed(pos.y),
                r: Tween::new(0.0, r, TRANSITION_MS),
                fill,
                highlighted: false,
            });
        }
    }
    if existing > points.len() {
        let leaving: Vec<CircleNode> = scene.circles.drain(points.len()..).collect();
        for mut circle in leaving {
            circle.r.retarget(0.0, TRANSITION_MS);
            scene.exiting.push(circle);
        }
    }
}

fn place_landmarks<R>(
    points: &[Point],
    scales: &ViewportScales,
    max_landmarks: usize,
    host: &dyn LayoutHost,
    rng: &mut R,
) -> Vec<Landmark>
where
    R: Rng + ?Sized,
{
    let anchors = seed_anchors(points, max_landmarks, rng);
    let seeded = anchors.len();
    let mut placed: Vec<Landmark> = anchors
        .into_iter()
        .filter_map(|anchor| {
            let nearby = points_within(points, anchor, scales, LANDMARK_NAMING_RADIUS_PX);
            if nearby.is_empty() {
                return None;
            }
            let text = pick_text(nearby, rng)?;
            let size = host.measure_label(&text);
            Some(Landmark {
                anchor,
                text,
                width: size.x,
                height: size.y,
            })
        })
        .collect();
    placed.retain(|l| {
        !points_within(points, l.anchor, scales, LANDMARK_PRUNE_RADIUS_PX).is_empty()
    });
    log::debug!("[landmarks] seeded={} placed={}", seeded, placed.len());
    placed
}

fn build_labels(scene: &mut Scene, scales: &ViewportScales, landmarks: &[Landmark]) {
    scene.labels.clear();
    for landmark in landmarks {
        let pos = scales.position(landmark.anchor);
        let id = scene.alloc_id();
        scene.labels.push(LabelNode {
            id,
            text: landmark.text.clone(),
            x: Tween::fixed(pos.x - landmark.width / 2.0),
            y: Tween::fixed(pos.y),
            width: landmark.width,
            height: landmark.height,
            opacity: Tween::new(0.0, 1.0, TRANSITION_MS),
            hidden: false,
        });
    }
}

fn rescale_labels(scene: &mut Scene, scales: &ViewportScales, landmarks: &[Landmark]) {
    for (label, landmark) in scene.labels.iter_mut().zip(landmarks) {
        let pos = scales.position(landmark.anchor);
        label.x.retarget(pos.x - label.width / 2.0, TRANSITION_MS);
        label.y.retarget(pos.y, TRANSITION_MS);
    }
}

fn apply_toggle(scene: &mut Scene, toggle: &dyn LandmarkToggle) -> usize {
    if !toggle.is_checked() {
        for label in &mut scene.labels {
            label.hidden = true;
        }
        return 0;
    }
    let boxes: Vec<BoundingBox> = scene.labels.iter().map(LabelNode::bounding_box).collect();
    let mask = visible_mask(&boxes);
    for (label, visible) in scene.labels.iter_mut().zip(&mask) {
        label.hidden = !*visible;
    }
    let shown = mask.iter().filter(|v| **v).count();
    log::debug!("[landmarks] visible={} of {}", shown, mask.len());
    shown
}

//! Mirrors the core scene onto SVG elements.

use crate::dom::js_err;
use fnv::{FnvHashMap, FnvHashSet};
use landscape_core::constants::{LANDMARK_FONT_FAMILY, LANDMARK_FONT_SIZE_PX, LANDMARK_FONT_WEIGHT};
use landscape_core::{CircleNode, LabelNode, Scene};
use std::fmt::Display;
use web_sys as web;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

pub struct SvgSurface {
    document: web::Document,
    svg: web::Element,
    root: web::Element,
    background: web::Element,
    clip_rect: web::Element,
    points_layer: web::Element,
    labels_layer: web::Element,
    circles: FnvHashMap<u64, web::Element>,
    labels: FnvHashMap<u64, web::Element>,
    dirty: bool,
    was_animating: bool,
}

fn create(document: &web::Document, tag: &str) -> anyhow::Result<web::Element> {
    document
        .create_element_ns(Some(SVG_NS), tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))
}

#[inline]
fn set(el: &web::Element, name: &str, value: impl Display) {
    _ = el.set_attribute(name, &value.to_string());
}

fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent.append_child(child).map(|_| ()).map_err(js_err)
}

impl SvgSurface {
    /// Replaces any previous landscape SVG inside `container`.
    pub fn build(
        document: &web::Document,
        container: &web::Element,
        scene: &Scene,
    ) -> anyhow::Result<Self> {
        if let Ok(Some(old)) = container.query_selector("svg#landscape-graph") {
            old.remove();
        }

        let svg = create(document, "svg")?;
        set(&svg, "id", "landscape-graph");
        let root = create(document, "g")?;
        let background = create(document, "rect")?;
        set(&background, "id", "background-rect");

        let clip = create(document, "clipPath")?;
        set(&clip, "id", "area-clip");
        let clip_rect = create(document, "rect")?;
        set(&clip_rect, "id", "clip-rect");
        set(&clip_rect, "x", 0);
        set(&clip_rect, "y", 0);
        append(&clip, &clip_rect)?;

        let body = create(document, "g")?;
        set(&body, "clip-path", "url(#area-clip)");
        let points_layer = create(document, "g")?;
        let labels_layer = create(document, "g")?;
        append(&body, &points_layer)?;
        append(&body, &labels_layer)?;

        append(&root, &background)?;
        append(&root, &clip)?;
        append(&root, &body)?;
        append(&svg, &root)?;
        append(container, &svg)?;

        let surface = Self {
            document: document.clone(),
            svg,
            root,
            background,
            clip_rect,
            points_layer,
            labels_layer,
            circles: FnvHashMap::default(),
            labels: FnvHashMap::default(),
            dirty: true,
            was_animating: false,
        };
        surface.update_display(scene);
        Ok(surface)
    }

    /// Container, background and clip sizes.
    pub fn update_display(&self, scene: &Scene) {
        set(&self.svg, "width", scene.total_size.x);
        set(&self.svg, "height", scene.total_size.y);
        set(
            &self.root,
            "transform",
            format!("translate({},{})", scene.margin.left, scene.margin.top),
        );
        set(&self.background, "fill", scene.background);
        set(&self.background, "width", scene.plot_size.x);
        set(&self.background, "height", scene.plot_size.y);
        set(&self.clip_rect, "width", scene.plot_size.x);
        set(&self.clip_rect, "height", scene.plot_size.y);
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Writes node values into their elements, creating and removing
    /// elements as nodes come and go.
    pub fn sync(&mut self, scene: &Scene) -> anyhow::Result<()> {
        let animating = scene.is_animating();
        if !(self.dirty || animating || self.was_animating) {
            return Ok(());
        }
        self.dirty = false;
        self.was_animating = animating;

        let mut seen = FnvHashSet::default();
        for circle in scene.circles.iter().chain(&scene.exiting) {
            seen.insert(circle.id);
            let el = self.circle_element(circle)?;
            write_circle(&el, circle);
        }
        self.circles.retain(|id, el| {
            let keep = seen.contains(id);
            if !keep {
                el.remove();
            }
            keep
        });

        seen.clear();
        for (i, label) in scene.labels.iter().enumerate() {
            seen.insert(label.id);
            let el = self.label_element(i, label)?;
            write_label(&el, label);
        }
        self.labels.retain(|id, el| {
            let keep = seen.contains(id);
            if !keep {
                el.remove();
            }
            keep
        });
        Ok(())
    }

    fn circle_element(&mut self, circle: &CircleNode) -> anyhow::Result<web::Element> {
        if let Some(el) = self.circles.get(&circle.id) {
            return Ok(el.clone());
        }
        let el = create(&self.document, "circle")?;
        set(&el, "class", "point");
        append(&self.points_layer, &el)?;
        self.circles.insert(circle.id, el.clone());
        Ok(el)
    }

    fn label_element(&mut self, index: usize, label: &LabelNode) -> anyhow::Result<web::Element> {
        if let Some(el) = self.labels.get(&label.id) {
            return Ok(el.clone());
        }
        let el = create(&self.document, "text")?;
        set(&el, "class", "landmark");
        set(&el, "id", format!("landmark-number-{}", index));
        set(&el, "font-size", format!("{}px", LANDMARK_FONT_SIZE_PX));
        set(&el, "font-weight", LANDMARK_FONT_WEIGHT);
        set(&el, "font-family", LANDMARK_FONT_FAMILY);
        set(&el, "pointer-events", "none");
        el.set_text_content(Some(&label.text));
        append(&self.labels_layer, &el)?;
        self.labels.insert(label.id, el.clone());
        Ok(el)
    }
}

fn write_circle(el: &web::Element, circle: &CircleNode) {
    set(el, "cx", circle.cx.value());
    set(el, "cy", circle.cy.value());
    set(el, "r", circle.r.value().max(0.0));
    set(el, "fill", circle.fill);
    _ = el.class_list().toggle_with_force("highlighted", circle.highlighted);
}

fn write_label(el: &web::Element, label: &LabelNode) {
    set(el, "x", label.x.value());
    set(el, "y", label.y.value());
    set(el, "opacity", label.opacity.value());
    _ = el.class_list().toggle_with_force("hidden", label.hidden);
    set(el, "display", if label.hidden { "none" } else { "inline" });
}

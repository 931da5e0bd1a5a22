//! Page-backed implementations of the core's host capabilities.

use glam::Vec2;
use landscape_core::constants::{LANDMARK_FONT_FAMILY, LANDMARK_FONT_SIZE_PX, LANDMARK_FONT_WEIGHT};
use landscape_core::{LandmarkToggle, LayoutHost};
use wasm_bindgen::JsCast;
use web_sys as web;

// average glyph advance relative to font size, used when no 2d context exists
const FALLBACK_ADVANCE: f32 = 0.6;

pub struct DomLayoutHost {
    container: web::HtmlElement,
    measure: Option<web::CanvasRenderingContext2d>,
}

impl DomLayoutHost {
    pub fn new(document: &web::Document, container: web::HtmlElement) -> Self {
        let measure = measuring_context(document);
        if measure.is_none() {
            log::warn!("[host] no 2d context; landmark widths are estimated");
        }
        Self { container, measure }
    }
}

fn measuring_context(document: &web::Document) -> Option<web::CanvasRenderingContext2d> {
    let canvas = document
        .create_element("canvas")
        .ok()?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()?;
    let ctx = canvas
        .get_context("2d")
        .ok()??
        .dyn_into::<web::CanvasRenderingContext2d>()
        .ok()?;
    ctx.set_font(&format!(
        "{} {}px {}",
        LANDMARK_FONT_WEIGHT, LANDMARK_FONT_SIZE_PX, LANDMARK_FONT_FAMILY
    ));
    Some(ctx)
}

impl LayoutHost for DomLayoutHost {
    fn container_size(&self) -> Vec2 {
        let rect = self.container.get_bounding_client_rect();
        Vec2::new(rect.width() as f32, rect.height() as f32)
    }

    fn measure_label(&self, text: &str) -> Vec2 {
        let width = self
            .measure
            .as_ref()
            .and_then(|ctx| ctx.measure_text(text).ok())
            .map(|m| m.width() as f32)
            .unwrap_or_else(|| {
                text.chars().count() as f32 * LANDMARK_FONT_SIZE_PX * FALLBACK_ADVANCE
            });
        Vec2::new(width, LANDMARK_FONT_SIZE_PX)
    }
}

/// `#landmarks-check` checkbox.
pub struct CheckboxToggle {
    input: web::HtmlInputElement,
}

impl CheckboxToggle {
    pub fn find(document: &web::Document, id: &str) -> Option<Self> {
        document
            .get_element_by_id(id)?
            .dyn_into::<web::HtmlInputElement>()
            .ok()
            .map(|input| Self { input })
    }
}

impl LandmarkToggle for CheckboxToggle {
    fn is_checked(&self) -> bool {
        self.input.checked()
    }
}

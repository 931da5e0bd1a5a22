#![cfg(target_arch = "wasm32")]
use glam::Vec2;
use instant::Instant;
use landscape_core::constants::RESIZE_DEBOUNCE_MS;
use landscape_core::{
    Coalescer, LandscapeConfig, LandscapeData, LandscapeGraph, LandscapeOptions, LanguageTable,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod app;
mod dom;
mod events;
mod frame;
mod host;
mod svg;
mod tooltip;

const LANDMARK_CHECKBOX_ID: &str = "landmarks-check";

/// Options object accepted from the page: the landscape config plus an
/// optional language table that replaces the built-in one.
#[derive(Deserialize, Default)]
#[serde(default)]
struct PageConfig {
    #[serde(flatten)]
    landscape: LandscapeConfig,
    languages: Option<BTreeMap<String, String>>,
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("landscape-web starting");
    Ok(())
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn json_of(value: &JsValue) -> Result<String, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok("{}".to_string());
    }
    Ok(js_sys::JSON::stringify(value)?.into())
}

/// The landscape graph bound to one container element.
#[wasm_bindgen]
pub struct Landscape {
    state: Rc<app::AppState>,
}

#[wasm_bindgen]
impl Landscape {
    /// `container_id` names the element the SVG is drawn into; `options`
    /// follows `LandscapeConfig`, with an optional `languages` map.
    #[wasm_bindgen(constructor)]
    pub fn new(container_id: &str, options: JsValue) -> Result<Landscape, JsValue> {
        let state = init(container_id, &json_of(&options)?).map_err(to_js)?;
        Ok(Landscape { state })
    }

    /// Replaces the point set, e.g. `{ points: [...] }`.
    #[wasm_bindgen(js_name = setData)]
    pub fn set_data(&self, data: JsValue) -> Result<(), JsValue> {
        let data = LandscapeData::from_json(&json_of(&data)?).map_err(to_js)?;
        let outcome = self.state.graph.borrow_mut().set_data(data).map_err(to_js)?;
        self.state.after_redraw(outcome);
        Ok(())
    }

    #[wasm_bindgen(js_name = drawLandscape)]
    pub fn draw_landscape(&self) -> Result<(), JsValue> {
        let outcome = self.state.graph.borrow_mut().draw_landscape().map_err(to_js)?;
        self.state.after_redraw(outcome);
        Ok(())
    }

    #[wasm_bindgen(js_name = toggleLandmarks)]
    pub fn toggle_landmarks(&self) -> usize {
        let visible = self.state.graph.borrow_mut().toggle_landmarks();
        self.state.mark_dirty();
        visible
    }

    #[wasm_bindgen(js_name = pointCount)]
    pub fn point_count(&self) -> usize {
        self.state.graph.borrow().points().len()
    }
}

fn init(container_id: &str, options_json: &str) -> anyhow::Result<Rc<app::AppState>> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container: web::HtmlElement = document
        .get_element_by_id(container_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", container_id))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let page: PageConfig = serde_json::from_str(options_json)?;
    let mut options = LandscapeOptions::from_config(&page.landscape).with_host(Box::new(
        host::DomLayoutHost::new(&document, container.clone()),
    ));
    if let Some(toggle) = host::CheckboxToggle::find(&document, LANDMARK_CHECKBOX_ID) {
        options = options.with_landmark_toggle(Box::new(toggle));
    }
    if let Some(languages) = page.languages {
        options = options.with_languages(LanguageTable::from_pairs(languages));
    }

    let graph = LandscapeGraph::new(options, StdRng::from_entropy());
    let state = Rc::new(app::AppState {
        document,
        container,
        graph: RefCell::new(graph),
        surface: RefCell::new(None),
        tooltip: RefCell::new(None),
        resize: RefCell::new(Coalescer::new(RESIZE_DEBOUNCE_MS)),
        hovered: Cell::new(None),
        drag_from: Cell::new(None::<Vec2>),
        dragged: Cell::new(false),
    });

    events::wire_input_handlers(&state);
    events::wire_resize(&state);
    events::wire_landmark_toggle(&state, LANDMARK_CHECKBOX_ID);

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        state: state.clone(),
        last_instant: Instant::now(),
    })));
    log::info!("[landscape] bound to #{}", container_id);
    Ok(state)
}

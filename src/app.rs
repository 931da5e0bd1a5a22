//! Browser-side state shared by every event closure.

use crate::{dom, svg, tooltip};
use glam::Vec2;
use landscape_core::{Coalescer, LandscapeGraph, RedrawOutcome};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

pub struct AppState {
    pub document: web::Document,
    pub container: web::HtmlElement,
    pub graph: RefCell<LandscapeGraph>,
    pub surface: RefCell<Option<svg::SvgSurface>>,
    pub tooltip: RefCell<Option<web::HtmlElement>>,
    pub resize: RefCell<Coalescer>,
    pub hovered: Cell<Option<usize>>,
    /// Last pointer position while the button is held.
    pub drag_from: Cell<Option<Vec2>>,
    pub dragged: Cell<bool>,
}

impl AppState {
    pub fn mark_dirty(&self) {
        if let Some(surface) = self.surface.borrow_mut().as_mut() {
            surface.mark_dirty();
        }
    }

    /// Builds the SVG the first time the graph is active and resizes it on
    /// later redraws, then schedules whatever the redraw asked for.
    pub fn after_redraw(self: &Rc<Self>, outcome: RedrawOutcome) {
        self.sync_surface();
        if let Some(delay) = outcome.refresh_landmarks_after_ms {
            let state = self.clone();
            dom::set_timeout(delay, move || {
                state.graph.borrow_mut().toggle_landmarks();
                state.mark_dirty();
            });
        }
    }

    fn sync_surface(&self) {
        let graph = self.graph.borrow();
        let Some(scene) = graph.scene() else {
            return;
        };
        let mut surface = self.surface.borrow_mut();
        match surface.as_mut() {
            Some(s) => {
                s.update_display(scene);
                s.mark_dirty();
            }
            None => match svg::SvgSurface::build(&self.document, &self.container, scene) {
                Ok(s) => {
                    *surface = Some(s);
                    if scene.has_tooltip {
                        *self.tooltip.borrow_mut() =
                            tooltip::create(&self.document, &self.container);
                    }
                }
                Err(e) => log::error!("[svg] build failed: {:?}", e),
            },
        }
    }

    pub fn relayout(self: &Rc<Self>) {
        let outcome = self.graph.borrow_mut().resize();
        match outcome {
            Ok(outcome) => self.after_redraw(outcome),
            Err(e) => log::error!("[resize] {}", e),
        }
    }

    pub fn hover(&self, index: usize) {
        let html = match self.graph.borrow_mut().hover(index) {
            Ok(html) => html,
            Err(e) => {
                log::error!("[hover] {}", e);
                None
            }
        };
        self.hovered.set(Some(index));
        self.mark_dirty();
        let shown = self.graph.borrow().scene().is_some_and(|s| s.tooltip_visible);
        if !shown {
            return;
        }

        let (Some(html), Some(tip)) = (html, self.tooltip.borrow().clone()) else {
            return;
        };
        tooltip::set_html(&tip, &html);
        // a hidden box measures as zero, so reveal it before measuring
        tooltip::reveal(&tip);
        let size = tooltip::outer_size(&tip);
        match self.graph.borrow().place_tooltip(index, size) {
            Ok(pos) => tooltip::move_to(&tip, pos),
            Err(e) => {
                log::error!("[tooltip] {}", e);
                tooltip::hide(&tip);
            }
        }
    }

    pub fn unhover(&self) {
        let Some(index) = self.hovered.take() else {
            return;
        };
        self.graph.borrow_mut().unhover(index);
        if let Some(tip) = self.tooltip.borrow().as_ref() {
            tooltip::hide(tip);
        }
        self.mark_dirty();
    }
}

use crate::app::AppState;
use crate::dom;
use landscape_core::constants::WHEEL_ZOOM_STEP;
use std::rc::Rc;
use web_sys as web;

// pointer travel below which a press-release still counts as a click
const CLICK_SLOP_PX: f32 = 3.0;

pub fn wire_input_handlers(state: &Rc<AppState>) {
    wire_pointermove(state);
    wire_pointerdown(state);
    wire_pointerup(state);
    wire_click(state);
    wire_wheel(state);
}

fn wire_pointermove(state: &Rc<AppState>) {
    let s = state.clone();
    dom::add_listener(&state.container, "mousemove", move |ev: web::MouseEvent| {
        let pos = dom::pointer_in(&ev, &s.container);

        if let Some(from) = s.drag_from.get() {
            let delta = pos - from;
            if delta.length() > CLICK_SLOP_PX || s.dragged.get() {
                s.dragged.set(true);
                s.drag_from.set(Some(pos));
                s.unhover();
                s.graph.borrow_mut().pan_by(delta);
                s.mark_dirty();
            }
            return;
        }

        let hit = s.graph.borrow().hit_test(pos);
        if hit == s.hovered.get() {
            return;
        }
        s.unhover();
        if let Some(i) = hit {
            s.hover(i);
        }
    });

    let s = state.clone();
    dom::add_listener(&state.container, "mouseleave", move |_: web::MouseEvent| {
        s.drag_from.set(None);
        s.unhover();
    });
}

fn wire_pointerdown(state: &Rc<AppState>) {
    let s = state.clone();
    dom::add_listener(&state.container, "mousedown", move |ev: web::MouseEvent| {
        s.drag_from.set(Some(dom::pointer_in(&ev, &s.container)));
        s.dragged.set(false);
    });
}

fn wire_pointerup(state: &Rc<AppState>) {
    let s = state.clone();
    dom::add_listener(&state.container, "mouseup", move |_: web::MouseEvent| {
        s.drag_from.set(None);
    });
}

fn wire_click(state: &Rc<AppState>) {
    let s = state.clone();
    dom::add_listener(&state.container, "click", move |ev: web::MouseEvent| {
        if s.dragged.replace(false) {
            return;
        }
        let pos = dom::pointer_in(&ev, &s.container);
        let Some(i) = s.graph.borrow().hit_test(pos) else {
            return;
        };
        match s.graph.borrow().click(i) {
            Ok(url) => {
                log::info!("[click] open {}", url);
                dom::open_link(&url);
            }
            Err(e) => log::error!("[click] {}", e),
        }
    });
}

fn wire_wheel(state: &Rc<AppState>) {
    let s = state.clone();
    dom::add_listener(&state.container, "wheel", move |ev: web::WheelEvent| {
        ev.prevent_default();
        let dy = ev.delta_y();
        if dy == 0.0 {
            return;
        }
        let factor = if dy < 0.0 {
            WHEEL_ZOOM_STEP
        } else {
            1.0 / WHEEL_ZOOM_STEP
        };
        let pos = dom::pointer_in(&ev, &s.container);
        s.unhover();
        s.graph.borrow_mut().zoom_at(pos, factor);
        s.mark_dirty();
    });
}

/// Coalesces window resizes and relayouts once they stop.
pub fn wire_resize(state: &Rc<AppState>) {
    let Some(window) = web::window() else {
        return;
    };
    let s = state.clone();
    dom::add_listener(&window, "resize", move |_: web::Event| {
        if !s.graph.borrow().is_active() {
            return;
        }
        let (ticket, delay) = {
            let mut resize = s.resize.borrow_mut();
            (resize.schedule(), resize.window_ms())
        };
        let s2 = s.clone();
        dom::set_timeout(delay, move || {
            if s2.resize.borrow().is_latest(ticket) {
                s2.relayout();
            }
        });
    });
}

pub fn wire_landmark_toggle(state: &Rc<AppState>, checkbox_id: &str) {
    let Some(el) = state.document.get_element_by_id(checkbox_id) else {
        return;
    };
    let s = state.clone();
    dom::add_listener(&el, "click", move |_: web::Event| {
        let visible = s.graph.borrow_mut().toggle_landmarks();
        log::debug!("[landmarks] toggled, visible={}", visible);
        s.mark_dirty();
    });
}

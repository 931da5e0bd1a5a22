use crate::app::AppState;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub state: Rc<AppState>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_ms = dt.as_secs_f32() * 1000.0;

        let mut graph = self.state.graph.borrow_mut();
        graph.advance(dt_ms);
        let Some(scene) = graph.scene() else {
            return;
        };
        if let Some(surface) = self.state.surface.borrow_mut().as_mut() {
            if let Err(e) = surface.sync(scene) {
                log::error!("[frame] sync failed: {:?}", e);
            }
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let cb = tick.borrow();
    let (Some(w), Some(cb)) = (web::window(), cb.as_ref()) else {
        return;
    };
    _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
}

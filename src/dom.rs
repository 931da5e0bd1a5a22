use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

pub fn add_listener<E>(target: &web::EventTarget, event: &str, mut handler: impl FnMut(E) + 'static)
where
    E: JsCast + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
    if let Err(e) = target.add_event_listener_with_callback(event, callback) {
        log::error!("[dom] {} listener: {:?}", event, e);
    }
    closure.forget();
}

/// One-shot `setTimeout`; the closure is freed once it runs.
pub fn set_timeout(delay_ms: u32, handler: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let callback = Closure::once_into_js(handler);
    let scheduled = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay_ms as i32,
    );
    if let Err(e) = scheduled {
        log::error!("[dom] setTimeout: {:?}", e);
    }
}

/// Pointer position relative to the element's top-left corner.
#[inline]
pub fn pointer_in(ev: &web::MouseEvent, element: &web::Element) -> glam::Vec2 {
    let rect = element.get_bounding_client_rect();
    glam::Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

pub fn open_link(url: &str) {
    if let Some(w) = web::window() {
        if let Err(e) = w.open_with_url(url) {
            log::error!("[dom] open {}: {:?}", url, e);
        }
    }
}

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

const TOOLTIP_ID: &str = "landscape-tooltip";

/// Replaces any previous tooltip box in `container` with a hidden one.
pub fn create(document: &web::Document, container: &web::Element) -> Option<web::HtmlElement> {
    if let Some(old) = document.get_element_by_id(TOOLTIP_ID) {
        old.remove();
    }
    let el = document
        .create_element("div")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    el.set_id(TOOLTIP_ID);
    _ = el.class_list().add_1("notvisible");
    container.append_child(&el).ok()?;
    Some(el)
}

#[inline]
pub fn set_html(el: &web::HtmlElement, html: &str) {
    el.set_inner_html(html);
}

#[inline]
pub fn outer_size(el: &web::HtmlElement) -> Vec2 {
    Vec2::new(el.offset_width() as f32, el.offset_height() as f32)
}

#[inline]
pub fn reveal(el: &web::HtmlElement) {
    _ = el.class_list().remove_1("notvisible");
}

pub fn move_to(el: &web::HtmlElement, pos: Vec2) {
    let style = el.style();
    _ = style.set_property("left", &format!("{}px", pos.x));
    _ = style.set_property("top", &format!("{}px", pos.y));
}

#[inline]
pub fn hide(el: &web::HtmlElement) {
    _ = el.class_list().add_1("notvisible");
}

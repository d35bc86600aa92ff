use crate::core::ScrollMetrics;
use crate::error::WebError;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window() -> Result<web::Window, WebError> {
    web::window().ok_or(WebError::NoWindow)
}

#[inline]
pub fn element(document: &web::Document, id: &'static str) -> Result<web::Element, WebError> {
    document
        .get_element_by_id(id)
        .ok_or(WebError::MissingElement(id))
}

pub fn html_element(document: &web::Document, id: &'static str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn canvas(document: &web::Document, id: &'static str) -> Result<web::HtmlCanvasElement, WebError> {
    element(document, id)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| WebError::Js(format!("#{id} is not a canvas: {:?}", e)))
}

/// Match the canvas backing store to the viewport in CSS pixels.
/// Returns the new `(width, height)`.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let Some(w) = web::window() else {
        return (canvas.width(), canvas.height());
    };
    let w_px = w
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as u32;
    let h_px = w
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    (canvas.width(), canvas.height())
}

pub fn scroll_metrics(document: &web::Document) -> ScrollMetrics {
    match document.document_element() {
        Some(root) => ScrollMetrics {
            scroll_top: root.scroll_top() as f32,
            scroll_height: root.scroll_height() as f32,
            client_height: root.client_height() as f32,
        },
        None => ScrollMetrics::default(),
    }
}

pub fn scroll_to_top() {
    if let Some(w) = web::window() {
        w.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[inline]
pub fn set_text(document: &web::Document, id: &'static str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn set_hidden(document: &web::Document, id: &'static str, hidden: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        let cl = el.class_list();
        _ = if hidden {
            cl.add_1("hidden")
        } else {
            cl.remove_1("hidden")
        };
    }
}

pub fn body_attribute(document: &web::Document, name: &str) -> Option<String> {
    document.body().and_then(|b| b.get_attribute(name))
}

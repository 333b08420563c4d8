//! Small DOM helpers shared across the UI wiring.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach a click handler to the element with the given id.
/// The closure is leaked; these listeners live for the page lifetime.
pub fn add_click_listener(document: &web::Document, id: &str, mut f: impl FnMut() + 'static) {
    let Some(el) = document.get_element_by_id(id) else {
        log::warn!("missing element #{id}");
        return;
    };
    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| f()) as Box<dyn FnMut(_)>);
    if el
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("failed to attach click listener to #{id}");
    }
    closure.forget();
}

/// Match the canvas backing store to its CSS size times the device pixel
/// ratio. Returns the new backing size in device pixels.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let dpr = web::window().map_or(1.0, |w| w.device_pixel_ratio());
    let rect = canvas.get_bounding_client_rect();
    let width = ((rect.width() * dpr) as u32).max(1);
    let height = ((rect.height() * dpr) as u32).max(1);
    if canvas.width() != width {
        canvas.set_width(width);
    }
    if canvas.height() != height {
        canvas.set_height(height);
    }
    (width, height)
}

/// Visibility is driven by the `hidden` class so CSS keeps control of layout.
pub fn set_hidden(document: &web::Document, id: &str, hidden: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        let classes = el.class_list();
        let result = if hidden {
            classes.add_1("hidden")
        } else {
            classes.remove_1("hidden")
        };
        if result.is_err() {
            log::warn!("failed to toggle visibility of #{id}");
        }
    }
}

pub fn show(document: &web::Document, id: &str) {
    set_hidden(document, id, false);
}

pub fn hide(document: &web::Document, id: &str) {
    set_hidden(document, id, true);
}

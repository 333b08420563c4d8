//! Event wiring: pointer drag and wheel zoom on the canvas, touch pinch
//! and swipe, and the modal-scoped keyboard handler.

pub mod keyboard;
pub mod pointer;
pub mod touch;

pub use keyboard::KeyScope;

use glam::Vec2;
use web_sys as web;

/// Convert a client-space point to an offset from the canvas center, in
/// canvas backing pixels (the zoom anchor space).
pub(crate) fn canvas_center_offset(canvas: &web::HtmlCanvasElement, client: Vec2) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let scale = if rect.width() > 0.0 {
        canvas.width() as f64 / rect.width()
    } else {
        1.0
    };
    let x = (client.x as f64 - rect.left()) * scale - canvas.width() as f64 * 0.5;
    let y = (client.y as f64 - rect.top()) * scale - canvas.height() as f64 * 0.5;
    Vec2::new(x as f32, y as f32)
}

/// Convert a client-space point to canvas backing pixels, top-left origin
/// (the space the paper's projected bounding box lives in).
pub(crate) fn canvas_backing_point(canvas: &web::HtmlCanvasElement, client: Vec2) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let scale = if rect.width() > 0.0 {
        canvas.width() as f64 / rect.width()
    } else {
        1.0
    };
    Vec2::new(
        ((client.x as f64 - rect.left()) * scale) as f32,
        ((client.y as f64 - rect.top()) * scale) as f32,
    )
}

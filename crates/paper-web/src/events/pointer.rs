//! Pointer drag (rotation) and wheel zoom on the paper canvas.
//!
//! Drag deltas stay in client pixels so rotation sensitivity matches the
//! screen; wheel anchors are converted to backing-pixel offsets from the
//! canvas center before they reach the reducer.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use paper_core::transform::InputEvent;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::viewer::Viewer;

pub fn wire(viewer: &Rc<RefCell<Viewer>>, canvas: &web::HtmlCanvasElement) {
    wire_pointer_down(viewer, canvas);
    wire_pointer_move(viewer, canvas);
    wire_pointer_end(viewer, canvas, "pointerup");
    wire_pointer_end(viewer, canvas, "pointercancel");
    wire_pointer_leave(viewer, canvas);
    wire_wheel(viewer, canvas);
}

fn attach(canvas: &web::HtmlCanvasElement, event: &str, closure: Closure<dyn FnMut(web::PointerEvent)>) {
    if canvas
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("failed to attach {event} listener");
    }
    closure.forget();
}

fn wire_pointer_down(viewer: &Rc<RefCell<Viewer>>, canvas: &web::HtmlCanvasElement) {
    let rc = viewer.clone();
    let target = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut v = rc.borrow_mut();
        if !v.is_modal_open() || v.photo_open.is_some() {
            return;
        }
        let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        // Rotation drags start on the paper; presses in the margin are
        // left for swipe navigation.
        if let Some(rect) = v.paper_rect {
            if !rect.contains(super::canvas_backing_point(&target, pos)) {
                return;
            }
        }
        // Capture keeps the drag alive when the pointer leaves the canvas
        let _ = target.set_pointer_capture(ev.pointer_id());
        v.interaction.apply(InputEvent::PointerDown {
            pos,
            primary: ev.is_primary() && ev.button() == 0,
        });
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    attach(canvas, "pointerdown", closure);
}

fn wire_pointer_move(viewer: &Rc<RefCell<Viewer>>, canvas: &web::HtmlCanvasElement) {
    let rc = viewer.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        rc.borrow_mut().interaction.apply(InputEvent::PointerMove {
            pos: Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        });
    }) as Box<dyn FnMut(_)>);
    attach(canvas, "pointermove", closure);
}

fn wire_pointer_end(viewer: &Rc<RefCell<Viewer>>, canvas: &web::HtmlCanvasElement, event: &str) {
    let rc = viewer.clone();
    let target = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let _ = target.release_pointer_capture(ev.pointer_id());
        rc.borrow_mut().interaction.apply(InputEvent::PointerUp);
    }) as Box<dyn FnMut(_)>);
    attach(canvas, event, closure);
}

fn wire_pointer_leave(viewer: &Rc<RefCell<Viewer>>, canvas: &web::HtmlCanvasElement) {
    let rc = viewer.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        rc.borrow_mut().interaction.apply(InputEvent::PointerLeave);
    }) as Box<dyn FnMut(_)>);
    attach(canvas, "pointerleave", closure);
}

fn wire_wheel(viewer: &Rc<RefCell<Viewer>>, canvas: &web::HtmlCanvasElement) {
    let rc = viewer.clone();
    let target = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let mut v = rc.borrow_mut();
        if !v.is_modal_open() || v.photo_open.is_some() {
            return;
        }
        let cursor = super::canvas_center_offset(
            &target,
            Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        );
        v.interaction.apply(InputEvent::Wheel {
            cursor,
            zoom_in: ev.delta_y() < 0.0,
        });
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    // prevent_default on wheel needs a non-passive listener
    let options = web::AddEventListenerOptions::new();
    options.set_passive(false);
    if canvas
        .add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .is_err()
    {
        log::warn!("failed to attach wheel listener");
    }
    closure.forget();
}

//! Touch gestures: two-finger pinch zoom and one-finger horizontal swipe
//! for page navigation. One-finger drags on the paper rotate it through
//! the pointer events; only touches starting in the margin around the
//! projected paper arm swipe detection. The reducer suppresses rotation
//! while a pinch is active.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use paper_core::stack::swipe_direction;
use paper_core::transform::InputEvent;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::viewer::Viewer;

/// Ghost clicks trail a touch by a few hundred milliseconds.
const CLICK_SUPPRESS_MS: f64 = 400.0;

pub fn wire(viewer: &Rc<RefCell<Viewer>>, canvas: &web::HtmlCanvasElement) {
    wire_start(viewer, canvas);
    wire_move(viewer, canvas);
    wire_end(viewer, canvas);
    wire_cancel(viewer, canvas);
}

fn touch_point(touch: &web::Touch) -> Vec2 {
    Vec2::new(touch.client_x() as f32, touch.client_y() as f32)
}

fn pinch_of(canvas: &web::HtmlCanvasElement, touches: &web::TouchList) -> Option<(Vec2, f32)> {
    let a = touch_point(&touches.item(0)?);
    let b = touch_point(&touches.item(1)?);
    let center = super::canvas_center_offset(canvas, (a + b) * 0.5);
    Some((center, (a - b).length()))
}

fn attach(
    canvas: &web::HtmlCanvasElement,
    event: &str,
    closure: Closure<dyn FnMut(web::TouchEvent)>,
) {
    // Touch listeners must be non-passive to allow prevent_default
    let options = web::AddEventListenerOptions::new();
    options.set_passive(false);
    if canvas
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .is_err()
    {
        log::warn!("failed to attach {event} listener");
    }
    closure.forget();
}

fn wire_start(viewer: &Rc<RefCell<Viewer>>, canvas: &web::HtmlCanvasElement) {
    let rc = viewer.clone();
    let target = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let mut v = rc.borrow_mut();
        if !v.is_modal_open() || v.photo_open.is_some() {
            return;
        }
        let touches = ev.touches();
        match touches.length() {
            1 => {
                if let Some(t) = touches.item(0) {
                    // A drag on the paper itself rotates (through the
                    // pointer events); only touches starting in the margin
                    // around it arm swipe navigation.
                    let point = touch_point(&t);
                    let on_paper = v
                        .paper_rect
                        .is_some_and(|r| r.contains(super::canvas_backing_point(&target, point)));
                    v.swipe_start = (!on_paper).then_some(point);
                }
            }
            2 => {
                v.swipe_start = None;
                if let Some((center, distance)) = pinch_of(&target, &touches) {
                    v.interaction
                        .apply(InputEvent::PinchStart { center, distance });
                }
            }
            _ => {}
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    attach(canvas, "touchstart", closure);
}

fn wire_move(viewer: &Rc<RefCell<Viewer>>, canvas: &web::HtmlCanvasElement) {
    let rc = viewer.clone();
    let target = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let mut v = rc.borrow_mut();
        if !v.is_modal_open() {
            return;
        }
        let touches = ev.touches();
        if touches.length() == 2 {
            if let Some((center, distance)) = pinch_of(&target, &touches) {
                v.interaction
                    .apply(InputEvent::PinchMove { center, distance });
            }
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    attach(canvas, "touchmove", closure);
}

fn wire_end(viewer: &Rc<RefCell<Viewer>>, canvas: &web::HtmlCanvasElement) {
    let rc = viewer.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let mut v = rc.borrow_mut();
        if ev.touches().length() < 2 {
            v.interaction.apply(InputEvent::PinchEnd);
        }
        if ev.touches().length() == 0 {
            if let (Some(start), Some(t)) = (v.swipe_start.take(), ev.changed_touches().item(0)) {
                if let Some(dir) = swipe_direction(touch_point(&t) - start) {
                    if v.photo_open.is_none() {
                        v.request_navigation(dir);
                        v.suppress_click_until = v.now_ms() + CLICK_SUPPRESS_MS;
                    }
                }
            }
        }
    }) as Box<dyn FnMut(_)>);
    attach(canvas, "touchend", closure);
}

fn wire_cancel(viewer: &Rc<RefCell<Viewer>>, canvas: &web::HtmlCanvasElement) {
    let rc = viewer.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
        let mut v = rc.borrow_mut();
        v.swipe_start = None;
        v.interaction.apply(InputEvent::PinchEnd);
    }) as Box<dyn FnMut(_)>);
    attach(canvas, "touchcancel", closure);
}

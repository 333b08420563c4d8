//! The requestAnimationFrame loop driving the viewer.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::viewer::Viewer;

fn request_frame(f: &Closure<dyn FnMut()>) {
    if let Some(window) = web::window() {
        if window
            .request_animation_frame(f.as_ref().unchecked_ref())
            .is_err()
        {
            log::error!("requestAnimationFrame failed");
        }
    }
}

/// Start the self-rescheduling frame loop. Runs for the page lifetime.
pub fn start_loop(viewer: Rc<RefCell<Viewer>>) {
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        viewer.borrow_mut().frame();
        if let Some(closure) = f.borrow().as_ref() {
            request_frame(closure);
        }
    }) as Box<dyn FnMut()>));

    if let Some(closure) = g.borrow().as_ref() {
        request_frame(closure);
    }
}

//! Modal-scoped keyboard handling.
//!
//! The keydown listener is acquired when a document opens and removed when
//! the [`KeyScope`] drops with the modal, so the desk page never sees
//! swallowed arrow keys.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use paper_core::stack::nav_for_key;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::viewer::Viewer;

/// Owns the window keydown listener for one modal session. Dropping the
/// scope removes the listener.
pub struct KeyScope {
    window: web::Window,
    closure: Option<Closure<dyn FnMut(web::KeyboardEvent)>>,
}

pub fn acquire(viewer: &Rc<RefCell<Viewer>>) -> Option<KeyScope> {
    let window = web::window()?;
    let weak: Weak<RefCell<Viewer>> = Rc::downgrade(viewer);
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if let Some(rc) = weak.upgrade() {
            handle_keydown(&ev, &rc);
        }
    }) as Box<dyn FnMut(_)>);
    window
        .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
        .ok()?;
    Some(KeyScope {
        window,
        closure: Some(closure),
    })
}

impl Drop for KeyScope {
    fn drop(&mut self) {
        if let Some(closure) = self.closure.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        }
    }
}

fn handle_keydown(ev: &web::KeyboardEvent, rc: &Rc<RefCell<Viewer>>) {
    let key = ev.key();
    let mut v = rc.borrow_mut();
    if key == "Escape" {
        // The photo lightbox closes first; a second Escape closes the modal
        if v.photo_open.is_some() {
            v.close_photo();
        } else {
            v.close_modal();
        }
        ev.prevent_default();
        return;
    }
    if v.photo_open.is_some() {
        return;
    }
    if let Some(dir) = nav_for_key(&key) {
        let multi = v
            .active
            .as_ref()
            .is_some_and(|active| active.doc.is_multi_page());
        if multi {
            v.request_navigation(dir);
            ev.prevent_default();
        }
    }
}

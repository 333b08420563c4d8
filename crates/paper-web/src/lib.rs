//! Browser entry point: boots logging, acquires the canvas and WebGPU
//! device, wires the desk folders and modal chrome, and starts the frame
//! loop. Everything here runs on the main thread; shared state lives in an
//! `Rc<RefCell<Viewer>>`.

#![cfg(target_arch = "wasm32")]

mod config;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod texture;
mod viewer;

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::anyhow;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use viewer::Viewer;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("paper viewer starting");
    spawn_local(async {
        if let Err(e) = init().await {
            log::error!("init failed: {e:?}");
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("paper-canvas")
        .ok_or_else(|| anyhow!("missing #paper-canvas"))?
        .dyn_into()
        .map_err(|_| anyhow!("#paper-canvas is not a canvas"))?;
    dom::sync_canvas_backing_size(&canvas);

    // The surface wants a 'static canvas reference; one canvas per page,
    // leaked once at startup
    let surface_canvas: &'static web::HtmlCanvasElement = Box::leak(Box::new(canvas.clone()));
    let gpu = render::GpuState::new(surface_canvas).await?;

    let mut docs = config::documents();
    docs.retain(|id, doc| match doc.validate() {
        Ok(()) => true,
        Err(e) => {
            log::error!("document '{id}' rejected: {e}");
            false
        }
    });
    log::info!("{} documents available", docs.len());

    let viewer = Rc::new(RefCell::new(Viewer::new(canvas.clone(), gpu, docs)));

    events::pointer::wire(&viewer, &canvas);
    events::touch::wire(&viewer, &canvas);

    for (folder_id, doc_id) in config::FOLDER_DOCS {
        let rc = viewer.clone();
        dom::add_click_listener(&document, folder_id, move || {
            Viewer::open_document(&rc, doc_id);
        });
    }
    wire_backdrop_close(&viewer, &document);
    let rc = viewer.clone();
    dom::add_click_listener(&document, "modal-close", move || {
        rc.borrow_mut().close_modal();
    });
    let rc = viewer.clone();
    dom::add_click_listener(&document, "photo-modal", move || {
        rc.borrow_mut().close_photo();
    });
    wire_photo_flip(&viewer, &document);

    frame::start_loop(viewer);
    Ok(())
}

/// Clicking the lightbox image turns the photo over to the other face of
/// its pair; the click must not bubble into the backdrop close above.
fn wire_photo_flip(viewer: &Rc<RefCell<Viewer>>, document: &web::Document) {
    let Some(img) = document.get_element_by_id("photo-img") else {
        log::warn!("missing element #photo-img");
        return;
    };
    let rc = viewer.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        ev.stop_propagation();
        rc.borrow_mut().flip_photo();
    }) as Box<dyn FnMut(_)>);
    if img
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("failed to attach photo flip listener");
    }
    closure.forget();
}

/// Clicking the dimmed area around the paper closes the modal. Clicks on
/// the canvas or hotspots have other targets and fall through, as do ghost
/// clicks right after a swipe.
fn wire_backdrop_close(viewer: &Rc<RefCell<Viewer>>, document: &web::Document) {
    let Some(overlay_el) = document.get_element_by_id("modal-overlay") else {
        log::warn!("missing element #modal-overlay");
        return;
    };
    let rc = viewer.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let on_backdrop = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .is_some_and(|el| el.id() == "modal-overlay");
        if !on_backdrop {
            return;
        }
        let mut v = rc.borrow_mut();
        if v.now_ms() < v.suppress_click_until {
            return;
        }
        v.close_modal();
    }) as Box<dyn FnMut(_)>);
    if overlay_el
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("failed to attach backdrop listener");
    }
    closure.forget();
}

//! DOM overlay for hotspots and the photo lightbox.
//!
//! Hotspots are real DOM nodes (anchors and buttons) absolutely positioned
//! over the canvas. Every frame the projector recomputes their screen-space
//! bounds and clip polygons; nodes with no projection this frame are hidden.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use paper_core::hotspot::{Hotspot, HotspotAction, ProjectedHotspot};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::viewer::Viewer;

const LAYER_ID: &str = "hotspot-layer";

fn hotspot_node_id(index: usize) -> String {
    format!("hotspot-{index}")
}

/// Build one DOM node per hotspot for the open document.
/// Nodes start hidden; `update_hotspots` positions them each frame.
pub fn build_hotspot_nodes(
    document: &web::Document,
    viewer: &Rc<RefCell<Viewer>>,
    hotspots: &[Hotspot],
) {
    let Some(layer) = document.get_element_by_id(LAYER_ID) else {
        log::warn!("missing element #{LAYER_ID}");
        return;
    };
    layer.set_inner_html("");

    for (index, hotspot) in hotspots.iter().enumerate() {
        let result = match &hotspot.action {
            HotspotAction::Link { href } => make_link_node(document, index, hotspot, href),
            HotspotAction::Photo { photo } => {
                make_photo_node(document, viewer, index, hotspot, photo)
            }
        };
        match result {
            Ok(node) => {
                if layer.append_child(&node).is_err() {
                    log::warn!("failed to attach hotspot '{}'", hotspot.title);
                }
            }
            Err(e) => log::warn!("failed to build hotspot '{}': {e:?}", hotspot.title),
        }
    }
}

pub fn clear_hotspot_nodes(document: &web::Document) {
    if let Some(layer) = document.get_element_by_id(LAYER_ID) {
        layer.set_inner_html("");
    }
}

fn make_link_node(
    document: &web::Document,
    index: usize,
    hotspot: &Hotspot,
    href: &str,
) -> Result<web::Element, JsValue> {
    let el = document.create_element("a")?;
    let anchor: &web::HtmlAnchorElement = el.unchecked_ref();
    anchor.set_href(href);
    anchor.set_target("_blank");
    anchor.set_rel("noopener noreferrer");
    finish_node(&el, index, hotspot)?;
    Ok(el)
}

fn make_photo_node(
    document: &web::Document,
    viewer: &Rc<RefCell<Viewer>>,
    index: usize,
    hotspot: &Hotspot,
    photo: &str,
) -> Result<web::Element, JsValue> {
    let el = document.create_element("div")?;
    el.set_attribute("role", "button")?;
    el.set_attribute("tabindex", "0")?;
    let rc = viewer.clone();
    let photo = photo.to_string();
    let on_click = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        ev.stop_propagation();
        ev.prevent_default();
        rc.borrow_mut().open_photo(&photo);
    }) as Box<dyn FnMut(_)>);
    el.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    finish_node(&el, index, hotspot)?;
    Ok(el)
}

fn finish_node(el: &web::Element, index: usize, hotspot: &Hotspot) -> Result<(), JsValue> {
    el.set_id(&hotspot_node_id(index));
    el.set_class_name("paper-hotspot");
    el.set_attribute("title", &hotspot.title)?;
    // Pointer drags must not start from a hotspot
    let stop = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        ev.stop_propagation();
    }) as Box<dyn FnMut(_)>);
    el.add_event_listener_with_callback("pointerdown", stop.as_ref().unchecked_ref())?;
    stop.forget();
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        html.style().set_property("position", "absolute")?;
        html.style().set_property("display", "none")?;
    }
    Ok(())
}

/// Reposition hotspot nodes from this frame's projections. `quads` comes
/// from the projector in canvas backing pixels; CSS positions are scaled
/// by the canvas CSS-to-backing ratio.
pub fn update_hotspots(
    document: &web::Document,
    hotspot_count: usize,
    quads: &[ProjectedHotspot],
    canvas: &web::HtmlCanvasElement,
) {
    let rect = canvas.get_bounding_client_rect();
    let to_css = if canvas.width() > 0 {
        rect.width() as f32 / canvas.width() as f32
    } else {
        1.0
    };

    for index in 0..hotspot_count {
        let Some(el) = document.get_element_by_id(&hotspot_node_id(index)) else {
            continue;
        };
        let Some(html) = el.dyn_ref::<web::HtmlElement>() else {
            continue;
        };
        let style = html.style();
        match quads.iter().find(|q| q.index == index) {
            Some(q) => {
                let min = q.bounds.min * to_css;
                let size = Vec2::new(q.bounds.width(), q.bounds.height()) * to_css;
                let clip = format!(
                    "polygon({:.2}% {:.2}%, {:.2}% {:.2}%, {:.2}% {:.2}%, {:.2}% {:.2}%)",
                    q.clip_pct[0][0],
                    q.clip_pct[0][1],
                    q.clip_pct[1][0],
                    q.clip_pct[1][1],
                    q.clip_pct[2][0],
                    q.clip_pct[2][1],
                    q.clip_pct[3][0],
                    q.clip_pct[3][1],
                );
                let applied = style
                    .set_property("left", &format!("{:.1}px", min.x))
                    .and_then(|_| style.set_property("top", &format!("{:.1}px", min.y)))
                    .and_then(|_| style.set_property("width", &format!("{:.1}px", size.x)))
                    .and_then(|_| style.set_property("height", &format!("{:.1}px", size.y)))
                    .and_then(|_| style.set_property("clip-path", &clip))
                    .and_then(|_| style.set_property("display", "block"));
                if applied.is_err() {
                    log::warn!("failed to position hotspot {index}");
                }
            }
            None => {
                let _ = style.set_property("display", "none");
            }
        }
    }
}

/// Fill and show the photo lightbox.
pub fn show_photo(document: &web::Document, src: &str, alt: &str) {
    if let Some(el) = document.get_element_by_id("photo-img") {
        if let Some(img) = el.dyn_ref::<web::HtmlImageElement>() {
            img.set_src(src);
            img.set_alt(alt);
        }
    }
    dom::show(document, "photo-modal");
}

pub fn set_guide_visible(document: &web::Document, visible: bool) {
    dom::set_hidden(document, "page-guide", !visible);
}

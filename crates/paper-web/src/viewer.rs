//! The viewer owns all modal state: which document is open, its page
//! sequencer or flip animator, the shared interaction transform, and the
//! per-page GPU resources. It lives in an `Rc<RefCell<_>>` shared by every
//! event closure and the frame loop.

use std::cell::RefCell;
use std::f32::consts::PI;
use std::rc::Rc;

use fnv::FnvHashMap;
use glam::{Mat4, Vec2, Vec3};
use instant::Instant;
use paper_core::camera::Camera;
use paper_core::config::{PaperDoc, ViewMode};
use paper_core::constants::SLIDE_TRAVEL_FRAC;
use paper_core::flip::{hinge_matrix, FlipAnimator, HingeSide};
use paper_core::geometry::{model_matrix, plane_vertices, world_viewport, PaperGeometry, Viewport};
use paper_core::hotspot::{paper_screen_rect, project_hotspots, ProjectedHotspot, ScreenRect};
use paper_core::stack::{advance_page, NavDirection, PagePlacement, StackSequencer};
use paper_core::transform::{InputEvent, InteractionModel, PanBounds};
use smallvec::SmallVec;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use crate::dom;
use crate::events::KeyScope;
use crate::overlay;
use crate::render::{DrawCmd, GpuState, PaperDraw};
use crate::texture::{self, PaperTextures};

/// GPU residence of one page.
pub struct PaperSlot {
    pub textures: PaperTextures,
    pub draw: PaperDraw,
}

pub struct ActiveDoc {
    pub doc_id: String,
    pub doc: PaperDoc,
    pub sequencer: StackSequencer,
    pub flip: FlipAnimator,
    /// Current page in flip-book mode; stack mode asks the sequencer.
    pub flip_page: u32,
    pub slots: FnvHashMap<u32, PaperSlot>,
}

/// The open lightbox photo and which face of its image pair is showing.
pub struct OpenPhoto {
    pub id: String,
    pub showing_back: bool,
}

pub struct Viewer {
    pub canvas: web::HtmlCanvasElement,
    pub gpu: GpuState<'static>,
    pub docs: FnvHashMap<String, PaperDoc>,
    pub active: Option<ActiveDoc>,
    pub photo_open: Option<OpenPhoto>,
    pub interaction: InteractionModel,
    pub key_scope: Option<KeyScope>,
    /// client position where a one-finger touch started, for swipe detection
    pub swipe_start: Option<Vec2>,
    /// The paper's projected bounding box from the last frame, in canvas
    /// backing pixels. Drags inside it rotate; drags outside it swipe.
    pub paper_rect: Option<ScreenRect>,
    /// ignore backdrop clicks until this time; set after a consumed swipe
    pub suppress_click_until: f64,
    epoch: Instant,
    /// Bumped whenever the open document changes; loads from older
    /// generations discard their textures instead of installing them.
    load_generation: u64,
}

impl Viewer {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        gpu: GpuState<'static>,
        docs: FnvHashMap<String, PaperDoc>,
    ) -> Self {
        Self {
            canvas,
            gpu,
            docs,
            active: None,
            photo_open: None,
            interaction: InteractionModel::default(),
            key_scope: None,
            swipe_start: None,
            paper_rect: None,
            suppress_click_until: 0.0,
            epoch: Instant::now(),
            load_generation: 0,
        }
    }

    /// Monotonic time for the sequencer and animators.
    pub fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }

    pub fn is_modal_open(&self) -> bool {
        self.active.is_some()
    }

    /// Open a document from the desk: show the modal, start texture loads,
    /// and take the keyboard for the modal's lifetime.
    pub fn open_document(rc: &Rc<RefCell<Viewer>>, doc_id: &str) {
        let (page_count, generation) = {
            let mut v = rc.borrow_mut();
            let Some(doc) = v.docs.get(doc_id).cloned() else {
                log::warn!("unknown document '{doc_id}'");
                return;
            };
            v.close_modal();
            v.load_generation += 1;
            let generation = v.load_generation;
            let page_count = doc.page_count();
            if let Some(document) = dom::window_document() {
                dom::show(&document, "modal-overlay");
                dom::show(&document, "paper-loading");
                overlay::build_hotspot_nodes(&document, rc, &doc.hotspots);
                overlay::set_guide_visible(&document, doc.is_multi_page());
            }
            v.active = Some(ActiveDoc {
                doc_id: doc_id.to_string(),
                sequencer: StackSequencer::new(page_count),
                flip: FlipAnimator::new(1),
                flip_page: 1,
                slots: FnvHashMap::default(),
                doc,
            });
            log::info!("opened document '{doc_id}' with {page_count} pages");
            (page_count, generation)
        };

        let scope = crate::events::keyboard::acquire(rc);
        rc.borrow_mut().key_scope = scope;

        for page in 1..=page_count {
            Self::spawn_page_load(rc.clone(), doc_id.to_string(), page, generation);
        }
    }

    fn spawn_page_load(rc: Rc<RefCell<Viewer>>, doc_id: String, page: u32, generation: u64) {
        spawn_local(async move {
            let (device, queue, front, back) = {
                let v = rc.borrow();
                let Some(active) = v.active.as_ref() else {
                    return;
                };
                let Some(art) = active.doc.page(page) else {
                    return;
                };
                (
                    v.gpu.device().clone(),
                    v.gpu.queue().clone(),
                    art.front.clone(),
                    art.back.clone(),
                )
            };
            match texture::load_pair(&device, &queue, &front, back.as_deref()).await {
                Ok(textures) => {
                    let mut v = rc.borrow_mut();
                    let still_wanted = v.load_generation == generation
                        && v.active.as_ref().is_some_and(|a| a.doc_id == doc_id);
                    if !still_wanted {
                        // The modal closed or switched documents mid-load
                        textures.destroy();
                        return;
                    }
                    let draw = v.gpu.create_paper(&textures);
                    if let Some(active) = v.active.as_mut() {
                        if let Some(old) = active.slots.insert(page, PaperSlot { textures, draw })
                        {
                            old.textures.destroy();
                        }
                    }
                }
                Err(e) => log::error!("texture load failed for page {page}: {e:?}"),
            }
        });
    }

    /// Close the modal and release everything scoped to it.
    pub fn close_modal(&mut self) {
        self.load_generation += 1;
        if let Some(active) = self.active.take() {
            for slot in active.slots.into_values() {
                slot.textures.destroy();
            }
        }
        self.photo_open = None;
        self.interaction.apply(InputEvent::Reset);
        self.swipe_start = None;
        self.paper_rect = None;
        // dropping the scope removes the keydown listener
        self.key_scope = None;
        if let Some(document) = dom::window_document() {
            dom::hide(&document, "modal-overlay");
            dom::hide(&document, "photo-modal");
            overlay::clear_hotspot_nodes(&document);
        }
    }

    /// Go to the next or previous page. Wraps around at either end; a
    /// request during an animation restarts from the settled state.
    pub fn request_navigation(&mut self, dir: NavDirection) {
        let now = self.now_ms();
        let Some(active) = self.active.as_mut() else {
            return;
        };
        if !active.doc.is_multi_page() {
            return;
        }
        match active.doc.view_mode {
            ViewMode::Stack => {
                active.sequencer.navigate(dir, now);
            }
            ViewMode::FlipBook => {
                active.flip_page = advance_page(active.flip_page, dir, active.doc.page_count());
                active.flip.set_page(active.flip_page, now);
            }
        }
        // A fresh page always starts from the rest transform
        self.interaction.apply(InputEvent::Reset);
    }

    pub fn open_photo(&mut self, photo_id: &str) {
        let Some(active) = self.active.as_ref() else {
            return;
        };
        let Some(art) = active.doc.photos.get(photo_id) else {
            log::warn!("unknown photo '{photo_id}'");
            return;
        };
        if let Some(document) = dom::window_document() {
            overlay::show_photo(&document, &art.front, &art.alt);
        }
        self.photo_open = Some(OpenPhoto {
            id: photo_id.to_string(),
            showing_back: false,
        });
    }

    /// Turn the open lightbox photo over to the other face of its pair.
    /// Pairs without a distinct back show the front again.
    pub fn flip_photo(&mut self) {
        let Some(open) = self.photo_open.as_mut() else {
            return;
        };
        let Some(active) = self.active.as_ref() else {
            return;
        };
        let Some(art) = active.doc.photos.get(&open.id) else {
            return;
        };
        open.showing_back = !open.showing_back;
        let src = if open.showing_back {
            art.back_or_front()
        } else {
            &art.front
        };
        if let Some(document) = dom::window_document() {
            overlay::show_photo(&document, src, &art.alt);
        }
    }

    pub fn close_photo(&mut self) {
        self.photo_open = None;
        if let Some(document) = dom::window_document() {
            dom::hide(&document, "photo-modal");
        }
    }

    /// One animation frame: advance the sequencer, rebuild the draw list,
    /// render, and refresh the hotspot overlay.
    pub fn frame(&mut self) {
        let now = self.now_ms();
        let (width, height) = dom::sync_canvas_backing_size(&self.canvas);
        self.gpu.resize_if_needed(width, height);

        let viewport = Viewport::new(width as f32, height as f32);
        let camera = Camera::paper_rig(viewport.aspect());

        let Some(active) = self.active.as_mut() else {
            return;
        };
        active.sequencer.tick(now);

        let all_resident =
            (1..=active.doc.page_count()).all(|p| active.slots.contains_key(&p));
        if let Some(document) = dom::window_document() {
            dom::set_hidden(&document, "paper-loading", all_resident);
        }

        let transform = self.interaction.transform;
        let mut cmds: Vec<DrawCmd> = Vec::new();
        let mut top_geometry: Option<PaperGeometry> = None;

        match active.doc.view_mode {
            ViewMode::Stack => {
                let world = world_viewport(&camera, viewport);
                let mut layers: Vec<_> = (1..=active.doc.page_count())
                    .map(|p| (p, active.sequencer.page_layer(p)))
                    .collect();
                layers.sort_by_key(|(_, layer)| layer.z_index);
                for (page, layer) in layers {
                    if layer.placement == PagePlacement::Hidden {
                        continue;
                    }
                    let Some(slot) = active.slots.get(&page) else {
                        continue;
                    };
                    let geom =
                        PaperGeometry::fit(slot.textures.aspect_ratio, &camera, viewport);
                    let slide_x =
                        active.sequencer.slide_offset(page, now) * world.x * SLIDE_TRAVEL_FRAC;
                    let model = Mat4::from_translation(Vec3::new(slide_x, 0.0, 0.0))
                        * model_matrix(&transform, &geom);
                    cmds.push(DrawCmd {
                        draw: &slot.draw,
                        vertices: plane_vertices(geom.plane_size),
                        mvp: camera.view_proj() * model,
                    });
                    if layer.interactive {
                        top_geometry = Some(geom);
                    }
                }
            }
            ViewMode::FlipBook => {
                // Open-book spread: page 1 rests on the left half of the
                // spine and turns across it as the leaf; page 2 sits on the
                // right half at its base hinge angle of pi.
                let angle = active.flip.leaf_angle(now);
                if let Some(leaf_slot) = active.slots.get(&1) {
                    let book = PaperGeometry::fit(
                        leaf_slot.textures.aspect_ratio * 2.0,
                        &camera,
                        viewport,
                    );
                    let page_size = Vec2::new(book.plane_size.x * 0.5, book.plane_size.y);
                    let group = model_matrix(&transform, &book);
                    // The static page sits just behind the spine plane so
                    // the leaf always passes in front of it
                    if let Some(base_slot) = active.slots.get(&2) {
                        let base = group
                            * Mat4::from_translation(Vec3::new(0.0, 0.0, -0.002))
                            * hinge_matrix(page_size, HingeSide::Left, PI);
                        cmds.push(DrawCmd {
                            draw: &base_slot.draw,
                            vertices: plane_vertices(page_size),
                            mvp: camera.view_proj() * base,
                        });
                    }
                    // Positive angle lifts the left-hinged leaf toward the
                    // viewer on its way over the spine
                    let leaf = group * hinge_matrix(page_size, HingeSide::Left, angle);
                    cmds.push(DrawCmd {
                        draw: &leaf_slot.draw,
                        vertices: plane_vertices(page_size),
                        mvp: camera.view_proj() * leaf,
                    });
                    top_geometry = Some(book);
                }
            }
        }

        // Pan bounds follow the interactive paper's pixel footprint
        self.interaction.bounds = top_geometry.map(|geom| PanBounds {
            paper_px: geom.plane_pixel_size(),
            container_px: Vec2::new(viewport.width_px, viewport.height_px),
        });
        self.paper_rect = top_geometry
            .as_ref()
            .and_then(|geom| paper_screen_rect(&transform, geom, &camera, viewport));

        if let Err(e) = self.gpu.render(&cmds) {
            log::error!("render error: {e:?}");
        }

        if let Some(document) = dom::window_document() {
            let quads: SmallVec<[ProjectedHotspot; 8]> = match &top_geometry {
                Some(geom) if !active.doc.hotspots.is_empty() && self.photo_open.is_none() => {
                    project_hotspots(&transform, geom, &camera, viewport, &active.doc.hotspots)
                }
                _ => SmallVec::new(),
            };
            overlay::update_hotspots(&document, active.doc.hotspots.len(), &quads, &self.canvas);
        }
    }
}

//! Screen-space projection of declarative hotspot rectangles.
//!
//! Hotspots are declared in percentages against the flat, unrotated paper;
//! each frame they are pushed through the paper's live world matrix and the
//! camera so the clickable overlay tracks the 3D paper exactly.

use crate::camera::{project_to_screen, Camera};
use crate::constants::HOTSPOT_Z_OFFSET;
use crate::geometry::{model_matrix, PaperGeometry, Viewport};
use crate::transform::PaperTransform;
use glam::{Mat4, Vec2, Vec3};
use smallvec::SmallVec;

/// What activating a hotspot does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HotspotAction {
    /// External navigation.
    Link { href: String },
    /// Open an associated image pair in the nested photo viewer.
    Photo { photo: String },
}

/// A declarative clickable region on one paper. Immutable once loaded.
///
/// `top_pct`/`left_pct`/`width_pct`/`height_pct` are percentages of the
/// plane, measured from the top-left of the unrotated paper.
#[derive(Clone, Debug)]
pub struct Hotspot {
    pub top_pct: f32,
    pub left_pct: f32,
    pub width_pct: f32,
    pub height_pct: f32,
    /// In-plane rotation about the rect center, CSS sign convention
    /// (positive = clockwise on screen). Zero for axis-aligned regions.
    pub rotation_deg: f32,
    pub action: HotspotAction,
    pub title: String,
}

impl Hotspot {
    /// Corner points (TL, TR, BR, BL) in the paper's local plane space:
    /// origin at the plane center, +Y up, +Z nudged toward the viewer.
    pub fn local_corners(&self, plane_size: Vec2) -> [Vec3; 4] {
        let x0 = (self.left_pct / 100.0 - 0.5) * plane_size.x;
        let x1 = ((self.left_pct + self.width_pct) / 100.0 - 0.5) * plane_size.x;
        let y0 = (0.5 - self.top_pct / 100.0) * plane_size.y;
        let y1 = (0.5 - (self.top_pct + self.height_pct) / 100.0) * plane_size.y;

        let mut corners = [
            Vec3::new(x0, y0, HOTSPOT_Z_OFFSET),
            Vec3::new(x1, y0, HOTSPOT_Z_OFFSET),
            Vec3::new(x1, y1, HOTSPOT_Z_OFFSET),
            Vec3::new(x0, y1, HOTSPOT_Z_OFFSET),
        ];

        if self.rotation_deg != 0.0 {
            // CSS clockwise maps to a negative mathematical angle in y-up space
            let a = -self.rotation_deg.to_radians();
            let (sin, cos) = a.sin_cos();
            let center = Vec2::new((x0 + x1) * 0.5, (y0 + y1) * 0.5);
            for c in &mut corners {
                let d = Vec2::new(c.x, c.y) - center;
                c.x = center.x + d.x * cos - d.y * sin;
                c.y = center.y + d.x * sin + d.y * cos;
            }
        }
        corners
    }
}

/// Axis-aligned pixel rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl ScreenRect {
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Bounding box of the transformed paper in screen pixels. Input routing
/// uses it to tell drags on the paper (rotation) apart from drags in the
/// surrounding margin (swipe navigation). `None` when any corner projects
/// behind the camera.
pub fn paper_screen_rect(
    transform: &PaperTransform,
    geometry: &PaperGeometry,
    camera: &Camera,
    viewport: Viewport,
) -> Option<ScreenRect> {
    let model = model_matrix(transform, geometry);
    let view_proj = camera.view_proj();
    let half = geometry.plane_size * 0.5;

    let mut min = Vec2::INFINITY;
    let mut max = Vec2::NEG_INFINITY;
    for corner in [
        Vec3::new(-half.x, half.y, 0.0),
        Vec3::new(half.x, half.y, 0.0),
        Vec3::new(half.x, -half.y, 0.0),
        Vec3::new(-half.x, -half.y, 0.0),
    ] {
        let world = model.transform_point3(corner);
        let (px, _) = project_to_screen(view_proj, world, viewport)?;
        min = min.min(px);
        max = max.max(px);
    }
    Some(ScreenRect { min, max })
}

/// One hotspot's projected footprint for the current frame.
#[derive(Clone, Copy, Debug)]
pub struct ProjectedHotspot {
    /// Index into the paper's hotspot list.
    pub index: usize,
    /// Corners in screen pixels (TL, TR, BR, BL of the source rect).
    pub corners: [Vec2; 4],
    /// Bounding box of the corners; the overlay element is placed here.
    pub bounds: ScreenRect,
    /// Corner positions relative to `bounds`, in percent, for a clip-path
    /// polygon matching the true projected quadrilateral.
    pub clip_pct: [[f32; 2]; 4],
}

/// Project every hotspot of the active paper for this frame.
///
/// The whole set is suppressed while the paper shows its backside; a single
/// hotspot is dropped when any of its corners falls behind the camera or at
/// or beyond the far plane (`ndc_z >= 1`).
pub fn project_hotspots(
    transform: &PaperTransform,
    geometry: &PaperGeometry,
    camera: &Camera,
    viewport: Viewport,
    hotspots: &[Hotspot],
) -> SmallVec<[ProjectedHotspot; 8]> {
    let mut out = SmallVec::new();
    if transform.is_backside() {
        return out;
    }

    let model = model_matrix(transform, geometry);
    let view_proj = camera.view_proj();

    for (index, hotspot) in hotspots.iter().enumerate() {
        if let Some(projected) =
            project_quad(index, hotspot, geometry.plane_size, model, view_proj, viewport)
        {
            out.push(projected);
        }
    }
    out
}

fn project_quad(
    index: usize,
    hotspot: &Hotspot,
    plane_size: Vec2,
    model: Mat4,
    view_proj: Mat4,
    viewport: Viewport,
) -> Option<ProjectedHotspot> {
    let mut corners = [Vec2::ZERO; 4];
    for (i, local) in hotspot.local_corners(plane_size).iter().enumerate() {
        let world = model.transform_point3(*local);
        let (px, ndc_z) = project_to_screen(view_proj, world, viewport)?;
        if ndc_z >= 1.0 {
            return None;
        }
        corners[i] = px;
    }

    let mut min = corners[0];
    let mut max = corners[0];
    for c in &corners[1..] {
        min = min.min(*c);
        max = max.max(*c);
    }
    let bounds = ScreenRect { min, max };

    let size = (max - min).max(Vec2::splat(f32::EPSILON));
    let mut clip_pct = [[0.0f32; 2]; 4];
    for (i, c) in corners.iter().enumerate() {
        let rel = (*c - min) / size * 100.0;
        clip_pct[i] = [rel.x, rel.y];
    }

    Some(ProjectedHotspot {
        index,
        corners,
        bounds,
        clip_pct,
    })
}

//! Plane fitting and coordinate conversion between screen pixels and the
//! world units the renderer works in.

use crate::camera::Camera;
use crate::constants::VIEWPORT_FILL;
use crate::transform::PaperTransform;
use glam::{Mat4, Vec2, Vec3};

/// Canvas backing-store size in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width_px: f32,
    pub height_px: f32,
}

impl Viewport {
    pub fn new(width_px: f32, height_px: f32) -> Self {
        Self {
            width_px,
            height_px,
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width_px / self.height_px.max(1.0)
    }
}

/// World-space extent of the z=0 plane visible from the camera.
pub fn world_viewport(camera: &Camera, viewport: Viewport) -> Vec2 {
    let dist = (camera.eye - camera.target).length();
    let h = 2.0 * dist * (camera.fovy_radians * 0.5).tan();
    Vec2::new(h * viewport.aspect(), h)
}

/// Derived size of the paper plane plus the px-per-unit conversion factor.
#[derive(Clone, Copy, Debug)]
pub struct PaperGeometry {
    /// Plane dimensions in world units.
    pub plane_size: Vec2,
    /// How many screen pixels one world unit covers at the paper plane.
    pub pixels_per_unit: f32,
}

impl PaperGeometry {
    /// Fit a plane of the given aspect ratio within the viewport at the
    /// configured fill factor, constrained by the limiting dimension.
    pub fn fit(aspect_ratio: f32, camera: &Camera, viewport: Viewport) -> Self {
        let world = world_viewport(camera, viewport);
        let max_w = world.x * VIEWPORT_FILL;
        let max_h = world.y * VIEWPORT_FILL;

        let (w, h) = if aspect_ratio > max_w / max_h {
            (max_w, max_w / aspect_ratio)
        } else {
            (max_h * aspect_ratio, max_h)
        };

        Self {
            plane_size: Vec2::new(w, h),
            pixels_per_unit: viewport.width_px / world.x,
        }
    }

    /// Plane dimensions in screen pixels.
    pub fn plane_pixel_size(&self) -> Vec2 {
        self.plane_size * self.pixels_per_unit
    }

    /// Convert a screen-pixel offset (y down) into world units (y up).
    pub fn px_to_world(&self, px: Vec2) -> Vec2 {
        Vec2::new(px.x, -px.y) / self.pixels_per_unit
    }
}

/// World matrix of a paper under the given transform.
///
/// The same matrix drives both the rendered mesh and the hotspot projector,
/// so the overlay always tracks the visual paper exactly. Pan is applied
/// outermost: it stays a screen-space offset regardless of rotation.
pub fn model_matrix(t: &PaperTransform, geom: &PaperGeometry) -> Mat4 {
    let world_pos = geom.px_to_world(t.position);
    Mat4::from_translation(Vec3::new(world_pos.x, world_pos.y, 0.0))
        * Mat4::from_rotation_x(t.rotation.x.to_radians())
        * Mat4::from_rotation_y(t.rotation.y.to_radians())
        * Mat4::from_scale(Vec3::splat(t.scale))
}

/// One vertex of the paper plane mesh.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PaperVertex {
    pub pos: [f32; 3],
    pub uv: [f32; 2],
}

/// Two triangles spanning a centered plane of `size`, UV origin at top-left.
pub fn plane_vertices(size: Vec2) -> [PaperVertex; 6] {
    let hw = size.x * 0.5;
    let hh = size.y * 0.5;
    let v = |x: f32, y: f32, u: f32, w: f32| PaperVertex {
        pos: [x, y, 0.0],
        uv: [u, w],
    };
    [
        v(-hw, -hh, 0.0, 1.0),
        v(hw, -hh, 1.0, 1.0),
        v(hw, hh, 1.0, 0.0),
        v(-hw, -hh, 0.0, 1.0),
        v(hw, hh, 1.0, 0.0),
        v(-hw, hh, 0.0, 0.0),
    ]
}

//! Camera types shared between the projection math and the web renderer.
//!
//! These types intentionally avoid referencing platform-specific APIs and are
//! usable on both native and web targets.

use crate::constants::{CAMERA_FOVY_RAD, CAMERA_Z, CAMERA_ZFAR, CAMERA_ZNEAR};
use crate::geometry::Viewport;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// The fixed rig used for the paper scene: straight on, a bit back.
    pub fn paper_rig(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_RAD,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Project a world point to pixel coordinates plus its NDC depth.
///
/// Returns `None` for points behind the eye (negative w), which cannot be
/// meaningfully mapped to the screen.
pub fn project_to_screen(view_proj: Mat4, world: Vec3, viewport: Viewport) -> Option<(Vec2, f32)> {
    let clip = view_proj * Vec4::from((world, 1.0));
    if clip.w <= 0.0 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    let px = Vec2::new(
        (ndc.x + 1.0) * 0.5 * viewport.width_px,
        (1.0 - ndc.y) * 0.5 * viewport.height_px,
    );
    Some((px, ndc.z))
}

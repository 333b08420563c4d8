//! Hinge-rotation flip for the two-page book view: an open spread with the
//! first page resting on the left of the spine and the second resting
//! turned over on the right, the left leaf rotating across between them.
//!
//! The animation is time-based: callers poll [`FlipAnimator::leaf_angle`]
//! each frame with the current clock and the animator snaps to the resting
//! angle once the duration has elapsed.

use crate::constants::FLIP_DURATION_MS;
use glam::{Mat4, Vec2, Vec3};
use std::f32::consts::PI;

/// Ease-in-out cubic: `t<0.5: 4t³; else 1-(-2t+2)³/2`. Input is clamped.
pub fn cubic_ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Which side of the spine a page hangs from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HingeSide {
    Left,
    Right,
}

/// World matrix of a book page of `size`, hinged on the spine (x = 0) and
/// rotated `angle` radians about it. A left-hinged page rests on the left
/// at angle 0 and lies turned over onto the right half at π.
pub fn hinge_matrix(size: Vec2, side: HingeSide, angle: f32) -> Mat4 {
    let offset = match side {
        HingeSide::Left => -size.x * 0.5,
        HingeSide::Right => size.x * 0.5,
    };
    Mat4::from_rotation_y(angle) * Mat4::from_translation(Vec3::new(offset, 0.0, 0.0))
}

#[derive(Clone, Copy, Debug)]
struct FlipAnim {
    target_page: u32,
    started_ms: f64,
}

/// Drives the turning leaf's hinge angle between its two resting positions
/// (0 for page 1, π for page 2).
pub struct FlipAnimator {
    previous_page: u32,
    anim: Option<FlipAnim>,
}

impl FlipAnimator {
    pub fn new(initial_page: u32) -> Self {
        Self {
            previous_page: initial_page,
            anim: None,
        }
    }

    pub fn previous_page(&self) -> u32 {
        self.previous_page
    }

    pub fn is_animating(&self) -> bool {
        self.anim.is_some()
    }

    /// Request a flip toward `page`. Restarting toward the page already in
    /// flight is a no-op; a different target cancels and restarts.
    pub fn set_page(&mut self, page: u32, now_ms: f64) {
        match self.anim {
            Some(a) if a.target_page == page => {}
            _ if page == self.previous_page => self.anim = None,
            _ => {
                self.anim = Some(FlipAnim {
                    target_page: page,
                    started_ms: now_ms,
                })
            }
        }
    }

    fn resting_angle(page: u32) -> f32 {
        if page == 1 {
            0.0
        } else {
            PI
        }
    }

    /// Current hinge angle of the leaf in radians. Snaps to the resting
    /// angle and records the new previous page once the 1200 ms duration
    /// has elapsed.
    pub fn leaf_angle(&mut self, now_ms: f64) -> f32 {
        match self.anim {
            None => Self::resting_angle(self.previous_page),
            Some(a) => {
                let t = ((now_ms - a.started_ms) / FLIP_DURATION_MS) as f32;
                if t >= 1.0 {
                    self.previous_page = a.target_page;
                    self.anim = None;
                    Self::resting_angle(self.previous_page)
                } else {
                    let from = Self::resting_angle(self.previous_page);
                    let to = Self::resting_angle(a.target_page);
                    from + (to - from) * cubic_ease_in_out(t)
                }
            }
        }
    }
}

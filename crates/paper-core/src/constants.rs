// Shared interaction/rendering tuning constants used by the web frontend.

use std::f32::consts::PI;

// Pointer drag sensitivity (degrees of rotation per pixel of travel)
pub const ROTATE_DEG_PER_PX: f32 = 0.5;

// Wheel zoom step per tick
pub const ZOOM_STEP_IN: f32 = 1.1;
pub const ZOOM_STEP_OUT: f32 = 0.9;

// Scale clamp; REST_SCALE is the bound below which panning is disallowed
pub const MIN_SCALE: f32 = 0.5;
pub const MAX_SCALE: f32 = 3.0;
pub const REST_SCALE: f32 = 1.0;

// Backside classification window for the yaw angle, open interval
pub const BACKSIDE_MIN_DEG: f32 = 90.0;
pub const BACKSIDE_MAX_DEG: f32 = 270.0;

// The paper plane fills at most this much of the viewport on either axis
pub const VIEWPORT_FILL: f32 = 0.85;

// Camera rig for the paper scene
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_FOVY_RAD: f32 = 50.0 * PI / 180.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Hotspot quads sit slightly in front of the paper surface to avoid
// z-fighting when projected
pub const HOTSPOT_Z_OFFSET: f32 = 0.01;

// Page slide animation: stack reorder happens at the midpoint
pub const SLIDE_MIDPOINT_MS: f64 = 400.0;
pub const SLIDE_TOTAL_MS: f64 = 800.0;
// Horizontal travel of the sliding page, as a fraction of the world viewport
pub const SLIDE_TRAVEL_FRAC: f32 = 0.6;

// Two-page book flip
pub const FLIP_DURATION_MS: f64 = 1200.0;

// Touch gestures
pub const SWIPE_MIN_PX: f32 = 50.0;

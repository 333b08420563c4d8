//! Pointer-driven rotate/zoom/pan model for a single paper.
//!
//! All mutation flows through [`InteractionModel::apply`], a reducer over
//! [`InputEvent`]s. The frontend feeds it raw pointer/wheel/pinch events and
//! samples the resulting [`PaperTransform`] once per rendered frame.

use crate::constants::*;
use glam::Vec2;

/// Rotation/scale/position state applied to a paper in response to input.
///
/// `rotation` is in degrees (`x` pitches, `y` yaws) and unbounded; it is
/// normalized modulo 360 only for the backside test. `position` is a screen
/// pixel offset from the container center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaperTransform {
    pub rotation: Vec2,
    pub scale: f32,
    pub position: Vec2,
}

impl Default for PaperTransform {
    fn default() -> Self {
        Self {
            rotation: Vec2::ZERO,
            scale: 1.0,
            position: Vec2::ZERO,
        }
    }
}

impl PaperTransform {
    /// Yaw normalized to `[0, 360)`.
    pub fn normalized_rot_y(&self) -> f32 {
        ((self.rotation.y % 360.0) + 360.0) % 360.0
    }

    /// True while the rear face of the paper is toward the viewer.
    ///
    /// The window is the open interval (90°, 270°): exactly edge-on still
    /// counts as front-facing.
    pub fn is_backside(&self) -> bool {
        let y = self.normalized_rot_y();
        y > BACKSIDE_MIN_DEG && y < BACKSIDE_MAX_DEG
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ScaleLimits {
    pub min: f32,
    pub max: f32,
}

impl Default for ScaleLimits {
    fn default() -> Self {
        Self {
            min: MIN_SCALE,
            max: MAX_SCALE,
        }
    }
}

/// Pan clamp for the bounded (single-paper) variant: the scaled plane's
/// edges may never move fully outside the container.
#[derive(Clone, Copy, Debug)]
pub struct PanBounds {
    pub paper_px: Vec2,
    pub container_px: Vec2,
}

/// One input event, as delivered by the interaction surface.
///
/// Pointer coordinates are in client pixels; `cursor`/`center` are offsets
/// from the container center (the zoom anchor space).
#[derive(Clone, Copy, Debug)]
pub enum InputEvent {
    PointerDown { pos: Vec2, primary: bool },
    PointerMove { pos: Vec2 },
    PointerUp,
    PointerLeave,
    Wheel { cursor: Vec2, zoom_in: bool },
    PinchStart { center: Vec2, distance: f32 },
    PinchMove { center: Vec2, distance: f32 },
    PinchEnd,
    Reset,
}

/// Owns a [`PaperTransform`] plus the drag/pinch bookkeeping around it.
///
/// One handle may be owned per paper, or shared across a whole page stack;
/// the reducer itself does not care who owns it.
#[derive(Clone, Debug)]
pub struct InteractionModel {
    pub transform: PaperTransform,
    pub limits: ScaleLimits,
    pub bounds: Option<PanBounds>,
    dragging: bool,
    last_pointer: Vec2,
    pinch_distance: Option<f32>,
}

impl Default for InteractionModel {
    fn default() -> Self {
        Self::new(ScaleLimits::default(), None)
    }
}

impl InteractionModel {
    pub fn new(limits: ScaleLimits, bounds: Option<PanBounds>) -> Self {
        Self {
            transform: PaperTransform::default(),
            limits,
            bounds,
            dragging: false,
            last_pointer: Vec2::ZERO,
            pinch_distance: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Apply one input event. This is the only mutation path; the renderer
    /// only ever reads `transform`.
    pub fn apply(&mut self, ev: InputEvent) {
        match ev {
            InputEvent::PointerDown { pos, primary } => {
                if primary {
                    self.dragging = true;
                    self.last_pointer = pos;
                }
            }
            InputEvent::PointerMove { pos } => {
                // A second finger turns the gesture into a pinch; rotation
                // stops until the pinch ends.
                if self.dragging && self.pinch_distance.is_none() {
                    let delta = pos - self.last_pointer;
                    self.transform.rotation.x += delta.y * ROTATE_DEG_PER_PX;
                    self.transform.rotation.y += delta.x * ROTATE_DEG_PER_PX;
                    self.last_pointer = pos;
                }
            }
            InputEvent::PointerUp | InputEvent::PointerLeave => {
                // No inertia; leaving the surface must also end the drag
                self.dragging = false;
            }
            InputEvent::Wheel { cursor, zoom_in } => {
                let factor = if zoom_in { ZOOM_STEP_IN } else { ZOOM_STEP_OUT };
                self.transform =
                    zoom_about(self.transform, cursor, factor, self.limits, self.bounds);
            }
            InputEvent::PinchStart { distance, .. } => {
                self.dragging = false;
                self.pinch_distance = Some(distance);
            }
            InputEvent::PinchMove { center, distance } => {
                if let Some(prev) = self.pinch_distance.replace(distance) {
                    if prev > f32::EPSILON {
                        let factor = distance / prev;
                        self.transform =
                            zoom_about(self.transform, center, factor, self.limits, self.bounds);
                    }
                }
            }
            InputEvent::PinchEnd => {
                self.pinch_distance = None;
            }
            InputEvent::Reset => {
                self.transform = PaperTransform::default();
                self.dragging = false;
                self.pinch_distance = None;
            }
        }
    }
}

/// Cursor-anchored zoom: the world point under `cursor` before the step is
/// still under it afterwards. At or below the rest scale the pan snaps back
/// to the origin instead.
pub fn zoom_about(
    t: PaperTransform,
    cursor: Vec2,
    factor: f32,
    limits: ScaleLimits,
    bounds: Option<PanBounds>,
) -> PaperTransform {
    let new_scale = (t.scale * factor).clamp(limits.min, limits.max);
    let mut out = t;
    out.scale = new_scale;

    if new_scale <= REST_SCALE {
        // Pan is disallowed at rest
        out.position = Vec2::ZERO;
        return out;
    }

    // Viewing the back face mirrors the horizontal cursor mapping
    let anchor = Vec2::new(
        if t.is_backside() { -cursor.x } else { cursor.x },
        cursor.y,
    );
    let point = (anchor - t.position) / t.scale;
    let mut pos = anchor - point * new_scale;

    if let Some(b) = bounds {
        let scaled = b.paper_px * new_scale;
        let max_off = ((scaled - b.container_px) / 2.0).max(Vec2::ZERO);
        pos = pos.clamp(-max_off, max_off);
    }
    out.position = pos;
    out
}

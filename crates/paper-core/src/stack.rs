//! Page stack and the two-phase slide sequencer for multi-page documents.
//!
//! The sequencer is a small state machine driven by an explicit millisecond
//! clock: the frame loop calls [`StackSequencer::tick`] every frame instead
//! of arming wall timers. Interrupting navigation is explicit: a new
//! request finalizes the in-flight cycle's reorder before restarting, so
//! no stale timer can write into superseded state.

use crate::constants::{SLIDE_MIDPOINT_MS, SLIDE_TOTAL_MS};
use crate::flip::cubic_ease_in_out;
use glam::Vec2;

/// Requested navigation, as produced by keyboard arrows or a swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavDirection {
    Next,
    Prev,
}

/// Which edge the animating page slides toward/from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideDirection {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlidePhase {
    Idle,
    SlideOut,
    SlideBack,
}

/// Circular page advance: `next` from the last page wraps to the first and
/// `prev` from the first wraps to the last.
pub fn advance_page(current: u32, dir: NavDirection, total: u32) -> u32 {
    match dir {
        NavDirection::Next => {
            if current >= total {
                1
            } else {
                current + 1
            }
        }
        NavDirection::Prev => {
            if current <= 1 {
                total
            } else {
                current - 1
            }
        }
    }
}

/// ArrowLeft/ArrowRight to a navigation request; other keys map to nothing.
pub fn nav_for_key(key: &str) -> Option<NavDirection> {
    match key {
        "ArrowRight" => Some(NavDirection::Next),
        "ArrowLeft" => Some(NavDirection::Prev),
        _ => None,
    }
}

/// Classify a completed one-finger gesture as a page swipe.
///
/// Horizontal travel must exceed the threshold and dominate the vertical
/// travel. Swiping left (content pushed left) means `Next`.
pub fn swipe_direction(delta: Vec2) -> Option<NavDirection> {
    if delta.x.abs() > crate::constants::SWIPE_MIN_PX && delta.x.abs() > delta.y.abs() {
        if delta.x < 0.0 {
            Some(NavDirection::Next)
        } else {
            Some(NavDirection::Prev)
        }
    } else {
        None
    }
}

/// Bottom-to-top ordering of pages `1..=N`; the last element is the single
/// interactive page. Always a permutation of `1..=N`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageStack {
    order: Vec<u32>,
}

impl PageStack {
    /// Initial order puts page 1 on top: `[2, 3, …, N, 1]`.
    pub fn new(total: u32) -> Self {
        let mut order: Vec<u32> = (2..=total).collect();
        order.push(1);
        Self { order }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn top(&self) -> Option<u32> {
        self.order.last().copied()
    }

    pub fn index_of(&self, page: u32) -> Option<usize> {
        self.order.iter().position(|&p| p == page)
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.order
    }

    /// Circular carousel reorder: the outgoing page sinks to the bottom and
    /// the incoming page rises to the top.
    fn reorder(&mut self, outgoing: u32, incoming: u32) {
        if outgoing == incoming {
            self.order.retain(|&p| p != incoming);
            self.order.push(incoming);
            return;
        }
        self.order.retain(|&p| p != incoming && p != outgoing);
        self.order.insert(0, outgoing);
        self.order.push(incoming);
    }
}

#[derive(Clone, Copy, Debug)]
struct Slide {
    incoming: u32,
    outgoing: u32,
    direction: SlideDirection,
    started_ms: f64,
    reordered: bool,
}

/// How one page should render this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PagePlacement {
    InStack,
    SlidingOut(SlideDirection),
    SlidingBack(SlideDirection),
    Hidden,
}

#[derive(Clone, Copy, Debug)]
pub struct PageLayer {
    /// Paint order; higher draws later (on top).
    pub z_index: u32,
    pub placement: PagePlacement,
    /// Only the page on top of the settled stack receives input and owns
    /// the shared transform.
    pub interactive: bool,
}

/// Sequences the stack reorder and two-phase slide for page navigation.
pub struct StackSequencer {
    stack: PageStack,
    total: u32,
    current: u32,
    animating: Option<Slide>,
}

impl StackSequencer {
    pub fn new(total: u32) -> Self {
        Self {
            stack: PageStack::new(total),
            total,
            current: 1,
            animating: None,
        }
    }

    pub fn total_pages(&self) -> u32 {
        self.total
    }

    pub fn current_page(&self) -> u32 {
        self.current
    }

    pub fn stack(&self) -> &PageStack {
        &self.stack
    }

    pub fn phase(&self) -> SlidePhase {
        match self.animating {
            None => SlidePhase::Idle,
            Some(s) if !s.reordered => SlidePhase::SlideOut,
            Some(_) => SlidePhase::SlideBack,
        }
    }

    /// Begin navigating in `dir`. Any in-flight animation is finalized
    /// first (cancel-and-restart), then the new slide starts at `now_ms`.
    /// Returns the page that will end up on top.
    pub fn navigate(&mut self, dir: NavDirection, now_ms: f64) -> u32 {
        if self.total < 2 {
            log::debug!("single-page stack, ignoring navigation");
            return self.current;
        }
        self.finish_active();

        let outgoing = self.current;
        let incoming = advance_page(outgoing, dir, self.total);
        let direction = match dir {
            NavDirection::Next => SlideDirection::Right,
            NavDirection::Prev => SlideDirection::Left,
        };
        self.animating = Some(Slide {
            incoming,
            outgoing,
            direction,
            started_ms: now_ms,
            reordered: false,
        });
        self.current = incoming;
        incoming
    }

    /// Advance the animation clock; reorders the stack at the midpoint and
    /// settles back to idle once the full cycle has elapsed.
    pub fn tick(&mut self, now_ms: f64) {
        let Some(mut s) = self.animating else {
            return;
        };
        let elapsed = now_ms - s.started_ms;
        if !s.reordered && elapsed >= SLIDE_MIDPOINT_MS {
            self.stack.reorder(s.outgoing, s.incoming);
            s.reordered = true;
        }
        if elapsed >= SLIDE_TOTAL_MS {
            self.animating = None;
        } else {
            self.animating = Some(s);
        }
    }

    fn finish_active(&mut self) {
        if let Some(s) = self.animating.take() {
            if !s.reordered {
                self.stack.reorder(s.outgoing, s.incoming);
            }
        }
    }

    /// Paint order, placement and interactivity of one page this frame.
    pub fn page_layer(&self, page: u32) -> PageLayer {
        if let Some(s) = self.animating {
            if s.incoming == page {
                return if !s.reordered {
                    // Phase 1: sliding out, behind everything
                    PageLayer {
                        z_index: 0,
                        placement: PagePlacement::SlidingOut(s.direction),
                        interactive: false,
                    }
                } else {
                    // Phase 2: sliding back, now topmost
                    PageLayer {
                        z_index: self.stack.len() as u32 + 1,
                        placement: PagePlacement::SlidingBack(s.direction),
                        interactive: false,
                    }
                };
            }
        }
        match self.stack.index_of(page) {
            Some(i) => PageLayer {
                z_index: i as u32 + 1,
                placement: PagePlacement::InStack,
                interactive: self.stack.top() == Some(page),
            },
            None => PageLayer {
                z_index: 0,
                placement: PagePlacement::Hidden,
                interactive: false,
            },
        }
    }

    /// Signed horizontal offset of the animating page as a fraction of the
    /// full slide travel: eases out to ±1 by the midpoint, then back to 0.
    /// Zero for every settled page.
    pub fn slide_offset(&self, page: u32, now_ms: f64) -> f32 {
        let Some(s) = self.animating else {
            return 0.0;
        };
        if s.incoming != page {
            return 0.0;
        }
        let elapsed = (now_ms - s.started_ms).max(0.0);
        let sign = match s.direction {
            SlideDirection::Right => 1.0,
            SlideDirection::Left => -1.0,
        };
        if elapsed < SLIDE_MIDPOINT_MS {
            sign * cubic_ease_in_out((elapsed / SLIDE_MIDPOINT_MS) as f32)
        } else if elapsed < SLIDE_TOTAL_MS {
            let t = (elapsed - SLIDE_MIDPOINT_MS) / (SLIDE_TOTAL_MS - SLIDE_MIDPOINT_MS);
            sign * (1.0 - cubic_ease_in_out(t as f32))
        } else {
            0.0
        }
    }
}

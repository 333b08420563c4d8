use glam::Vec2;
use paper_core::stack::{
    advance_page, nav_for_key, swipe_direction, NavDirection, PagePlacement, PageStack,
    SlidePhase, StackSequencer,
};

fn sorted(slice: &[u32]) -> Vec<u32> {
    let mut v = slice.to_vec();
    v.sort_unstable();
    v
}

#[test]
fn initial_order_puts_page_one_on_top() {
    let stack = PageStack::new(4);
    assert_eq!(stack.as_slice(), &[2, 3, 4, 1]);
    assert_eq!(stack.top(), Some(1));
}

#[test]
fn advance_wraps_at_both_ends() {
    assert_eq!(advance_page(3, NavDirection::Next, 3), 1);
    assert_eq!(advance_page(1, NavDirection::Prev, 3), 3);
    assert_eq!(advance_page(2, NavDirection::Next, 3), 3);
    assert_eq!(advance_page(2, NavDirection::Prev, 3), 1);
}

#[test]
fn two_page_documents_cycle() {
    // With two pages, next and prev both land on the other page
    assert_eq!(advance_page(1, NavDirection::Next, 2), 2);
    assert_eq!(advance_page(2, NavDirection::Next, 2), 1);
    assert_eq!(advance_page(1, NavDirection::Prev, 2), 2);
}

#[test]
fn single_page_navigation_is_ignored() {
    let mut seq = StackSequencer::new(1);
    assert_eq!(seq.navigate(NavDirection::Next, 0.0), 1);
    assert_eq!(seq.phase(), SlidePhase::Idle);
    assert_eq!(seq.current_page(), 1);
}

#[test]
fn stack_reorders_at_the_midpoint() {
    let mut seq = StackSequencer::new(3);
    seq.navigate(NavDirection::Next, 0.0);
    assert_eq!(seq.phase(), SlidePhase::SlideOut);
    assert_eq!(seq.current_page(), 2);

    // Before the midpoint the stack is untouched
    seq.tick(399.0);
    assert_eq!(seq.stack().as_slice(), &[2, 3, 1]);
    assert_eq!(seq.phase(), SlidePhase::SlideOut);

    // At the midpoint the outgoing page sinks and the incoming rises
    seq.tick(400.0);
    assert_eq!(seq.stack().as_slice(), &[1, 3, 2]);
    assert_eq!(seq.phase(), SlidePhase::SlideBack);

    seq.tick(800.0);
    assert_eq!(seq.phase(), SlidePhase::Idle);
    assert_eq!(seq.stack().top(), Some(2));
}

#[test]
fn full_cycle_returns_to_the_first_page() {
    let mut seq = StackSequencer::new(4);
    let mut now = 0.0;
    for expected in [2, 3, 4, 1] {
        let landed = seq.navigate(NavDirection::Next, now);
        assert_eq!(landed, expected);
        now += 400.0;
        seq.tick(now);
        now += 400.0;
        seq.tick(now);
        // The stack stays a permutation of 1..=4 throughout
        assert_eq!(sorted(seq.stack().as_slice()), vec![1, 2, 3, 4]);
        assert_eq!(seq.stack().top(), Some(expected));
    }
}

#[test]
fn interrupting_a_slide_restarts_from_the_settled_state() {
    let mut seq = StackSequencer::new(3);
    seq.navigate(NavDirection::Next, 0.0);
    seq.tick(100.0);
    // Second request lands mid-flight, before the first reorder
    seq.navigate(NavDirection::Next, 150.0);
    assert_eq!(seq.current_page(), 3);
    assert_eq!(seq.phase(), SlidePhase::SlideOut);

    seq.tick(550.0);
    seq.tick(950.0);
    assert_eq!(seq.phase(), SlidePhase::Idle);
    assert_eq!(seq.stack().top(), Some(3));
    assert_eq!(sorted(seq.stack().as_slice()), vec![1, 2, 3]);
}

#[test]
fn only_the_settled_top_page_is_interactive() {
    let seq = StackSequencer::new(3);
    assert!(seq.page_layer(1).interactive);
    assert!(!seq.page_layer(2).interactive);
    assert!(!seq.page_layer(3).interactive);
}

#[test]
fn animating_page_layers_flip_at_the_midpoint() {
    let mut seq = StackSequencer::new(3);
    seq.navigate(NavDirection::Next, 0.0);

    // Phase 1: the incoming page slides out behind everything
    let layer = seq.page_layer(2);
    assert_eq!(layer.z_index, 0);
    assert!(matches!(layer.placement, PagePlacement::SlidingOut(_)));
    assert!(!layer.interactive);

    // Phase 2: it comes back over the top of the stack
    seq.tick(400.0);
    let layer = seq.page_layer(2);
    assert_eq!(layer.z_index, 4);
    assert!(matches!(layer.placement, PagePlacement::SlidingBack(_)));
    assert!(!layer.interactive);
}

#[test]
fn slide_offset_peaks_at_the_midpoint() {
    let mut seq = StackSequencer::new(2);
    seq.navigate(NavDirection::Next, 0.0);
    assert_eq!(seq.slide_offset(2, 0.0), 0.0);
    assert!((seq.slide_offset(2, 400.0) - 1.0).abs() < 1e-6);
    assert_eq!(seq.slide_offset(2, 800.0), 0.0);
    // Pages not animating never move
    assert_eq!(seq.slide_offset(1, 400.0), 0.0);
}

#[test]
fn prev_slides_toward_the_left() {
    let mut seq = StackSequencer::new(2);
    seq.navigate(NavDirection::Prev, 0.0);
    assert!(seq.slide_offset(2, 400.0) < 0.0);
}

#[test]
fn swipe_classification() {
    assert_eq!(
        swipe_direction(Vec2::new(-60.0, 10.0)),
        Some(NavDirection::Next)
    );
    assert_eq!(
        swipe_direction(Vec2::new(60.0, 10.0)),
        Some(NavDirection::Prev)
    );
    // Too short
    assert_eq!(swipe_direction(Vec2::new(-40.0, 0.0)), None);
    // Vertical travel dominates
    assert_eq!(swipe_direction(Vec2::new(-60.0, -70.0)), None);
}

#[test]
fn arrow_keys_map_to_navigation() {
    assert_eq!(nav_for_key("ArrowRight"), Some(NavDirection::Next));
    assert_eq!(nav_for_key("ArrowLeft"), Some(NavDirection::Prev));
    assert_eq!(nav_for_key("ArrowUp"), None);
    assert_eq!(nav_for_key("a"), None);
}

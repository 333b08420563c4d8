use glam::{Vec2, Vec3};
use paper_core::flip::{cubic_ease_in_out, hinge_matrix, FlipAnimator, HingeSide};
use std::f32::consts::PI;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn ease_curve_endpoints_and_midpoint() {
    assert!(approx(cubic_ease_in_out(0.0), 0.0));
    assert!(approx(cubic_ease_in_out(0.5), 0.5));
    assert!(approx(cubic_ease_in_out(1.0), 1.0));
    // Inputs outside the unit interval clamp
    assert!(approx(cubic_ease_in_out(-1.0), 0.0));
    assert!(approx(cubic_ease_in_out(2.0), 1.0));
}

#[test]
fn ease_curve_is_slow_at_the_edges() {
    assert!(cubic_ease_in_out(0.1) < 0.1);
    assert!(cubic_ease_in_out(0.9) > 0.9);
}

#[test]
fn leaf_turns_over_the_flip_duration() {
    let mut flip = FlipAnimator::new(1);
    assert!(approx(flip.leaf_angle(0.0), 0.0));

    flip.set_page(2, 1000.0);
    assert!(flip.is_animating());
    assert!(approx(flip.leaf_angle(1000.0), 0.0));
    // Halfway through, the eased angle is exactly PI/2
    assert!(approx(flip.leaf_angle(1600.0), PI * 0.5));

    assert!(approx(flip.leaf_angle(2200.0), PI));
    assert!(!flip.is_animating());
    assert_eq!(flip.previous_page(), 2);
}

#[test]
fn repeating_the_same_target_does_not_restart() {
    let mut flip = FlipAnimator::new(1);
    flip.set_page(2, 0.0);
    // A duplicate request mid-flight keeps the original start time
    flip.set_page(2, 600.0);
    assert!(approx(flip.leaf_angle(1200.0), PI));
    assert_eq!(flip.previous_page(), 2);
}

#[test]
fn flipping_back_to_the_resting_page_cancels() {
    let mut flip = FlipAnimator::new(1);
    flip.set_page(2, 0.0);
    flip.set_page(1, 100.0);
    assert!(!flip.is_animating());
    assert!(approx(flip.leaf_angle(100.0), 0.0));
}

#[test]
fn hinge_swings_a_right_page_onto_the_left() {
    let size = Vec2::new(2.0, 1.0);
    let rest = hinge_matrix(size, HingeSide::Right, 0.0).transform_point3(Vec3::ZERO);
    assert!((rest - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-5);

    let flipped = hinge_matrix(size, HingeSide::Right, PI).transform_point3(Vec3::ZERO);
    assert!((flipped - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-5);

    // Midway, the page center lifts out of the paper plane
    let mid = hinge_matrix(size, HingeSide::Right, PI * 0.5).transform_point3(Vec3::ZERO);
    assert!(mid.x.abs() < 1e-5);
    assert!(mid.z.abs() > 0.9);
}

#[test]
fn left_hinge_mirrors_the_right() {
    let size = Vec2::new(2.0, 1.0);
    let rest = hinge_matrix(size, HingeSide::Left, 0.0).transform_point3(Vec3::ZERO);
    assert!((rest - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-5);
}

#[test]
fn open_spread_rests_one_page_on_each_side_of_the_spine() {
    // Book page placement: the leaf rests at angle 0, the second page at
    // its base angle of PI. Their centers must land on opposite halves.
    let page = Vec2::new(1.0, 1.4);
    let leaf = hinge_matrix(page, HingeSide::Left, 0.0).transform_point3(Vec3::ZERO);
    let base = hinge_matrix(page, HingeSide::Left, PI).transform_point3(Vec3::ZERO);
    assert!((leaf - Vec3::new(-0.5, 0.0, 0.0)).length() < 1e-5);
    assert!((base - Vec3::new(0.5, 0.0, 0.0)).length() < 1e-5);

    // A positive mid-flight angle lifts the leaf toward the viewer
    let mid = hinge_matrix(page, HingeSide::Left, PI * 0.5).transform_point3(Vec3::ZERO);
    assert!(mid.z > 0.4);
}

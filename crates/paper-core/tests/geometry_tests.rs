use glam::{Vec2, Vec3};
use paper_core::camera::{project_to_screen, Camera};
use paper_core::geometry::{
    model_matrix, plane_vertices, world_viewport, PaperGeometry, Viewport,
};
use paper_core::transform::PaperTransform;

const FILL: f32 = 0.85;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn tall_image_is_limited_by_viewport_height() {
    let vp = Viewport::new(1600.0, 800.0);
    let camera = Camera::paper_rig(vp.aspect());
    let world = world_viewport(&camera, vp);

    let geom = PaperGeometry::fit(0.5, &camera, vp);
    assert!(approx(geom.plane_size.y, world.y * FILL));
    assert!(approx(geom.plane_size.x / geom.plane_size.y, 0.5));
}

#[test]
fn wide_image_is_limited_by_viewport_width() {
    let vp = Viewport::new(1600.0, 800.0);
    let camera = Camera::paper_rig(vp.aspect());
    let world = world_viewport(&camera, vp);

    let geom = PaperGeometry::fit(4.0, &camera, vp);
    assert!(approx(geom.plane_size.x, world.x * FILL));
    assert!(approx(geom.plane_size.x / geom.plane_size.y, 4.0));
}

#[test]
fn fitted_plane_never_exceeds_the_fill_factor() {
    let vp = Viewport::new(1200.0, 900.0);
    let camera = Camera::paper_rig(vp.aspect());
    let world = world_viewport(&camera, vp);
    for aspect in [0.2, 0.75, 1.0, 1.33, 3.0] {
        let geom = PaperGeometry::fit(aspect, &camera, vp);
        assert!(geom.plane_size.x <= world.x * FILL + 1e-4);
        assert!(geom.plane_size.y <= world.y * FILL + 1e-4);
    }
}

#[test]
fn pixel_conversion_flips_the_vertical_axis() {
    let vp = Viewport::new(1000.0, 800.0);
    let camera = Camera::paper_rig(vp.aspect());
    let geom = PaperGeometry::fit(1.0, &camera, vp);

    // Screen y grows downward, world y grows upward
    let w = geom.px_to_world(Vec2::new(100.0, 50.0));
    assert!(w.x > 0.0);
    assert!(w.y < 0.0);
    assert!(approx(w.x * geom.pixels_per_unit, 100.0));
    assert!(approx(-w.y * geom.pixels_per_unit, 50.0));
}

#[test]
fn pan_moves_the_plane_center_in_screen_space() {
    let vp = Viewport::new(1000.0, 800.0);
    let camera = Camera::paper_rig(vp.aspect());
    let geom = PaperGeometry::fit(1.0, &camera, vp);

    let transform = PaperTransform {
        position: Vec2::new(120.0, -60.0),
        ..Default::default()
    };
    let model = model_matrix(&transform, &geom);
    let center = model.transform_point3(Vec3::ZERO);

    let (screen, _) = project_to_screen(camera.view_proj() * model, Vec3::ZERO, vp)
        .expect("center is in front of the camera");
    // 120 px right and 60 px up from the viewport center
    assert!((screen - Vec2::new(620.0, 340.0)).length() < 0.5);
    assert!(center.z.abs() < 1e-6);
}

#[test]
fn plane_vertices_span_the_centered_rect() {
    let verts = plane_vertices(Vec2::new(2.0, 1.0));
    for v in &verts {
        assert!(v.pos[0].abs() <= 1.0 + 1e-6);
        assert!(v.pos[1].abs() <= 0.5 + 1e-6);
        assert_eq!(v.pos[2], 0.0);
        assert!((0.0..=1.0).contains(&v.uv[0]));
        assert!((0.0..=1.0).contains(&v.uv[1]));
    }
    // UV origin is the top-left corner of the image
    let top_left = verts
        .iter()
        .find(|v| v.pos[0] < 0.0 && v.pos[1] > 0.0)
        .expect("has a top-left vertex");
    assert_eq!(top_left.uv, [0.0, 0.0]);
}

#[test]
fn points_behind_the_camera_do_not_project() {
    let vp = Viewport::new(1000.0, 800.0);
    let camera = Camera::paper_rig(vp.aspect());
    // The camera sits at z = 5 looking toward -z
    assert!(project_to_screen(camera.view_proj(), Vec3::new(0.0, 0.0, 10.0), vp).is_none());
    assert!(project_to_screen(camera.view_proj(), Vec3::ZERO, vp).is_some());
}

#[test]
fn world_center_projects_to_the_viewport_center() {
    let vp = Viewport::new(1000.0, 800.0);
    let camera = Camera::paper_rig(vp.aspect());
    let (screen, depth) =
        project_to_screen(camera.view_proj(), Vec3::ZERO, vp).expect("visible");
    assert!((screen - Vec2::new(500.0, 400.0)).length() < 1e-3);
    assert!((0.0..1.0).contains(&depth));
}

use glam::Vec2;
use paper_core::camera::Camera;
use paper_core::geometry::{PaperGeometry, Viewport};
use paper_core::hotspot::{paper_screen_rect, project_hotspots, Hotspot, HotspotAction};
use paper_core::transform::PaperTransform;

fn viewport() -> Viewport {
    Viewport::new(1000.0, 800.0)
}

fn rig() -> (Camera, PaperGeometry) {
    let vp = viewport();
    let camera = Camera::paper_rig(vp.aspect());
    let geometry = PaperGeometry::fit(0.75, &camera, vp);
    (camera, geometry)
}

fn hotspot(top: f32, left: f32, width: f32, height: f32, rotation: f32) -> Hotspot {
    Hotspot {
        top_pct: top,
        left_pct: left,
        width_pct: width,
        height_pct: height,
        rotation_deg: rotation,
        action: HotspotAction::Link {
            href: "https://example.com/".to_string(),
        },
        title: "test".to_string(),
    }
}

#[test]
fn centered_hotspot_projects_to_the_viewport_center() {
    let (camera, geometry) = rig();
    let spots = [hotspot(45.0, 45.0, 10.0, 10.0, 0.0)];
    let projected =
        project_hotspots(&PaperTransform::default(), &geometry, &camera, viewport(), &spots);
    assert_eq!(projected.len(), 1);
    let center = projected[0].bounds.center();
    assert!((center - Vec2::new(500.0, 400.0)).length() < 0.5);
}

#[test]
fn screen_position_follows_the_percent_rect() {
    let (camera, geometry) = rig();
    // Upper-left quadrant of the paper
    let spots = [hotspot(10.0, 10.0, 20.0, 10.0, 0.0)];
    let projected =
        project_hotspots(&PaperTransform::default(), &geometry, &camera, viewport(), &spots);
    assert_eq!(projected.len(), 1);
    let center = projected[0].bounds.center();
    assert!(center.x < 500.0);
    assert!(center.y < 400.0);
}

#[test]
fn backside_suppresses_every_hotspot() {
    let (camera, geometry) = rig();
    let spots = [
        hotspot(10.0, 10.0, 20.0, 10.0, 0.0),
        hotspot(60.0, 60.0, 20.0, 10.0, 0.0),
    ];
    let transform = PaperTransform {
        rotation: Vec2::new(0.0, 180.0),
        ..Default::default()
    };
    let projected = project_hotspots(&transform, &geometry, &camera, viewport(), &spots);
    assert!(projected.is_empty());
}

#[test]
fn unrotated_quads_fill_their_bounds() {
    let (camera, geometry) = rig();
    let spots = [hotspot(20.0, 30.0, 25.0, 15.0, 0.0)];
    let projected =
        project_hotspots(&PaperTransform::default(), &geometry, &camera, viewport(), &spots);
    assert_eq!(projected.len(), 1);
    // Axis-aligned rect: every clip corner sits on the AABB edge
    for corner in projected[0].clip_pct {
        for v in corner {
            assert!((-0.01..=100.01).contains(&v), "clip pct {v} out of range");
            assert!(v.abs() < 0.1 || (v - 100.0).abs() < 0.1);
        }
    }
}

#[test]
fn in_plane_rotation_widens_the_bounds() {
    let (camera, geometry) = rig();
    let flat = [hotspot(40.0, 30.0, 30.0, 10.0, 0.0)];
    let tilted = [hotspot(40.0, 30.0, 30.0, 10.0, 45.0)];
    let vp = viewport();
    let t = PaperTransform::default();
    let flat_h = project_hotspots(&t, &geometry, &camera, vp, &flat)[0]
        .bounds
        .height();
    let tilted_h = project_hotspots(&t, &geometry, &camera, vp, &tilted)[0]
        .bounds
        .height();
    assert!(tilted_h > flat_h);
}

#[test]
fn quads_behind_the_camera_are_dropped() {
    let (camera, geometry) = rig();
    // Pitched flat-on and zoomed far enough that the top edge passes the eye
    let transform = PaperTransform {
        rotation: Vec2::new(90.0, 0.0),
        scale: 3.0,
        ..Default::default()
    };
    let spots = [hotspot(0.0, 0.0, 100.0, 100.0, 0.0)];
    let projected = project_hotspots(&transform, &geometry, &camera, viewport(), &spots);
    assert!(projected.is_empty());
}

#[test]
fn paper_rect_splits_paper_from_margin() {
    let (camera, geometry) = rig();
    let vp = viewport();
    let rect = paper_screen_rect(&PaperTransform::default(), &geometry, &camera, vp)
        .expect("rect for the rest transform");

    assert!((rect.center() - Vec2::new(500.0, 400.0)).length() < 0.5);
    // A long horizontal drag that starts on the paper stays inside the
    // rect, so it classifies as rotation rather than swipe
    assert!(rect.contains(Vec2::new(500.0, 400.0)));
    assert!(rect.contains(Vec2::new(440.0, 400.0)));
    // Points in the surrounding margin fall outside and may swipe
    assert!(!rect.contains(Vec2::new(rect.min.x - 10.0, 400.0)));
    assert!(!rect.contains(Vec2::new(rect.max.x + 10.0, 400.0)));
    assert!(!rect.contains(Vec2::new(500.0, rect.max.y + 10.0)));
}

#[test]
fn paper_rect_grows_with_zoom() {
    let (camera, geometry) = rig();
    let vp = viewport();
    let rest = paper_screen_rect(&PaperTransform::default(), &geometry, &camera, vp)
        .expect("rest rect");
    let zoomed_transform = PaperTransform {
        scale: 2.0,
        ..Default::default()
    };
    let zoomed = paper_screen_rect(&zoomed_transform, &geometry, &camera, vp)
        .expect("zoomed rect");
    assert!(zoomed.width() > rest.width() * 1.5);
    assert!(zoomed.height() > rest.height() * 1.5);
}

#[test]
fn index_survives_partial_drops() {
    let (camera, geometry) = rig();
    let spots = [
        hotspot(5.0, 5.0, 10.0, 10.0, 0.0),
        hotspot(80.0, 80.0, 15.0, 15.0, 0.0),
    ];
    let projected =
        project_hotspots(&PaperTransform::default(), &geometry, &camera, viewport(), &spots);
    assert_eq!(projected.len(), 2);
    assert_eq!(projected[0].index, 0);
    assert_eq!(projected[1].index, 1);
}

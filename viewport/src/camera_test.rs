#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn cam(x: f64, y: f64, scale: f64) -> Camera {
    Camera { position: Point::new(x, y), scale }
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_add_and_sub() {
    let a = Point::new(1.0, 2.0);
    let b = Point::new(10.0, 20.0);
    assert_eq!(a + b, Point::new(11.0, 22.0));
    assert_eq!(b - a, Point::new(9.0, 18.0));
}

#[test]
fn point_scale_and_divide() {
    let p = Point::new(3.0, -6.0);
    assert_eq!(p * 2.0, Point::new(6.0, -12.0));
    assert_eq!(p / 3.0, Point::new(1.0, -2.0));
}

#[test]
fn point_div_elem() {
    let p = Point::new(10.0, 9.0);
    assert_eq!(p.div_elem(Point::new(2.0, 3.0)), Point::new(5.0, 3.0));
}

#[test]
fn point_negate() {
    assert_eq!(-Point::new(1.5, -2.0), Point::new(-1.5, 2.0));
}

#[test]
fn point_css_translate() {
    assert_eq!(Point::new(8.0, 18.5).to_css_translate(), "translate(8px,18.5px)");
}

// --- Camera defaults ---

#[test]
fn camera_default_is_identity() {
    let c = Camera::default();
    assert_eq!(c.position, Point::ZERO);
    assert_eq!(c.scale, 1.0);
}

#[test]
fn camera_new_clamps_scale() {
    let c = Camera::new(Point::ZERO, -3.0);
    assert_eq!(c.scale, MIN_SCALE);
}

// --- world_to_screen ---

#[test]
fn world_to_screen_identity() {
    let screen = Camera::default().world_to_screen(Point::new(50.0, 75.0));
    assert!(point_approx_eq(screen, Point::new(50.0, 75.0)));
}

#[test]
fn world_to_screen_with_scale() {
    let screen = cam(0.0, 0.0, 2.0).world_to_screen(Point::new(10.0, 20.0));
    assert!(point_approx_eq(screen, Point::new(20.0, 40.0)));
}

#[test]
fn world_to_screen_with_position_and_scale() {
    // (5 - 20) * 3 = -45, (5 - 10) * 3 = -15
    let screen = cam(20.0, 10.0, 3.0).world_to_screen(Point::new(5.0, 5.0));
    assert!(point_approx_eq(screen, Point::new(-45.0, -15.0)));
}

#[test]
fn world_to_screen_position_maps_to_origin() {
    let c = cam(-100.0, 42.0, 2.0);
    assert!(point_approx_eq(c.world_to_screen(c.position), Point::ZERO));
}

// --- screen_to_world ---

#[test]
fn screen_to_world_identity() {
    let world = Camera::default().screen_to_world(Point::new(50.0, 75.0));
    assert!(point_approx_eq(world, Point::new(50.0, 75.0)));
}

#[test]
fn screen_to_world_with_scale() {
    let world = cam(0.0, 0.0, 4.0).screen_to_world(Point::new(40.0, 80.0));
    assert!(point_approx_eq(world, Point::new(10.0, 20.0)));
}

#[test]
fn screen_to_world_origin_is_position() {
    let c = cam(50.0, 30.0, 2.0);
    assert!(point_approx_eq(c.screen_to_world(Point::ZERO), Point::new(50.0, 30.0)));
}

// --- Round trips ---

#[test]
fn round_trip_world_first() {
    let cameras = [cam(0.0, 0.0, 1.0), cam(50.0, -30.0, 2.0), cam(13.7, -42.3, 0.75), cam(-1e4, 3e3, 0.05)];
    let points = [Point::ZERO, Point::new(100.0, 200.0), Point::new(333.3, -999.9), Point::new(-0.5, 1e5)];
    for c in cameras {
        for p in points {
            let back = c.screen_to_world(c.world_to_screen(p));
            assert!((back.x - p.x).abs() < 1e-6 && (back.y - p.y).abs() < 1e-6, "{c:?} {p:?} -> {back:?}");
        }
    }
}

#[test]
fn round_trip_screen_first() {
    let c = cam(10.0, 20.0, 1.5);
    let screen = Point::new(400.0, 300.0);
    assert!(point_approx_eq(c.world_to_screen(c.screen_to_world(screen)), screen));
}

// --- screen_dist_to_world ---

#[test]
fn screen_dist_to_world_with_scale() {
    assert!(approx_eq(cam(0.0, 0.0, 2.0).screen_dist_to_world(10.0), 5.0));
    assert!(approx_eq(cam(999.0, -999.0, 0.5).screen_dist_to_world(10.0), 20.0));
}

// --- pan_by_screen ---

#[test]
fn pan_moves_position_against_drag() {
    let mut c = cam(0.0, 0.0, 2.0);
    c.pan_by_screen(Point::new(10.0, -4.0));
    assert!(point_approx_eq(c.position, Point::new(-5.0, 2.0)));
}

#[test]
fn pan_keeps_world_point_under_pointer() {
    let mut c = cam(7.0, -3.0, 1.25);
    let a = Point::new(120.0, 80.0);
    let b = Point::new(35.0, 210.0);
    let grabbed = c.screen_to_world(a);
    c.pan_by_screen(b - a);
    assert!(point_approx_eq(c.world_to_screen(grabbed), b));
}

// --- zoom_by ---

#[test]
fn zoom_by_changes_scale_linearly() {
    let mut c = Camera::default();
    assert!(!c.zoom_by(-0.1));
    assert!(approx_eq(c.scale, 0.9));
}

#[test]
fn zoom_keeps_viewport_origin_world_point() {
    let mut c = cam(40.0, -25.0, 1.5);
    let before = c.screen_to_world(Point::ZERO);
    c.zoom_by(0.7);
    assert!(point_approx_eq(c.screen_to_world(Point::ZERO), before));
}

#[test]
fn zoom_at_zero_position_keeps_world_origin_on_screen() {
    let mut c = Camera::default();
    let before = c.world_to_screen(Point::ZERO);
    c.zoom_by(-0.4);
    assert!(point_approx_eq(c.world_to_screen(Point::ZERO), before));
}

#[test]
fn zoom_by_clamps_at_min_scale() {
    let mut c = Camera::default();
    assert!(c.zoom_by(-5.0));
    assert_eq!(c.scale, MIN_SCALE);
}

#[test]
fn zoom_by_clamps_nan() {
    let mut c = Camera::default();
    assert!(c.zoom_by(f64::NAN));
    assert_eq!(c.scale, MIN_SCALE);
}

// --- css_transform ---

#[test]
fn css_transform_identity() {
    assert_eq!(Camera::default().css_transform(), "scale(1) translate(0px,0px)");
}

#[test]
fn css_transform_negates_position() {
    assert_eq!(cam(-100.0, -100.0, 2.0).css_transform(), "scale(2) translate(100px,100px)");
}

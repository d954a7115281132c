#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn lines_per_axis_matches_band() {
    assert_eq!(lines_per_axis(), 80);
}

#[test]
fn grid_has_origin_plus_both_axes() {
    let count = grid_primitives(Camera::default(), 50.0).count();
    assert_eq!(count, 1 + 2 * lines_per_axis());
}

#[test]
fn origin_marker_comes_first() {
    let camera = Camera { position: Point::new(-10.0, 5.0), scale: 2.0 };
    let first = grid_primitives(camera, 50.0).next();
    assert_eq!(first, Some(GridPrimitive::OriginMarker { at: Point::new(20.0, -10.0) }));
}

#[test]
fn vertical_lines_precede_horizontal_lines() {
    let axes: Vec<Axis> = grid_primitives(Camera::default(), 10.0)
        .filter_map(|p| match p {
            GridPrimitive::Line { axis, .. } => Some(axis),
            GridPrimitive::OriginMarker { .. } => None,
        })
        .collect();
    let split = lines_per_axis();
    assert!(axes[..split].iter().all(|a| *a == Axis::Vertical));
    assert!(axes[split..].iter().all(|a| *a == Axis::Horizontal));
}

#[test]
fn lines_are_projected_through_camera() {
    let camera = Camera { position: Point::new(100.0, 0.0), scale: 0.5 };
    let line = grid_primitives(camera, 10.0)
        .find(|p| matches!(p, GridPrimitive::Line { axis: Axis::Vertical, index: 0, .. }));
    let Some(GridPrimitive::Line { from, to, .. }) = line else {
        panic!("missing vertical line 0");
    };
    // world x = 0 -> (0 - 100) * 0.5 = -50; band y from -300 to 490.
    assert_eq!(from, Point::new(-50.0, -150.0));
    assert_eq!(to, Point::new(-50.0, 245.0));
}

#[test]
fn index_range_is_half_open() {
    let indices: Vec<i32> = grid_primitives(Camera::default(), 1.0)
        .filter_map(|p| match p {
            GridPrimitive::Line { axis: Axis::Horizontal, index, .. } => Some(index),
            _ => None,
        })
        .collect();
    assert_eq!(indices.first(), Some(&GRID_INDEX_MIN));
    assert_eq!(indices.last(), Some(&(GRID_INDEX_MAX - 1)));
}

#[test]
fn output_is_restartable_and_deterministic() {
    let camera = Camera { position: Point::new(3.0, 4.0), scale: 1.5 };
    let iter = grid_primitives(camera, 25.0);
    let a: Vec<_> = iter.clone().collect();
    let b: Vec<_> = iter.collect();
    let c: Vec<_> = grid_primitives(camera, 25.0).collect();
    assert_eq!(a, b);
    assert_eq!(a, c);
}

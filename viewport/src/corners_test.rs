#![allow(clippy::float_cmp)]

use super::*;

fn emoji_box() -> BoundingBox {
    BoundingBox::new(10.0, 20.0, 30.0, 50.0)
}

fn container_box() -> BoundingBox {
    BoundingBox::new(0.0, 0.0, 100.0, 100.0)
}

// =============================================================
// BoundingBox
// =============================================================

#[test]
fn bounding_box_corners() {
    let b = emoji_box();
    assert_eq!(b.top_left(), Point::new(10.0, 20.0));
    assert_eq!(b.top_right(), Point::new(30.0, 20.0));
    assert_eq!(b.bottom_right(), Point::new(30.0, 50.0));
    assert_eq!(b.bottom_left(), Point::new(10.0, 50.0));
}

// =============================================================
// derive_corners
// =============================================================

#[test]
fn corners_are_ordered_and_centred() {
    let corners = derive_corners(Some(emoji_box()), Some(container_box()), 4.0);
    assert_eq!(
        corners.0,
        [Point::new(8.0, 18.0), Point::new(28.0, 18.0), Point::new(28.0, 48.0), Point::new(8.0, 48.0)]
    );
}

#[test]
fn corners_are_relative_to_container_origin() {
    let container = BoundingBox::new(100.0, 40.0, 400.0, 300.0);
    let emoji = BoundingBox::new(150.0, 60.0, 182.0, 92.0);
    let corners = derive_corners(Some(emoji), Some(container), 0.0);
    assert_eq!(corners.get(Corner::TopLeft), Point::new(50.0, 20.0));
    assert_eq!(corners.get(Corner::BottomRight), Point::new(82.0, 52.0));
}

#[test]
fn missing_emoji_yields_placeholder() {
    let corners = derive_corners(None, Some(container_box()), 4.0);
    assert_eq!(corners, CornerSet::PLACEHOLDER);
    assert!(corners.is_placeholder());
}

#[test]
fn missing_container_yields_placeholder() {
    let corners = derive_corners(Some(emoji_box()), None, 4.0);
    assert_eq!(corners.0, [Point::ZERO; 4]);
}

#[test]
fn measured_corners_are_not_placeholder() {
    assert!(!derive_corners(Some(emoji_box()), Some(container_box()), 4.0).is_placeholder());
}

// =============================================================
// CornerSet access
// =============================================================

#[test]
fn index_matches_corner_enum() {
    let corners = derive_corners(Some(emoji_box()), Some(container_box()), 4.0);
    for (i, corner) in Corner::ALL.into_iter().enumerate() {
        assert_eq!(corners[i], corners.get(corner));
    }
}

#[test]
fn iter_yields_four_points_in_order() {
    let corners = derive_corners(Some(emoji_box()), Some(container_box()), 4.0);
    let xs: Vec<f64> = corners.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![8.0, 28.0, 28.0, 8.0]);
}

#[test]
fn default_is_placeholder() {
    assert!(CornerSet::default().is_placeholder());
}

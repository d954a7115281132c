//! Control-point corners derived from element bounding boxes.
//!
//! The board overlays a square marker on each corner of the emoji being
//! edited. Marker positions live in the overlay container's coordinate
//! space, so they are computed from two screen-space measurements: the
//! emoji's rectangle and the container's rectangle. The result is derived on
//! demand and never cached here; the owner recomputes it whenever the emoji
//! or the camera changes.

#[cfg(test)]
#[path = "corners_test.rs"]
mod corners_test;

use std::ops::Index;

use crate::camera::Point;

/// Screen-space rectangle of an element, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl BoundingBox {
    #[must_use]
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    #[must_use]
    pub fn top_right(&self) -> Point {
        Point::new(self.right, self.top)
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        Point::new(self.right, self.bottom)
    }

    #[must_use]
    pub fn bottom_left(&self) -> Point {
        Point::new(self.left, self.bottom)
    }
}

/// Which corner of the bounding box; the discriminant is the index in a [`CornerSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft = 0,
    TopRight = 1,
    BottomRight = 2,
    BottomLeft = 3,
}

impl Corner {
    /// All corners in clockwise order starting from the top-left.
    pub const ALL: [Self; 4] = [Self::TopLeft, Self::TopRight, Self::BottomRight, Self::BottomLeft];
}

/// Marker positions for the four corners, clockwise from the top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerSet(pub [Point; 4]);

impl CornerSet {
    /// Returned when either element cannot be measured.
    pub const PLACEHOLDER: Self = Self([Point::ZERO; 4]);

    #[must_use]
    pub fn get(&self, corner: Corner) -> Point {
        self.0[corner as usize]
    }

    /// Whether this is the "not measured yet" placeholder rather than real geometry.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        *self == Self::PLACEHOLDER
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.0.iter().copied()
    }
}

impl Default for CornerSet {
    fn default() -> Self {
        Self::PLACEHOLDER
    }
}

impl Index<usize> for CornerSet {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.0[index]
    }
}

/// Compute marker positions for the corners of `emoji`, relative to the
/// top-left of `container`, each shifted by half of `marker_size` so a square
/// marker of that side is centred on the corner.
///
/// Returns [`CornerSet::PLACEHOLDER`] if either box is missing.
#[must_use]
pub fn derive_corners(emoji: Option<BoundingBox>, container: Option<BoundingBox>, marker_size: f64) -> CornerSet {
    let (Some(emoji), Some(container)) = (emoji, container) else {
        return CornerSet::PLACEHOLDER;
    };

    let offset = container.top_left() + Point::new(marker_size / 2.0, marker_size / 2.0);
    CornerSet([
        emoji.top_left() - offset,
        emoji.top_right() - offset,
        emoji.bottom_right() - offset,
        emoji.bottom_left() - offset,
    ])
}

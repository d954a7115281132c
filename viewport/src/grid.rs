//! Screen-space grid lines and origin marker for the board background.
//!
//! Pure projection: given a camera, produce the primitives to draw. The band
//! of lines is fixed in world space (indices [`GRID_INDEX_MIN`] up to but not
//! including [`GRID_INDEX_MAX`] on each axis), so the output is finite and
//! identical for identical cameras.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use crate::camera::{Camera, Point};
use crate::consts::{GRID_INDEX_MAX, GRID_INDEX_MIN};

/// Orientation of a grid line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Constant world x.
    Vertical,
    /// Constant world y.
    Horizontal,
}

/// One drawable item, already in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridPrimitive {
    /// Marker at the world origin.
    OriginMarker { at: Point },
    /// Grid line at world coordinate `index * grid_size` on the given axis.
    Line { axis: Axis, index: i32, from: Point, to: Point },
}

/// Number of lines drawn per axis.
#[must_use]
pub fn lines_per_axis() -> usize {
    GRID_INDEX_MIN.abs_diff(GRID_INDEX_MAX) as usize
}

/// Project the origin marker and the grid band through `camera`.
///
/// The origin marker comes first, then vertical lines, then horizontal lines,
/// each in ascending index order.
pub fn grid_primitives(camera: Camera, grid_size: f64) -> impl Iterator<Item = GridPrimitive> + Clone {
    let band_start = f64::from(GRID_INDEX_MIN) * grid_size;
    let band_end = f64::from(GRID_INDEX_MAX - 1) * grid_size;

    let origin = std::iter::once(GridPrimitive::OriginMarker { at: camera.world_to_screen(Point::ZERO) });

    let vertical = (GRID_INDEX_MIN..GRID_INDEX_MAX).map(move |index| {
        let x = f64::from(index) * grid_size;
        GridPrimitive::Line {
            axis: Axis::Vertical,
            index,
            from: camera.world_to_screen(Point::new(x, band_start)),
            to: camera.world_to_screen(Point::new(x, band_end)),
        }
    });

    let horizontal = (GRID_INDEX_MIN..GRID_INDEX_MAX).map(move |index| {
        let y = f64::from(index) * grid_size;
        GridPrimitive::Line {
            axis: Axis::Horizontal,
            index,
            from: camera.world_to_screen(Point::new(band_start, y)),
            to: camera.world_to_screen(Point::new(band_end, y)),
        }
    });

    origin.chain(vertical).chain(horizontal)
}

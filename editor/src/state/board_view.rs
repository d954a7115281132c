#[cfg(test)]
#[path = "board_view_test.rs"]
mod board_view_test;

use viewport::camera::{Camera, Point};
use viewport::consts::CURSOR_IDLE;
use viewport::engine::Action;

use crate::consts::{INITIAL_CAMERA_POSITION, INITIAL_CAMERA_SCALE};

/// Camera the board opens with.
#[must_use]
pub fn initial_camera() -> Camera {
    let (x, y) = INITIAL_CAMERA_POSITION;
    Camera::new(Point::new(x, y), INITIAL_CAMERA_SCALE)
}

/// Live board telemetry consumed by the board chrome (transform, cursor, status bar).
#[derive(Clone, Debug, PartialEq)]
pub struct BoardViewState {
    pub camera: Camera,
    pub cursor: String,
    /// Bumped whenever board layout may have moved without a camera change
    /// (image load, window resize); corner measurement keys on it.
    pub layout_epoch: u32,
}

impl Default for BoardViewState {
    fn default() -> Self {
        Self { camera: initial_camera(), cursor: CURSOR_IDLE.to_owned(), layout_epoch: 0 }
    }
}

impl BoardViewState {
    /// Apply engine actions. Returns `true` if the camera or cursor changed.
    pub fn apply(&mut self, actions: Vec<Action>) -> bool {
        let mut changed = false;
        for action in actions {
            match action {
                Action::CameraChanged(camera) => {
                    changed |= camera != self.camera;
                    self.camera = camera;
                }
                Action::SetCursor(cursor) => {
                    changed |= cursor != self.cursor;
                    self.cursor = cursor;
                }
            }
        }
        changed
    }

    /// Mark the board layout as stale so corners get re-measured.
    pub fn invalidate_layout(&mut self) {
        self.layout_epoch = self.layout_epoch.wrapping_add(1);
    }

    /// Scale as a whole percentage, e.g. `200%`.
    #[must_use]
    pub fn zoom_label(&self) -> String {
        format!("{:.0}%", self.camera.scale * 100.0)
    }

    /// World point at the top-left of the board, rounded to whole units.
    #[must_use]
    pub fn position_label(&self) -> String {
        let p = self.camera.position;
        format!("{:.0}, {:.0}", p.x, p.y)
    }
}

use web_sys::Element;

use crate::camera::{Camera, Point};
use crate::consts::{CURSOR_IDLE, CURSOR_PANNING, ZOOM_SENSITIVITY};
use crate::corners::{CornerSet, derive_corners};
use crate::dom;
use crate::input::{Button, InputState, WheelDelta};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Default side of a control-point marker, in CSS pixels.
pub const DEFAULT_MARKER_SIZE: f64 = 5.0;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The camera moved or zoomed; the host should re-render and re-derive corners.
    CameraChanged(Camera),
    SetCursor(String),
}

/// Core engine state: all logic that doesn't depend on DOM elements.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone)]
pub struct EngineCore {
    pub camera: Camera,
    pub input: InputState,
    pub marker_size: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            camera: Camera::default(),
            input: InputState::default(),
            marker_size: DEFAULT_MARKER_SIZE,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a given camera instead of the identity.
    #[must_use]
    pub fn with_camera(camera: Camera) -> Self {
        Self { camera, ..Self::default() }
    }

    // --- Input events ---

    /// Begin a pan drag. Ignored while a drag is already active (the first
    /// press wins).
    ///
    /// Only the primary and middle buttons start a drag. Secondary and other
    /// buttons are ignored, so a right-click on the board never pans.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if self.input.is_panning() || !matches!(button, Button::Primary | Button::Middle) {
            return Vec::new();
        }
        log::debug!("pan started at ({}, {})", screen_pt.x, screen_pt.y);
        self.input = InputState::Panning { anchor: screen_pt };
        vec![Action::SetCursor(CURSOR_PANNING.to_owned())]
    }

    /// Pan by the pointer's screen displacement since the previous event.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        let InputState::Panning { anchor } = self.input else {
            return Vec::new();
        };
        self.input = InputState::Panning { anchor: screen_pt };
        let delta = screen_pt - anchor;
        if delta == Point::ZERO {
            return Vec::new();
        }
        self.camera.pan_by_screen(delta);
        vec![Action::CameraChanged(self.camera)]
    }

    /// End the pan drag, if any.
    pub fn on_pointer_up(&mut self, screen_pt: Point) -> Vec<Action> {
        if !self.input.is_panning() {
            return Vec::new();
        }
        log::debug!("pan ended at ({}, {})", screen_pt.x, screen_pt.y);
        self.input = InputState::Idle;
        vec![Action::SetCursor(CURSOR_IDLE.to_owned())]
    }

    /// Abandon the pan drag without a release position (`pointercancel`,
    /// `lostpointercapture`). Same state change as a release.
    pub fn on_pointer_cancel(&mut self) -> Vec<Action> {
        if !self.input.is_panning() {
            return Vec::new();
        }
        log::debug!("pan cancelled");
        self.input = InputState::Idle;
        vec![Action::SetCursor(CURSOR_IDLE.to_owned())]
    }

    /// Zoom linearly with the vertical wheel delta, anchored at the screen origin.
    pub fn on_wheel(&mut self, delta: WheelDelta) -> Vec<Action> {
        if delta.dy.abs() < f64::EPSILON {
            return Vec::new();
        }
        if self.camera.zoom_by(-delta.dy * ZOOM_SENSITIVITY) {
            log::debug!("scale clamped to {}", self.camera.scale);
        }
        vec![Action::CameraChanged(self.camera)]
    }

    // --- Queries ---

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Whether a pan drag is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.input.is_panning()
    }
}

/// The full viewport engine. Wraps `EngineCore` and holds handles to the
/// elements whose layout drives the control points.
#[derive(Debug, Default)]
pub struct Engine {
    emoji: Option<Element>,
    container: Option<Element>,
    pub core: EngineCore,
}

impl Engine {
    #[must_use]
    pub fn new(core: EngineCore) -> Self {
        Self { emoji: None, container: None, core }
    }

    // --- Tracked elements ---

    /// Set (or clear) the emoji element whose corners are marked.
    pub fn set_emoji_element(&mut self, element: Option<Element>) {
        self.emoji = element;
    }

    /// Set (or clear) the element whose top-left is the control-point origin.
    pub fn set_container_element(&mut self, element: Option<Element>) {
        self.container = element;
    }

    /// Measure both tracked elements and derive the control-point corners.
    ///
    /// Yields [`CornerSet::PLACEHOLDER`] while either element is missing.
    #[must_use]
    pub fn corners(&self) -> CornerSet {
        derive_corners(
            dom::measure(self.emoji.as_ref()),
            dom::measure(self.container.as_ref()),
            self.core.marker_size,
        )
    }

    // --- Delegated input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, button)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt)
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_pointer_up(screen_pt)
    }

    pub fn on_pointer_cancel(&mut self) -> Vec<Action> {
        self.core.on_pointer_cancel()
    }

    pub fn on_wheel(&mut self, delta: WheelDelta) -> Vec<Action> {
        self.core.on_wheel(delta)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.core.camera()
    }
}

//! Shared numeric constants for the viewport crate.

// ── Zoom ────────────────────────────────────────────────────────

/// Scale change per pixel of vertical wheel delta (positive delta zooms out).
pub const ZOOM_SENSITIVITY: f64 = 0.001;

/// Smallest scale the camera may reach; keeps the transform invertible.
pub const MIN_SCALE: f64 = 0.05;

// ── Grid ────────────────────────────────────────────────────────

/// First grid line index (inclusive) drawn on each axis.
pub const GRID_INDEX_MIN: i32 = -30;

/// Grid line index bound (exclusive) on each axis.
pub const GRID_INDEX_MAX: i32 = 50;

// ── Cursors ─────────────────────────────────────────────────────

/// Cursor shown while the board is idle and can be grabbed.
pub const CURSOR_IDLE: &str = "grab";

/// Cursor shown during a pan drag.
pub const CURSOR_PANNING: &str = "grabbing";

//! Animation timeline position.
//!
//! The timeline is a normalized position in `[0, 1]` moved in steps of
//! [`TIME_STEP`]. Keyframes are not recorded yet; the position only drives
//! the slider.

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

pub const TIME_MIN: f64 = 0.0;
pub const TIME_MAX: f64 = 1.0;
pub const TIME_STEP: f64 = 0.01;

/// `1 / TIME_STEP`; dividing by it keeps snapped values exact.
const STEPS_PER_UNIT: f64 = 100.0;

/// Clamp to `[TIME_MIN, TIME_MAX]` and snap to the nearest step.
#[must_use]
pub fn snap_time(raw: f64) -> f64 {
    if raw.is_nan() {
        return TIME_MIN;
    }
    (raw.clamp(TIME_MIN, TIME_MAX) * STEPS_PER_UNIT).round() / STEPS_PER_UNIT
}

/// Parse a slider value; `None` if it is not a number.
#[must_use]
pub fn parse_time(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().map(snap_time)
}

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::consts::MIN_SCALE;
use crate::css;

/// A point (or displacement) in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise division.
    #[must_use]
    pub fn div_elem(self, rhs: Self) -> Self {
        Self { x: self.x / rhs.x, y: self.y / rhs.y }
    }

    /// CSS `translate(...)` value moving an element by this vector in pixels.
    #[must_use]
    pub fn to_css_translate(self) -> String {
        css::translate(self)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

impl Div<f64> for Point {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self { x: self.x / rhs, y: self.y / rhs }
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self { x: -self.x, y: -self.y }
    }
}

/// Camera state for pan/zoom on the infinite board.
///
/// `position` is the world point shown at the viewport's screen origin.
/// `scale` is the world-to-screen multiplier and stays above
/// [`MIN_SCALE`] once it has gone through [`Camera::zoom_by`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Point,
    pub scale: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { position: Point::ZERO, scale: 1.0 }
    }
}

impl Camera {
    #[must_use]
    pub fn new(position: Point, scale: f64) -> Self {
        Self { position, scale: scale.max(MIN_SCALE) }
    }

    /// Convert a world-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        (world - self.position) * self.scale
    }

    /// Convert a screen-space point (CSS pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        screen * (1.0 / self.scale) + self.position
    }

    /// Convert a screen-space distance (pixels) to world-space distance.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.scale
    }

    /// Shift the camera so the content under the pointer follows a screen-space
    /// drag of `screen_delta`.
    pub fn pan_by_screen(&mut self, screen_delta: Point) {
        self.position = self.position - screen_delta / self.scale;
    }

    /// Change the scale by `delta`, keeping the world point at the screen
    /// origin fixed. Returns `true` when the result had to be clamped.
    pub fn zoom_by(&mut self, delta: f64) -> bool {
        let next = self.scale + delta;
        if next < MIN_SCALE || next.is_nan() {
            self.scale = MIN_SCALE;
            return true;
        }
        self.scale = next;
        false
    }

    /// CSS transform for the content layer (with `transform-origin: 0 0`)
    /// that renders world point `p` at [`Camera::world_to_screen`]`(p)`.
    #[must_use]
    pub fn css_transform(&self) -> String {
        css::camera_transform(self.scale, -self.position)
    }
}

//! CSS value formatting for vectors and transforms.
//!
//! Numbers use Rust's shortest round-trip `f64` display, so `2.0` is written
//! as `2` and `0.9` as `0.9`, both valid CSS numbers.

#[cfg(test)]
#[path = "css_test.rs"]
mod css_test;

use crate::camera::Point;

/// Pixel unit suffix.
pub const PX: &str = "px";

/// Format a vector as a parenthesised CSS argument list, e.g. `(10px,20px)`.
///
/// An empty `unit` writes bare numbers.
#[must_use]
pub fn vec_to_css(v: Point, unit: &str) -> String {
    let mut out = String::with_capacity(24);
    out.push('(');
    push_number(&mut out, v.x, unit);
    out.push(',');
    push_number(&mut out, v.y, unit);
    out.push(')');
    out
}

/// `translate(<x>px,<y>px)`.
#[must_use]
pub fn translate(v: Point) -> String {
    format!("translate{}", vec_to_css(v, PX))
}

/// `scale(<s>) translate(<x>px,<y>px)`: scale applied after the translation.
#[must_use]
pub fn camera_transform(scale: f64, offset: Point) -> String {
    let mut out = String::from("scale(");
    push_number(&mut out, scale, "");
    out.push_str(") ");
    out.push_str(&translate(offset));
    out
}

fn push_number(out: &mut String, value: f64, unit: &str) {
    // `+ 0.0` turns -0 into 0.
    out.push_str(&(value + 0.0).to_string());
    out.push_str(unit);
}

//! Bounding-box measurement of DOM elements.
//!
//! This is the only module that reads layout from [`web_sys`]. Callers pass
//! element handles explicitly; nothing here searches the document.

use web_sys::Element;

use crate::corners::BoundingBox;

/// Current on-screen rectangle of `element` in CSS pixels.
#[must_use]
pub fn bounding_box(element: &Element) -> BoundingBox {
    let rect = element.get_bounding_client_rect();
    BoundingBox::new(rect.left(), rect.top(), rect.right(), rect.bottom())
}

/// Measure an element that may not be mounted yet.
#[must_use]
pub fn measure(element: Option<&Element>) -> Option<BoundingBox> {
    element.map(bounding_box)
}

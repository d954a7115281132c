//! Background grid and world-origin marker.

use leptos::prelude::*;
use viewport::camera::Camera;
use viewport::grid::{GridPrimitive, grid_primitives};

/// Radius of the origin marker in screen pixels.
const ORIGIN_MARKER_RADIUS: f64 = 3.0;

/// SVG group re-projected whenever the camera changes.
#[component]
pub fn GridLayer(#[prop(into)] camera: Signal<Camera>, grid_size: f64) -> impl IntoView {
    let primitives = move || {
        grid_primitives(camera.get(), grid_size)
            .map(|primitive| match primitive {
                GridPrimitive::OriginMarker { at } => {
                    view! { <circle class="grid__origin" cx={at.x} cy={at.y} r=ORIGIN_MARKER_RADIUS/> }.into_any()
                }
                GridPrimitive::Line { index, from, to, .. } => {
                    let class = if index == 0 { "grid__line grid__line--axis" } else { "grid__line" };
                    view! { <line class=class x1={from.x} y1={from.y} x2={to.x} y2={to.y}/> }.into_any()
                }
            })
            .collect::<Vec<_>>()
    };

    view! { <g class="grid">{primitives}</g> }
}

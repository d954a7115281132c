//! Square markers on the corners of the emoji being edited.

use leptos::prelude::*;
use viewport::corners::{Corner, CornerSet};

/// SVG group with one marker per corner, hidden until the corners have been
/// measured.
#[component]
pub fn ControlPoints(#[prop(into)] corners: Signal<CornerSet>, size: f64) -> impl IntoView {
    let markers = Corner::ALL
        .into_iter()
        .map(|corner| {
            let transform = move || corners.get().get(corner).to_css_translate();
            view! { <rect class="control-point" width=size height=size style:transform=transform/> }
        })
        .collect::<Vec<_>>();

    view! {
        <g class="control-points" class:control-points--hidden=move || corners.get().is_placeholder()>
            {markers}
        </g>
    }
}

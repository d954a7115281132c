//! Record button and timeline slider under the board.

use leptos::prelude::*;

use crate::state::editor::EditorState;
use crate::state::timeline::{TIME_MAX, TIME_MIN, TIME_STEP, parse_time};

/// Timeline controls. Recording keyframes is not implemented, so the record
/// button stays disabled; the slider only moves the timeline position.
#[component]
pub fn TimelineBar() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();

    let on_input = move |ev: leptos::ev::Event| {
        if let Some(time) = parse_time(&event_target_value(&ev)) {
            editor.update(|s| s.set_time(time));
        }
    };

    view! {
        <div class="timeline-bar">
            <button class="timeline-bar__record" title="Recording is not available yet" disabled=true>
                "\u{25CF}"
            </button>
            <input
                class="timeline-bar__slider"
                type="range"
                name="timeline"
                min=TIME_MIN
                max=TIME_MAX
                step=TIME_STEP
                prop:value=move || editor.with(|s| s.time.to_string())
                on:input=on_input
            />
        </div>
    }
}

//! Status line under the board showing zoom level and camera position.

use leptos::prelude::*;

use crate::state::board_view::BoardViewState;

/// Status bar for the animation board.
#[component]
pub fn StatusBar(view_state: RwSignal<BoardViewState>) -> impl IntoView {
    let zoom = move || view_state.with(BoardViewState::zoom_label);
    let position = move || view_state.with(BoardViewState::position_label);

    view! {
        <div class="status-bar">
            <span class="status-bar__position">{position}</span>
            <span class="status-bar__spacer"></span>
            <span class="status-bar__zoom">{zoom}</span>
        </div>
    }
}

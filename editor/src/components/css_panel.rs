//! Editable custom CSS, injected live into the page.

use leptos::prelude::*;

use crate::state::editor::EditorState;

/// Text box bound to `EditorState::css` plus the `<style>` element applying it.
#[component]
pub fn CssPanel() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let css = move || editor.with(|s| s.css.clone());

    view! {
        <div class="css-panel">
            <label for="css-input-field">"css:"</label>
            <textarea
                id="css-input-field"
                class="css-panel__input"
                spellcheck="false"
                prop:value=css
                on:input=move |ev| editor.update(|s| s.set_css(event_target_value(&ev)))
            ></textarea>
            <style id="custom-style">{css}</style>
        </div>
    }
}

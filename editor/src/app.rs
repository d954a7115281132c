//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::animation_editor::AnimationEditor;
use crate::components::chat_room::ChatRoom;
use crate::components::css_panel::CssPanel;
use crate::net::stylesheet::StylesheetError;
use crate::state::editor::EditorState;

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

/// What happened to a finished stylesheet load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StylesheetOutcome {
    /// The loaded text replaced the CSS.
    Applied,
    /// The load failed; the CSS text is unchanged.
    Kept,
    /// The editor was gone before the load finished.
    Disposed,
}

/// Root application component.
///
/// Provides the shared `EditorState` and lays out the board on the left and
/// the live preview plus CSS box on the right.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let editor = RwSignal::new(EditorState::default());
    provide_context(editor);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(load_default_stylesheet(editor));

    view! {
        <Title text="Emote Studio"/>
        <div class="split">
            <div class="split__left">
                <AnimationEditor/>
            </div>
            <div class="split__right">
                <div class="preview-panel">
                    <ChatRoom/>
                </div>
                <CssPanel/>
            </div>
        </div>
    }
}

/// Hand a finished stylesheet load to the editor, if it still exists.
pub fn store_stylesheet(editor: RwSignal<EditorState>, loaded: Result<String, StylesheetError>) -> StylesheetOutcome {
    match editor.try_update(|s| s.apply_stylesheet(loaded)) {
        None => {
            log::debug!("editor disposed before the default stylesheet arrived");
            StylesheetOutcome::Disposed
        }
        Some(Ok(())) => StylesheetOutcome::Applied,
        Some(Err(e)) => {
            log::warn!("default stylesheet unavailable: {e}");
            StylesheetOutcome::Kept
        }
    }
}

#[cfg(feature = "csr")]
async fn load_default_stylesheet(editor: RwSignal<EditorState>) {
    let loaded = crate::net::stylesheet::fetch_stylesheet(crate::consts::STYLESHEET_PATH).await;
    let outcome = store_stylesheet(editor, loaded);
    log::debug!("default stylesheet: {outcome:?}");
}

use super::*;

fn editor_with_css(css: &str) -> RwSignal<EditorState> {
    let mut state = EditorState::default();
    state.set_css(css.to_owned());
    RwSignal::new(state)
}

#[test]
fn loaded_stylesheet_replaces_css() {
    let editor = editor_with_css("p {}");
    let outcome = store_stylesheet(editor, Ok("yt-live-chat-renderer {}".to_owned()));
    assert_eq!(outcome, StylesheetOutcome::Applied);
    assert_eq!(editor.with_untracked(|s| s.css.clone()), "yt-live-chat-renderer {}");
}

#[test]
fn failed_load_keeps_css() {
    let editor = editor_with_css("p {}");
    let outcome = store_stylesheet(editor, Err(StylesheetError::Request("network down".to_owned())));
    assert_eq!(outcome, StylesheetOutcome::Kept);
    assert_eq!(editor.with_untracked(|s| s.css.clone()), "p {}");
}

#[test]
fn load_after_dispose_is_noop() {
    let editor = editor_with_css("p {}");
    editor.dispose();
    let outcome = store_stylesheet(editor, Ok("yt-live-chat-renderer {}".to_owned()));
    assert_eq!(outcome, StylesheetOutcome::Disposed);
    assert!(editor.try_with_untracked(|s| s.css.clone()).is_none());
}

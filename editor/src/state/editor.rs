#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use super::emoji::{emoji_file_name, emoji_name_to_alt};
use super::timeline::snap_time;
use crate::consts::{DEFAULT_EMOJI_CSS, NO_EMOJI_TEXT};
use crate::net::stylesheet::StylesheetError;

/// Top-level editor state shared by the board, the preview, and the CSS box.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorState {
    /// Custom CSS applied to the whole page; starts empty until the default
    /// stylesheet arrives.
    pub css: String,
    /// Name of the emoji being edited (e.g. `:_kusa:`); empty when none.
    pub current_emoji: String,
    /// CSS targeting the emoji on the board.
    pub emoji_css: String,
    /// Timeline position in `[0, 1]`.
    pub time: f64,
}

impl Default for EditorState {
    fn default() -> Self {
        Self { css: String::new(), current_emoji: String::new(), emoji_css: DEFAULT_EMOJI_CSS.to_owned(), time: 0.0 }
    }
}

impl EditorState {
    /// Replace the custom CSS text.
    pub fn set_css(&mut self, css: String) {
        self.css = css;
    }

    /// Take the result of a stylesheet load. Loaded text replaces the CSS;
    /// on failure the current text is kept and the error handed back.
    ///
    /// # Errors
    ///
    /// Returns the load error unchanged.
    pub fn apply_stylesheet(&mut self, loaded: Result<String, StylesheetError>) -> Result<(), StylesheetError> {
        self.css = loaded?;
        Ok(())
    }

    /// Make `name` the emoji shown on the board.
    pub fn select_emoji(&mut self, name: &str) {
        name.clone_into(&mut self.current_emoji);
    }

    pub fn set_time(&mut self, time: f64) {
        self.time = snap_time(time);
    }

    #[must_use]
    pub fn has_emoji(&self) -> bool {
        !self.current_emoji.is_empty()
    }

    /// Alt text of the current emoji (empty when none).
    #[must_use]
    pub fn emoji_alt(&self) -> &str {
        emoji_name_to_alt(&self.current_emoji)
    }

    /// Image source for the current emoji, if one is selected.
    #[must_use]
    pub fn emoji_src(&self) -> Option<String> {
        self.has_emoji().then(|| emoji_file_name(&self.current_emoji))
    }

    /// Text placed around the emoji in the board's chat message.
    #[must_use]
    pub fn board_caption(&self) -> &str {
        if self.has_emoji() { self.emoji_alt() } else { NO_EMOJI_TEXT }
    }
}

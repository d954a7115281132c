//! UI components.
//!
//! DESIGN
//! ======
//! Components read shared state from context (`RwSignal<EditorState>`) and
//! keep board-local state (camera, corners) inside the board component.

pub mod animation_editor;
pub mod chat_room;
pub mod control_points;
pub mod css_panel;
pub mod grid_layer;
pub mod status_bar;
pub mod timeline_bar;

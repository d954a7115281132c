//! Editor-wide constants.

/// Relative URL of the stylesheet loaded into the CSS box on startup.
pub const STYLESHEET_PATH: &str = "default-style.css";

/// Side of a control-point marker in CSS pixels.
pub const CONTROL_POINT_SIZE: f64 = 5.0;

/// Grid spacing in world units.
pub const GRID_SIZE: f64 = 50.0;

/// Initial board camera: world point at the screen origin and scale.
pub const INITIAL_CAMERA_POSITION: (f64, f64) = (-100.0, -100.0);
pub const INITIAL_CAMERA_SCALE: f64 = 2.0;

/// Element id of the emoji being edited; targeted by the per-emoji CSS.
pub const EDITING_EMOJI_ID: &str = "editing-emoji";

/// Starting CSS for the emoji being edited.
pub const DEFAULT_EMOJI_CSS: &str = "#editing-emoji {transform: scale(1.0)}";

/// Shown in the board message while no emoji is selected.
pub const NO_EMOJI_TEXT: &str = "Select an emoji to edit";

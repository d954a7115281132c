//! Viewport transform and interaction core for the emote animation editor.
//!
//! This crate owns the only stateful logic of the editor: a pan/zoom camera
//! over an infinite 2D board, the drag/wheel gesture state machine that
//! mutates it, the derivation of the four control-point corners from live
//! element measurements, and the projection of the background grid into
//! screen space. It draws nothing itself; the host UI turns the data it
//! returns into elements.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::Engine`] and testable [`engine::EngineCore`] |
//! | [`camera`] | Vector math, camera state and world/screen conversions |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`corners`] | Control-point corners derived from element bounding boxes |
//! | [`grid`] | Screen-space grid lines and origin marker |
//! | [`css`] | CSS value formatting for vectors and transforms |
//! | [`dom`] | Bounding-box measurement of DOM elements |
//! | [`consts`] | Shared numeric constants (zoom step, scale floor, grid band) |

pub mod camera;
pub mod consts;
pub mod corners;
pub mod css;
pub mod dom;
pub mod engine;
pub mod grid;
pub mod input;

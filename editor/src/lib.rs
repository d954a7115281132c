//! # editor
//!
//! Leptos + WASM frontend for the emote animation editor.
//!
//! The left half is the animation board: a pannable, zoomable view of a chat
//! message holding the emoji being edited, with control points on its
//! corners. The right half is a live chat preview styled by user-editable
//! CSS. All camera and gesture logic lives in the `viewport` crate; this
//! crate wires DOM events into it and renders what it returns.

pub mod app;
pub mod components;
pub mod consts;
pub mod net;
pub mod state;

/// WASM entry point: install logging and mount the editor.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    match console_log::init_with_level(log::Level::Debug) {
        Ok(()) => log::info!("emote studio editor starting"),
        Err(e) => leptos::logging::warn!("console logger unavailable: {e}"),
    }
    leptos::mount::mount_to_body(app::App);
}

//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern so components depend on small focused models.
//! Everything here is plain data and pure helpers, testable without a
//! browser; reactive wrappers (`RwSignal`) are created by the components.

pub mod board_view;
pub mod chat;
pub mod editor;
pub mod emoji;
pub mod timeline;

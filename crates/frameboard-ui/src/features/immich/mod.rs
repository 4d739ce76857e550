//! Immich connectivity panel and the four display settings.
//!
//! # Design
//! - Settings are written on `change`, never per keystroke.
//! - A failed or unparsable write re-fetches the status; no local rollback.

pub mod api;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;

//! Unassigned device list, auto-assignment and the device info popup.
//!
//! # Design
//! - The unassigned view is derived from the latest snapshot at render time.
//! - Auto-assignment is decided when a snapshot is applied, never in a view.

pub mod api;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;

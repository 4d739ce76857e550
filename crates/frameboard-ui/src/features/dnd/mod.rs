//! Drag-and-drop shared by the unassigned list and group member lists.
//!
//! # Design
//! - The payload is the device id as `text/plain`.
//! - Payloads are validated before any request is sent.

pub mod api;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;

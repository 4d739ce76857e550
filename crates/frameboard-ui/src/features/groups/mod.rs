//! Group tabs, the detail panel and the create-group modal.
//!
//! # Design
//! - Tabs and default-group options are derived from one ordered tab list,
//!   so they cannot drift apart.
//! - Exactly one panel is shown at a time; its group is the active tab.

pub mod actions;
pub mod api;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;

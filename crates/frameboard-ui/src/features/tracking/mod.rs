//! Album tracking poller.
//!
//! # Design
//! - One poller slot per process; starting replaces whatever was running.
//! - The slot owns the timer handle, so replacing it cancels the old timer.

pub mod api;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;

//! Transport services.
//!
//! `socket` is DOM-free and shared with native tests; `api` needs the
//! browser fetch API.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod socket;

//! Boot-time configuration sources.
//!
//! # Design
//! - A `LocalStorage` override wins so a dashboard served elsewhere can point
//!   at the backend; otherwise the page origin is the backend.

use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;

use crate::core::config::{ClientConfig, DEFAULT_API_BASE_URL};

/// `LocalStorage` key overriding the backend origin.
pub(crate) const API_BASE_URL_KEY: &str = "frameboard.api_base_url";

/// Resolve the client configuration for this page.
pub(crate) fn load_config() -> ClientConfig {
    ClientConfig::new(api_base_url())
}

fn api_base_url() -> String {
    if let Ok(stored) = LocalStorage::get::<String>(API_BASE_URL_KEY)
        && !stored.trim().is_empty()
    {
        return stored;
    }
    window()
        .location()
        .origin()
        .ok()
        .filter(|origin| origin.starts_with("http"))
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

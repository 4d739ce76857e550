//! Client configuration resolved at boot.
//!
//! # Design
//! - Keep values DOM-free; `app::preferences` decides where they come from.
//! - Poll intervals are fixed by the backend contract, not user-tunable.

use frameboard_api_models::routes;

/// Interval of the album tracking poller.
pub const TRACKING_POLL_MS: u32 = 5_000;
/// Interval of the Immich status poller.
pub const IMMICH_POLL_MS: u32 = 30_000;
/// Base URL used when no page origin is available.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Runtime configuration shared by the HTTP client and the push channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin without a trailing slash.
    pub api_base_url: String,
    /// Album tracking poll interval in milliseconds.
    pub tracking_poll_ms: u32,
    /// Immich status poll interval in milliseconds.
    pub immich_poll_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ClientConfig {
    /// Build a configuration for the given backend origin.
    #[must_use]
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let base: String = api_base_url.into();
        Self {
            api_base_url: base.trim().trim_end_matches('/').to_string(),
            tracking_poll_ms: TRACKING_POLL_MS,
            immich_poll_ms: IMMICH_POLL_MS,
        }
    }

    /// Absolute URL for a REST path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }

    /// WebSocket URL of the Socket.IO push channel.
    #[must_use]
    pub fn socket_url(&self) -> String {
        let base = &self.api_base_url;
        let ws_base = if let Some(rest) = base.strip_prefix("https://") {
            format!("wss://{rest}")
        } else if let Some(rest) = base.strip_prefix("http://") {
            format!("ws://{rest}")
        } else {
            base.clone()
        };
        format!("{ws_base}{}", routes::SOCKET_IO)
    }
}

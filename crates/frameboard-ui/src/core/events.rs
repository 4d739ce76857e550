//! Push channel events and connection state.
//!
//! # Design
//! - Every push carries a full snapshot; there are no delta events.
//! - A (re)connect is itself an event because it triggers a full reload.

use frameboard_api_models::DeviceMap;

/// Events surfaced by the push channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PushEvent {
    /// The channel connected or reconnected.
    Connected,
    /// Full device collection pushed by the backend.
    DeviceUpdate(DeviceMap),
}

/// Connection state of the push channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ChannelState {
    /// Opening the socket or waiting for the namespace handshake.
    #[default]
    Connecting,
    /// Namespace joined; pushes are flowing.
    Connected,
    /// Socket closed; a reconnect is scheduled.
    Disconnected {
        /// Delay before the next attempt.
        retry_in_ms: u32,
    },
}

impl ChannelState {
    /// Short label for the status badge.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Connecting => "Connecting",
            Self::Connected => "Live",
            Self::Disconnected { .. } => "Offline",
        }
    }

    /// CSS modifier for the status badge.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Connecting => "channel-connecting",
            Self::Connected => "channel-connected",
            Self::Disconnected { .. } => "channel-disconnected",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ChannelState;

    #[test]
    fn badge_text_tracks_state() {
        assert_eq!(ChannelState::default(), ChannelState::Connecting);
        assert_eq!(ChannelState::Connected.label(), "Live");
        let offline = ChannelState::Disconnected { retry_in_ms: 2_000 };
        assert_eq!(offline.label(), "Offline");
        assert_eq!(offline.css_class(), "channel-disconnected");
    }
}

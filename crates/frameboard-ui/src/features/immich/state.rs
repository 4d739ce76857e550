//! Immich slice of the app store.

use frameboard_api_models::{ImmichSettings, ImmichStatus};

/// Last status plus the last known settings.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ImmichState {
    /// Latest status, `None` before the first answer.
    pub status: Option<ImmichStatus>,
    /// Setting values shown in the inputs.
    pub settings: ImmichSettings,
    /// Bumped on every status; inputs are keyed on it so a re-fetch
    /// overwrites whatever was typed.
    pub revision: u64,
}

impl ImmichState {
    /// Server address text.
    #[must_use]
    pub fn server_label(&self) -> &str {
        self.status
            .as_ref()
            .map_or("Unknown", |status| status.server.as_str())
    }

    /// Whether the backend reported a live Immich connection.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.status.as_ref().is_some_and(|status| status.connected)
    }

    /// Connection text.
    #[must_use]
    pub fn connection_label(&self) -> &'static str {
        if self.is_connected() {
            "Connected"
        } else {
            "Disconnected"
        }
    }

    /// Class of the connection span.
    #[must_use]
    pub fn connection_class(&self) -> &'static str {
        if self.is_connected() {
            "connection-status connected"
        } else {
            "connection-status disconnected"
        }
    }

    /// Album count.
    #[must_use]
    pub fn album_count(&self) -> u64 {
        self.status.as_ref().map_or(0, |status| status.albums)
    }
}

/// Apply a status; settings missing from it keep their previous values.
pub fn apply_status(state: &mut ImmichState, status: ImmichStatus) {
    state.settings = status.settings().or(state.settings);
    state.status = Some(status);
    state.revision = state.revision.wrapping_add(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_status_keeps_settings() {
        let mut state = ImmichState::default();
        let mut live = ImmichStatus {
            server: "http://immich.local".into(),
            connected: true,
            albums: 4,
            ..ImmichStatus::default()
        };
        live.flat.rotation = Some(90.0);
        apply_status(&mut state, live);
        assert_eq!(state.connection_class(), "connection-status connected");

        apply_status(&mut state, ImmichStatus::unreachable());
        assert_eq!(state.server_label(), "Unknown");
        assert_eq!(state.connection_label(), "Disconnected");
        assert_eq!(state.album_count(), 0);
        assert_eq!(state.settings.rotation, Some(90.0));
        assert_eq!(state.revision, 2);
    }
}

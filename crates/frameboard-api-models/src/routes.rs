//! REST paths consumed by the dashboard.
//!
//! Identifiers are percent-encoded as path segments.

use urlencoding::encode;

/// Full device collection.
pub const DEVICES: &str = "/devices";
/// Group collection and group creation.
pub const GROUPS: &str = "/groups";
/// Immich album list.
pub const ALBUMS: &str = "/albums";
/// Connectivity/config snapshot.
pub const IMMICH_STATUS: &str = "/immich-status";
/// Wakeup interval setting.
pub const CONFIG_WAKEUP_INTERVAL: &str = "/config/wakeup-interval";
/// Rotation/enhancement/contrast settings.
pub const CONFIG_IMMICH: &str = "/config/immich";
/// Socket.IO endpoint for the push channel (Engine.IO v4, WebSocket only).
pub const SOCKET_IO: &str = "/socket.io/?EIO=4&transport=websocket";

/// `PUT /devices/{id}/group`.
#[must_use]
pub fn device_group(device_id: &str) -> String {
    format!("/devices/{}/group", encode(device_id))
}

/// `GET|PUT|DELETE /groups/{id}`.
#[must_use]
pub fn group(group_id: &str) -> String {
    format!("/groups/{}", encode(group_id))
}

/// `GET /groups/{id}/devices`.
#[must_use]
pub fn group_devices(group_id: &str) -> String {
    format!("/groups/{}/devices", encode(group_id))
}

/// `GET /groups/{id}/album-tracking/{albumId}`.
#[must_use]
pub fn album_tracking(group_id: &str, album_id: &str) -> String {
    format!(
        "/groups/{}/album-tracking/{}",
        encode(group_id),
        encode(album_id)
    )
}

/// `POST /groups/{id}/album-tracking/{albumId}/reset`.
#[must_use]
pub fn album_tracking_reset(group_id: &str, album_id: &str) -> String {
    format!("{}/reset", album_tracking(group_id, album_id))
}

#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(
    missing_docs,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(clippy::module_name_repetitions)]
//! Shared HTTP DTOs for the Frameboard device API.
//!
//! The backend speaks loosely-typed JSON: devices and groups are returned as
//! objects keyed by identifier, optional fields may be missing or `null`, and
//! settings may arrive flat or nested. These types absorb that looseness in
//! one place so the UI can work with plain Rust values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub mod routes;

/// Device collection keyed by device identifier (`GET /devices`).
pub type DeviceMap = BTreeMap<String, Device>;

/// Group collection keyed by group identifier (`GET /groups`).
pub type GroupMap = BTreeMap<String, Group>;

/// A networked display device as reported by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Device {
    /// Identifier echoed by the device at registration, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    /// Friendly name reported by the device.
    #[serde(default)]
    pub name: Option<String>,
    /// Last known IP address.
    #[serde(default)]
    pub ip: String,
    /// Whether the device is awake right now.
    #[serde(default)]
    pub active: bool,
    /// Group membership; `None` (or an empty string) means unassigned.
    #[serde(default)]
    pub group_id: Option<String>,
    /// Whether the device was ever placed in a group.
    #[serde(default)]
    pub was_assigned: bool,
    /// Panel width in pixels.
    #[serde(default)]
    pub width: Option<ReportedValue>,
    /// Panel height in pixels.
    #[serde(default)]
    pub height: Option<ReportedValue>,
    /// Number of colours the panel can dither to.
    #[serde(default)]
    pub dithering_palette_size: Option<ReportedValue>,
    /// Transfer buffer size in bytes.
    #[serde(default)]
    pub buffer_size: Option<ReportedValue>,
    /// Free storage on the device in bytes.
    #[serde(default)]
    pub free_space: Option<ReportedValue>,
    /// First registration timestamp (ISO-8601, usually without offset).
    #[serde(default)]
    pub first_seen: Option<String>,
    /// Most recent registration timestamp.
    #[serde(default)]
    pub last_seen: Option<String>,
}

impl Device {
    /// Group the device currently belongs to, treating empty ids as unassigned.
    #[must_use]
    pub fn assigned_group(&self) -> Option<&str> {
        self.group_id.as_deref().filter(|id| !id.is_empty())
    }

    /// True when the device has no group.
    #[must_use]
    pub fn is_unassigned(&self) -> bool {
        self.assigned_group().is_none()
    }

    /// Name to display, falling back to the supplied identifier.
    #[must_use]
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(id)
    }
}

/// Display-only figure reported by a device firmware.
///
/// Firmware builds disagree on number formats (floats, strings, negative
/// sentinels), so the raw JSON value is kept and only rendered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ReportedValue(pub serde_json::Value);

impl From<u64> for ReportedValue {
    fn from(value: u64) -> Self {
        Self(value.into())
    }
}

impl std::fmt::Display for ReportedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            serde_json::Value::String(text) => f.write_str(text),
            other => write!(f, "{other}"),
        }
    }
}

/// Device entry returned by `GET /groups/{id}/devices`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupMember {
    /// Identifier of the member device.
    pub device_id: String,
    /// Remaining device fields.
    #[serde(flatten)]
    pub device: Device,
}

/// A user-defined group of devices sharing an album policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Group {
    /// Display name.
    pub name: String,
    /// Selected album identifier; `None` or empty means no album.
    #[serde(default)]
    pub album: Option<String>,
    /// Whether images are shown in random order.
    #[serde(default = "default_random")]
    pub random: bool,
    /// Creation timestamp (ISO-8601).
    #[serde(default)]
    pub created_at: Option<String>,
}

const fn default_random() -> bool {
    true
}

impl Group {
    /// Selected album, treating empty identifiers as unset.
    #[must_use]
    pub fn selected_album(&self) -> Option<&str> {
        self.album.as_deref().filter(|album| !album.is_empty())
    }
}

/// Immich album as listed by `GET /albums`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Album {
    /// Immich album identifier.
    pub id: String,
    /// Album display name.
    #[serde(rename = "albumName")]
    pub album_name: String,
}

/// Per group/album progress counters.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlbumTracking {
    /// Number of album images already shown.
    pub shown_count: u64,
    /// Number of images in the album.
    pub total_count: u64,
}

/// Editable Immich/display settings.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ImmichSettings {
    /// Device wakeup interval in minutes.
    #[serde(default)]
    pub wakeup_interval: Option<f64>,
    /// Image rotation in degrees.
    #[serde(default)]
    pub rotation: Option<f64>,
    /// Colour enhancement factor.
    #[serde(default)]
    pub enhanced: Option<f64>,
    /// Contrast factor.
    #[serde(default)]
    pub contrast: Option<f64>,
}

impl ImmichSettings {
    /// Fill unset values from `fallback`.
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        Self {
            wakeup_interval: self.wakeup_interval.or(fallback.wakeup_interval),
            rotation: self.rotation.or(fallback.rotation),
            enhanced: self.enhanced.or(fallback.enhanced),
            contrast: self.contrast.or(fallback.contrast),
        }
    }
}

/// Connectivity and configuration snapshot (`GET /immich-status`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ImmichStatus {
    /// Immich server address.
    #[serde(default)]
    pub server: String,
    /// Whether the backend could reach Immich.
    #[serde(default)]
    pub connected: bool,
    /// Number of albums visible to the backend.
    #[serde(default)]
    pub albums: u64,
    /// Settings sent at the top level.
    #[serde(flatten)]
    pub flat: ImmichSettings,
    /// Settings nested under `config`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<ImmichSettings>,
}

impl ImmichStatus {
    /// Placeholder shown when the status endpoint cannot be reached.
    #[must_use]
    pub fn unreachable() -> Self {
        Self {
            server: "Unknown".to_string(),
            connected: false,
            albums: 0,
            flat: ImmichSettings::default(),
            config: None,
        }
    }

    /// Effective settings: top-level values first, then the nested config.
    #[must_use]
    pub fn settings(&self) -> ImmichSettings {
        self.flat.or(self.config.unwrap_or_default())
    }
}

/// Body for `PUT /devices/{id}/group`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssignGroupRequest {
    /// Target group; `None` serializes as `null` and unassigns.
    pub group_id: Option<String>,
    /// Set to mark the device as having been assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub was_assigned: Option<bool>,
}

impl AssignGroupRequest {
    /// Manual assignment (drag and drop).
    #[must_use]
    pub fn assign(group_id: impl Into<String>) -> Self {
        Self {
            group_id: Some(group_id.into()),
            was_assigned: None,
        }
    }

    /// Assignment that also records `was_assigned`.
    #[must_use]
    pub fn assign_marked(group_id: impl Into<String>) -> Self {
        Self {
            group_id: Some(group_id.into()),
            was_assigned: Some(true),
        }
    }

    /// Removal from any group.
    #[must_use]
    pub const fn unassign() -> Self {
        Self {
            group_id: None,
            was_assigned: None,
        }
    }
}

/// Body for `POST /groups`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateGroupRequest {
    /// Group name.
    pub name: String,
}

/// Response of `POST /groups`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateGroupResponse {
    /// Identifier assigned by the backend.
    pub group_id: String,
}

/// Partial update for `PUT /groups/{id}`; unset fields are omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupUpdate {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New album; an empty string clears the selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    /// New random-order flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub random: Option<bool>,
}

impl GroupUpdate {
    /// Rename only.
    #[must_use]
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Album change only.
    #[must_use]
    pub fn album(album: impl Into<String>) -> Self {
        Self {
            album: Some(album.into()),
            ..Self::default()
        }
    }

    /// Random-order change only.
    #[must_use]
    pub fn random(random: bool) -> Self {
        Self {
            random: Some(random),
            ..Self::default()
        }
    }
}

/// Body for `PUT /config/wakeup-interval`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WakeupIntervalUpdate {
    /// Interval in minutes.
    pub wakeup_interval: f64,
}

/// Body for `PUT /config/immich`; exactly one field is normally set.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ImmichConfigUpdate {
    /// Rotation in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    /// Enhancement factor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enhanced: Option<f64>,
    /// Contrast factor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrast: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn device_collection_tolerates_missing_and_null_fields() {
        let raw = json!({
            "aa:bb": {
                "device_id": "aa:bb",
                "name": "Kitchen",
                "ip": "10.0.0.5",
                "active": true,
                "width": 800,
                "height": 480,
                "first_seen": "2024-03-01T09:15:00.123456",
                "unknown_field": "ignored"
            },
            "cc:dd": { "ip": "10.0.0.6", "group_id": null }
        });
        let devices: DeviceMap = serde_json::from_value(raw).expect("devices decode");
        let kitchen = &devices["aa:bb"];
        assert!(kitchen.active);
        assert!(kitchen.is_unassigned());
        assert_eq!(kitchen.display_name("aa:bb"), "Kitchen");
        assert_eq!(kitchen.width, Some(ReportedValue::from(800)));
        let bare = &devices["cc:dd"];
        assert!(!bare.was_assigned);
        assert_eq!(bare.display_name("cc:dd"), "cc:dd");
    }

    #[test]
    fn odd_device_figures_do_not_drop_the_collection() {
        let raw = json!({
            "good": { "ip": "10.0.0.1", "free_space": 2048 },
            "odd": {
                "ip": "10.0.0.2",
                "free_space": 1234.5,
                "width": "800",
                "buffer_size": -1,
                "height": null
            }
        });
        let devices: DeviceMap = serde_json::from_value(raw).expect("devices decode");
        assert_eq!(devices.len(), 2);
        assert_eq!(
            devices["good"].free_space.as_ref().map(ToString::to_string),
            Some("2048".to_string())
        );
        let odd = &devices["odd"];
        assert_eq!(
            odd.free_space.as_ref().map(ToString::to_string),
            Some("1234.5".to_string())
        );
        assert_eq!(odd.width.as_ref().map(ToString::to_string), Some("800".to_string()));
        assert_eq!(
            odd.buffer_size.as_ref().map(ToString::to_string),
            Some("-1".to_string())
        );
        assert_eq!(odd.height, None);
    }

    #[test]
    fn empty_group_id_counts_as_unassigned() {
        let device = Device {
            group_id: Some(String::new()),
            ..Device::default()
        };
        assert!(device.is_unassigned());
        assert_eq!(device.assigned_group(), None);
    }

    #[test]
    fn group_member_flattens_device_fields() {
        let member: GroupMember = serde_json::from_value(json!({
            "device_id": "dev42",
            "ip": "10.0.0.42",
            "active": false,
            "group_id": "g7"
        }))
        .expect("member decode");
        assert_eq!(member.device_id, "dev42");
        assert_eq!(member.device.assigned_group(), Some("g7"));
    }

    #[test]
    fn group_defaults_random_and_treats_empty_album_as_unset() {
        let group: Group =
            serde_json::from_value(json!({ "name": "Lobby", "album": "" })).expect("group");
        assert!(group.random);
        assert_eq!(group.selected_album(), None);
        let group: Group = serde_json::from_value(json!({
            "name": "Lobby",
            "album": "alb-1",
            "random": false
        }))
        .expect("group");
        assert_eq!(group.selected_album(), Some("alb-1"));
        assert!(!group.random);
    }

    #[test]
    fn album_uses_immich_field_name() {
        let album: Album =
            serde_json::from_value(json!({ "id": "a1", "albumName": "Holidays", "assetCount": 3 }))
                .expect("album");
        assert_eq!(album.album_name, "Holidays");
    }

    #[test]
    fn immich_status_prefers_flat_settings_over_nested_config() {
        let status: ImmichStatus = serde_json::from_value(json!({
            "server": "http://immich.local",
            "connected": true,
            "albums": 4,
            "rotation": 90,
            "config": { "wakeup_interval": 30, "rotation": 0, "contrast": 1.2, "immich": {} }
        }))
        .expect("status");
        let settings = status.settings();
        assert_eq!(settings.rotation, Some(90.0));
        assert_eq!(settings.wakeup_interval, Some(30.0));
        assert_eq!(settings.contrast, Some(1.2));
        assert_eq!(settings.enhanced, None);
    }

    #[test]
    fn assign_requests_serialize_null_group_and_optional_flag() {
        let unassign = serde_json::to_value(AssignGroupRequest::unassign()).expect("encode");
        assert_eq!(unassign, json!({ "group_id": null }));
        let manual = serde_json::to_value(AssignGroupRequest::assign("g7")).expect("encode");
        assert_eq!(manual, json!({ "group_id": "g7" }));
        let marked = serde_json::to_value(AssignGroupRequest::assign_marked("g1")).expect("encode");
        assert_eq!(marked, json!({ "group_id": "g1", "was_assigned": true }));
    }

    #[test]
    fn group_update_only_sends_changed_field() {
        let cleared = serde_json::to_value(GroupUpdate::album("")).expect("encode");
        assert_eq!(cleared, json!({ "album": "" }));
        let random = serde_json::to_value(GroupUpdate::random(false)).expect("encode");
        assert_eq!(random, json!({ "random": false }));
    }
}

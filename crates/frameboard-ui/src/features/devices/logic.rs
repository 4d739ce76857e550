//! Pure derivations for the device list and the info popup.

use std::collections::BTreeSet;

use frameboard_api_models::{Device, DeviceMap, ReportedValue};

use crate::core::logic::{format_timestamp, status_glyph};
use crate::features::devices::state::DefaultGroup;

/// Rendered row for a device.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceRow {
    /// Device id, also the drag payload.
    pub id: String,
    /// `"{glyph} {name or id} ({ip})"`.
    pub label: String,
    /// Popup content for hover.
    pub info: DeviceInfo,
}

impl DeviceRow {
    /// Build a row for `device`.
    #[must_use]
    pub fn new(id: &str, device: &Device) -> Self {
        Self {
            id: id.to_string(),
            label: device_label(id, device),
            info: DeviceInfo::from_device(id, device),
        }
    }
}

/// Display label for a device row.
#[must_use]
pub fn device_label(id: &str, device: &Device) -> String {
    format!(
        "{} {} ({})",
        status_glyph(device.active),
        device.display_name(id),
        device.ip
    )
}

/// Result of one render pass over the device collection.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct UnassignedView {
    /// Rows for the `devices` list, ordered by id.
    pub rows: Vec<DeviceRow>,
    /// Devices to assign to the default group instead of rendering.
    pub auto_assign: Vec<String>,
    /// Whether `assign-all-btn` is visible.
    pub show_assign_all: bool,
}

/// Split the collection into rendered unassigned rows and auto-assignments.
///
/// Assigned devices never appear. A never-assigned device is auto-assigned
/// when a default group is set; devices in `pending` are neither rendered
/// nor planned again.
#[must_use]
pub fn plan_unassigned(
    devices: &DeviceMap,
    default_group: &DefaultGroup,
    pending: &BTreeSet<String>,
) -> UnassignedView {
    let mut view = UnassignedView::default();
    for (id, device) in devices.iter().filter(|(_, device)| device.is_unassigned()) {
        if pending.contains(id) {
            continue;
        }
        if !device.was_assigned && default_group.group_id().is_some() {
            view.auto_assign.push(id.clone());
            continue;
        }
        view.rows.push(DeviceRow::new(id, device));
    }
    view.show_assign_all = !view.rows.is_empty() && default_group.group_id().is_some();
    view
}

/// Content of the `device-info` popup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceInfo {
    /// Device id.
    pub id: String,
    /// Reported name, or the id.
    pub name: String,
    /// IP address.
    pub ip: String,
    /// Liveness flag.
    pub active: bool,
    /// Raw first-seen timestamp.
    pub first_seen: Option<String>,
    /// Raw last-seen timestamp.
    pub last_seen: Option<String>,
    /// Panel width.
    pub width: Option<ReportedValue>,
    /// Panel height.
    pub height: Option<ReportedValue>,
    /// Dithering palette size.
    pub dithering_palette_size: Option<ReportedValue>,
    /// Buffer size.
    pub buffer_size: Option<ReportedValue>,
    /// Free space.
    pub free_space: Option<ReportedValue>,
}

impl DeviceInfo {
    /// Capture popup fields from a device.
    #[must_use]
    pub fn from_device(id: &str, device: &Device) -> Self {
        Self {
            id: id.to_string(),
            name: device.display_name(id).to_string(),
            ip: device.ip.clone(),
            active: device.active,
            first_seen: device.first_seen.clone(),
            last_seen: device.last_seen.clone(),
            width: device.width.clone(),
            height: device.height.clone(),
            dithering_palette_size: device.dithering_palette_size.clone(),
            buffer_size: device.buffer_size.clone(),
            free_space: device.free_space.clone(),
        }
    }

    /// Status line text.
    #[must_use]
    pub const fn status(&self) -> &'static str {
        if self.active { "Active" } else { "Hibernating" }
    }

    /// Label/value pairs in popup order. `format_seen` renders timestamps.
    #[must_use]
    pub fn fields(&self, format_seen: impl Fn(Option<&str>) -> String) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("IP", self.ip.clone()),
            ("Status", self.status().to_string()),
            ("First Seen", format_seen(self.first_seen.as_deref())),
            ("Last Seen", format_seen(self.last_seen.as_deref())),
            ("Width", optional(self.width.as_ref())),
            ("Height", optional(self.height.as_ref())),
            ("Dithering Palette Size", optional(self.dithering_palette_size.as_ref())),
            ("Buffer Size", optional(self.buffer_size.as_ref())),
            ("Free Space", optional(self.free_space.as_ref())),
        ]
    }

    /// Fields with the locale-independent timestamp format.
    #[must_use]
    pub fn plain_fields(&self) -> Vec<(&'static str, String)> {
        self.fields(format_timestamp)
    }
}

fn optional<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |inner| inner.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::device;

    fn collection() -> DeviceMap {
        let mut devices = DeviceMap::new();
        let mut named = device("10.0.0.2", None, true);
        named.name = Some("Hallway".into());
        devices.insert("b-hall".into(), named);
        devices.insert("a-assigned".into(), device("10.0.0.3", Some("g1"), true));
        let mut asleep = device("10.0.0.4", None, true);
        asleep.active = false;
        devices.insert("c-sleep".into(), asleep);
        devices.insert("d-new".into(), device("10.0.0.5", None, false));
        devices
    }

    #[test]
    fn assigned_devices_never_render_as_unassigned() {
        let view = plan_unassigned(&collection(), &DefaultGroup::None, &BTreeSet::new());
        let ids: Vec<_> = view.rows.iter().map(|row| row.id.as_str()).collect();
        assert_eq!(ids, vec!["b-hall", "c-sleep", "d-new"]);
        assert!(view.auto_assign.is_empty());
        assert!(!view.show_assign_all);
    }

    #[test]
    fn labels_use_glyph_name_and_ip() {
        let view = plan_unassigned(&collection(), &DefaultGroup::None, &BTreeSet::new());
        assert_eq!(view.rows[0].label, "🟢 Hallway (10.0.0.2)");
        assert_eq!(view.rows[1].label, "💤 c-sleep (10.0.0.4)");
    }

    #[test]
    fn new_devices_go_to_default_group_instead_of_the_list() {
        let default = DefaultGroup::Group("g1".into());
        let view = plan_unassigned(&collection(), &default, &BTreeSet::new());
        assert_eq!(view.auto_assign, vec!["d-new".to_string()]);
        assert!(view.rows.iter().all(|row| row.id != "d-new"));
        assert!(view.show_assign_all);
    }

    #[test]
    fn pending_devices_are_hidden_and_not_replanned() {
        let default = DefaultGroup::Group("g1".into());
        let pending = BTreeSet::from(["d-new".to_string()]);
        let view = plan_unassigned(&collection(), &default, &pending);
        assert!(view.auto_assign.is_empty());
        assert!(view.rows.iter().all(|row| row.id != "d-new"));
    }

    #[test]
    fn assign_all_hidden_when_nothing_remains() {
        let mut devices = DeviceMap::new();
        devices.insert("only".into(), device("10.0.0.9", None, false));
        let view = plan_unassigned(&devices, &DefaultGroup::Group("g1".into()), &BTreeSet::new());
        assert!(view.rows.is_empty());
        assert!(!view.show_assign_all);
    }

    #[test]
    fn popup_fields_fill_missing_values() {
        let mut source = device("10.0.0.7", None, true);
        source.active = false;
        source.width = Some(ReportedValue::from(800));
        source.free_space = Some(ReportedValue(serde_json::json!(1234.5)));
        source.last_seen = Some("2024-05-02T18:00:01.5".into());
        let info = DeviceInfo::from_device("dev7", &source);
        let fields = info.plain_fields();
        assert_eq!(fields[0], ("Name", "dev7".to_string()));
        assert_eq!(fields[2], ("Status", "Hibernating".to_string()));
        assert_eq!(fields[3], ("First Seen", "-".to_string()));
        assert_eq!(fields[4], ("Last Seen", "2024-05-02 18:00:01".to_string()));
        assert_eq!(fields[5], ("Width", "800".to_string()));
        assert_eq!(fields[6], ("Height", "-".to_string()));
        assert_eq!(fields[9], ("Free Space", "1234.5".to_string()));
    }
}

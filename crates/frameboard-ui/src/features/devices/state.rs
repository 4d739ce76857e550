//! Device slice of the app store.

use std::collections::BTreeSet;

use frameboard_api_models::DeviceMap;

use crate::features::devices::logic::plan_unassigned;

/// Option value of the "no default group" entry in `auto-group`.
pub const NO_DEFAULT_GROUP: &str = "none";

/// Selection of the auto-assignment control.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum DefaultGroup {
    /// Sentinel `none`: newly discovered devices stay unassigned.
    #[default]
    None,
    /// New devices go to this group.
    Group(String),
}

impl DefaultGroup {
    /// Parse the select control value.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        if value.is_empty() || value == NO_DEFAULT_GROUP {
            Self::None
        } else {
            Self::Group(value.to_string())
        }
    }

    /// Value for the select control.
    #[must_use]
    pub fn as_value(&self) -> &str {
        match self {
            Self::None => NO_DEFAULT_GROUP,
            Self::Group(id) => id,
        }
    }

    /// Selected group id, if any.
    #[must_use]
    pub fn group_id(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Group(id) => Some(id),
        }
    }
}

/// Device collection plus auto-assignment bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct DevicesState {
    /// Latest authoritative collection.
    pub snapshot: DeviceMap,
    /// Current default group.
    pub default_group: DefaultGroup,
    /// Devices whose automatic assignment is in flight.
    pub pending_auto_assign: BTreeSet<String>,
}

/// Replace the snapshot and return the devices to auto-assign now.
///
/// Pending entries are dropped once the snapshot shows the device assigned
/// (or gone); devices still pending are not assigned a second time.
pub fn replace_snapshot(state: &mut DevicesState, devices: DeviceMap) -> Vec<String> {
    state.pending_auto_assign.retain(|id| {
        devices
            .get(id)
            .is_some_and(|device| device.is_unassigned() && !device.was_assigned)
    });
    state.snapshot = devices;
    replan(state)
}

/// Change the default group and return devices to auto-assign under it.
pub fn change_default_group(state: &mut DevicesState, default_group: DefaultGroup) -> Vec<String> {
    state.default_group = default_group;
    replan(state)
}

fn replan(state: &mut DevicesState) -> Vec<String> {
    let plan = plan_unassigned(
        &state.snapshot,
        &state.default_group,
        &state.pending_auto_assign,
    );
    state
        .pending_auto_assign
        .extend(plan.auto_assign.iter().cloned());
    plan.auto_assign
}

/// Forget a failed automatic assignment so the next snapshot can retry it.
pub fn clear_pending(state: &mut DevicesState, device_id: &str) {
    state.pending_auto_assign.remove(device_id);
}

/// Drop the default group when it is the deleted/missing group.
pub fn forget_default_group(state: &mut DevicesState, group_id: &str) {
    if state.default_group.group_id() == Some(group_id) {
        state.default_group = DefaultGroup::None;
    }
}

//! App-wide yewdux store and the effect reducer.
//!
//! # Design
//! - All client state lives in one store; views derive from it at render.
//! - Flows never touch the store directly: they emit effects that
//!   [`apply_effect`] reduces here.
//! - Side effects that outlive a reduction (timers, follow-up requests) are
//!   returned as [`FollowUp`] values for the controller to run.

use yewdux::store::Store;

use crate::core::error::ApiError;
use crate::core::events::ChannelState;
use crate::core::sync::{Operation, SyncEffect};
use crate::features::devices::logic::DeviceInfo;
use crate::features::devices::state::{
    DefaultGroup, DevicesState, change_default_group, clear_pending, forget_default_group,
    replace_snapshot,
};
use crate::features::dnd::state::DragState;
use crate::features::groups::state::{self as groups, GroupsState};
use crate::features::immich::state::{ImmichState, apply_status};
use crate::features::tracking::state::{TrackingTarget, TrackingView};

/// Global application store.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Device collection and auto-assignment bookkeeping.
    pub devices: DevicesState,
    /// Tabs, panel and modal.
    pub groups: GroupsState,
    /// Tracking block, present while a poller runs.
    pub tracking: Option<TrackingView>,
    /// Immich panel.
    pub immich: ImmichState,
    /// Device info popup content, `None` when hidden.
    pub popup: Option<DeviceInfo>,
    /// Push channel status.
    pub channel: ChannelState,
    /// Drag affordance.
    pub drag: DragState,
}

/// Work requested by a reduction.
#[derive(Clone, Debug, PartialEq)]
pub enum FollowUp {
    /// Assign a newly discovered device to the default group.
    AutoAssign {
        /// Device to assign.
        device_id: String,
        /// Default group at the time of the snapshot.
        group_id: String,
    },
    /// (Re)start the tracking poller.
    StartPolling(TrackingTarget),
    /// Stop the tracking poller.
    StopPolling,
    /// Log a failed stage.
    Report(Operation, ApiError),
}

/// Reduce one effect into the store.
pub fn apply_effect(store: &mut AppStore, effect: SyncEffect) -> Vec<FollowUp> {
    match effect {
        SyncEffect::Reloading => {
            groups::clear_tabs(&mut store.groups);
            Vec::new()
        }
        SyncEffect::Devices(devices) => {
            groups::drop_moved_members(&mut store.groups, &devices);
            let planned = replace_snapshot(&mut store.devices, devices);
            auto_assignments(&store.devices.default_group, planned)
        }
        SyncEffect::Groups(collection) => {
            groups::replace_tabs(&mut store.groups, &collection);
            if let Some(default) = store.devices.default_group.group_id().map(str::to_string)
                && !collection.contains_key(&default)
            {
                forget_default_group(&mut store.devices, &default);
            }
            Vec::new()
        }
        SyncEffect::GroupCreated { group_id, name } => {
            groups::add_tab(&mut store.groups, group_id, name);
            Vec::new()
        }
        SyncEffect::GroupSelected { group_id, group } => {
            if store
                .tracking
                .as_ref()
                .is_some_and(|view| view.target.group_id != group_id)
            {
                store.tracking = None;
            }
            groups::select(&mut store.groups, group_id, &group);
            Vec::new()
        }
        SyncEffect::Albums { group_id, albums } => {
            groups::set_albums(&mut store.groups, &group_id, albums);
            Vec::new()
        }
        SyncEffect::Members { group_id, members } => {
            groups::set_members(&mut store.groups, &group_id, members);
            Vec::new()
        }
        SyncEffect::GroupRenamed { group_id, name } => {
            groups::rename(&mut store.groups, &group_id, &name);
            Vec::new()
        }
        SyncEffect::AlbumChanged { group_id, album } => {
            groups::set_album(&mut store.groups, &group_id, album);
            Vec::new()
        }
        SyncEffect::RandomChanged { group_id, random } => {
            groups::set_random(&mut store.groups, &group_id, random);
            Vec::new()
        }
        SyncEffect::GroupDeleted { group_id } => {
            groups::remove(&mut store.groups, &group_id);
            forget_default_group(&mut store.devices, &group_id);
            if store
                .tracking
                .as_ref()
                .is_some_and(|view| view.target.group_id == group_id)
            {
                store.tracking = None;
                return vec![FollowUp::StopPolling];
            }
            Vec::new()
        }
        SyncEffect::TrackingStarted(target) => {
            store.tracking = Some(TrackingView {
                target: target.clone(),
                counts: None,
            });
            vec![FollowUp::StartPolling(target)]
        }
        SyncEffect::TrackingStopped => {
            store.tracking = None;
            vec![FollowUp::StopPolling]
        }
        SyncEffect::Tracking { target, tracking } => {
            if let Some(view) = store
                .tracking
                .as_mut()
                .filter(|view| view.target == target)
            {
                view.counts = Some(tracking);
            }
            Vec::new()
        }
        SyncEffect::ImmichStatus(status) => {
            apply_status(&mut store.immich, status);
            Vec::new()
        }
        SyncEffect::AutoAssignFailed { device_id } => {
            clear_pending(&mut store.devices, &device_id);
            Vec::new()
        }
        SyncEffect::Failed { operation, error } => vec![FollowUp::Report(operation, error)],
    }
}

/// Change the default group from the select value.
///
/// Never-assigned devices waiting in the list are claimed by the new group.
pub fn set_default_group(store: &mut AppStore, value: &str) -> Vec<FollowUp> {
    let default_group = DefaultGroup::from_value(value);
    let planned = change_default_group(&mut store.devices, default_group);
    auto_assignments(&store.devices.default_group, planned)
}

fn auto_assignments(default_group: &DefaultGroup, device_ids: Vec<String>) -> Vec<FollowUp> {
    let Some(group_id) = default_group.group_id() else {
        return Vec::new();
    };
    device_ids
        .into_iter()
        .map(|device_id| FollowUp::AutoAssign {
            device_id,
            group_id: group_id.to_string(),
        })
        .collect()
}

/// Show the popup for a hovered device.
pub fn show_popup(store: &mut AppStore, info: DeviceInfo) {
    store.popup = Some(info);
}

/// Hide the popup.
pub fn hide_popup(store: &mut AppStore) {
    store.popup = None;
}

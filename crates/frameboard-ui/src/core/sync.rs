//! Synchronization protocol between the dashboard and the backend.
//!
//! # Design
//! - The backend is the single source of truth; flows never patch local
//!   state speculatively except for the rename labels.
//! - Flows are sequential async functions generic over [`DashboardApi`] and
//!   report what happened as [`SyncEffect`] values to a sink.
//! - Every mutation ends in an explicit resynchronize stage that re-fetches
//!   the affected collections.

use std::fmt;

use async_trait::async_trait;
use frameboard_api_models::{
    Album, AlbumTracking, AssignGroupRequest, CreateGroupRequest, CreateGroupResponse, DeviceMap,
    Group, GroupMap, GroupMember, GroupUpdate, ImmichConfigUpdate, ImmichStatus,
    WakeupIntervalUpdate,
};

use crate::core::error::{ApiError, ApiResult};
use crate::features::tracking::state::TrackingTarget;

/// REST surface consumed by the dashboard.
///
/// Futures are `?Send`: the browser runtime is single-threaded.
#[async_trait(?Send)]
pub trait DashboardApi {
    /// `GET /devices`.
    async fn fetch_devices(&self) -> ApiResult<DeviceMap>;
    /// `PUT /devices/{id}/group`.
    async fn assign_device(&self, device_id: &str, request: &AssignGroupRequest)
    -> ApiResult<()>;
    /// `GET /groups`.
    async fn fetch_groups(&self) -> ApiResult<GroupMap>;
    /// `POST /groups`.
    async fn create_group(&self, request: &CreateGroupRequest) -> ApiResult<CreateGroupResponse>;
    /// `GET /groups/{id}`.
    async fn fetch_group(&self, group_id: &str) -> ApiResult<Group>;
    /// `PUT /groups/{id}`.
    async fn update_group(&self, group_id: &str, update: &GroupUpdate) -> ApiResult<()>;
    /// `DELETE /groups/{id}`.
    async fn delete_group(&self, group_id: &str) -> ApiResult<()>;
    /// `GET /groups/{id}/devices`.
    async fn fetch_group_devices(&self, group_id: &str) -> ApiResult<Vec<GroupMember>>;
    /// `GET /albums`.
    async fn fetch_albums(&self) -> ApiResult<Vec<Album>>;
    /// `GET /groups/{id}/album-tracking/{albumId}`.
    async fn fetch_tracking(&self, group_id: &str, album_id: &str) -> ApiResult<AlbumTracking>;
    /// `POST /groups/{id}/album-tracking/{albumId}/reset`.
    async fn reset_tracking(&self, group_id: &str, album_id: &str) -> ApiResult<()>;
    /// `GET /immich-status`.
    async fn fetch_immich_status(&self) -> ApiResult<ImmichStatus>;
    /// `PUT /config/wakeup-interval`.
    async fn update_wakeup_interval(&self, update: &WakeupIntervalUpdate) -> ApiResult<()>;
    /// `PUT /config/immich`.
    async fn update_immich_config(&self, update: &ImmichConfigUpdate) -> ApiResult<()>;
}

/// Named operation, used to label failures in the diagnostic log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Fetching the device collection.
    LoadDevices,
    /// Fetching the group collection.
    LoadGroups,
    /// Assigning a device to a group.
    AssignDevice,
    /// Removing a device from its group.
    UnassignDevice,
    /// Creating a group.
    CreateGroup,
    /// Fetching one group's detail.
    LoadGroup,
    /// Fetching the album list.
    LoadAlbums,
    /// Fetching a group's member list.
    LoadMembers,
    /// Renaming a group.
    RenameGroup,
    /// Changing a group's album.
    ChangeAlbum,
    /// Toggling random order.
    SetRandom,
    /// Deleting a group.
    DeleteGroup,
    /// Fetching tracking counters.
    LoadTracking,
    /// Resetting tracking counters.
    ResetTracking,
    /// Fetching Immich status.
    LoadImmichStatus,
    /// Updating a display setting.
    UpdateSetting,
}

impl Operation {
    /// Log label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LoadDevices => "load devices",
            Self::LoadGroups => "load groups",
            Self::AssignDevice => "assign device to group",
            Self::UnassignDevice => "remove device from group",
            Self::CreateGroup => "create group",
            Self::LoadGroup => "load group details",
            Self::LoadAlbums => "load albums",
            Self::LoadMembers => "load group devices",
            Self::RenameGroup => "rename group",
            Self::ChangeAlbum => "change group album",
            Self::SetRandom => "change random order",
            Self::DeleteGroup => "delete group",
            Self::LoadTracking => "load album tracking",
            Self::ResetTracking => "reset album tracking",
            Self::LoadImmichStatus => "load Immich status",
            Self::UpdateSetting => "update setting",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one flow stage, reduced into the store by `apply_effect`.
#[derive(Clone, Debug, PartialEq)]
pub enum SyncEffect {
    /// A full reload started; tabs and default-group options are cleared.
    Reloading,
    /// Authoritative device collection.
    Devices(DeviceMap),
    /// Authoritative group collection.
    Groups(GroupMap),
    /// A group was created.
    GroupCreated {
        /// New group id.
        group_id: String,
        /// Name entered by the user.
        name: String,
    },
    /// Detail of the group whose tab was clicked.
    GroupSelected {
        /// Group id.
        group_id: String,
        /// Group detail.
        group: Group,
    },
    /// Album list loaded for a group panel.
    Albums {
        /// Panel the list was loaded for.
        group_id: String,
        /// Albums in backend order.
        albums: Vec<Album>,
    },
    /// Member list of a group.
    Members {
        /// Group id.
        group_id: String,
        /// Member devices.
        members: Vec<GroupMember>,
    },
    /// A rename was accepted.
    GroupRenamed {
        /// Group id.
        group_id: String,
        /// New name.
        name: String,
    },
    /// An album change was accepted.
    AlbumChanged {
        /// Group id.
        group_id: String,
        /// New album, `None` when cleared.
        album: Option<String>,
    },
    /// A random-order change was accepted.
    RandomChanged {
        /// Group id.
        group_id: String,
        /// New flag.
        random: bool,
    },
    /// A group was deleted.
    GroupDeleted {
        /// Group id.
        group_id: String,
    },
    /// The tracking poller must (re)start on this target.
    TrackingStarted(TrackingTarget),
    /// The tracking poller must stop.
    TrackingStopped,
    /// Fresh tracking counters.
    Tracking {
        /// Group/album pair.
        target: TrackingTarget,
        /// Counters.
        tracking: AlbumTracking,
    },
    /// Fresh Immich status (or the unreachable placeholder).
    ImmichStatus(ImmichStatus),
    /// An automatic assignment failed; the device may be retried.
    AutoAssignFailed {
        /// Device id.
        device_id: String,
    },
    /// A stage failed; prior state is kept.
    Failed {
        /// Operation that failed.
        operation: Operation,
        /// Failure detail.
        error: ApiError,
    },
}

impl SyncEffect {
    /// Shorthand for [`SyncEffect::Failed`].
    #[must_use]
    pub const fn failed(operation: Operation, error: ApiError) -> Self {
        Self::Failed { operation, error }
    }
}

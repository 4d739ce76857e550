//! Recording fake of the backend for flow tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use frameboard_api_models::{
    Album, AlbumTracking, AssignGroupRequest, CreateGroupRequest, CreateGroupResponse, Device,
    DeviceMap, Group, GroupMap, GroupMember, GroupUpdate, ImmichConfigUpdate, ImmichStatus,
    WakeupIntervalUpdate,
};

use crate::core::error::{ApiError, ApiResult};
use crate::core::sync::{DashboardApi, SyncEffect};

/// One recorded backend call.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Call {
    FetchDevices,
    AssignDevice(String, AssignGroupRequest),
    FetchGroups,
    CreateGroup(String),
    FetchGroup(String),
    UpdateGroup(String, GroupUpdate),
    DeleteGroup(String),
    FetchGroupDevices(String),
    FetchAlbums,
    FetchTracking(String, String),
    ResetTracking(String, String),
    FetchImmichStatus,
    UpdateWakeupInterval(f64),
    UpdateImmichConfig(ImmichConfigUpdate),
}

/// In-memory backend returning canned data and recording every call.
#[derive(Default)]
pub(crate) struct FakeApi {
    pub(crate) devices: DeviceMap,
    pub(crate) groups: GroupMap,
    pub(crate) members: BTreeMap<String, Vec<GroupMember>>,
    pub(crate) albums: Vec<Album>,
    pub(crate) tracking: AlbumTracking,
    pub(crate) immich: ImmichStatus,
    pub(crate) created_group_id: String,
    pub(crate) failing: BTreeSet<&'static str>,
    pub(crate) calls: RefCell<Vec<Call>>,
}

impl FakeApi {
    /// Fake whose listed endpoints answer HTTP 500.
    pub(crate) fn failing(endpoints: &[&'static str]) -> Self {
        Self {
            failing: endpoints.iter().copied().collect(),
            ..Self::default()
        }
    }

    /// Calls recorded so far.
    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, endpoint: &'static str, path: String, call: Call) -> ApiResult<()> {
        self.calls.borrow_mut().push(call);
        if self.failing.contains(endpoint) {
            return Err(ApiError::Status { path, status: 500 });
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl DashboardApi for FakeApi {
    async fn fetch_devices(&self) -> ApiResult<DeviceMap> {
        self.record("fetch_devices", "/devices".into(), Call::FetchDevices)?;
        Ok(self.devices.clone())
    }

    async fn assign_device(
        &self,
        device_id: &str,
        request: &AssignGroupRequest,
    ) -> ApiResult<()> {
        self.record(
            "assign_device",
            format!("/devices/{device_id}/group"),
            Call::AssignDevice(device_id.to_string(), request.clone()),
        )
    }

    async fn fetch_groups(&self) -> ApiResult<GroupMap> {
        self.record("fetch_groups", "/groups".into(), Call::FetchGroups)?;
        Ok(self.groups.clone())
    }

    async fn create_group(&self, request: &CreateGroupRequest) -> ApiResult<CreateGroupResponse> {
        self.record(
            "create_group",
            "/groups".into(),
            Call::CreateGroup(request.name.clone()),
        )?;
        Ok(CreateGroupResponse {
            group_id: self.created_group_id.clone(),
        })
    }

    async fn fetch_group(&self, group_id: &str) -> ApiResult<Group> {
        let path = format!("/groups/{group_id}");
        self.record("fetch_group", path.clone(), Call::FetchGroup(group_id.into()))?;
        self.groups
            .get(group_id)
            .cloned()
            .ok_or(ApiError::Status { path, status: 404 })
    }

    async fn update_group(&self, group_id: &str, update: &GroupUpdate) -> ApiResult<()> {
        self.record(
            "update_group",
            format!("/groups/{group_id}"),
            Call::UpdateGroup(group_id.into(), update.clone()),
        )
    }

    async fn delete_group(&self, group_id: &str) -> ApiResult<()> {
        self.record(
            "delete_group",
            format!("/groups/{group_id}"),
            Call::DeleteGroup(group_id.into()),
        )
    }

    async fn fetch_group_devices(&self, group_id: &str) -> ApiResult<Vec<GroupMember>> {
        self.record(
            "fetch_group_devices",
            format!("/groups/{group_id}/devices"),
            Call::FetchGroupDevices(group_id.into()),
        )?;
        Ok(self.members.get(group_id).cloned().unwrap_or_default())
    }

    async fn fetch_albums(&self) -> ApiResult<Vec<Album>> {
        self.record("fetch_albums", "/albums".into(), Call::FetchAlbums)?;
        Ok(self.albums.clone())
    }

    async fn fetch_tracking(&self, group_id: &str, album_id: &str) -> ApiResult<AlbumTracking> {
        self.record(
            "fetch_tracking",
            format!("/groups/{group_id}/album-tracking/{album_id}"),
            Call::FetchTracking(group_id.into(), album_id.into()),
        )?;
        Ok(self.tracking)
    }

    async fn reset_tracking(&self, group_id: &str, album_id: &str) -> ApiResult<()> {
        self.record(
            "reset_tracking",
            format!("/groups/{group_id}/album-tracking/{album_id}/reset"),
            Call::ResetTracking(group_id.into(), album_id.into()),
        )
    }

    async fn fetch_immich_status(&self) -> ApiResult<ImmichStatus> {
        self.record(
            "fetch_immich_status",
            "/immich-status".into(),
            Call::FetchImmichStatus,
        )?;
        Ok(self.immich.clone())
    }

    async fn update_wakeup_interval(&self, update: &WakeupIntervalUpdate) -> ApiResult<()> {
        self.record(
            "update_wakeup_interval",
            "/config/wakeup-interval".into(),
            Call::UpdateWakeupInterval(update.wakeup_interval),
        )
    }

    async fn update_immich_config(&self, update: &ImmichConfigUpdate) -> ApiResult<()> {
        self.record(
            "update_immich_config",
            "/config/immich".into(),
            Call::UpdateImmichConfig(*update),
        )
    }
}

/// Collects effects emitted by a flow.
#[derive(Default)]
pub(crate) struct Recorder {
    effects: RefCell<Vec<SyncEffect>>,
}

impl Recorder {
    pub(crate) fn sink(&self) -> impl Fn(SyncEffect) + '_ {
        move |effect| self.effects.borrow_mut().push(effect)
    }

    pub(crate) fn effects(&self) -> Vec<SyncEffect> {
        self.effects.borrow().clone()
    }
}

/// Device fixture.
pub(crate) fn device(ip: &str, group_id: Option<&str>, was_assigned: bool) -> Device {
    Device {
        ip: ip.to_string(),
        active: true,
        group_id: group_id.map(str::to_string),
        was_assigned,
        ..Device::default()
    }
}

/// Group fixture.
pub(crate) fn group(name: &str, album: Option<&str>) -> Group {
    Group {
        name: name.to_string(),
        album: album.map(str::to_string),
        random: true,
        created_at: None,
    }
}

//! Device assignment flows and the full reload.

use frameboard_api_models::AssignGroupRequest;

use crate::core::sync::{DashboardApi, Operation, SyncEffect};

/// Re-fetch the device collection.
pub async fn resync_devices<A, S>(api: &A, sink: &S)
where
    A: DashboardApi + ?Sized,
    S: Fn(SyncEffect),
{
    match api.fetch_devices().await {
        Ok(devices) => sink(SyncEffect::Devices(devices)),
        Err(error) => sink(SyncEffect::failed(Operation::LoadDevices, error)),
    }
}

/// Re-fetch one group's member list.
pub async fn resync_members<A, S>(api: &A, sink: &S, group_id: &str)
where
    A: DashboardApi + ?Sized,
    S: Fn(SyncEffect),
{
    match api.fetch_group_devices(group_id).await {
        Ok(members) => sink(SyncEffect::Members {
            group_id: group_id.to_string(),
            members,
        }),
        Err(error) => sink(SyncEffect::failed(Operation::LoadMembers, error)),
    }
}

/// Full reload run on every (re)connect of the push channel.
pub async fn load_initial_state<A, S>(api: &A, sink: &S)
where
    A: DashboardApi + ?Sized,
    S: Fn(SyncEffect),
{
    sink(SyncEffect::Reloading);
    resync_devices(api, sink).await;
    match api.fetch_groups().await {
        Ok(groups) => sink(SyncEffect::Groups(groups)),
        Err(error) => sink(SyncEffect::failed(Operation::LoadGroups, error)),
    }
}

/// Put a device in a group, then refresh the group and the collection.
///
/// `marked` also records `was_assigned`; it is used by auto-assignment and
/// assign-all, whose failures are reported so the device can be retried.
pub async fn assign_device<A, S>(api: &A, sink: &S, device_id: &str, group_id: &str, marked: bool)
where
    A: DashboardApi + ?Sized,
    S: Fn(SyncEffect),
{
    let request = if marked {
        AssignGroupRequest::assign_marked(group_id)
    } else {
        AssignGroupRequest::assign(group_id)
    };
    if let Err(error) = api.assign_device(device_id, &request).await {
        sink(SyncEffect::failed(Operation::AssignDevice, error));
        if marked {
            sink(SyncEffect::AutoAssignFailed {
                device_id: device_id.to_string(),
            });
        }
        return;
    }
    resync_members(api, sink, group_id).await;
    resync_devices(api, sink).await;
}

/// Remove a device from its group, then refresh the collection and every
/// rendered member list (any of them may have held the device).
pub async fn unassign_device<A, S>(api: &A, sink: &S, device_id: &str, rendered_groups: &[String])
where
    A: DashboardApi + ?Sized,
    S: Fn(SyncEffect),
{
    if let Err(error) = api
        .assign_device(device_id, &AssignGroupRequest::unassign())
        .await
    {
        sink(SyncEffect::failed(Operation::UnassignDevice, error));
        return;
    }
    resync_devices(api, sink).await;
    for group_id in rendered_groups {
        resync_members(api, sink, group_id).await;
    }
}

/// Assign every listed device to `group_id`, one after another.
pub async fn assign_all<A, S>(api: &A, sink: &S, device_ids: &[String], group_id: &str)
where
    A: DashboardApi + ?Sized,
    S: Fn(SyncEffect),
{
    for device_id in device_ids {
        assign_device(api, sink, device_id, group_id, true).await;
    }
}

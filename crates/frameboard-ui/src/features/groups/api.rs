//! Group flows: create, select, edit and delete.

use frameboard_api_models::{CreateGroupRequest, GroupUpdate};

use crate::core::sync::{DashboardApi, Operation, SyncEffect};
use crate::features::devices::api::{resync_members, unassign_device};
use crate::features::groups::logic::validate_group_name;
use crate::features::tracking::api::refresh_tracking;
use crate::features::tracking::state::TrackingTarget;

/// Create a group from the modal input; blank names send nothing.
pub async fn create_group<A, S>(api: &A, sink: &S, input: &str)
where
    A: DashboardApi + ?Sized,
    S: Fn(SyncEffect),
{
    let Some(name) = validate_group_name(input) else {
        return;
    };
    let request = CreateGroupRequest { name: name.clone() };
    match api.create_group(&request).await {
        Ok(created) => sink(SyncEffect::GroupCreated {
            group_id: created.group_id,
            name,
        }),
        Err(error) => sink(SyncEffect::failed(Operation::CreateGroup, error)),
    }
}

/// Open a group's panel: detail, albums, tracking, members.
pub async fn select_group<A, S>(api: &A, sink: &S, group_id: &str)
where
    A: DashboardApi + ?Sized,
    S: Fn(SyncEffect),
{
    let group = match api.fetch_group(group_id).await {
        Ok(group) => group,
        Err(error) => {
            sink(SyncEffect::failed(Operation::LoadGroup, error));
            return;
        }
    };
    let target = group
        .selected_album()
        .and_then(|album| TrackingTarget::new(group_id, album));
    sink(SyncEffect::GroupSelected {
        group_id: group_id.to_string(),
        group,
    });

    match api.fetch_albums().await {
        Ok(albums) => sink(SyncEffect::Albums {
            group_id: group_id.to_string(),
            albums,
        }),
        Err(error) => sink(SyncEffect::failed(Operation::LoadAlbums, error)),
    }

    restart_tracking(api, sink, target).await;
    resync_members(api, sink, group_id).await;
}

/// Rename a group; labels change only once the backend accepts.
pub async fn rename_group<A, S>(api: &A, sink: &S, group_id: &str, name: &str)
where
    A: DashboardApi + ?Sized,
    S: Fn(SyncEffect),
{
    match api.update_group(group_id, &GroupUpdate::rename(name)).await {
        Ok(()) => sink(SyncEffect::GroupRenamed {
            group_id: group_id.to_string(),
            name: name.to_string(),
        }),
        Err(error) => sink(SyncEffect::failed(Operation::RenameGroup, error)),
    }
}

/// Bind a group to an album (`""` clears it) and retarget the poller.
pub async fn change_album<A, S>(api: &A, sink: &S, group_id: &str, album: &str)
where
    A: DashboardApi + ?Sized,
    S: Fn(SyncEffect),
{
    if let Err(error) = api.update_group(group_id, &GroupUpdate::album(album)).await {
        sink(SyncEffect::failed(Operation::ChangeAlbum, error));
        return;
    }
    let selected = (!album.is_empty()).then(|| album.to_string());
    sink(SyncEffect::AlbumChanged {
        group_id: group_id.to_string(),
        album: selected,
    });
    restart_tracking(api, sink, TrackingTarget::new(group_id, album)).await;
}

/// Toggle random order.
pub async fn set_random<A, S>(api: &A, sink: &S, group_id: &str, random: bool)
where
    A: DashboardApi + ?Sized,
    S: Fn(SyncEffect),
{
    match api.update_group(group_id, &GroupUpdate::random(random)).await {
        Ok(()) => sink(SyncEffect::RandomChanged {
            group_id: group_id.to_string(),
            random,
        }),
        Err(error) => sink(SyncEffect::failed(Operation::SetRandom, error)),
    }
}

/// Delete a group. Freed devices arrive through the push channel.
pub async fn delete_group<A, S>(api: &A, sink: &S, group_id: &str)
where
    A: DashboardApi + ?Sized,
    S: Fn(SyncEffect),
{
    match api.delete_group(group_id).await {
        Ok(()) => sink(SyncEffect::GroupDeleted {
            group_id: group_id.to_string(),
        }),
        Err(error) => sink(SyncEffect::failed(Operation::DeleteGroup, error)),
    }
}

/// Remove button on a member row.
pub async fn remove_member<A, S>(api: &A, sink: &S, device_id: &str, rendered_groups: &[String])
where
    A: DashboardApi + ?Sized,
    S: Fn(SyncEffect),
{
    unassign_device(api, sink, device_id, rendered_groups).await;
}

async fn restart_tracking<A, S>(api: &A, sink: &S, target: Option<TrackingTarget>)
where
    A: DashboardApi + ?Sized,
    S: Fn(SyncEffect),
{
    match target {
        Some(target) => {
            sink(SyncEffect::TrackingStarted(target.clone()));
            refresh_tracking(api, sink, &target).await;
        }
        None => sink(SyncEffect::TrackingStopped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{Call, FakeApi, Recorder, group};
    use frameboard_api_models::{AssignGroupRequest, GroupMap};

    #[tokio::test(flavor = "current_thread")]
    async fn create_emits_returned_identifier() {
        let api = FakeApi {
            created_group_id: "g1".into(),
            ..FakeApi::default()
        };
        let recorder = Recorder::default();
        create_group(&api, &recorder.sink(), "  Lobby ").await;
        assert_eq!(api.calls(), vec![Call::CreateGroup("Lobby".into())]);
        assert_eq!(
            recorder.effects(),
            vec![SyncEffect::GroupCreated {
                group_id: "g1".into(),
                name: "Lobby".into(),
            }]
        );
    }

    #[tokio::test(flavor = "current_thread")]
    async fn blank_name_sends_nothing() {
        let api = FakeApi::default();
        let recorder = Recorder::default();
        create_group(&api, &recorder.sink(), "   ").await;
        assert!(api.calls().is_empty());
        assert!(recorder.effects().is_empty());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn select_with_album_starts_tracking_before_members() {
        let api = FakeApi {
            groups: GroupMap::from([("g1".to_string(), group("Lobby", Some("a1")))]),
            ..FakeApi::default()
        };
        let recorder = Recorder::default();
        select_group(&api, &recorder.sink(), "g1").await;
        assert_eq!(
            api.calls(),
            vec![
                Call::FetchGroup("g1".into()),
                Call::FetchAlbums,
                Call::FetchTracking("g1".into(), "a1".into()),
                Call::FetchGroupDevices("g1".into()),
            ]
        );
        let started = SyncEffect::TrackingStarted(TrackingTarget::new("g1", "a1").expect("target"));
        assert!(recorder.effects().contains(&started));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn select_without_album_stops_tracking() {
        let api = FakeApi {
            groups: GroupMap::from([("g1".to_string(), group("Lobby", None))]),
            ..FakeApi::default()
        };
        let recorder = Recorder::default();
        select_group(&api, &recorder.sink(), "g1").await;
        assert!(recorder.effects().contains(&SyncEffect::TrackingStopped));
        assert!(
            !api.calls()
                .iter()
                .any(|call| matches!(call, Call::FetchTracking(..)))
        );
    }

    #[tokio::test(flavor = "current_thread")]
    async fn missing_group_stops_after_detail() {
        let api = FakeApi::default();
        let recorder = Recorder::default();
        select_group(&api, &recorder.sink(), "ghost").await;
        assert_eq!(api.calls(), vec![Call::FetchGroup("ghost".into())]);
        assert!(matches!(
            recorder.effects().as_slice(),
            [SyncEffect::Failed {
                operation: Operation::LoadGroup,
                ..
            }]
        ));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn clearing_album_sends_empty_string_and_stops_poller() {
        let api = FakeApi::default();
        let recorder = Recorder::default();
        change_album(&api, &recorder.sink(), "g1", "").await;
        assert_eq!(
            api.calls(),
            vec![Call::UpdateGroup("g1".into(), GroupUpdate::album(""))]
        );
        assert_eq!(
            recorder.effects(),
            vec![
                SyncEffect::AlbumChanged {
                    group_id: "g1".into(),
                    album: None,
                },
                SyncEffect::TrackingStopped,
            ]
        );
    }

    #[tokio::test(flavor = "current_thread")]
    async fn failed_album_change_keeps_poller() {
        let api = FakeApi::failing(&["update_group"]);
        let recorder = Recorder::default();
        change_album(&api, &recorder.sink(), "g1", "a2").await;
        let effects = recorder.effects();
        assert_eq!(effects.len(), 1);
        assert!(matches!(
            effects[0],
            SyncEffect::Failed {
                operation: Operation::ChangeAlbum,
                ..
            }
        ));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn failed_rename_emits_no_relabel() {
        let api = FakeApi::failing(&["update_group"]);
        let recorder = Recorder::default();
        rename_group(&api, &recorder.sink(), "g1", "Foyer").await;
        assert!(
            !recorder
                .effects()
                .iter()
                .any(|effect| matches!(effect, SyncEffect::GroupRenamed { .. }))
        );
    }

    #[tokio::test(flavor = "current_thread")]
    async fn delete_does_not_refetch_devices() {
        let api = FakeApi::default();
        let recorder = Recorder::default();
        delete_group(&api, &recorder.sink(), "g1").await;
        assert_eq!(api.calls(), vec![Call::DeleteGroup("g1".into())]);
        assert_eq!(
            recorder.effects(),
            vec![SyncEffect::GroupDeleted {
                group_id: "g1".into()
            }]
        );
    }

    #[tokio::test(flavor = "current_thread")]
    async fn remove_member_unassigns_and_refreshes_panel() {
        let api = FakeApi::default();
        let recorder = Recorder::default();
        remove_member(&api, &recorder.sink(), "d1", &["g1".to_string()]).await;
        assert_eq!(
            api.calls(),
            vec![
                Call::AssignDevice("d1".into(), AssignGroupRequest::unassign()),
                Call::FetchDevices,
                Call::FetchGroupDevices("g1".into()),
            ]
        );
    }

    #[tokio::test(flavor = "current_thread")]
    async fn random_toggle_has_no_follow_up_requests() {
        let api = FakeApi::default();
        let recorder = Recorder::default();
        set_random(&api, &recorder.sink(), "g1", false).await;
        assert_eq!(
            api.calls(),
            vec![Call::UpdateGroup("g1".into(), GroupUpdate::random(false))]
        );
        assert_eq!(
            recorder.effects(),
            vec![SyncEffect::RandomChanged {
                group_id: "g1".into(),
                random: false,
            }]
        );
    }
}

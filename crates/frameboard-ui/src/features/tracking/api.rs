//! Tracking flows.

use crate::core::sync::{DashboardApi, Operation, SyncEffect};
use crate::features::tracking::state::TrackingTarget;

/// Fetch the counters for `target` (one poll tick).
pub async fn refresh_tracking<A, S>(api: &A, sink: &S, target: &TrackingTarget)
where
    A: DashboardApi + ?Sized,
    S: Fn(SyncEffect),
{
    match api
        .fetch_tracking(&target.group_id, &target.album_id)
        .await
    {
        Ok(tracking) => sink(SyncEffect::Tracking {
            target: target.clone(),
            tracking,
        }),
        Err(error) => sink(SyncEffect::failed(Operation::LoadTracking, error)),
    }
}

/// Reset the counters, then re-fetch them whatever the reset outcome.
pub async fn reset_tracking<A, S>(api: &A, sink: &S, target: &TrackingTarget)
where
    A: DashboardApi + ?Sized,
    S: Fn(SyncEffect),
{
    if let Err(error) = api
        .reset_tracking(&target.group_id, &target.album_id)
        .await
    {
        sink(SyncEffect::failed(Operation::ResetTracking, error));
    }
    refresh_tracking(api, sink, target).await;
}

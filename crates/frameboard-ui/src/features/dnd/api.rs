//! Drop flow.

use crate::core::sync::{DashboardApi, SyncEffect};
use crate::features::devices::api::{assign_device, unassign_device};
use crate::features::dnd::logic::{DragError, DropTarget, parse_drag_payload};

/// Apply a drop: assign to the target group or unassign.
///
/// # Errors
///
/// Returns [`DragError`] without touching the network when the payload is
/// unusable.
pub async fn drop_payload<A, S>(
    api: &A,
    sink: &S,
    payload: Option<&str>,
    target: &DropTarget,
    rendered_groups: &[String],
) -> Result<(), DragError>
where
    A: DashboardApi + ?Sized,
    S: Fn(SyncEffect),
{
    let device_id = parse_drag_payload(payload)?;
    match target {
        DropTarget::Group(group_id) => {
            assign_device(api, sink, &device_id, group_id, false).await;
        }
        DropTarget::Unassigned => {
            unassign_device(api, sink, &device_id, rendered_groups).await;
        }
    }
    Ok(())
}

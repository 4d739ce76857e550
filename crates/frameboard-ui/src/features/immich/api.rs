//! Immich status and settings flows.

use crate::core::sync::{DashboardApi, Operation, SyncEffect};
use crate::features::immich::logic::{
    SettingField, SettingUpdate, SettingValueError, parse_setting_value,
};
use frameboard_api_models::ImmichStatus;

/// Fetch the status; failures show the unreachable placeholder.
pub async fn refresh_immich_status<A, S>(api: &A, sink: &S)
where
    A: DashboardApi + ?Sized,
    S: Fn(SyncEffect),
{
    match api.fetch_immich_status().await {
        Ok(status) => sink(SyncEffect::ImmichStatus(status)),
        Err(error) => {
            sink(SyncEffect::failed(Operation::LoadImmichStatus, error));
            sink(SyncEffect::ImmichStatus(ImmichStatus::unreachable()));
        }
    }
}

/// Write one setting. Anything short of success re-fetches the status.
///
/// # Errors
///
/// Returns [`SettingValueError`] when the input is not a number; nothing is
/// sent in that case.
pub async fn update_setting<A, S>(
    api: &A,
    sink: &S,
    field: SettingField,
    raw: &str,
) -> Result<(), SettingValueError>
where
    A: DashboardApi + ?Sized,
    S: Fn(SyncEffect),
{
    let value = match parse_setting_value(field, raw) {
        Ok(value) => value,
        Err(error) => {
            refresh_immich_status(api, sink).await;
            return Err(error);
        }
    };
    let outcome = match SettingUpdate::for_field(field, value) {
        SettingUpdate::WakeupInterval(update) => api.update_wakeup_interval(&update).await,
        SettingUpdate::Immich(update) => api.update_immich_config(&update).await,
    };
    if let Err(error) = outcome {
        sink(SyncEffect::failed(Operation::UpdateSetting, error));
        refresh_immich_status(api, sink).await;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{Call, FakeApi, Recorder};
    use frameboard_api_models::ImmichConfigUpdate;

    #[tokio::test(flavor = "current_thread")]
    async fn rotation_goes_to_immich_config() {
        let api = FakeApi::default();
        let recorder = Recorder::default();
        update_setting(&api, &recorder.sink(), SettingField::Rotation, "180")
            .await
            .expect("numeric");
        assert_eq!(
            api.calls(),
            vec![Call::UpdateImmichConfig(ImmichConfigUpdate {
                rotation: Some(180.0),
                ..ImmichConfigUpdate::default()
            })]
        );
        assert!(recorder.effects().is_empty());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn failed_update_refetches_status() {
        let api = FakeApi::failing(&["update_wakeup_interval"]);
        let recorder = Recorder::default();
        update_setting(&api, &recorder.sink(), SettingField::WakeupInterval, "30")
            .await
            .expect("numeric");
        assert_eq!(
            api.calls(),
            vec![Call::UpdateWakeupInterval(30.0), Call::FetchImmichStatus]
        );
    }

    #[tokio::test(flavor = "current_thread")]
    async fn unparsable_value_sends_nothing_and_refetches() {
        let api = FakeApi::default();
        let recorder = Recorder::default();
        let result = update_setting(&api, &recorder.sink(), SettingField::Contrast, "bright").await;
        assert!(result.is_err());
        assert_eq!(api.calls(), vec![Call::FetchImmichStatus]);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn unreachable_status_is_substituted() {
        let api = FakeApi::failing(&["fetch_immich_status"]);
        let recorder = Recorder::default();
        refresh_immich_status(&api, &recorder.sink()).await;
        let effects = recorder.effects();
        assert_eq!(effects.len(), 2);
        assert_eq!(
            effects[1],
            SyncEffect::ImmichStatus(ImmichStatus::unreachable())
        );
    }
}

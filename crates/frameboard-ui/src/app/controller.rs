//! Client-state controller shared through context.
//!
//! # Design
//! - Create exactly one controller per app boot; views reach it through a
//!   `ContextProvider` and call intent methods.
//! - Intents spawn the matching flow; every effect a flow emits goes through
//!   [`Controller::emit`], which reduces it and runs the follow-ups.
//! - The tracking poller slot is owned here, never in a view.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::platform::spawn_local;
use yewdux::prelude::Dispatch;

use crate::app::diagnostics;
use crate::core::config::ClientConfig;
use crate::core::events::{ChannelState, PushEvent};
use crate::core::store::{AppStore, FollowUp, apply_effect, hide_popup, set_default_group, show_popup};
use crate::core::sync::SyncEffect;
use crate::features::devices::api::{assign_all, assign_device, load_initial_state};
use crate::features::devices::logic::{DeviceInfo, plan_unassigned};
use crate::features::dnd::api::drop_payload;
use crate::features::dnd::logic::DropTarget;
use crate::features::dnd::state as drag;
use crate::features::groups::actions::GroupAction;
use crate::features::groups::api::{
    change_album, create_group, delete_group, remove_member, rename_group, select_group,
    set_random,
};
use crate::features::groups::state as groups;
use crate::features::immich::api::{refresh_immich_status, update_setting};
use crate::features::immich::logic::SettingField;
use crate::features::tracking::api::{refresh_tracking, reset_tracking};
use crate::features::tracking::state::{TrackingPoller, TrackingTarget};
use crate::services::api::ApiClient;

/// Shared controller context.
#[derive(Clone)]
pub(crate) struct Controller {
    api: Rc<ApiClient>,
    dispatch: Dispatch<AppStore>,
    poller: Rc<RefCell<TrackingPoller<Interval>>>,
    config: Rc<ClientConfig>,
}

impl PartialEq for Controller {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.api, &other.api)
    }
}

impl Controller {
    pub(crate) fn new(config: ClientConfig) -> Self {
        Self {
            api: Rc::new(ApiClient::new(config.clone())),
            dispatch: Dispatch::<AppStore>::new(),
            poller: Rc::new(RefCell::new(TrackingPoller::default())),
            config: Rc::new(config),
        }
    }

    pub(crate) fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Reduce one effect into the store, then run what it asks for.
    pub(crate) fn emit(&self, effect: SyncEffect) {
        let mut follow_ups = Vec::new();
        let mut effect = Some(effect);
        self.dispatch.reduce_mut(|store| {
            if let Some(effect) = effect.take() {
                follow_ups = apply_effect(store, effect);
            }
        });
        for follow_up in follow_ups {
            self.follow_up(follow_up);
        }
    }

    fn sink(&self) -> impl Fn(SyncEffect) + 'static {
        let controller = self.clone();
        move |effect| controller.emit(effect)
    }

    fn follow_up(&self, follow_up: FollowUp) {
        match follow_up {
            FollowUp::AutoAssign {
                device_id,
                group_id,
            } => {
                let api = self.api.clone();
                let sink = self.sink();
                spawn_local(async move {
                    assign_device(&*api, &sink, &device_id, &group_id, true).await;
                });
            }
            FollowUp::StartPolling(target) => self.start_polling(target),
            FollowUp::StopPolling => {
                self.poller.borrow_mut().stop();
            }
            FollowUp::Report(operation, error) => diagnostics::report(operation, &error),
        }
    }

    fn start_polling(&self, target: TrackingTarget) {
        let period = self.config.tracking_poll_ms;
        let controller = self.clone();
        self.poller.borrow_mut().start(target, move |target| {
            let target = target.clone();
            Interval::new(period, move || {
                let api = controller.api.clone();
                let sink = controller.sink();
                let target = target.clone();
                spawn_local(async move {
                    refresh_tracking(&*api, &sink, &target).await;
                });
            })
        });
    }

    /// Drop the tracking timer (unmount).
    pub(crate) fn shutdown(&self) {
        self.poller.borrow_mut().stop();
    }

    /// Full reload of devices and groups.
    pub(crate) fn load_initial_state(&self) {
        let api = self.api.clone();
        let sink = self.sink();
        spawn_local(async move {
            load_initial_state(&*api, &sink).await;
        });
    }

    /// Handle a push channel event.
    pub(crate) fn on_push(&self, event: PushEvent) {
        match event {
            PushEvent::Connected => {
                diagnostics::note("Push channel connected; reloading state");
                self.load_initial_state();
            }
            PushEvent::DeviceUpdate(devices) => self.emit(SyncEffect::Devices(devices)),
        }
    }

    pub(crate) fn set_channel_state(&self, state: ChannelState) {
        self.dispatch.reduce_mut(|store| store.channel = state);
    }

    /// Default-group select changed.
    pub(crate) fn set_default_group(&self, value: &str) {
        let mut follow_ups = Vec::new();
        self.dispatch.reduce_mut(|store| {
            follow_ups = set_default_group(store, value);
        });
        for follow_up in follow_ups {
            self.follow_up(follow_up);
        }
    }

    /// Assign every listed unassigned device to the default group.
    pub(crate) fn assign_all(&self) {
        let store = self.dispatch.get();
        let Some(group_id) = store.devices.default_group.group_id().map(str::to_string) else {
            return;
        };
        let device_ids: Vec<String> = plan_unassigned(
            &store.devices.snapshot,
            &store.devices.default_group,
            &store.devices.pending_auto_assign,
        )
        .rows
        .into_iter()
        .map(|row| row.id)
        .collect();
        let api = self.api.clone();
        let sink = self.sink();
        spawn_local(async move {
            assign_all(&*api, &sink, &device_ids, &group_id).await;
        });
    }

    pub(crate) fn show_device_info(&self, info: DeviceInfo) {
        self.dispatch.reduce_mut(|store| show_popup(store, info));
    }

    pub(crate) fn hide_device_info(&self) {
        self.dispatch.reduce_mut(hide_popup);
    }

    pub(crate) fn drag_over(&self, target: DropTarget) {
        self.dispatch
            .reduce_mut(|store| drag::enter(&mut store.drag, target));
    }

    pub(crate) fn drag_leave(&self, target: &DropTarget) {
        self.dispatch
            .reduce_mut(|store| drag::leave(&mut store.drag, target));
    }

    /// A device was dropped on a list.
    pub(crate) fn drop_device(&self, payload: Option<String>, target: DropTarget) {
        self.dispatch.reduce_mut(|store| drag::clear(&mut store.drag));
        let rendered = self.dispatch.get().groups.rendered_groups();
        let api = self.api.clone();
        let sink = self.sink();
        spawn_local(async move {
            if let Err(err) =
                drop_payload(&*api, &sink, payload.as_deref(), &target, &rendered).await
            {
                diagnostics::reject("Ignoring drop", &err);
            }
        });
    }

    /// Dispatch a group gesture.
    pub(crate) fn group_action(&self, action: GroupAction) {
        let api = self.api.clone();
        let sink = self.sink();
        match action {
            GroupAction::Select(group_id) => spawn_local(async move {
                select_group(&*api, &sink, &group_id).await;
            }),
            GroupAction::Rename { group_id, name } => {
                self.dispatch
                    .reduce_mut(|store| groups::edit_name(&mut store.groups, &group_id, &name));
                spawn_local(async move {
                    rename_group(&*api, &sink, &group_id, &name).await;
                });
            }
            GroupAction::ChangeAlbum { group_id, album } => spawn_local(async move {
                change_album(&*api, &sink, &group_id, &album).await;
            }),
            GroupAction::SetRandom { group_id, random } => spawn_local(async move {
                set_random(&*api, &sink, &group_id, random).await;
            }),
            GroupAction::Delete(group_id) => spawn_local(async move {
                delete_group(&*api, &sink, &group_id).await;
            }),
            GroupAction::RemoveMember(device_id) => {
                let rendered = self.dispatch.get().groups.rendered_groups();
                spawn_local(async move {
                    remove_member(&*api, &sink, &device_id, &rendered).await;
                });
            }
            GroupAction::OpenModal => self
                .dispatch
                .reduce_mut(|store| groups::open_modal(&mut store.groups)),
            GroupAction::ModalInput(name) => self
                .dispatch
                .reduce_mut(|store| store.groups.modal.name = name),
            GroupAction::CloseModal => self
                .dispatch
                .reduce_mut(|store| groups::close_modal(&mut store.groups)),
            GroupAction::ConfirmCreate => {
                let name = self.dispatch.get().groups.modal.name.clone();
                spawn_local(async move {
                    create_group(&*api, &sink, &name).await;
                });
            }
        }
    }

    /// Reset button of the tracking block.
    pub(crate) fn reset_tracking(&self, target: TrackingTarget) {
        let api = self.api.clone();
        let sink = self.sink();
        spawn_local(async move {
            reset_tracking(&*api, &sink, &target).await;
        });
    }

    /// One Immich poll tick.
    pub(crate) fn refresh_immich(&self) {
        let api = self.api.clone();
        let sink = self.sink();
        spawn_local(async move {
            refresh_immich_status(&*api, &sink).await;
        });
    }

    /// A settings input fired `change`.
    pub(crate) fn update_setting(&self, field: SettingField, raw: String) {
        let api = self.api.clone();
        let sink = self.sink();
        spawn_local(async move {
            if let Err(err) = update_setting(&*api, &sink, field, &raw).await {
                diagnostics::reject("Setting not saved", &err);
            }
        });
    }
}

//! Root component and wasm entrypoint.
//!
//! # Design
//! - The root owns every long-lived resource: the push channel, the Immich
//!   interval and the document listener. All are released on unmount.
//! - Children reach the controller through context, never through props.

use gloo::events::{EventListener, EventListenerOptions};
use gloo::utils::document;
use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::app::controller::Controller;
use crate::app::preferences::load_config;
use crate::app::socket::{SocketHandle, connect_socket};
use crate::components::channel::ChannelBadge;
use crate::components::device_info::DeviceInfoPopup;
use crate::features::devices::view::DevicesPanel;
use crate::features::groups::view::{CreateGroupModal, GroupDetails, GroupTabs};
use crate::features::immich::view::ImmichPanel;

pub(crate) mod controller;
mod diagnostics;
mod preferences;
mod socket;

#[function_component(FrameboardApp)]
pub(crate) fn frameboard_app() -> Html {
    let controller = use_memo(|_| Controller::new(load_config()), ());
    let socket_handle = use_mut_ref(|| None as Option<SocketHandle>);

    {
        let controller = (*controller).clone();
        let socket_handle = socket_handle.clone();
        use_effect_with_deps(
            move |_| {
                controller.load_initial_state();
                let on_event = {
                    let controller = controller.clone();
                    Callback::from(move |event| controller.on_push(event))
                };
                let on_state = {
                    let controller = controller.clone();
                    Callback::from(move |state| controller.set_channel_state(state))
                };
                let url = controller.config().socket_url();
                *socket_handle.borrow_mut() = Some(connect_socket(url, on_event, on_state));
                move || {
                    if let Some(handle) = socket_handle.borrow_mut().take() {
                        handle.close();
                    }
                    controller.shutdown();
                }
            },
            (),
        );
    }
    {
        let controller = (*controller).clone();
        use_effect_with_deps(
            move |_| {
                controller.refresh_immich();
                let period = controller.config().immich_poll_ms;
                let interval = Interval::new(period, move || controller.refresh_immich());
                move || drop(interval)
            },
            (),
        );
    }
    {
        let controller = (*controller).clone();
        use_effect_with_deps(
            move |_| {
                let listener = EventListener::new_with_options(
                    &document(),
                    "mouseleave",
                    EventListenerOptions::run_in_capture_phase(),
                    move |_| controller.hide_device_info(),
                );
                move || drop(listener)
            },
            (),
        );
    }

    html! {
        <ContextProvider<Controller> context={(*controller).clone()}>
            <header class="app-header">
                <h1>{"Frameboard"}</h1>
                <ChannelBadge />
            </header>
            <main class="dashboard">
                <DevicesPanel />
                <section class="groups-panel">
                    <GroupTabs />
                    <GroupDetails />
                </section>
                <ImmichPanel />
            </main>
            <CreateGroupModal />
            <DeviceInfoPopup />
        </ContextProvider<Controller>>
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = document().get_element_by_id("root") {
        yew::Renderer::<FrameboardApp>::with_root(root).render();
    } else {
        yew::Renderer::<FrameboardApp>::new().render();
    }
}

//! Unassigned device list, default-group control and device rows.
//!
//! # Design
//! - Rows are derived from the store snapshot on every render.
//! - `DeviceItem` is shared with the group member list.

use web_sys::{DragEvent, HtmlSelectElement};
use yew::prelude::*;
use yewdux::prelude::use_selector;

use crate::app::controller::Controller;
use crate::core::store::AppStore;
use crate::features::devices::logic::{DeviceInfo, plan_unassigned};
use crate::features::dnd::logic::{DRAG_MIME, DropTarget};
use crate::features::dnd::view::DropList;
use crate::features::groups::logic::default_group_options;

#[derive(Properties, PartialEq)]
pub(crate) struct DeviceItemProps {
    pub device_id: AttrValue,
    pub label: AttrValue,
    pub info: DeviceInfo,
    #[prop_or_default]
    pub on_remove: Option<Callback<String>>,
}

/// Draggable device row with the info popup on hover.
#[function_component(DeviceItem)]
pub(crate) fn device_item(props: &DeviceItemProps) -> Html {
    let Some(controller) = use_context::<Controller>() else {
        return html! {};
    };
    let ondragstart = {
        let device_id = props.device_id.clone();
        Callback::from(move |event: DragEvent| {
            let Some(transfer) = event.data_transfer() else {
                event.prevent_default();
                return;
            };
            if device_id.is_empty() || transfer.set_data(DRAG_MIME, &device_id).is_err() {
                event.prevent_default();
            }
        })
    };
    let onmouseover = {
        let info = props.info.clone();
        Callback::from(move |_: MouseEvent| controller.show_device_info(info.clone()))
    };
    let remove = props.on_remove.clone().map(|on_remove| {
        let device_id = props.device_id.to_string();
        let onclick = Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            on_remove.emit(device_id.clone());
        });
        html! { <button class="remove-device" {onclick}>{"Remove"}</button> }
    });

    html! {
        <li class="device-item" draggable="true" data-device-id={props.device_id.clone()} {ondragstart} {onmouseover}>
            <span class="device-label">{props.label.clone()}</span>
            { for remove }
        </li>
    }
}

/// Unassigned devices panel.
#[function_component(DevicesPanel)]
pub(crate) fn devices_panel() -> Html {
    let controller = use_context::<Controller>();
    let view = use_selector(|store: &AppStore| {
        plan_unassigned(
            &store.devices.snapshot,
            &store.devices.default_group,
            &store.devices.pending_auto_assign,
        )
    });
    let selected = use_selector(|store: &AppStore| store.devices.default_group.as_value().to_string());
    let options = use_selector(|store: &AppStore| default_group_options(&store.groups.tabs));
    let Some(controller) = controller else {
        return html! {
            <section class="devices-panel">
                <p class="error">{"Missing controller context."}</p>
            </section>
        };
    };

    let onchange = {
        let controller = controller.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                controller.set_default_group(&select.value());
            }
        })
    };
    let on_assign_all = Callback::from(move |_: MouseEvent| controller.assign_all());

    html! {
        <section class="devices-panel">
            <h2>{"Unassigned Devices"}</h2>
            <div class="auto-group-control">
                <label for="auto-group">{"Auto-assign new devices to: "}</label>
                <select id="auto-group" {onchange}>
                    { for options.iter().map(|(value, label)| html! {
                        <option value={value.clone()} selected={*value == *selected}>{label.clone()}</option>
                    }) }
                </select>
                <button
                    id="assign-all-btn"
                    class={classes!((!view.show_assign_all).then_some("hidden"))}
                    onclick={on_assign_all}
                >
                    {"Assign All"}
                </button>
            </div>
            <DropList id="devices" target={DropTarget::Unassigned}>
                { for view.rows.iter().map(|row| html! {
                    <DeviceItem
                        key={row.id.clone()}
                        device_id={row.id.clone()}
                        label={row.label.clone()}
                        info={row.info.clone()}
                    />
                }) }
            </DropList>
        </section>
    }
}

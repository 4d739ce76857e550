//! Group tabs, detail panel and the create-group modal.

use web_sys::{HtmlInputElement, HtmlSelectElement, KeyboardEvent};
use yew::prelude::*;
use yewdux::prelude::use_selector;

use crate::app::controller::Controller;
use crate::core::store::AppStore;
use crate::features::devices::logic::DeviceRow;
use crate::features::devices::view::DeviceItem;
use crate::features::dnd::logic::DropTarget;
use crate::features::dnd::view::DropList;
use crate::features::groups::actions::GroupAction;
use crate::features::tracking::view::TrackingInfo;

fn action_callback<E: 'static>(
    controller: &Controller,
    build: impl Fn(E) -> Option<GroupAction> + 'static,
) -> Callback<E> {
    let controller = controller.clone();
    Callback::from(move |event: E| {
        if let Some(action) = build(event) {
            controller.group_action(action);
        }
    })
}

/// Tab strip with the trailing `+` tab.
#[function_component(GroupTabs)]
pub(crate) fn group_tabs() -> Html {
    let controller = use_context::<Controller>();
    let tabs = use_selector(|store: &AppStore| store.groups.tabs.clone());
    let active = use_selector(|store: &AppStore| store.groups.active_group().map(str::to_string));
    let Some(controller) = controller else {
        return html! {};
    };
    let open = action_callback(&controller, |_: MouseEvent| Some(GroupAction::OpenModal));

    html! {
        <ul id="group-tab-list">
            { for tabs.iter().map(|tab| {
                let group_id = tab.id.clone();
                let onclick = action_callback(&controller, move |_: MouseEvent| {
                    Some(GroupAction::Select(group_id.clone()))
                });
                let is_active = active.as_deref() == Some(tab.id.as_str());
                html! {
                    <li
                        key={tab.id.clone()}
                        data-group-id={tab.id.clone()}
                        class={classes!(is_active.then_some("active"))}
                        {onclick}
                    >
                        {tab.name.clone()}
                    </li>
                }
            }) }
            <li id="add-group-tab" onclick={open}>{"+"}</li>
        </ul>
    }
}

/// Detail panel of the active tab.
#[function_component(GroupDetails)]
pub(crate) fn group_details() -> Html {
    let controller = use_context::<Controller>();
    let panel = use_selector(|store: &AppStore| store.groups.panel.clone());
    let (Some(controller), Some(panel)) = (controller, (*panel).clone()) else {
        return html! { <div id="group-details"></div> };
    };
    let group_id = panel.group_id.clone();

    let on_name = {
        let group_id = group_id.clone();
        action_callback(&controller, move |event: InputEvent| {
            let input = event.target_dyn_into::<HtmlInputElement>()?;
            Some(GroupAction::Rename {
                group_id: group_id.clone(),
                name: input.value(),
            })
        })
    };
    let on_album = {
        let group_id = group_id.clone();
        action_callback(&controller, move |event: Event| {
            let select = event.target_dyn_into::<HtmlSelectElement>()?;
            Some(GroupAction::ChangeAlbum {
                group_id: group_id.clone(),
                album: select.value(),
            })
        })
    };
    let on_random = {
        let group_id = group_id.clone();
        action_callback(&controller, move |event: Event| {
            let input = event.target_dyn_into::<HtmlInputElement>()?;
            Some(GroupAction::SetRandom {
                group_id: group_id.clone(),
                random: input.checked(),
            })
        })
    };
    let on_delete = {
        let group_id = group_id.clone();
        action_callback(&controller, move |_: MouseEvent| {
            Some(GroupAction::Delete(group_id.clone()))
        })
    };
    let on_remove = {
        let controller = controller.clone();
        Callback::from(move |device_id: String| {
            controller.group_action(GroupAction::RemoveMember(device_id));
        })
    };
    let album = panel.album.clone().unwrap_or_default();

    html! {
        <div id="group-details">
            <h2>
                {"Group: "}
                <input
                    type="text"
                    class="group-name"
                    data-group-id={group_id.clone()}
                    value={panel.name.clone()}
                    oninput={on_name}
                />
            </h2>
            <div class="group-album">
                <label for="group-album">{"Album:"}</label>
                <select id="group-album" data-group-id={group_id.clone()} onchange={on_album}>
                    <option value="" selected={album.is_empty()}>{"Select an album"}</option>
                    { for panel.albums.iter().map(|entry| html! {
                        <option value={entry.id.clone()} selected={entry.id == album}>
                            {entry.album_name.clone()}
                        </option>
                    }) }
                </select>
                <TrackingInfo />
            </div>
            <label for="group-random">{"Random Order:"}</label>
            <input
                type="checkbox"
                id="group-random"
                data-group-id={group_id.clone()}
                checked={panel.random}
                onchange={on_random}
            />
            <button id="delete-group" data-group-id={group_id.clone()} onclick={on_delete}>
                {"Delete Group"}
            </button>
            <div class="group-devices">
                <h3>{"Devices in Group"}</h3>
                <DropList id="group-devices" target={DropTarget::Group(group_id.clone())}>
                    { for panel.members.iter().map(|member| {
                        let row = DeviceRow::new(&member.device_id, &member.device);
                        html! {
                            <DeviceItem
                                key={row.id.clone()}
                                device_id={row.id.clone()}
                                label={row.label.clone()}
                                info={row.info}
                                on_remove={Some(on_remove.clone())}
                            />
                        }
                    }) }
                </DropList>
            </div>
        </div>
    }
}

/// Create-group modal.
#[function_component(CreateGroupModal)]
pub(crate) fn create_group_modal() -> Html {
    let controller = use_context::<Controller>();
    let modal = use_selector(|store: &AppStore| store.groups.modal.clone());
    let Some(controller) = controller else {
        return html! {};
    };
    if !modal.open {
        return html! {};
    }
    let oninput = action_callback(&controller, |event: InputEvent| {
        let input = event.target_dyn_into::<HtmlInputElement>()?;
        Some(GroupAction::ModalInput(input.value()))
    });
    let onkeydown = action_callback(&controller, |event: KeyboardEvent| {
        (event.key() == "Enter").then_some(GroupAction::ConfirmCreate)
    });
    let on_cancel = action_callback(&controller, |_: MouseEvent| Some(GroupAction::CloseModal));
    let on_add = action_callback(&controller, |_: MouseEvent| Some(GroupAction::ConfirmCreate));

    html! {
        <div class="modal" style="display: block">
            <div class="modal-content">
                <h3>{"Add New Group"}</h3>
                <input
                    type="text"
                    id="group-name-input"
                    placeholder="Enter group name"
                    value={modal.name.clone()}
                    {oninput}
                    {onkeydown}
                />
                <div class="modal-buttons">
                    <button onclick={on_cancel}>{"Cancel"}</button>
                    <button onclick={on_add}>{"Add"}</button>
                </div>
            </div>
        </div>
    }
}

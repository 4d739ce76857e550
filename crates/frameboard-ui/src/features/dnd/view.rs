//! Droppable device list.

use web_sys::DragEvent;
use yew::prelude::*;
use yewdux::prelude::use_selector;

use crate::app::controller::Controller;
use crate::core::store::AppStore;
use crate::features::dnd::logic::{DRAG_MIME, DropTarget};

#[derive(Properties, PartialEq)]
pub(crate) struct DropListProps {
    pub id: AttrValue,
    pub target: DropTarget,
    #[prop_or_default]
    pub children: Children,
}

/// `<ul>` accepting dropped device rows.
#[function_component(DropList)]
pub(crate) fn drop_list(props: &DropListProps) -> Html {
    let controller = use_context::<Controller>();
    let over = {
        let target = props.target.clone();
        use_selector(move |store: &AppStore| store.drag.is_over(&target))
    };
    let Some(controller) = controller else {
        return html! {};
    };

    let ondragover = {
        let controller = controller.clone();
        let target = props.target.clone();
        let over = *over;
        Callback::from(move |event: DragEvent| {
            event.prevent_default();
            if !over {
                controller.drag_over(target.clone());
            }
        })
    };
    let ondragleave = {
        let controller = controller.clone();
        let target = props.target.clone();
        Callback::from(move |_: DragEvent| controller.drag_leave(&target))
    };
    let ondrop = {
        let target = props.target.clone();
        Callback::from(move |event: DragEvent| {
            event.prevent_default();
            let payload = event
                .data_transfer()
                .and_then(|transfer| transfer.get_data(DRAG_MIME).ok());
            controller.drop_device(payload, target.clone());
        })
    };
    let group_id = match &props.target {
        DropTarget::Group(id) => Some(AttrValue::from(id.clone())),
        DropTarget::Unassigned => None,
    };

    html! {
        <ul
            id={props.id.clone()}
            class={classes!("droppable", over.then_some("drag-over"))}
            data-group-id={group_id}
            {ondragover}
            {ondragleave}
            {ondrop}
        >
            { for props.children.iter() }
        </ul>
    }
}

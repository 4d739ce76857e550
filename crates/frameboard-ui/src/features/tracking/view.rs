//! Tracking block inside the group panel.

use yew::prelude::*;
use yewdux::prelude::use_selector;

use crate::app::controller::Controller;
use crate::core::store::AppStore;

#[function_component(TrackingInfo)]
pub(crate) fn tracking_info() -> Html {
    let controller = use_context::<Controller>();
    let tracking = use_selector(|store: &AppStore| store.tracking.clone());
    let (Some(controller), Some(view)) = (controller, (*tracking).clone()) else {
        return html! {
            <div class="group-album-info">
                <p>{"Tracking status will appear here when an album is selected"}</p>
            </div>
        };
    };
    let loaded = view.counts.is_some();
    let onclick = {
        let target = view.target.clone();
        Callback::from(move |_: MouseEvent| controller.reset_tracking(target.clone()))
    };

    html! {
        <div class="group-album-info">
            <p>{view.label()}</p>
            if loaded {
                <button class="reset-tracking" {onclick}>{"Reset Tracking"}</button>
            }
        </div>
    }
}

//! Immich status panel and settings inputs.

use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::use_selector;

use crate::app::controller::Controller;
use crate::core::store::AppStore;
use crate::features::immich::logic::{SettingField, format_setting};

#[function_component(ImmichPanel)]
pub(crate) fn immich_panel() -> Html {
    let controller = use_context::<Controller>();
    let immich = use_selector(|store: &AppStore| store.immich.clone());
    let Some(controller) = controller else {
        return html! {};
    };

    html! {
        <section class="immich-panel">
            <h2>{"Immich"}</h2>
            <p id="immich-server">{"Server: "}<span>{immich.server_label().to_string()}</span></p>
            <p id="immich-connection">
                {"Status: "}
                <span class={immich.connection_class()}>{immich.connection_label()}</span>
            </p>
            <p id="immich-albums">{"Albums: "}<span>{immich.album_count().to_string()}</span></p>
            <div class="immich-settings">
                { for SettingField::all().into_iter().map(|field| {
                    let controller = controller.clone();
                    let onchange = Callback::from(move |event: Event| {
                        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                            controller.update_setting(field, input.value());
                        }
                    });
                    html! {
                        <div class="setting" key={field.input_id()}>
                            <label for={field.input_id()}>{field.label()}</label>
                            <input
                                key={immich.revision.to_string()}
                                type="number"
                                id={field.input_id()}
                                step={field.step()}
                                value={format_setting(field.value_in(&immich.settings))}
                                {onchange}
                            />
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}

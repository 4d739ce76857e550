//! Device info popup.
//!
//! # Design
//! - Timestamps go through the browser locale; unparsable ones fall back to
//!   the fixed formatter.

use js_sys::Date;
use wasm_bindgen::JsValue;
use yew::prelude::*;
use yewdux::prelude::use_selector;

use crate::core::logic::format_timestamp;
use crate::core::store::AppStore;

fn locale_timestamp(raw: Option<&str>) -> String {
    let Some(value) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return format_timestamp(raw);
    };
    let date = Date::new(&JsValue::from_str(value));
    if date.get_time().is_nan() {
        return format_timestamp(raw);
    }
    date.to_locale_string("default", &JsValue::UNDEFINED)
        .as_string()
        .unwrap_or_else(|| format_timestamp(raw))
}

#[function_component(DeviceInfoPopup)]
pub(crate) fn device_info_popup() -> Html {
    let popup = use_selector(|store: &AppStore| store.popup.clone());
    let fields = (*popup)
        .as_ref()
        .map(|info| info.fields(locale_timestamp))
        .unwrap_or_default();

    html! {
        <div id="device-info" class={classes!(popup.is_some().then_some("active"))}>
            <div id="info-content">
                { for fields.into_iter().map(|(label, value)| html! {
                    <p><strong>{format!("{label}:")}</strong>{" "}{value}</p>
                }) }
            </div>
        </div>
    }
}

//! Push channel connection badge.

use yew::prelude::*;
use yewdux::prelude::use_selector;

use crate::core::events::ChannelState;
use crate::core::store::AppStore;

/// Push channel status badge.
#[function_component(ChannelBadge)]
pub(crate) fn channel_badge() -> Html {
    let state = use_selector(|store: &AppStore| store.channel);
    let title = match *state {
        ChannelState::Disconnected { retry_in_ms } => {
            format!("Reconnecting in {}s", retry_in_ms / 1_000)
        }
        other => other.label().to_string(),
    };

    html! {
        <span class={classes!("channel-badge", state.css_class())} title={title}>
            {state.label()}
        </span>
    }
}

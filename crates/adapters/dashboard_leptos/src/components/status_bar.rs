//! System status strip: connectivity dot and uptime counter.

use leptos::prelude::*;

use crate::view::use_view;

#[component]
pub fn StatusBar() -> impl IntoView {
    let view = use_view();
    let connectivity = view.connectivity;
    let uptime = view.uptime;

    view! {
        <div class="status-bar">
            <span
                class="status-indicator"
                style:background=move || connectivity.get().color()
            ></span>
            <span class="status-text">{move || connectivity.get().label()}</span>
            <span class="uptime">"Uptime: " {move || uptime.get().to_string()}</span>
        </div>
    }
}

//! Control bar: refresh, discovery and shutdown.

use leptos::prelude::*;

use crate::use_dashboard;

const SHUTDOWN_PROMPT: &str =
    "Are you sure you want to shut the system down?\n\nAll connections will be dropped.";

fn confirm_shutdown() -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(SHUTDOWN_PROMPT).ok())
        .unwrap_or(false)
}

fn close_window() {
    if let Some(window) = web_sys::window() {
        let _ = window.close();
    }
}

#[component]
pub fn Controls() -> impl IntoView {
    let dashboard = use_dashboard();

    let refresh = move |_| dashboard.spawn(|c| async move { c.refresh().await });
    let discover = move |_| dashboard.spawn(|c| async move { c.discover().await });
    let shutdown = move |_| {
        if confirm_shutdown() {
            dashboard.spawn(|c| async move {
                c.shutdown().await;
                close_window();
            });
        }
    };

    view! {
        <nav class="controls">
            <button class="btn btn-primary" on:click=refresh>"\u{1f504} Refresh"</button>
            <button class="btn btn-success" on:click=discover>"\u{1f50d} Discover devices"</button>
            <button class="btn btn-danger" on:click=shutdown>"\u{23fb} Shut down"</button>
        </nav>
    }
}

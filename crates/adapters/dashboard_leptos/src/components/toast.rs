//! Toast stack rendering the controller's notifications.

use leptos::prelude::*;

use crate::use_dashboard;
use crate::view::use_view;

/// Renders visible notifications oldest first, each with a close button.
///
/// Removal after the timeout is driven by the controller; this component
/// only mirrors the notification signal.
#[component]
pub fn Toasts() -> impl IntoView {
    let notifications = use_view().notifications;
    let dashboard = use_dashboard();

    view! {
        <div class="toast-container">
            <For
                each=move || notifications.get()
                key=|notification| notification.id
                children=move |notification| {
                    let id = notification.id;
                    let class = format!("toast toast-{}", notification.severity.as_str());
                    view! {
                        <div class=class>
                            <button class="toast-dismiss" on:click=move |_| dashboard.dismiss(id)>
                                "\u{00D7}"
                            </button>
                            {notification.message}
                        </div>
                    }
                }
            />
        </div>
    }
}

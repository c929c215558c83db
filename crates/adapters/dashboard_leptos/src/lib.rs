//! # espdash-dashboard
//!
//! Leptos CSR front-end for the ESP device dashboard. Implements the
//! `espdash-app` ports on top of `gloo-net`, `gloo-timers` and Leptos signals
//! and lays the view-models out as HTML.

use std::future::Future;
use std::rc::Rc;

use espdash_app::services::DashboardController;
use espdash_domain::notification::NotificationId;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub mod api;
mod components;
pub mod config;
pub mod logging;
pub mod scheduler;
pub mod view;

use api::HttpBackend;
use components::{ColorModal, ColorPicker, Controls, DeviceList, StatsPanel, StatusBar, Toasts};
use scheduler::BrowserScheduler;
use view::SignalView;

pub type Controller = DashboardController<HttpBackend, SignalView, BrowserScheduler>;

/// Handle to the controller, shared through Leptos context.
///
/// Empty until `/dashboard.toml` has been loaded and the controller started.
#[derive(Clone, Copy)]
pub struct Dashboard {
    controller: StoredValue<Option<Rc<Controller>>, LocalStorage>,
}

impl Dashboard {
    /// Run an async controller operation on the event loop.
    pub fn spawn<F, Fut>(self, action: F)
    where
        F: FnOnce(Rc<Controller>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        match self.controller.get_value() {
            Some(controller) => spawn_local(action(controller)),
            None => tracing::warn!("dashboard is still starting, action ignored"),
        }
    }

    pub fn dismiss(self, id: NotificationId) {
        if let Some(controller) = self.controller.get_value() {
            controller.dismiss_notification(id);
        }
    }
}

/// Access the controller handle from Leptos context.
pub fn use_dashboard() -> Dashboard {
    expect_context::<Dashboard>()
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    let view = SignalView::new();
    let dashboard = Dashboard {
        controller: StoredValue::new_local(None),
    };
    provide_context(view);
    provide_context(dashboard);
    provide_context(ColorPicker::new());

    spawn_local(async move {
        let config = config::load().await;
        logging::apply(&config);
        let backend = HttpBackend::new(&config);
        let controller = DashboardController::new(backend, view, BrowserScheduler, config);
        controller.initialize();
        dashboard.controller.set_value(Some(controller));
    });

    view! {
        <header class="header">
            <h1>"\u{1f3e0} ESP Device Manager"</h1>
            <StatusBar/>
        </header>
        <main>
            <Controls/>
            <StatsPanel/>
            <DeviceList/>
        </main>
        <ColorModal/>
        <Toasts/>
    }
}

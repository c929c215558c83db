//! [`DashboardView`] backed by Leptos signals.

use espdash_app::ports::DashboardView;
use espdash_app::render::{DeviceListView, StatsView};
use espdash_domain::notification::{Notification, NotificationId};
use espdash_domain::system::{Connectivity, Uptime};
use leptos::prelude::*;

/// One signal per page region. Components read them; the controller writes.
#[derive(Debug, Clone, Copy)]
pub struct SignalView {
    /// `None` until the first successful poll.
    pub devices: RwSignal<Option<DeviceListView>>,
    pub stats: RwSignal<StatsView>,
    pub connectivity: RwSignal<Connectivity>,
    pub uptime: RwSignal<Uptime>,
    pub notifications: RwSignal<Vec<Notification>>,
}

impl SignalView {
    pub fn new() -> Self {
        Self {
            devices: RwSignal::new(None),
            stats: RwSignal::new(StatsView::default()),
            connectivity: RwSignal::new(Connectivity::Degraded),
            uptime: RwSignal::new(Uptime::default()),
            notifications: RwSignal::new(Vec::new()),
        }
    }
}

impl Default for SignalView {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardView for SignalView {
    fn show_devices(&self, devices: DeviceListView) {
        self.devices.set(Some(devices));
    }

    fn show_stats(&self, stats: StatsView) {
        self.stats.set(stats);
    }

    fn show_connectivity(&self, connectivity: Connectivity) {
        self.connectivity.set(connectivity);
    }

    fn show_uptime(&self, uptime: Uptime) {
        self.uptime.set(uptime);
    }

    fn show_notification(&self, notification: Notification) {
        self.notifications.update(|list| list.push(notification));
    }

    fn remove_notification(&self, id: NotificationId) {
        self.notifications.update(|list| list.retain(|n| n.id != id));
    }
}

/// Access the page signals from Leptos context.
pub fn use_view() -> SignalView {
    expect_context::<SignalView>()
}

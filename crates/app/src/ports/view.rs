//! View port: where the controller writes what the page should show.

use espdash_domain::notification::{Notification, NotificationId};
use espdash_domain::system::{Connectivity, Uptime};

use crate::render::{DeviceListView, StatsView};

/// Sink for everything the dashboard displays.
///
/// Each method replaces the corresponding region of the page wholesale.
/// Implementations are cheap handles (signals, shared buffers) and are
/// cloned into scheduled tasks.
pub trait DashboardView: Clone + 'static {
    fn show_devices(&self, devices: DeviceListView);

    fn show_stats(&self, stats: StatsView);

    fn show_connectivity(&self, connectivity: Connectivity);

    fn show_uptime(&self, uptime: Uptime);

    fn show_notification(&self, notification: Notification);

    /// Remove a notification. Unknown ids are ignored.
    fn remove_notification(&self, id: NotificationId);
}

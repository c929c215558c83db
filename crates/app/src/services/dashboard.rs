//! Dashboard controller: polling, rendering and command relay.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use espdash_domain::api::{ActionResponse, CommandRequest};
use espdash_domain::color::RgbColor;
use espdash_domain::command::DeviceCommand;
use espdash_domain::notification::{NotificationId, Severity};
use espdash_domain::system::SystemStatus;

use crate::config::DashboardConfig;
use crate::notifications::NotificationCenter;
use crate::ports::{DashboardView, DeviceBackend, Scheduler};
use crate::render::{render, render_stats};

/// The uptime counter has one-second resolution.
const UPTIME_TICK: Duration = Duration::from_secs(1);

/// Orders overlapping device polls so the last one issued wins.
///
/// Each poll takes a ticket before its request; a response is applied only
/// if no later ticket has been applied already.
#[derive(Debug, Default)]
struct PollSequence {
    issued: Cell<u64>,
    applied: Cell<u64>,
}

impl PollSequence {
    fn issue(&self) -> u64 {
        let ticket = self.issued.get() + 1;
        self.issued.set(ticket);
        ticket
    }

    fn try_apply(&self, ticket: u64) -> bool {
        if ticket > self.applied.get() {
            self.applied.set(ticket);
            true
        } else {
            false
        }
    }
}

/// Owns the dashboard's state and drives the page through the ports.
///
/// The controller lives on a single thread behind an [`Rc`]; scheduled tasks
/// hold clones of it. Interior state is only borrowed between `.await`
/// points, never across them.
pub struct DashboardController<B, V, S> {
    backend: B,
    view: V,
    scheduler: S,
    config: DashboardConfig,
    status: Cell<SystemStatus>,
    notifications: Rc<RefCell<NotificationCenter>>,
    polls: PollSequence,
}

impl<B, V, S> DashboardController<B, V, S>
where
    B: DeviceBackend + 'static,
    V: DashboardView,
    S: Scheduler,
{
    /// Create a controller. Nothing is shown or fetched until
    /// [`initialize`](Self::initialize).
    #[must_use]
    pub fn new(backend: B, view: V, scheduler: S, config: DashboardConfig) -> Rc<Self> {
        let notifications = NotificationCenter::new(config.max_notifications);
        Rc::new(Self {
            backend,
            view,
            scheduler,
            config,
            status: Cell::new(SystemStatus::default()),
            notifications: Rc::new(RefCell::new(notifications)),
            polls: PollSequence::default(),
        })
    }

    /// Paint the initial status, then start the first load, the uptime
    /// ticker and the periodic poll.
    ///
    /// Polls are started on a fixed cadence and never wait for the previous
    /// one to finish.
    pub fn initialize(self: &Rc<Self>) {
        tracing::info!(
            poll_interval_ms = self.config.poll_interval_ms,
            api_base = %self.config.api_base,
            "starting dashboard"
        );
        let status = self.status.get();
        self.view.show_connectivity(status.connectivity());
        self.view.show_uptime(status.uptime);

        let this = Rc::clone(self);
        self.scheduler.spawn(async move { this.load_devices().await });

        let this = Rc::clone(self);
        self.scheduler.spawn(async move {
            loop {
                this.scheduler.sleep(UPTIME_TICK).await;
                this.tick_uptime();
            }
        });

        let this = Rc::clone(self);
        self.scheduler.spawn(async move {
            loop {
                this.scheduler.sleep(this.config.poll_interval()).await;
                let poll = Rc::clone(&this);
                this.scheduler.spawn(async move { poll.load_devices().await });
            }
        });
    }

    /// Fetch the device snapshot and repaint the list, stats and
    /// connectivity indicator.
    ///
    /// A transport or decode failure marks MQTT as down and keeps the
    /// previous list on screen. A response superseded by a later poll is
    /// dropped.
    #[tracing::instrument(skip_all)]
    pub async fn load_devices(&self) {
        let ticket = self.polls.issue();
        let result = self.backend.fetch_devices().await;
        if !self.polls.try_apply(ticket) {
            tracing::debug!(ticket, "discarding superseded poll response");
            return;
        }

        match result {
            Ok(response) if response.status.is_success() => {
                tracing::debug!(devices = response.devices.len(), "devices loaded");
                self.view
                    .show_devices(render(&response.devices, self.scheduler.now()));
                self.view.show_stats(render_stats(&response.stats));
                self.set_mqtt(true);
            }
            Ok(response) => {
                tracing::warn!(
                    status = response.status.as_str(),
                    message = response.message.as_deref().unwrap_or_default(),
                    "backend rejected device listing"
                );
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load devices");
                self.set_mqtt(false);
            }
        }
        self.view
            .show_connectivity(self.status.get().connectivity());
    }

    /// Relay a command to one device and report the outcome.
    #[tracing::instrument(skip(self))]
    pub async fn send_command(&self, device_id: &str, command: DeviceCommand) {
        let request = CommandRequest::from(&command);
        match self.backend.send_command(device_id, &request).await {
            Ok(response) => {
                self.notify_response(&response);
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to send command");
                self.notify("Failed to send command", Severity::Error);
            }
        }
    }

    /// Apply a color picked in the color dialog.
    pub async fn set_color(&self, device_id: &str, color: RgbColor) {
        self.send_command(device_id, DeviceCommand::SetColor(color))
            .await;
    }

    /// Clear a pressed action button, then reload the list.
    #[tracing::instrument(skip(self))]
    pub async fn reset_button(&self, device_id: &str) {
        match self.backend.reset_button(device_id).await {
            Ok(response) => {
                self.notify_response(&response);
                self.load_devices().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to reset button");
                self.notify("Failed to reset button", Severity::Error);
            }
        }
    }

    /// Ask the backend to mix the controllers' colors, then reload the list.
    #[tracing::instrument(skip(self))]
    pub async fn mix_colors(&self) {
        match self.backend.mix_colors().await {
            Ok(response) => {
                self.notify_response(&response);
                self.load_devices().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to mix colors");
                self.notify("Failed to mix colors", Severity::Error);
            }
        }
    }

    /// Manual reload triggered from the control bar.
    pub async fn refresh(&self) {
        self.notify("Refreshing devices\u{2026}", Severity::Info);
        self.load_devices().await;
    }

    /// Start a device discovery on the backend, then refresh.
    #[tracing::instrument(skip(self))]
    pub async fn discover(&self) {
        self.notify("Searching for devices\u{2026}", Severity::Info);
        match self.backend.discover().await {
            Ok(response) if response.status.is_success() => {
                self.notify("Device discovery started", Severity::Success);
            }
            Ok(response) => {
                tracing::warn!(status = response.status.as_str(), "discovery rejected");
                self.notify_response(&response);
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to start discovery");
                self.notify("Device discovery failed", Severity::Error);
            }
        }
        self.refresh().await;
    }

    /// Ask the backend to stop.
    ///
    /// The backend may go away before answering, so a failed request is
    /// only logged and the warning is shown either way.
    #[tracing::instrument(skip(self))]
    pub async fn shutdown(&self) {
        if let Err(err) = self.backend.shutdown().await {
            tracing::warn!(error = %err, "shutdown request did not complete");
        }
        self.notify("System is shutting down\u{2026}", Severity::Warning);
    }

    /// Show a transient notification and schedule its removal.
    ///
    /// Notifications stack oldest first; when the configured cap is reached
    /// the oldest ones are removed immediately.
    pub fn notify(&self, message: impl Into<String>, severity: Severity) -> NotificationId {
        let (notification, evicted) = self
            .notifications
            .borrow_mut()
            .push(message.into(), severity);
        for id in evicted {
            self.view.remove_notification(id);
        }
        let id = notification.id;
        tracing::debug!(%id, severity = severity.as_str(), message = %notification.message, "notify");
        self.view.show_notification(notification);

        let expiry = self.scheduler.sleep(self.config.notification_timeout());
        let notifications = Rc::clone(&self.notifications);
        let view = self.view.clone();
        self.scheduler.spawn(async move {
            expiry.await;
            let removed = notifications.borrow_mut().dismiss(id);
            if removed {
                view.remove_notification(id);
            }
        });
        id
    }

    /// Remove a notification before its timer fires.
    pub fn dismiss_notification(&self, id: NotificationId) {
        let removed = self.notifications.borrow_mut().dismiss(id);
        if removed {
            self.view.remove_notification(id);
        }
    }

    /// Advance the uptime counter by one second and repaint it.
    pub fn tick_uptime(&self) {
        let mut status = self.status.get();
        status.uptime.tick();
        self.status.set(status);
        self.view.show_uptime(status.uptime);
    }

    /// Current system status.
    #[must_use]
    pub fn status(&self) -> SystemStatus {
        self.status.get()
    }

    fn set_mqtt(&self, connected: bool) {
        let mut status = self.status.get();
        status.mqtt = connected;
        self.status.set(status);
    }

    fn notify_response(&self, response: &ActionResponse) -> NotificationId {
        self.notify(response.display_message(), response.status.severity())
    }
}

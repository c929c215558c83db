//! In-memory port implementations shared by the controller tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use chrono::DateTime;
use espdash_domain::api::{ActionResponse, CommandRequest, DevicesResponse, ResponseStatus};
use espdash_domain::device::{ConnectionStatus, Device, DeviceType};
use espdash_domain::notification::{Notification, NotificationId};
use espdash_domain::stats::Stats;
use espdash_domain::system::{Connectivity, Uptime};
use espdash_domain::time::Timestamp;

use crate::ports::{BackendError, DashboardView, DeviceBackend, Scheduler};
use crate::render::{DeviceListView, StatsView};

pub const NOW: i64 = 1_700_000_000;

pub fn now() -> Timestamp {
    DateTime::from_timestamp(NOW, 0).unwrap()
}

#[allow(clippy::cast_precision_loss)]
pub fn device(id: &str) -> Device {
    Device {
        id: id.to_string(),
        kind: DeviceType::Sensor,
        status: ConnectionStatus::Connected,
        ip: "10.0.0.1".to_string(),
        last_seen: NOW as f64,
        ..Device::default()
    }
}

pub fn snapshot(ids: &[&str]) -> DevicesResponse {
    let devices: Vec<Device> = ids.iter().map(|id| device(id)).collect();
    let total = u32::try_from(devices.len()).unwrap();
    DevicesResponse {
        status: ResponseStatus::Success,
        stats: Stats {
            total,
            online: total,
            ..Stats::default()
        },
        devices,
        message: None,
        timestamp: None,
    }
}

pub fn action(status: ResponseStatus, message: &str) -> ActionResponse {
    ActionResponse {
        status,
        message: Some(message.to_string()),
    }
}

pub fn transport_error() -> BackendError {
    BackendError::Transport("connection refused".to_string())
}

#[derive(Default)]
struct FakeBackendState {
    devices: VecDeque<(Duration, Result<DevicesResponse, BackendError>)>,
    actions: VecDeque<Result<ActionResponse, BackendError>>,
    shutdown: Option<BackendError>,
    calls: Vec<String>,
}

/// Backend answering from scripted queues and recording every call.
///
/// An exhausted devices queue answers with a transport error; an exhausted
/// actions queue answers with a generic success.
#[derive(Clone, Default)]
pub struct FakeBackend {
    state: Rc<RefCell<FakeBackendState>>,
}

impl FakeBackend {
    pub fn push_devices(&self, result: Result<DevicesResponse, BackendError>) {
        self.push_devices_after(Duration::ZERO, result);
    }

    pub fn push_devices_after(
        &self,
        delay: Duration,
        result: Result<DevicesResponse, BackendError>,
    ) {
        self.state.borrow_mut().devices.push_back((delay, result));
    }

    pub fn push_action(&self, result: Result<ActionResponse, BackendError>) {
        self.state.borrow_mut().actions.push_back(result);
    }

    pub fn fail_shutdown(&self) {
        self.state.borrow_mut().shutdown = Some(transport_error());
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.borrow().calls.clone()
    }

    pub fn count(&self, call: &str) -> usize {
        self.state.borrow().calls.iter().filter(|c| *c == call).count()
    }

    fn record(&self, call: String) {
        self.state.borrow_mut().calls.push(call);
    }

    fn next_action(&self, call: String) -> Result<ActionResponse, BackendError> {
        self.record(call);
        self.state
            .borrow_mut()
            .actions
            .pop_front()
            .unwrap_or_else(|| Ok(action(ResponseStatus::Success, "ok")))
    }
}

impl DeviceBackend for FakeBackend {
    async fn fetch_devices(&self) -> Result<DevicesResponse, BackendError> {
        self.record("devices".to_string());
        let next = self.state.borrow_mut().devices.pop_front();
        let (delay, result) =
            next.unwrap_or_else(|| (Duration::ZERO, Err(transport_error())));
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        result
    }

    async fn send_command(
        &self,
        device_id: &str,
        request: &CommandRequest,
    ) -> Result<ActionResponse, BackendError> {
        self.next_action(format!("command {device_id} {}", request.command))
    }

    async fn reset_button(&self, device_id: &str) -> Result<ActionResponse, BackendError> {
        self.next_action(format!("reset {device_id}"))
    }

    async fn mix_colors(&self) -> Result<ActionResponse, BackendError> {
        self.next_action("mix".to_string())
    }

    async fn discover(&self) -> Result<ActionResponse, BackendError> {
        self.next_action("discover".to_string())
    }

    async fn shutdown(&self) -> Result<(), BackendError> {
        self.record("shutdown".to_string());
        match self.state.borrow_mut().shutdown.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Everything a [`RecordingView`] has been asked to show.
#[derive(Debug, Default)]
pub struct Recorded {
    pub devices: Vec<DeviceListView>,
    pub stats: Vec<StatsView>,
    pub connectivity: Vec<Connectivity>,
    pub uptime: Vec<Uptime>,
    /// Currently visible notifications, oldest first.
    pub notifications: Vec<Notification>,
    pub removed: Vec<NotificationId>,
}

#[derive(Clone, Default)]
pub struct RecordingView {
    recorded: Rc<RefCell<Recorded>>,
}

impl RecordingView {
    pub fn with<T>(&self, f: impl FnOnce(&Recorded) -> T) -> T {
        f(&self.recorded.borrow())
    }

    /// Ids of the cards currently on screen.
    pub fn card_ids(&self) -> Vec<String> {
        self.with(|r| {
            r.devices
                .last()
                .map(|list| list.cards().iter().map(|c| c.id.clone()).collect())
                .unwrap_or_default()
        })
    }

    pub fn connectivity(&self) -> Option<Connectivity> {
        self.with(|r| r.connectivity.last().copied())
    }

    pub fn messages(&self) -> Vec<String> {
        self.with(|r| r.notifications.iter().map(|n| n.message.clone()).collect())
    }
}

impl DashboardView for RecordingView {
    fn show_devices(&self, devices: DeviceListView) {
        self.recorded.borrow_mut().devices.push(devices);
    }

    fn show_stats(&self, stats: StatsView) {
        self.recorded.borrow_mut().stats.push(stats);
    }

    fn show_connectivity(&self, connectivity: Connectivity) {
        self.recorded.borrow_mut().connectivity.push(connectivity);
    }

    fn show_uptime(&self, uptime: Uptime) {
        self.recorded.borrow_mut().uptime.push(uptime);
    }

    fn show_notification(&self, notification: Notification) {
        self.recorded.borrow_mut().notifications.push(notification);
    }

    fn remove_notification(&self, id: NotificationId) {
        let mut recorded = self.recorded.borrow_mut();
        recorded.notifications.retain(|n| n.id != id);
        recorded.removed.push(id);
    }
}

/// Scheduler backed by the current tokio `LocalSet` and (paused) clock.
#[derive(Clone)]
pub struct TokioScheduler {
    now: Timestamp,
}

impl Default for TokioScheduler {
    fn default() -> Self {
        Self { now: now() }
    }
}

impl Scheduler for TokioScheduler {
    fn spawn(&self, task: impl Future<Output = ()> + 'static) {
        let _ = tokio::task::spawn_local(task);
    }

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + 'static {
        tokio::time::sleep(duration)
    }

    fn now(&self) -> Timestamp {
        self.now
    }
}

/// Let every ready task run without advancing the paused clock noticeably.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(1)).await;
}

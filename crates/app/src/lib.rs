//! # espdash-app
//!
//! Application layer: the dashboard use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `DeviceBackend`: the device-management HTTP API
//!   - `DashboardView`: the page regions the dashboard paints
//!   - `Scheduler`: spawning, timers and the wall clock
//! - Provide the `DashboardController` use-case: polling, rendering,
//!   command relay and transient notifications
//! - Map backend snapshots to view-models (`render`) and load the
//!   dashboard configuration (`config`)
//!
//! ## Dependency rule
//! Depends on `espdash-domain` only (plus `toml` and `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod config;
pub mod notifications;
pub mod ports;
pub mod render;
pub mod services;

#[cfg(test)]
mod testing;

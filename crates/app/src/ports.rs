//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the dashboard core and the outside world:
//! the device-management API, the page, and the event loop. They are defined
//! here (in `app`) so that both the controller and the adapters can depend on
//! them without creating circular dependencies.

pub mod backend;
pub mod scheduler;
pub mod view;

pub use backend::{BackendError, DeviceBackend, Endpoint, Method};
pub use scheduler::Scheduler;
pub use view::DashboardView;

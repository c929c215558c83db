//! Scheduler port: the event loop the dashboard runs on.

use std::future::Future;
use std::time::Duration;

use espdash_domain::time::Timestamp;

/// Single-threaded cooperative scheduler.
///
/// In the browser this is `spawn_local` plus `setTimeout`; in tests it is a
/// tokio `LocalSet` with a paused clock.
pub trait Scheduler: Clone + 'static {
    /// Run `task` to completion in the background.
    fn spawn(&self, task: impl Future<Output = ()> + 'static);

    /// Resolve after `duration` has elapsed.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + 'static;

    /// Wall-clock time, used to bucket `last_seen` values.
    fn now(&self) -> Timestamp;
}

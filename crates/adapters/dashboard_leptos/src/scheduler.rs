//! Browser event loop: `spawn_local` and `setTimeout`.

use std::future::Future;
use std::time::Duration;

use espdash_app::config::MAX_TIMER_MS;
use espdash_app::ports::Scheduler;
use espdash_domain::time::{self, Timestamp};
use gloo_timers::future::TimeoutFuture;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn spawn(&self, task: impl Future<Output = ()> + 'static) {
        leptos::task::spawn_local(task);
    }

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + 'static {
        // The timer is armed here, not on first poll.
        TimeoutFuture::new(timer_millis(duration))
    }

    fn now(&self) -> Timestamp {
        time::now()
    }
}

/// Clamp to what `setTimeout` accepts; larger delays would fire at once.
fn timer_millis(duration: Duration) -> u32 {
    let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
    u32::try_from(millis.min(MAX_TIMER_MS)).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_pass_short_delays_through() {
        assert_eq!(timer_millis(Duration::from_secs(5)), 5_000);
    }

    #[test]
    fn should_clamp_delays_beyond_browser_timer_range() {
        assert_eq!(timer_millis(Duration::from_millis(3_000_000_000)), 2_147_483_647);
        assert_eq!(timer_millis(Duration::MAX), 2_147_483_647);
    }
}

//! Console logging for `tracing` events forwarded through the `log` facade.

use espdash_app::config::DashboardConfig;

/// Route panics and log records to the browser console.
///
/// Records are let through at `info` until the configuration is loaded.
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Trace).is_ok() {
        log::set_max_level(log::LevelFilter::Info);
    }
}

/// Apply the configured level.
pub fn apply(config: &DashboardConfig) {
    let level = config
        .log_level
        .trim()
        .parse()
        .unwrap_or(log::LevelFilter::Info);
    log::set_max_level(level);
}

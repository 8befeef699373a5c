use crate::render::progress::ProgressObserver;
use log::info;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Writes render progress with `info!`, at most once per interval.
pub struct TimeThrottledInfoLogger {
    interval: Duration,
    last_log_action: Mutex<Instant>,
}

impl TimeThrottledInfoLogger {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self { interval, last_log_action: Mutex::new(Instant::now()) }
    }

    /// Returns whether the message was written.
    pub(crate) fn do_write(&self, message: impl Into<String>, force: bool) -> bool {
        let Ok(mut last_log_action) = self.last_log_action.lock() else {
            return false;
        };
        let delta = last_log_action.elapsed();
        if false == force && delta <= self.interval {
            return false;
        }
        info!("{}", message.into());
        *last_log_action = Instant::now() - delta.saturating_sub(self.interval).min(self.interval);
        true
    }
}

impl ProgressObserver for TimeThrottledInfoLogger {
    fn on_progress(&self, completed: usize, total: usize) {
        let percent = if 0 == total { 100.0 } else { completed as f64 * 100.0 / total as f64 };
        let _ = self.do_write(format!("rendered {completed} of {total} pixels ({percent:.1}%)"), completed == total);
    }
}

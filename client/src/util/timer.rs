//! Repeating browser timers for the role rotator.
//!
//! Wraps `gloo_timers::callback::Interval`; cancelling the handle clears the
//! underlying `setInterval`.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::time::Duration;

use crate::state::roles::{Scheduler, TimerHandle};

/// `setInterval`-backed scheduler.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntervalScheduler;

/// Live browser interval.
#[cfg(feature = "hydrate")]
pub struct IntervalHandle(gloo_timers::callback::Interval);

/// Inert handle used when no browser timer exists.
#[cfg(not(feature = "hydrate"))]
pub struct IntervalHandle;

impl TimerHandle for IntervalHandle {
    fn cancel(self) {
        #[cfg(feature = "hydrate")]
        {
            drop(self.0.cancel());
        }
    }
}

impl Scheduler for IntervalScheduler {
    type Handle = IntervalHandle;

    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> IntervalHandle {
        #[cfg(feature = "hydrate")]
        {
            let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
            let mut tick = tick;
            IntervalHandle(gloo_timers::callback::Interval::new(millis, move || tick()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (period, tick);
            IntervalHandle
        }
    }
}

/// Wall-clock milliseconds, the time base for reveal timestamps.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

//! Rotating role label shown in the hero block.
//!
//! `RoleCycle` is the index arithmetic; `RoleRotator` is the repeating timer
//! that drives it. The timer is a scoped resource: `stop` cancels it and
//! dropping the rotator stops it too.

#[cfg(test)]
#[path = "roles_test.rs"]
mod roles_test;

use std::time::Duration;

/// Time between two label changes.
pub const DEFAULT_ROTATION_INTERVAL: Duration = Duration::from_millis(3000);

/// Label displayed when no roles were supplied.
pub const FALLBACK_ROLE: &str = "Software Developer";

/// Ordered role labels and the index of the one on display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoleCycle {
    roles: Vec<String>,
    index: usize,
}

impl RoleCycle {
    #[must_use]
    pub fn new(roles: Vec<String>) -> Self {
        Self { roles, index: 0 }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The label on display, or [`FALLBACK_ROLE`] for an empty cycle.
    #[must_use]
    pub fn current(&self) -> &str {
        self.roles.get(self.index).map_or(FALLBACK_ROLE, String::as_str)
    }

    /// The label on display keyed by its index. A view keyed on the first
    /// element remounts the label node on every change.
    #[must_use]
    pub fn keyed_current(&self) -> (usize, String) {
        (self.index, self.current().to_owned())
    }

    /// Whether advancing can ever change the label.
    #[must_use]
    pub fn is_rotating(&self) -> bool {
        self.roles.len() > 1
    }

    /// Step to the next label, wrapping after the last one.
    pub fn advance(&mut self) -> usize {
        if !self.roles.is_empty() {
            self.index = (self.index + 1) % self.roles.len();
        }
        self.index
    }
}

/// Cancellable handle to a repeating timer.
pub trait TimerHandle {
    fn cancel(self);
}

/// Source of repeating timers.
pub trait Scheduler {
    type Handle: TimerHandle;

    /// Invoke `tick` every `period` until the returned handle is cancelled.
    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> Self::Handle;
}

/// Owns the rotation timer for one hero block.
pub struct RoleRotator<H: TimerHandle> {
    interval: Duration,
    timer: Option<H>,
}

impl<H: TimerHandle> RoleRotator<H> {
    /// Start rotating `cycle` every `interval`, calling `on_tick` per step.
    ///
    /// No timer is scheduled when the cycle cannot rotate (zero or one role).
    pub fn start<S, F>(scheduler: &S, cycle: &RoleCycle, interval: Duration, on_tick: F) -> Self
    where
        S: Scheduler<Handle = H>,
        F: FnMut() + 'static,
    {
        let timer = if cycle.is_rotating() {
            Some(scheduler.every(interval, Box::new(on_tick)))
        } else {
            log::debug!("role rotation disabled for {} role(s)", cycle.len());
            None
        };
        Self { interval, timer }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Cancel the timer. Calling this again is a no-op.
    pub fn stop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }
}

impl<H: TimerHandle> Drop for RoleRotator<H> {
    fn drop(&mut self) {
        self.stop();
    }
}

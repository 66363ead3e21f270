//! Scroll-triggered reveal sequencing for content blocks.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every animated block starts hidden and flips to visible the first time
//! the viewport reports it as sufficiently visible. The visual interpolation
//! itself is CSS (`.reveal` → `.reveal--visible` with a `transition-delay`);
//! this module only decides when a block flips and which delay it carries.
//!
//! DESIGN
//! ======
//! - `RevealState` is the pending/revealed machine. It is `Copy` so it can
//!   sit in a signal.
//! - `Observation` owns the viewport registration for one block and releases
//!   it exactly once (explicitly or on drop).
//! - `RevealGroup` is one pending/revealed machine shared by a list of
//!   blocks. It records when the group entered and offsets each block by
//!   its index.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::time::Duration;

/// Fade duration used by section wrappers.
pub const SECTION_FADE: Duration = Duration::from_millis(600);

/// Offset between consecutive cards in a grid.
pub const CARD_STAGGER: Duration = Duration::from_millis(100);

/// Visible ratio required before the skills group starts its cascade.
pub const SKILLS_THRESHOLD: f64 = 0.2;

/// Hero entrance delays (role label, bio, actions, contact row).
pub const HERO_ROLE_DELAY: Duration = Duration::from_millis(300);
pub const HERO_BIO_DELAY: Duration = Duration::from_millis(500);
pub const HERO_ACTIONS_DELAY: Duration = Duration::from_millis(700);
pub const HERO_CONTACT_DELAY: Duration = Duration::from_millis(900);

/// Errors produced while registering a block with the viewport.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ObserveError {
    /// No viewport observer exists (SSR or unsupported platform).
    #[error("viewport observation unavailable")]
    Unavailable,

    /// The platform refused to create or attach the observer.
    #[error("viewport observer rejected target: {0}")]
    Rejected(String),
}

/// What flips a block from pending to revealed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealTrigger {
    /// Reveal as soon as the block is attached to the document.
    Mount,
    /// Reveal when the visible ratio reaches `threshold`.
    /// A threshold of `0.0` means any visible part.
    Viewport { threshold: f64 },
}

impl Default for RevealTrigger {
    fn default() -> Self {
        Self::Viewport { threshold: 0.0 }
    }
}

/// Per-block reveal settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    pub trigger: RevealTrigger,
    /// When false, a block that leaves the viewport entirely hides again.
    pub once: bool,
    /// Presentation delay applied after the transition fires.
    pub delay: Duration,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { trigger: RevealTrigger::default(), once: true, delay: Duration::ZERO }
    }
}

impl RevealConfig {
    #[must_use]
    pub fn on_mount(delay: Duration) -> Self {
        Self { trigger: RevealTrigger::Mount, delay, ..Self::default() }
    }

    #[must_use]
    pub fn in_view(threshold: f64) -> Self {
        Self { trigger: RevealTrigger::Viewport { threshold: threshold.clamp(0.0, 1.0) }, ..Self::default() }
    }

    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[must_use]
    pub fn repeating(mut self) -> Self {
        self.once = false;
        self
    }

    /// Threshold handed to the viewport observer, if one is needed.
    #[must_use]
    pub fn threshold(&self) -> Option<f64> {
        match self.trigger {
            RevealTrigger::Mount => None,
            RevealTrigger::Viewport { threshold } => Some(threshold),
        }
    }

    fn qualifies(&self, ratio: f64) -> bool {
        match self.trigger {
            RevealTrigger::Mount => false,
            RevealTrigger::Viewport { threshold } if threshold <= 0.0 => ratio > 0.0,
            RevealTrigger::Viewport { threshold } => ratio >= threshold,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealPhase {
    #[default]
    Pending,
    Revealed,
}

/// Reveal state machine for one block.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RevealState {
    config: RevealConfig,
    phase: RevealPhase,
}

impl RevealState {
    #[must_use]
    pub fn new(config: RevealConfig) -> Self {
        Self { config, phase: RevealPhase::Pending }
    }

    #[must_use]
    pub fn config(&self) -> RevealConfig {
        self.config
    }

    #[must_use]
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.phase == RevealPhase::Revealed
    }

    /// Whether the block still needs viewport notifications.
    #[must_use]
    pub fn wants_observation(&self) -> bool {
        match self.config.trigger {
            RevealTrigger::Mount => false,
            RevealTrigger::Viewport { .. } => !(self.config.once && self.is_revealed()),
        }
    }

    /// The block was attached to the document. Returns true on transition.
    pub fn mounted(&mut self) -> bool {
        if self.config.trigger == RevealTrigger::Mount && !self.is_revealed() {
            self.phase = RevealPhase::Revealed;
            return true;
        }
        false
    }

    /// Reveal without a notification, for blocks the platform cannot observe.
    pub fn force_reveal(&mut self) -> bool {
        let changed = !self.is_revealed();
        self.phase = RevealPhase::Revealed;
        changed
    }

    /// Feed one intersection notification. Returns true on transition.
    pub fn observe(&mut self, ratio: f64) -> bool {
        match self.phase {
            RevealPhase::Pending if self.config.qualifies(ratio) => {
                self.phase = RevealPhase::Revealed;
                true
            }
            RevealPhase::Revealed if !self.config.once && ratio <= 0.0 => {
                self.phase = RevealPhase::Pending;
                true
            }
            _ => false,
        }
    }
}

/// A live viewport registration.
pub trait ObservationHandle {
    /// Stop notifications. Must tolerate repeated calls.
    fn release(&mut self);
}

/// Platform capability that reports visibility ratios for a target.
pub trait ViewportObserver {
    type Target;
    type Handle: ObservationHandle;

    /// Register `target`; `on_entry` receives the visible ratio in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`ObserveError`] when the platform cannot observe the target.
    fn observe(
        &self,
        target: &Self::Target,
        threshold: f64,
        on_entry: Box<dyn FnMut(f64)>,
    ) -> Result<Self::Handle, ObserveError>;
}

/// Owns the viewport registration of one block.
pub struct Observation<H: ObservationHandle> {
    handle: Option<H>,
}

impl<H: ObservationHandle> Default for Observation<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H: ObservationHandle> Observation<H> {
    /// Register `target` with `observer`.
    ///
    /// When the platform refuses, the returned observation is inactive and
    /// the error is logged; callers should reveal the block directly.
    pub fn attach<O, F>(observer: &O, target: &O::Target, threshold: f64, on_entry: F) -> Self
    where
        O: ViewportObserver<Handle = H>,
        F: FnMut(f64) + 'static,
    {
        match observer.observe(target, threshold, Box::new(on_entry)) {
            Ok(handle) => Self { handle: Some(handle) },
            Err(err) => {
                log::debug!("reveal block not observed: {err}");
                Self { handle: None }
            }
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Release the registration. Releasing twice is a no-op.
    pub fn release(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.release();
        }
    }
}

impl<H: ObservationHandle> Drop for Observation<H> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Cascading reveal for `len` blocks sharing one trigger.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealGroup {
    state: RevealState,
    len: usize,
    stagger: Duration,
    entered_at_ms: Option<f64>,
}

impl RevealGroup {
    #[must_use]
    pub fn new(config: RevealConfig, len: usize, stagger: Duration) -> Self {
        Self { state: RevealState::new(config), len, stagger, entered_at_ms: None }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Threshold the shared viewport observer is registered with.
    #[must_use]
    pub fn threshold(&self) -> Option<f64> {
        self.state.config().threshold()
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.state.is_revealed()
    }

    #[must_use]
    pub fn wants_observation(&self) -> bool {
        !self.is_empty() && self.state.wants_observation()
    }

    /// Feed one intersection notification observed at `now_ms`.
    pub fn observe(&mut self, ratio: f64, now_ms: f64) -> bool {
        let changed = self.state.observe(ratio);
        if changed {
            self.entered_at_ms = self.state.is_revealed().then_some(now_ms);
        }
        changed
    }

    /// Reveal the whole group at `now_ms` without a notification.
    pub fn force_reveal(&mut self, now_ms: f64) -> bool {
        let changed = self.state.force_reveal();
        if changed {
            self.entered_at_ms = Some(now_ms);
        }
        changed
    }

    /// Offset of block `index` from the moment the group became visible.
    #[must_use]
    pub fn delay_for(&self, index: usize) -> Duration {
        stagger_delay(index, self.stagger)
    }

    /// Absolute reveal time of every block, empty while pending.
    #[must_use]
    pub fn reveal_times(&self) -> Vec<f64> {
        let Some(start) = self.entered_at_ms else {
            return Vec::new();
        };
        (0..self.len)
            .map(|index| start + duration_ms(self.delay_for(index)))
            .collect()
    }
}

/// `index × stagger`, saturating instead of overflowing.
#[must_use]
pub fn stagger_delay(index: usize, stagger: Duration) -> Duration {
    stagger.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

/// Delays for `count` blocks rendered in sequence. Zero blocks, zero delays.
#[must_use]
pub fn stagger_delays(count: usize, stagger: Duration) -> Vec<Duration> {
    (0..count).map(|index| stagger_delay(index, stagger)).collect()
}

/// Milliseconds as a float for timestamp arithmetic and CSS output.
#[must_use]
pub fn duration_ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

#![allow(clippy::float_cmp)]

use super::*;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

// =============================================================
// Fake viewport
// =============================================================

struct Registration {
    target: &'static str,
    threshold: f64,
    on_entry: Box<dyn FnMut(f64)>,
    released: Rc<Cell<usize>>,
}

#[derive(Clone, Default)]
struct FakeViewport {
    registrations: Rc<RefCell<Vec<Registration>>>,
    refuse: bool,
}

struct FakeHandle {
    released: Rc<Cell<usize>>,
}

impl ObservationHandle for FakeHandle {
    fn release(&mut self) {
        self.released.set(self.released.get() + 1);
    }
}

impl ViewportObserver for FakeViewport {
    type Target = &'static str;
    type Handle = FakeHandle;

    fn observe(
        &self,
        target: &&'static str,
        threshold: f64,
        on_entry: Box<dyn FnMut(f64)>,
    ) -> Result<FakeHandle, ObserveError> {
        if self.refuse {
            return Err(ObserveError::Unavailable);
        }
        let released = Rc::new(Cell::new(0));
        self.registrations.borrow_mut().push(Registration {
            target: *target,
            threshold,
            on_entry,
            released: Rc::clone(&released),
        });
        Ok(FakeHandle { released })
    }
}

impl FakeViewport {
    fn emit(&self, target: &str, ratio: f64) {
        for reg in self.registrations.borrow_mut().iter_mut() {
            if reg.target == target && reg.released.get() == 0 {
                (reg.on_entry)(ratio);
            }
        }
    }

    fn released_count(&self, target: &str) -> usize {
        self.registrations
            .borrow()
            .iter()
            .filter(|r| r.target == target)
            .map(|r| r.released.get())
            .sum()
    }
}

// =============================================================
// RevealConfig
// =============================================================

#[test]
fn default_config_reveals_once_on_any_visibility() {
    let config = RevealConfig::default();
    assert!(config.once);
    assert_eq!(config.threshold(), Some(0.0));
    assert_eq!(config.delay, Duration::ZERO);
}

#[test]
fn mount_config_needs_no_observer() {
    let config = RevealConfig::on_mount(HERO_BIO_DELAY);
    assert_eq!(config.threshold(), None);
    assert_eq!(config.delay, Duration::from_millis(500));
    assert!(!RevealState::new(config).wants_observation());
}

#[test]
fn in_view_clamps_threshold() {
    assert_eq!(RevealConfig::in_view(3.0).threshold(), Some(1.0));
    assert_eq!(RevealConfig::in_view(-1.0).threshold(), Some(0.0));
}

// =============================================================
// RevealState
// =============================================================

#[test]
fn state_starts_pending() {
    let state = RevealState::new(RevealConfig::default());
    assert_eq!(state.phase(), RevealPhase::Pending);
    assert!(!state.is_revealed());
}

#[test]
fn zero_ratio_does_not_reveal() {
    let mut state = RevealState::new(RevealConfig::default());
    assert!(!state.observe(0.0));
    assert!(!state.is_revealed());
}

#[test]
fn any_visible_part_reveals_with_default_threshold() {
    let mut state = RevealState::new(RevealConfig::default());
    assert!(state.observe(0.01));
    assert!(state.is_revealed());
}

#[test]
fn threshold_must_be_reached() {
    let mut state = RevealState::new(RevealConfig::in_view(SKILLS_THRESHOLD));
    assert!(!state.observe(0.1));
    assert!(state.observe(0.2));
}

#[test]
fn revealed_block_never_reverts() {
    let mut state = RevealState::new(RevealConfig::default());
    state.observe(0.5);
    for ratio in [0.0, 0.3, 0.0, 1.0, 0.0] {
        assert!(!state.observe(ratio));
        assert!(state.is_revealed());
    }
    assert!(!state.wants_observation());
}

#[test]
fn repeating_block_hides_after_leaving_viewport() {
    let mut state = RevealState::new(RevealConfig::default().repeating());
    assert!(state.observe(0.4));
    assert!(state.observe(0.0));
    assert_eq!(state.phase(), RevealPhase::Pending);
    assert!(state.observe(0.1));
    assert!(state.wants_observation());
}

#[test]
fn mount_trigger_reveals_on_attach_only() {
    let mut state = RevealState::new(RevealConfig::on_mount(Duration::ZERO));
    assert!(!state.observe(1.0));
    assert!(state.mounted());
    assert!(state.is_revealed());
    assert!(!state.mounted());
}

#[test]
fn mounted_is_noop_for_viewport_trigger() {
    let mut state = RevealState::new(RevealConfig::default());
    assert!(!state.mounted());
    assert!(!state.is_revealed());
}

#[test]
fn force_reveal_flips_once() {
    let mut state = RevealState::new(RevealConfig::in_view(0.5));
    assert!(state.force_reveal());
    assert!(!state.force_reveal());
    assert!(state.is_revealed());
}

// =============================================================
// Observation
// =============================================================

#[test]
fn observation_routes_entries_into_state() {
    let viewport = FakeViewport::default();
    let state = Rc::new(RefCell::new(RevealState::new(RevealConfig::default())));
    let for_entry = Rc::clone(&state);

    let observation = Observation::attach(&viewport, &"projects", 0.0, move |ratio| {
        for_entry.borrow_mut().observe(ratio);
    });
    assert!(observation.is_active());
    assert_eq!(viewport.registrations.borrow()[0].threshold, 0.0);

    viewport.emit("projects", 0.0);
    assert!(!state.borrow().is_revealed());
    viewport.emit("projects", 0.25);
    assert!(state.borrow().is_revealed());
}

#[test]
fn observation_release_is_idempotent() {
    let viewport = FakeViewport::default();
    let mut observation = Observation::attach(&viewport, &"card", 0.0, |_| {});

    observation.release();
    observation.release();
    drop(observation);

    assert_eq!(viewport.released_count("card"), 1);
}

#[test]
fn observation_releases_on_drop() {
    let viewport = FakeViewport::default();
    {
        let _observation = Observation::attach(&viewport, &"skills", 0.2, |_| {});
        assert_eq!(viewport.released_count("skills"), 0);
    }
    assert_eq!(viewport.released_count("skills"), 1);
}

#[test]
fn refused_observation_is_inactive() {
    let viewport = FakeViewport { refuse: true, ..FakeViewport::default() };
    let mut observation = Observation::attach(&viewport, &"hero", 0.0, |_| {});
    assert!(!observation.is_active());
    observation.release();
}

#[test]
fn default_observation_is_inactive() {
    let mut observation = Observation::<FakeHandle>::default();
    assert!(!observation.is_active());
    observation.release();
}

// =============================================================
// Stagger
// =============================================================

#[test]
fn group_produces_distinct_staggered_times() {
    let mut group = RevealGroup::new(RevealConfig::default(), 4, CARD_STAGGER);
    assert!(group.reveal_times().is_empty());

    assert!(group.observe(0.5, 1_000.0));
    let times = group.reveal_times();
    assert_eq!(times, vec![1_000.0, 1_100.0, 1_200.0, 1_300.0]);

    for pair in times.windows(2) {
        assert!((pair[1] - pair[0] - 100.0).abs() < 1e-9);
    }
}

#[test]
fn group_keeps_first_entry_time() {
    let mut group = RevealGroup::new(RevealConfig::default(), 2, CARD_STAGGER);
    group.observe(0.5, 10.0);
    group.observe(0.0, 20.0);
    group.observe(0.9, 30.0);
    assert_eq!(group.reveal_times(), vec![10.0, 110.0]);
}

#[test]
fn pending_group_has_no_reveal_times() {
    let mut group = RevealGroup::new(RevealConfig::in_view(SKILLS_THRESHOLD), 2, CARD_STAGGER);
    assert!(!group.observe(0.1, 5.0));
    assert!(group.reveal_times().is_empty());
    assert!(group.wants_observation());
}

#[test]
fn revealed_group_stops_observing() {
    let mut group = RevealGroup::new(RevealConfig::in_view(SKILLS_THRESHOLD), 3, CARD_STAGGER);
    assert!(group.observe(0.25, 40.0));
    assert!(group.is_revealed());
    assert!(!group.wants_observation());
    assert!(!group.observe(0.0, 50.0));
    assert_eq!(group.reveal_times(), vec![40.0, 140.0, 240.0]);
}

#[test]
fn forced_group_reveal_records_entry_time_once() {
    let mut group = RevealGroup::new(RevealConfig::in_view(0.5), 2, CARD_STAGGER);
    assert!(group.force_reveal(7.0));
    assert!(!group.force_reveal(99.0));
    assert_eq!(group.reveal_times(), vec![7.0, 107.0]);
}

#[test]
fn group_threshold_follows_config() {
    let group = RevealGroup::new(RevealConfig::in_view(SKILLS_THRESHOLD), 3, CARD_STAGGER);
    assert_eq!(group.threshold(), Some(SKILLS_THRESHOLD));
    assert_eq!(RevealGroup::new(RevealConfig::on_mount(Duration::ZERO), 1, CARD_STAGGER).threshold(), None);
}

#[test]
fn empty_list_produces_no_blocks() {
    assert!(stagger_delays(0, CARD_STAGGER).is_empty());
    let group = RevealGroup::new(RevealConfig::default(), 0, CARD_STAGGER);
    assert!(group.is_empty());
    assert!(!group.wants_observation());
}

#[test]
fn stagger_delays_are_index_multiples() {
    let delays = stagger_delays(3, CARD_STAGGER);
    assert_eq!(
        delays,
        vec![Duration::ZERO, Duration::from_millis(100), Duration::from_millis(200)]
    );
}

#[test]
fn duration_ms_converts_to_float_millis() {
    assert_eq!(duration_ms(SECTION_FADE), 600.0);
    assert!((duration_ms(Duration::from_micros(1500)) - 1.5).abs() < 1e-9);
}

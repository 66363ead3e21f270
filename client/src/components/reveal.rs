//! Wrapper that fades its children in when they scroll into view.
//!
//! SYSTEM CONTEXT
//! ==============
//! The wrapper owns one `RevealState` signal and, in the browser, one
//! viewport `Observation`. Observation starts only after the wrapper's
//! element is mounted and is released on cleanup (or earlier, once a
//! one-shot block has been revealed).

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::state::reveal::{RevealConfig, RevealState, SECTION_FADE, duration_ms};
#[cfg(feature = "hydrate")]
use crate::state::reveal::Observation;
#[cfg(feature = "hydrate")]
use crate::util::viewport::{IntersectionHandle, IntersectionViewport};

/// Reveal wrapper. Children start hidden and transition in once.
#[component]
pub fn Reveal(
    #[prop(optional)] config: RevealConfig,
    #[prop(default = SECTION_FADE)] duration: Duration,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let state = RwSignal::new(RevealState::new(config));
    let node_ref = NodeRef::<leptos::html::Div>::new();
    let style = transition_style(config.delay, duration);

    #[cfg(feature = "hydrate")]
    {
        match config.threshold() {
            None => {
                Effect::new(move || {
                    if node_ref.get().is_some() {
                        update_copy(state, RevealState::mounted);
                    }
                });
            }
            Some(threshold) => observe_when_mounted(
                node_ref,
                threshold,
                move |ratio| update_copy(state, |s| s.observe(ratio)),
                move || update_copy(state, RevealState::force_reveal),
                move || state.with(RevealState::wants_observation),
            ),
        }
    }

    view! {
        <div
            class=reveal_class(&class)
            class:reveal--visible=move || state.with(RevealState::is_revealed)
            style=style
            node_ref=node_ref
        >
            {children()}
        </div>
    }
}

/// Register `node_ref` with the viewport once it is mounted.
///
/// `on_refused` runs when the platform cannot observe the element. The
/// registration is released as soon as `still_wanted` turns false, and on
/// cleanup.
#[cfg(feature = "hydrate")]
pub(crate) fn observe_when_mounted(
    node_ref: NodeRef<leptos::html::Div>,
    threshold: f64,
    on_ratio: impl Fn(f64) + Clone + 'static,
    on_refused: impl Fn() + 'static,
    still_wanted: impl Fn() -> bool + 'static,
) {
    let observation = StoredValue::new_local(Observation::<IntersectionHandle>::default());

    Effect::new(move || {
        let Some(el) = node_ref.get() else {
            return;
        };
        let target: &web_sys::Element = &el;
        let on_ratio = on_ratio.clone();
        let attached = Observation::attach(&IntersectionViewport, target, threshold, move |ratio| on_ratio(ratio));
        if !attached.is_active() {
            on_refused();
        }
        observation.set_value(attached);
    });

    Effect::new(move || {
        if !still_wanted() {
            observation.update_value(Observation::release);
        }
    });

    on_cleanup(move || observation.update_value(Observation::release));
}

/// Apply `step` to a copy of the signal value and publish it only on change.
#[cfg(feature = "hydrate")]
pub(crate) fn update_copy<T>(signal: RwSignal<T>, step: impl FnOnce(&mut T) -> bool)
where
    T: Copy + Send + Sync + 'static,
{
    let Some(mut next) = signal.try_get_untracked() else {
        return;
    };
    if step(&mut next) {
        signal.set(next);
    }
}

/// Base class list for a reveal wrapper.
#[must_use]
pub fn reveal_class(extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() { "reveal".to_owned() } else { format!("reveal {extra}") }
}

/// Inline transition timing: the stagger offset plus the fade duration.
#[must_use]
pub fn transition_style(delay: Duration, duration: Duration) -> String {
    format!(
        "transition-delay: {}ms; transition-duration: {}ms;",
        duration_ms(delay).round(),
        duration_ms(duration).round()
    )
}

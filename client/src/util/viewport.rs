//! `IntersectionObserver` bridge for reveal blocks.
//!
//! SYSTEM CONTEXT
//! ==============
//! One observer is created per block so releasing a block disconnects
//! exactly its own registration. The JS callback closure is owned by the
//! handle and lives as long as the observer does.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::state::reveal::{ObservationHandle, ObserveError, ViewportObserver};

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::*;

/// Browser viewport, observed through `IntersectionObserver`.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntersectionViewport;

#[cfg(feature = "hydrate")]
type EntryCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

/// A connected observer plus the callback it invokes.
#[cfg(feature = "hydrate")]
pub struct IntersectionHandle {
    observer: web_sys::IntersectionObserver,
    _callback: EntryCallback,
    released: bool,
}

/// Placeholder handle; never constructed outside the browser.
#[cfg(not(feature = "hydrate"))]
pub struct IntersectionHandle {
    released: bool,
}

impl ObservationHandle for IntersectionHandle {
    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        #[cfg(feature = "hydrate")]
        self.observer.disconnect();
    }
}

impl Drop for IntersectionHandle {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(feature = "hydrate")]
impl ViewportObserver for IntersectionViewport {
    type Target = web_sys::Element;
    type Handle = IntersectionHandle;

    fn observe(
        &self,
        target: &web_sys::Element,
        threshold: f64,
        on_entry: Box<dyn FnMut(f64)>,
    ) -> Result<IntersectionHandle, ObserveError> {
        let mut on_entry = on_entry;
        let callback: EntryCallback = Closure::new(move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                on_entry(visible_ratio(entry.is_intersecting(), entry.intersection_ratio()));
            }
        });

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|err| ObserveError::Rejected(format!("{err:?}")))?;
        observer.observe(target);

        Ok(IntersectionHandle { observer, _callback: callback, released: false })
    }
}

#[cfg(not(feature = "hydrate"))]
impl ViewportObserver for IntersectionViewport {
    type Target = ();
    type Handle = IntersectionHandle;

    fn observe(
        &self,
        target: &(),
        threshold: f64,
        on_entry: Box<dyn FnMut(f64)>,
    ) -> Result<IntersectionHandle, ObserveError> {
        let _ = (target, threshold, on_entry);
        Err(ObserveError::Unavailable)
    }
}

/// Normalize an entry: an intersecting entry at ratio 0 (edge contact)
/// still counts as visible.
#[must_use]
pub fn visible_ratio(is_intersecting: bool, ratio: f64) -> f64 {
    if is_intersecting { ratio.max(f64::MIN_POSITIVE) } else { 0.0 }
}

//! Smooth scrolling against the browser window.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::state::nav::{ScrollError, ScrollSurface};

/// `window.scrollTo` / `Element.scrollIntoView`, both with smooth behavior.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowScroll;

impl ScrollSurface for WindowScroll {
    fn scroll_to_anchor(&self, anchor: &str) -> Result<(), ScrollError> {
        #[cfg(feature = "hydrate")]
        {
            let document = web_sys::window()
                .and_then(|w| w.document())
                .ok_or(ScrollError::Unavailable)?;
            let target = document
                .get_element_by_id(anchor)
                .ok_or_else(|| ScrollError::MissingAnchor(anchor.to_owned()))?;
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            options.set_block(web_sys::ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = anchor;
            Err(ScrollError::Unavailable)
        }
    }

    fn scroll_to_top(&self) -> Result<(), ScrollError> {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window().ok_or(ScrollError::Unavailable)?;
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ScrollError::Unavailable)
        }
    }
}

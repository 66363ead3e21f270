//! Floating button that returns to the top of the page.

use leptos::prelude::*;

use crate::util::BrowserNav;

#[component]
pub fn ScrollTopButton() -> impl IntoView {
    let nav = expect_context::<RwSignal<BrowserNav>>();

    view! {
        <button
            class="btn scroll-top"
            title="Back to top"
            aria-label="Back to top"
            on:click=move |_| {
                nav.with_untracked(|n| {
                    n.scroll_to_top();
                });
            }
        >
            "↑"
        </button>
    }
}

//! Fixed top bar with section links, theme toggle, and the mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the page-level navigation and theme controllers from context. Every
//! link keeps its `#anchor` href so the page still navigates without
//! scripting; when hydrated, clicks are intercepted and routed through the
//! controller, which closes the mobile menu in the same update.

use leptos::prelude::*;

use crate::state::nav::Section;
use crate::util::{BrowserNav, BrowserTheme};

#[component]
pub fn NavBar(#[prop(into)] brand: String) -> impl IntoView {
    let nav = expect_context::<RwSignal<BrowserNav>>();
    let theme = expect_context::<RwSignal<BrowserTheme>>();

    let menu_open = move || nav.with(BrowserNav::is_menu_open);

    let on_toggle_theme = move |_| {
        theme.update(|t| {
            t.toggle();
        });
    };

    view! {
        <nav class="nav-bar">
            <div class="nav-bar__inner">
                <NavLink section=Section::Hero class="nav-bar__brand" text=brand/>

                <div class="nav-bar__links">
                    {Section::ALL
                        .into_iter()
                        .map(|section| view! { <NavLink section=section class="nav-bar__link"/> })
                        .collect_view()}
                </div>

                <button
                    class="btn nav-bar__theme-toggle"
                    on:click=on_toggle_theme
                    title="Toggle dark mode"
                    aria-label="Toggle dark mode"
                >
                    <span class="theme-icon theme-icon--light">"☾"</span>
                    <span class="theme-icon theme-icon--dark">"☀"</span>
                </button>

                <button
                    class="btn nav-bar__menu-toggle"
                    class:nav-bar__menu-toggle--open=menu_open
                    on:click=move |_| {
                        nav.update(|n| {
                            n.toggle_menu();
                        });
                    }
                    aria-label="Toggle menu"
                    aria-expanded=move || if menu_open() { "true" } else { "false" }
                >
                    {move || if menu_open() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=menu_open>
                <div class="nav-bar__menu">
                    {Section::ALL
                        .into_iter()
                        .map(|section| view! { <NavLink section=section class="nav-bar__menu-link"/> })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}

/// One in-page link. Defaults its text to the section label.
#[component]
fn NavLink(
    section: Section,
    #[prop(into)] class: String,
    #[prop(into, optional)] text: Option<String>,
) -> impl IntoView {
    let nav = expect_context::<RwSignal<BrowserNav>>();
    let text = text.unwrap_or_else(|| section.label().to_owned());

    view! {
        <a
            class=class
            href=section.href()
            on:click=move |ev| {
                ev.prevent_default();
                nav.update(|n| n.select_item(section));
            }
        >
            {text}
        </a>
    }
}

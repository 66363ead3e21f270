//! Page footer: contact icon links and the name line.

#[cfg(test)]
#[path = "site_footer_test.rs"]
mod site_footer_test;

use leptos::prelude::*;

use crate::content::Profile;

const GITHUB_ICON: &str = "M12 .5a11.5 11.5 0 0 0-3.64 22.41c.58.1.79-.25.79-.56v-2c-3.2.7-3.88-1.37-3.88-1.37-.52-1.33-1.28-1.69-1.28-1.69-1.05-.72.08-.7.08-.7 1.16.08 1.77 1.19 1.77 1.19 1.03 1.77 2.71 1.26 3.37.96.1-.75.4-1.26.73-1.55-2.55-.29-5.24-1.28-5.24-5.69 0-1.26.45-2.28 1.19-3.09-.12-.29-.52-1.46.11-3.05 0 0 .97-.31 3.17 1.18a11 11 0 0 1 5.77 0c2.2-1.49 3.17-1.18 3.17-1.18.63 1.59.23 2.76.11 3.05.74.81 1.19 1.83 1.19 3.09 0 4.42-2.7 5.39-5.26 5.68.41.36.78 1.06.78 2.14v3.17c0 .31.21.67.8.56A11.5 11.5 0 0 0 12 .5Z";
const TELEGRAM_ICON: &str = "M21.9 3.6 18.6 19.2c-.25 1.1-.9 1.37-1.82.85l-5.03-3.7-2.43 2.33c-.27.27-.5.5-1.01.5l.36-5.12 9.32-8.42c.4-.36-.09-.56-.63-.2L5.84 12.67.88 11.12c-1.08-.34-1.1-1.08.22-1.6L20.5 2.05c.9-.33 1.68.2 1.4 1.55Z";
const MAIL_ICON: &str = "M2 4h20a1 1 0 0 1 1 1v14a1 1 0 0 1-1 1H2a1 1 0 0 1-1-1V5a1 1 0 0 1 1-1Zm10 8.2L3.3 6H3v.9l9 6.3 9-6.3V6h-.3L12 12.2Z";

#[component]
pub fn SiteFooter(profile: Profile) -> impl IntoView {
    let mailto = profile.mailto();

    view! {
        <footer class="site-footer">
            <div class="site-footer__links">
                {profile.github.map(|href| view! { <FooterIcon href=href label="GitHub" path=GITHUB_ICON external=true/> })}
                {profile.telegram.map(|href| view! { <FooterIcon href=href label="Telegram" path=TELEGRAM_ICON external=true/> })}
                {mailto.map(|href| view! { <FooterIcon href=href label="Email" path=MAIL_ICON/> })}
            </div>
            <p class="site-footer__text">{profile.name} " · Built with Rust and Leptos"</p>
        </footer>
    }
}

#[component]
fn FooterIcon(
    #[prop(into)] href: String,
    label: &'static str,
    path: &'static str,
    #[prop(optional)] external: bool,
) -> impl IntoView {
    view! {
        <a
            class="site-footer__icon"
            href=href
            title=label
            aria-label=label
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
        >
            <svg viewBox="0 0 24 24" aria-hidden="true">
                <path d=path></path>
            </svg>
        </a>
    }
}

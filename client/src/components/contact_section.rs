//! Closing call-to-action with direct contact links.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::Profile;
use crate::state::reveal::{CARD_STAGGER, RevealConfig};

#[component]
pub fn ContactSection(profile: Profile) -> impl IntoView {
    let mailto = profile.mailto();
    let tel = profile.tel();

    view! {
        <div class="section__inner section__inner--narrow">
            <Reveal>
                <h2 class="section__title">"Get In Touch"</h2>
                <p class="section__subtitle">
                    "Open to new projects and collaborations. The fastest way to reach me is below."
                </p>
            </Reveal>

            <Reveal config=RevealConfig::default().with_delay(CARD_STAGGER) class="contact">
                {profile.email.zip(mailto).map(|(email, href)| {
                    view! {
                        <a class="contact__link" href=href>
                            <span class="contact__label">"Email"</span>
                            <span class="contact__value">{email}</span>
                        </a>
                    }
                })}
                {profile.phone.zip(tel).map(|(phone, href)| {
                    view! {
                        <a class="contact__link" href=href>
                            <span class="contact__label">"Phone"</span>
                            <span class="contact__value">{phone}</span>
                        </a>
                    }
                })}
                {profile.telegram.map(|href| {
                    view! {
                        <a class="contact__link" href=href target="_blank" rel="noopener noreferrer">
                            <span class="contact__label">"Telegram"</span>
                        </a>
                    }
                })}
                {profile.github.map(|href| {
                    view! {
                        <a class="contact__link" href=href target="_blank" rel="noopener noreferrer">
                            <span class="contact__label">"GitHub"</span>
                        </a>
                    }
                })}
            </Reveal>
        </div>
    }
}

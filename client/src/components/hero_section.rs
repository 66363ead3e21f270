//! Hero block: name, rotating role, bio, primary links, and avatar.
//!
//! SYSTEM CONTEXT
//! ==============
//! The hero owns the page's only repeating timer. The rotator is started on
//! hydration and stopped from `on_cleanup`, so an unmounted hero never
//! receives another tick.
//!
//! The role label is rendered through a `<For>` keyed on the cycle index, so
//! each change mounts a fresh node and the enter animation replays.

#[cfg(test)]
#[path = "hero_section_test.rs"]
mod hero_section_test;

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::Profile;
use crate::state::reveal::{
    HERO_ACTIONS_DELAY, HERO_BIO_DELAY, HERO_CONTACT_DELAY, HERO_ROLE_DELAY, RevealConfig,
};
use crate::state::roles::RoleCycle;
#[cfg(feature = "hydrate")]
use crate::state::roles::{DEFAULT_ROTATION_INTERVAL, RoleRotator};
#[cfg(feature = "hydrate")]
use crate::util::timer::IntervalScheduler;

#[component]
pub fn HeroSection(profile: Profile) -> impl IntoView {
    let cycle = RwSignal::new(RoleCycle::new(profile.roles.clone()));

    #[cfg(feature = "hydrate")]
    {
        let rotator = RoleRotator::start(
            &IntervalScheduler,
            &cycle.get_untracked(),
            DEFAULT_ROTATION_INTERVAL,
            move || {
                cycle.try_update(|c| {
                    c.advance();
                });
            },
        );
        let rotator = StoredValue::new_local(rotator);
        on_cleanup(move || rotator.update_value(RoleRotator::stop));
    }

    let initials = profile.initials();
    let mailto = profile.mailto();
    let mailto_button = profile.mailto();
    let tel = profile.tel();
    let email = profile.email.clone();
    let phone = profile.phone.clone();
    let telegram = profile.telegram.clone();
    let github = profile.github.clone();
    let github_button = profile.github.clone();
    let avatar = profile.avatar_url.clone();
    let name = profile.name.clone();
    let alt = profile.name.clone();

    view! {
        <div class="hero">
            <div class="hero__text">
                <Reveal config=RevealConfig::on_mount(std::time::Duration::ZERO)>
                    <h1 class="hero__name">{name}</h1>
                </Reveal>

                <Reveal config=RevealConfig::on_mount(HERO_ROLE_DELAY) class="hero__role-slot">
                    <For
                        each=move || [cycle.with(RoleCycle::keyed_current)]
                        key=|(index, _)| *index
                        children=|(index, label)| {
                            view! {
                                <h2 class="hero__role" data-role-index=index.to_string()>
                                    {label}
                                </h2>
                            }
                        }
                    />
                </Reveal>

                <Reveal config=RevealConfig::on_mount(HERO_BIO_DELAY)>
                    <p class="hero__bio">{profile.bio}</p>
                </Reveal>

                <Reveal config=RevealConfig::on_mount(HERO_ACTIONS_DELAY) class="hero__actions">
                    {mailto_button.map(|href| view! { <a class="btn btn--primary" href=href>"Contact Me"</a> })}
                    {github_button.map(|href| {
                        view! {
                            <a class="btn btn--outline" href=href target="_blank" rel="noopener noreferrer">
                                "GitHub"
                            </a>
                        }
                    })}
                </Reveal>

                <Reveal config=RevealConfig::on_mount(HERO_CONTACT_DELAY) class="hero__contact">
                    {email.zip(mailto).map(|(email, href)| view! { <a class="hero__contact-link" href=href>{email}</a> })}
                    {phone.zip(tel).map(|(phone, href)| view! { <a class="hero__contact-link" href=href>{phone}</a> })}
                    {telegram.map(|href| {
                        view! {
                            <a class="hero__contact-link" href=href target="_blank" rel="noopener noreferrer">
                                "Telegram"
                            </a>
                        }
                    })}
                    {github.map(|href| {
                        view! {
                            <a class="hero__contact-link" href=href target="_blank" rel="noopener noreferrer">
                                "GitHub"
                            </a>
                        }
                    })}
                </Reveal>
            </div>

            <Reveal config=RevealConfig::on_mount(std::time::Duration::ZERO) class="hero__avatar">
                <span class="hero__avatar-fallback" aria-hidden="true">{initials}</span>
                {avatar.map(|src| view! { <img class="hero__avatar-img" src=src alt=alt/> })}
            </Reveal>
        </div>
    }
}

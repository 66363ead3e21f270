//! Skill categories and the additional-skills cloud.
//!
//! The category list shares one `RevealGroup`: once a fifth of the grid is
//! visible the whole group flips, and each category fades in offset by its
//! index from that moment.

#[cfg(test)]
#[path = "skills_section_test.rs"]
mod skills_section_test;

use leptos::prelude::*;

use crate::components::reveal::{Reveal, transition_style};
#[cfg(feature = "hydrate")]
use crate::components::reveal::{observe_when_mounted, update_copy};
use crate::content::SkillCategory;
use crate::state::reveal::{CARD_STAGGER, RevealConfig, RevealGroup, SECTION_FADE, SKILLS_THRESHOLD};
#[cfg(feature = "hydrate")]
use crate::util::timer::now_ms;

#[component]
pub fn SkillsSection(
    categories: Vec<SkillCategory>,
    #[prop(optional)] additional: Vec<String>,
) -> impl IntoView {
    let group = RwSignal::new(RevealGroup::new(
        RevealConfig::in_view(SKILLS_THRESHOLD),
        categories.len(),
        CARD_STAGGER,
    ));
    let grid_ref = NodeRef::<leptos::html::Div>::new();
    let has_additional = !additional.is_empty();

    #[cfg(feature = "hydrate")]
    {
        let (threshold, empty) = group.with_untracked(|g| (g.threshold(), g.is_empty()));
        if let (Some(threshold), false) = (threshold, empty) {
            observe_when_mounted(
                grid_ref,
                threshold,
                move |ratio| {
                    update_copy(group, |g| {
                        let changed = g.observe(ratio, now_ms());
                        if changed && g.is_revealed() {
                            log::debug!("skills cascade at {:?}", g.reveal_times());
                        }
                        changed
                    });
                },
                move || update_copy(group, |g| g.force_reveal(now_ms())),
                move || group.with(RevealGroup::wants_observation),
            );
        }
    }

    let revealed = move || group.with(RevealGroup::is_revealed);

    view! {
        <div class="section__inner">
            <Reveal>
                <h2 class="section__title">"Skills"</h2>
            </Reveal>

            <div class="skill-grid" node_ref=grid_ref>
                {categories
                    .into_iter()
                    .enumerate()
                    .map(|(index, category)| {
                        let style = group.with_untracked(|g| transition_style(g.delay_for(index), SECTION_FADE));
                        view! {
                            <div class="skill-category" class:skill-category--visible=revealed style=style>
                                <h3 class="skill-category__title">{category.title}</h3>
                                <ul class="skill-category__list">
                                    {category
                                        .skills
                                        .into_iter()
                                        .map(|skill| view! { <li class="skill-category__item">{skill}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            {has_additional.then(|| {
                view! {
                    <Reveal class="skill-cloud">
                        <h3 class="skill-cloud__title">"Also worked with"</h3>
                        <ul class="skill-cloud__list">
                            {additional
                                .into_iter()
                                .map(|skill| view! { <li class="chip">{skill}</li> })
                                .collect_view()}
                        </ul>
                    </Reveal>
                }
            })}
        </div>
    }
}

//! Projects grid. Each card reveals on its own, offset by its index.

#[cfg(test)]
#[path = "projects_section_test.rs"]
mod projects_section_test;

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::components::reveal::Reveal;
use crate::content::Project;
use crate::state::reveal::{CARD_STAGGER, RevealConfig, stagger_delays};

#[component]
pub fn ProjectsSection(projects: Vec<Project>) -> impl IntoView {
    let delays = stagger_delays(projects.len(), CARD_STAGGER);

    view! {
        <div class="section__inner">
            <Reveal>
                <h2 class="section__title">"Projects"</h2>
                <p class="section__subtitle">"A selection of things I have built."</p>
            </Reveal>

            <div class="project-grid">
                {projects
                    .into_iter()
                    .zip(delays)
                    .map(|(project, delay)| {
                        view! {
                            <Reveal config=RevealConfig::default().with_delay(delay) class="project-grid__item">
                                <ProjectCard project=project/>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

//! Single project tile: title, description, technology chips, and links.

use leptos::prelude::*;

use crate::content::Project;

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let has_links = project.has_links();
    let live_url = project.live_url.clone();
    let github_url = project.github_url.clone();

    view! {
        <article class="project-card">
            <h3 class="project-card__title">{project.title}</h3>
            <p class="project-card__description">{project.description}</p>

            <ul class="project-card__tech">
                {project
                    .technologies
                    .into_iter()
                    .map(|tech| view! { <li class="chip">{tech}</li> })
                    .collect_view()}
            </ul>

            {has_links.then(|| {
                view! {
                    <div class="project-card__links">
                        {live_url.map(|href| {
                            view! {
                                <a class="btn btn--small" href=href target="_blank" rel="noopener noreferrer">
                                    "Live Demo"
                                </a>
                            }
                        })}
                        {github_url.map(|href| {
                            view! {
                                <a class="btn btn--small btn--outline" href=href target="_blank" rel="noopener noreferrer">
                                    "Code"
                                </a>
                            }
                        })}
                    </div>
                }
            })}
        </article>
    }
}

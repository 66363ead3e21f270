//! The single portfolio page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the page-scoped controllers. The theme is resolved exactly once per
//! page instance and handed to the nav bar through context, alongside the
//! navigation controller. Section ids here are the anchors `Section` scrolls
//! to.

use leptos::prelude::*;

use crate::components::contact_section::ContactSection;
use crate::components::hero_section::HeroSection;
use crate::components::nav_bar::NavBar;
use crate::components::projects_section::ProjectsSection;
use crate::components::scroll_top_button::ScrollTopButton;
use crate::components::site_footer::SiteFooter;
use crate::components::skills_section::SkillsSection;
use crate::content::Portfolio;
use crate::state::nav::Section;
use crate::util::dark_mode::{DocumentRoot, LocalStorage, SystemColorScheme};
use crate::util::scroll::WindowScroll;
use crate::util::{BrowserNav, BrowserTheme};

#[component]
pub fn HomePage() -> impl IntoView {
    let portfolio = expect_context::<Portfolio>();

    let theme = RwSignal::new(BrowserTheme::initialize(LocalStorage, &SystemColorScheme, DocumentRoot));
    let nav = RwSignal::new(BrowserNav::new(WindowScroll));
    provide_context(theme);
    provide_context(nav);

    let Portfolio { profile, projects, skill_categories, additional_skills } = portfolio;
    let brand = profile.name.clone();
    let contact = profile.clone();
    let footer = profile.clone();

    view! {
        <div class="home-page">
            <NavBar brand=brand/>

            <main>
                <section id=Section::Hero.anchor() class="section section--hero">
                    <HeroSection profile=profile/>
                </section>
                <section id=Section::Projects.anchor() class="section">
                    <ProjectsSection projects=projects/>
                </section>
                <section id=Section::Skills.anchor() class="section section--alt">
                    <SkillsSection categories=skill_categories additional=additional_skills/>
                </section>
                <section id=Section::Contact.anchor() class="section">
                    <ContactSection profile=contact/>
                </section>
            </main>

            <SiteFooter profile=footer/>
            <ScrollTopButton/>
        </div>
    }
}

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the portfolio sections and read the page-level
//! navigation and theme controllers from Leptos context providers.

pub mod contact_section;
pub mod hero_section;
pub mod nav_bar;
pub mod project_card;
pub mod projects_section;
pub mod reveal;
pub mod scroll_top_button;
pub mod site_footer;
pub mod skills_section;

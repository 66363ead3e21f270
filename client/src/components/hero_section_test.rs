use super::*;

fn render(profile: Profile) -> String {
    Owner::new().with(|| view! { <HeroSection profile=profile/> }.to_html())
}

#[test]
fn hero_renders_first_role_keyed_by_index() {
    let html = render(Profile {
        name: "Ada Lovelace".to_owned(),
        roles: vec!["Engineer".to_owned(), "Writer".to_owned()],
        ..Profile::default()
    });
    assert_eq!(html.matches("class=\"hero__role\"").count(), 1);
    assert!(html.contains("data-role-index=\"0\""));
    assert!(html.contains("Engineer"));
    assert!(!html.contains("Writer"));
    assert!(html.contains("AL"));
}

#[test]
fn hero_without_roles_shows_fallback_label() {
    let html = render(Profile { name: "Ada".to_owned(), ..Profile::default() });
    assert!(html.contains(crate::state::roles::FALLBACK_ROLE));
}

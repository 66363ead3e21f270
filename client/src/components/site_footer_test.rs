use super::*;

fn render(profile: Profile) -> String {
    Owner::new().with(|| view! { <SiteFooter profile=profile/> }.to_html())
}

#[test]
fn footer_links_every_contact_channel() {
    let html = render(Profile {
        name: "Ada Lovelace".to_owned(),
        email: Some("ada@example.com".to_owned()),
        telegram: Some("https://t.me/ada".to_owned()),
        github: Some("https://github.com/ada".to_owned()),
        ..Profile::default()
    });

    assert_eq!(html.matches("site-footer__icon").count(), 3);
    assert!(html.contains("href=\"https://github.com/ada\""));
    assert!(html.contains("href=\"https://t.me/ada\""));
    assert!(html.contains("href=\"mailto:ada@example.com\""));
    assert!(html.contains("Ada Lovelace"));
}

#[test]
fn footer_without_channels_has_no_icons() {
    let html = render(Profile { name: "Ada".to_owned(), ..Profile::default() });
    assert!(!html.contains("site-footer__icon"));
    assert!(html.contains("site-footer__links"));
}

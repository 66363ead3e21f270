use super::*;

#[test]
fn reveal_class_without_extra_is_base() {
    assert_eq!(reveal_class(""), "reveal");
    assert_eq!(reveal_class("   "), "reveal");
}

#[test]
fn reveal_class_appends_extra() {
    assert_eq!(reveal_class("project-grid__item"), "reveal project-grid__item");
}

#[test]
fn transition_style_uses_whole_milliseconds() {
    assert_eq!(
        transition_style(Duration::from_millis(200), SECTION_FADE),
        "transition-delay: 200ms; transition-duration: 600ms;"
    );
    assert_eq!(
        transition_style(Duration::ZERO, Duration::from_millis(500)),
        "transition-delay: 0ms; transition-duration: 500ms;"
    );
}

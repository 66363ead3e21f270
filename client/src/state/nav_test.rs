use super::*;

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Scroll {
    Anchor(String),
    Top,
}

#[derive(Clone, Default)]
struct RecordingSurface {
    scrolls: Rc<RefCell<Vec<Scroll>>>,
    known: Vec<&'static str>,
}

impl RecordingSurface {
    fn page() -> Self {
        Self { known: Section::ALL.iter().map(|s| s.anchor()).collect(), ..Self::default() }
    }

    fn scrolls(&self) -> Vec<Scroll> {
        self.scrolls.borrow().clone()
    }
}

impl ScrollSurface for RecordingSurface {
    fn scroll_to_anchor(&self, anchor: &str) -> Result<(), ScrollError> {
        if !self.known.iter().any(|known| *known == anchor) {
            return Err(ScrollError::MissingAnchor(anchor.to_owned()));
        }
        self.scrolls.borrow_mut().push(Scroll::Anchor(anchor.to_owned()));
        Ok(())
    }

    fn scroll_to_top(&self) -> Result<(), ScrollError> {
        self.scrolls.borrow_mut().push(Scroll::Top);
        Ok(())
    }
}

// =============================================================
// Section
// =============================================================

#[test]
fn sections_map_to_page_anchors() {
    let anchors = Section::ALL.iter().map(|s| s.anchor()).collect::<Vec<_>>();
    assert_eq!(anchors, vec!["hero", "projects", "skills", "contact"]);
}

#[test]
fn section_from_anchor_accepts_hash_prefix() {
    assert_eq!(Section::from_anchor("#skills"), Some(Section::Skills));
    assert_eq!(Section::from_anchor("contact"), Some(Section::Contact));
    assert_eq!(Section::from_anchor("blog"), None);
}

#[test]
fn section_href_and_label() {
    assert_eq!(Section::Hero.href(), "#hero");
    assert_eq!(Section::Hero.label(), "Home");
    assert_eq!(Section::Projects.label(), "Projects");
}

// =============================================================
// Menu
// =============================================================

#[test]
fn menu_starts_closed() {
    let nav = NavigationController::new(RecordingSurface::page());
    assert!(!nav.is_menu_open());
}

#[test]
fn toggle_menu_flips_without_scrolling() {
    let surface = RecordingSurface::page();
    let mut nav = NavigationController::new(surface.clone());
    assert!(nav.toggle_menu());
    assert!(!nav.toggle_menu());
    assert!(surface.scrolls().is_empty());
}

#[test]
fn select_item_scrolls_and_closes_open_menu() {
    let surface = RecordingSurface::page();
    let mut nav = NavigationController::new(surface.clone());
    nav.toggle_menu();

    nav.select_item(Section::Projects);

    assert!(!nav.is_menu_open());
    assert_eq!(surface.scrolls(), vec![Scroll::Anchor("projects".to_owned())]);
}

#[test]
fn select_item_leaves_menu_closed_from_any_state() {
    for open in [false, true] {
        let mut nav = NavigationController::new(RecordingSurface::page());
        if open {
            nav.toggle_menu();
        }
        for section in Section::ALL {
            nav.select_item(section);
            assert!(!nav.is_menu_open());
        }
    }
}

#[test]
fn select_anchor_missing_target_still_closes_menu() {
    let surface = RecordingSurface::page();
    let mut nav = NavigationController::new(surface.clone());
    nav.toggle_menu();

    assert!(!nav.select_anchor("#sendmessage"));
    assert!(!nav.is_menu_open());
    assert!(surface.scrolls().is_empty());
}

#[test]
fn select_anchor_strips_hash() {
    let surface = RecordingSurface::page();
    let mut nav = NavigationController::new(surface.clone());
    assert!(nav.select_anchor("#skills"));
    assert_eq!(surface.scrolls(), vec![Scroll::Anchor("skills".to_owned())]);
}

#[test]
fn scroll_to_top_ignores_menu_state() {
    let surface = RecordingSurface::page();
    let mut nav = NavigationController::new(surface.clone());
    nav.toggle_menu();

    assert!(nav.scroll_to_top());
    assert!(nav.is_menu_open());
    assert_eq!(surface.scrolls(), vec![Scroll::Top]);
}

#[test]
fn scroll_error_messages_name_the_anchor() {
    assert_eq!(ScrollError::MissingAnchor("blog".to_owned()).to_string(), "no section with anchor #blog");
}

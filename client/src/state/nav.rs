//! Navigation bar state: mobile menu flag and in-page scrolling.
//!
//! Selecting an item always closes the mobile menu as part of the same call,
//! so callers cannot leave the menu open after navigating.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Errors produced by a `ScrollSurface`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScrollError {
    /// No element carries the requested anchor id.
    #[error("no section with anchor #{0}")]
    MissingAnchor(String),

    /// The platform has no scrollable document (SSR).
    #[error("scroll surface unavailable")]
    Unavailable,
}

/// Page sections reachable from the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Projects,
    Skills,
    Contact,
}

impl Section {
    /// Sections in page order.
    pub const ALL: [Self; 4] = [Self::Hero, Self::Projects, Self::Skills, Self::Contact];

    /// Element id the section is rendered under.
    #[must_use]
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Contact => "contact",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Contact => "Contact",
        }
    }

    /// `href` value for progressive enhancement without scripting.
    #[must_use]
    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    #[must_use]
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let anchor = anchor.trim_start_matches('#');
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }
}

/// Something that can smooth-scroll the document.
pub trait ScrollSurface {
    /// Smooth-scroll so the element with id `anchor` is at the top.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollError`] when the anchor does not exist or the
    /// platform cannot scroll.
    fn scroll_to_anchor(&self, anchor: &str) -> Result<(), ScrollError>;

    /// Smooth-scroll to the document origin.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollError::Unavailable`] when the platform cannot scroll.
    fn scroll_to_top(&self) -> Result<(), ScrollError>;
}

/// Menu flag plus the scroll surface it navigates.
#[derive(Clone, Debug, Default)]
pub struct NavigationController<S> {
    surface: S,
    menu_open: bool,
}

impl<S: ScrollSurface> NavigationController<S> {
    pub fn new(surface: S) -> Self {
        Self { surface, menu_open: false }
    }

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Scroll to `section` and close the menu.
    pub fn select_item(&mut self, section: Section) {
        self.select_anchor(section.anchor());
    }

    /// Scroll to the element with id `anchor` and close the menu.
    ///
    /// Returns whether a scroll was started. The menu closes either way.
    pub fn select_anchor(&mut self, anchor: &str) -> bool {
        self.menu_open = false;
        match self.surface.scroll_to_anchor(anchor.trim_start_matches('#')) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("navigation skipped: {err}");
                false
            }
        }
    }

    /// Scroll to the top of the page. Menu state is left alone.
    pub fn scroll_to_top(&self) -> bool {
        match self.surface.scroll_to_top() {
            Ok(()) => true,
            Err(err) => {
                log::debug!("scroll to top skipped: {err}");
                false
            }
        }
    }
}

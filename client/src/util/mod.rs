//! Browser capability implementations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from the state
//! controllers. Every type here is inert outside the `hydrate` feature so
//! SSR and native tests never touch `web_sys`.

pub mod dark_mode;
pub mod scroll;
pub mod timer;
pub mod viewport;

use crate::state::nav::NavigationController;
use crate::state::theme::ThemeController;

/// Theme controller wired to `localStorage` and the `<html>` element.
pub type BrowserTheme = ThemeController<dark_mode::LocalStorage, dark_mode::DocumentRoot>;

/// Navigation controller wired to the window scroll surface.
pub type BrowserNav = NavigationController<scroll::WindowScroll>;

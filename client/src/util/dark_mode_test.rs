#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::state::theme::{THEME_STORAGE_KEY, ThemeController};

#[test]
fn local_storage_is_unavailable_outside_the_browser() {
    assert_eq!(LocalStorage.read(THEME_STORAGE_KEY), Err(StorageError::Unavailable));
    assert_eq!(LocalStorage.write(THEME_STORAGE_KEY, "true"), Err(StorageError::Unavailable));
}

#[test]
fn system_color_scheme_defaults_to_light() {
    assert!(!SystemColorScheme.prefers_dark());
}

#[test]
fn document_root_apply_is_noop_but_callable() {
    DocumentRoot.apply(Theme::Light);
    DocumentRoot.apply(Theme::Dark);
}

#[test]
fn controller_over_browser_capabilities_resolves_light_during_ssr() {
    let mut ctl = ThemeController::initialize(LocalStorage, &SystemColorScheme, DocumentRoot);
    assert_eq!(ctl.theme(), Theme::Light);
    assert!(!ctl.persistence_available());
    assert_eq!(ctl.toggle(), Theme::Dark);
}

//! Browser capabilities behind the theme controller.
//!
//! Reads and writes the preference in `localStorage`, queries the
//! `prefers-color-scheme` media feature, and toggles the `dark` class on the
//! `<html>` element. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! report storage as unavailable and apply nothing, which keeps server
//! rendering deterministic. The hydrated client resolves the real theme.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::{AmbientThemeSignal, PreferenceStore, StorageError, Theme, ThemeRoot};
#[cfg(feature = "hydrate")]
use crate::state::theme::DARK_MARKER_CLASS;

#[cfg(feature = "hydrate")]
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

/// `matchMedia("(prefers-color-scheme: dark)")`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemColorScheme;

/// The `<html>` element.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

#[cfg(feature = "hydrate")]
fn storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StorageError::Unavailable),
        Err(err) => Err(StorageError::Rejected { op: "open", reason: format!("{err:?}") }),
    }
}

impl PreferenceStore for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            storage()?
                .get_item(key)
                .map_err(|err| StorageError::Rejected { op: "read", reason: format!("{err:?}") })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            storage()?
                .set_item(key, value)
                .map_err(|err| StorageError::Rejected { op: "write", reason: format!("{err:?}") })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}

impl AmbientThemeSignal for SystemColorScheme {
    fn prefers_dark(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return false;
            };
            match window.match_media(DARK_SCHEME_QUERY) {
                Ok(Some(query)) => query.matches(),
                Ok(None) | Err(_) => false,
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }
}

impl ThemeRoot for DocumentRoot {
    fn apply(&self, theme: Theme) {
        #[cfg(feature = "hydrate")]
        {
            let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.document_element())
            else {
                return;
            };
            let class_list = el.class_list();
            let result = match theme.marker_class() {
                Some(class) => class_list.add_1(class),
                None => class_list.remove_1(DARK_MARKER_CLASS),
            };
            if let Err(err) = result {
                log::warn!("theme marker not applied: {err:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = theme;
        }
    }
}

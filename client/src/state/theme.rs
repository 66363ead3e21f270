//! Light/dark theme resolution, persistence, and application.
//!
//! DESIGN
//! ======
//! The controller owns the resolved theme and talks to the browser only
//! through three capabilities: a key-value `PreferenceStore`, the platform
//! `AmbientThemeSignal`, and the `ThemeRoot` that carries the marker class.
//! Browser implementations live in `util::dark_mode`; tests use in-memory
//! fakes.
//!
//! TRADE-OFFS
//! ==========
//! Storage failures never reach the user. A failed read falls back to the
//! ambient signal and a failed write disables persistence for the rest of
//! the session, so the visible theme always follows the last toggle.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Storage key holding the dark-mode flag as `"true"` / `"false"`.
pub const THEME_STORAGE_KEY: &str = "darkMode";

/// Class toggled on the document root while the dark theme is active.
pub const DARK_MARKER_CLASS: &str = "dark";

/// Errors produced by a `PreferenceStore`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage backend exists (SSR, disabled storage, private mode).
    #[error("preference storage unavailable")]
    Unavailable,

    /// The backend exists but rejected the operation.
    #[error("preference storage rejected {op}: {reason}")]
    Rejected { op: &'static str, reason: String },
}

/// Resolved presentation theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Class the document root carries for this theme, if any.
    #[must_use]
    pub fn marker_class(self) -> Option<&'static str> {
        self.is_dark().then_some(DARK_MARKER_CLASS)
    }

    /// Stored representation of the dark flag.
    #[must_use]
    pub fn as_stored(self) -> &'static str {
        if self.is_dark() { "true" } else { "false" }
    }

    /// Parse a stored flag. Anything other than `"true"` / `"false"` is
    /// treated as absent.
    #[must_use]
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw.trim() {
            "true" => Some(Self::Dark),
            "false" => Some(Self::Light),
            _ => None,
        }
    }
}

/// Key-value store that survives reloads.
pub trait PreferenceStore {
    /// Read `key`; `Ok(None)` means the key was never written.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend is missing or refuses reads.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend is missing or refuses writes.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Read-only platform signal: "does the system prefer dark presentation".
pub trait AmbientThemeSignal {
    fn prefers_dark(&self) -> bool;
}

/// Document-level styling root that carries the theme marker.
pub trait ThemeRoot {
    fn apply(&self, theme: Theme);
}

/// Owns the resolved theme for one page instance.
#[derive(Clone, Debug)]
pub struct ThemeController<S, R> {
    store: S,
    root: R,
    theme: Theme,
    persistence: bool,
}

impl<S, R> ThemeController<S, R>
where
    S: PreferenceStore,
    R: ThemeRoot,
{
    /// Resolve the initial theme and apply it to the root once.
    ///
    /// A persisted flag always wins over the ambient signal. Nothing is
    /// written here; the key stays absent until the first explicit toggle.
    pub fn initialize<A: AmbientThemeSignal>(store: S, ambient: &A, root: R) -> Self {
        let (stored, persistence) = match store.read(THEME_STORAGE_KEY) {
            Ok(Some(raw)) => {
                let parsed = Theme::from_stored(&raw);
                if parsed.is_none() {
                    log::warn!("ignoring malformed theme preference {raw:?}");
                }
                (parsed, true)
            }
            Ok(None) => (None, true),
            Err(err) => {
                log::debug!("theme preference unreadable, using system signal: {err}");
                (None, false)
            }
        };

        let theme = stored.unwrap_or_else(|| Theme::from_dark_flag(ambient.prefers_dark()));
        root.apply(theme);

        Self { store, root, theme, persistence }
    }

    /// Flip the theme, persist it, and re-apply the root marker.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.root.apply(self.theme);

        if self.persistence {
            if let Err(err) = self.store.write(THEME_STORAGE_KEY, self.theme.as_stored()) {
                log::warn!("theme preference not persisted for this session: {err}");
                self.persistence = false;
            }
        }
        self.theme
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    /// Whether toggles are still being written to the store.
    #[must_use]
    pub fn persistence_available(&self) -> bool {
        self.persistence
    }
}

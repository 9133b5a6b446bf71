//! Light/dark theme preference and its persistence seam.
//!
//! The preference is a single key in the browser's key-value store. Reads
//! degrade to [`Theme::Light`] when the store is unavailable or holds an
//! unknown value; the OS colour-scheme preference is not consulted.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::collections::HashMap;

/// Root-element attribute consumed by the stylesheet.
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored value. Accepts the `*-theme` spellings written by the
    /// previous revision of the site.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" | "light-theme" => Some(Self::Light),
            "dark" | "dark-theme" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon-font class shown inside the toggle button.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-sun",
            Self::Dark => "fas fa-moon",
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("persistent storage is unavailable")]
    Unavailable,
    #[error("persistent storage access failed: {0}")]
    Access(String),
}

/// String key-value store holding user preferences.
pub trait PreferenceStore {
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process store; survives as long as the value does.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Reads and writes the theme preference under one key.
#[derive(Debug, Clone)]
pub struct ThemeStore<S> {
    store: S,
    key: String,
}

impl<S: PreferenceStore> ThemeStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    /// Stored preference, or `Light` if absent, unreadable or unknown.
    #[must_use]
    pub fn get_preference(&self) -> Theme {
        match self.store.get(&self.key) {
            Ok(Some(raw)) => Theme::parse(&raw).unwrap_or_default(),
            Ok(None) | Err(_) => Theme::default(),
        }
    }

    /// Persist `theme`.
    ///
    /// # Errors
    ///
    /// Propagates the store's [`StorageError`]; callers still apply the
    /// theme visually.
    pub fn set_preference(&mut self, theme: Theme) -> Result<(), StorageError> {
        self.store.set(&self.key, theme.as_str())
    }

    /// Flip `current`, persist it, and return the new theme with the
    /// outcome of the write.
    pub fn toggle(&mut self, current: Theme) -> (Theme, Result<(), StorageError>) {
        let next = current.toggled();
        let written = self.set_preference(next);
        (next, written)
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> S {
        self.store
    }
}

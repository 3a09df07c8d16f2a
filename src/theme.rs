//! Light/dark theme preference.
//!
//! The preference lives under one key in a [`PreferenceStore`]
//! (`localStorage` in the browser). The active theme is written to the
//! `data-theme` attribute on `<html>`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::collections::HashMap;

/// Attribute on `<html>` that stylesheets key off.
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Unknown values yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Theme at page load: the saved preference if recognizable, otherwise the
/// system color-scheme preference.
#[must_use]
pub fn initial(saved: Option<&str>, prefers_dark: bool) -> Theme {
    saved.and_then(Theme::parse).unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light })
}

/// Key-value storage for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store, used where no browser storage exists.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
    }
}

/// Read the saved theme from `store` and resolve the initial theme.
#[must_use]
pub fn load(store: &dyn PreferenceStore, key: &str, prefers_dark: bool) -> Theme {
    initial(store.get(key).as_deref(), prefers_dark)
}

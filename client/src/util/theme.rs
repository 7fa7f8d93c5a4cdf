//! Theme preference: initialization, application, and toggle.
//!
//! Reads the stored preference, falls back to the system color scheme, and
//! applies a `data-theme` attribute to the `<html>` element.
//!
//! TRADE-OFFS
//! ==========
//! Persistence and system preference lookups only happen in the browser.
//! Under SSR every call is a no-op and the theme is light.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::storage::KeyValueStorage;

pub const THEME_STORAGE_KEY: &str = "storefront_theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
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

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
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

/// Stored preference, else the system preference, else light.
pub fn read_preference(storage: &impl KeyValueStorage) -> Theme {
    if let Some(theme) = storage.get(THEME_STORAGE_KEY).as_deref().and_then(Theme::parse) {
        return theme;
    }
    if system_prefers_dark() { Theme::Dark } else { Theme::Light }
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and persist the new preference.
pub fn toggle(storage: &impl KeyValueStorage, current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    if let Err(e) = storage.set(THEME_STORAGE_KEY, next.as_str()) {
        leptos::logging::warn!("failed to persist theme: {e}");
    }
    next
}

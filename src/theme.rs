//! Light/dark theme toggle persisted to `localStorage`.
//!
//! The applied theme lives in the `data-theme` attribute on `<html>`; the
//! preference survives reloads under a single storage key. Anything stored
//! other than `"dark"` (or nothing at all) reads as light.
//!
//! TRADE-OFFS
//! ==========
//! When the browser denies `localStorage` (private mode, sandboxed iframes)
//! the preference falls back to an in-memory store for the session instead
//! of disabling the toggle.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::collections::HashMap;

use web_sys::{Document, Element, Storage, Window};

use crate::config::ThemeConfig;
use crate::consts::THEME_ATTRIBUTE;
use crate::dom::{listen, query, warn_on_err};
use crate::error::PageError;
use crate::feature::Mount;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interpret a stored or applied value; unknown and missing values are light.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
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

    /// Glyph shown inside the toggle button.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "◐",
            Self::Dark => "◑",
        }
    }
}

/// String key/value store backing the persisted preference.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns `Dom` when the backing store refuses the write (e.g. quota).
    fn set(&mut self, key: &str, value: &str) -> Result<(), PageError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PageError> {
        (**self).set(key, value)
    }
}

/// Session-only store used when `localStorage` is unavailable.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PageError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    #[must_use]
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("theme: localStorage read failed: {}", PageError::from(err));
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PageError> {
        self.storage.set_item(key, value)?;
        Ok(())
    }
}

/// Settings accessor for the theme preference.
#[derive(Debug, Clone)]
pub struct ThemeSettings<S> {
    store: S,
    key: String,
}

impl<S: PreferenceStore> ThemeSettings<S> {
    #[must_use]
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    /// The persisted theme, light when nothing usable is stored.
    #[must_use]
    pub fn load(&self) -> Theme {
        Theme::from_stored(self.store.get(&self.key).as_deref())
    }

    /// # Errors
    ///
    /// Propagates the store's write failure.
    pub fn save(&mut self, theme: Theme) -> Result<(), PageError> {
        self.store.set(&self.key, theme.as_str())
    }

    /// Flip `from` and persist the result. A failed write is logged; the
    /// flipped theme is returned either way so the page still switches.
    pub fn toggle(&mut self, from: Theme) -> Theme {
        let next = from.toggled();
        warn_on_err("theme: persisting preference", self.save(next));
        next
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}

fn browser_store(window: &Window) -> Box<dyn PreferenceStore> {
    match window.local_storage() {
        Ok(Some(storage)) => Box::new(LocalStorage::new(storage)),
        Ok(None) => {
            log::warn!("theme: localStorage unavailable, preference kept for this session only");
            Box::new(MemoryStore::default())
        }
        Err(err) => {
            log::warn!("theme: localStorage denied ({}), preference kept for this session only", PageError::from(err));
            Box::new(MemoryStore::default())
        }
    }
}

fn apply(root: &Element, toggle: &Element, icon_selector: &str, theme: Theme) -> Result<(), PageError> {
    root.set_attribute(THEME_ATTRIBUTE, theme.as_str())?;
    if let Some(icon) = query(toggle, icon_selector)? {
        icon.set_text_content(Some(theme.icon()));
    }
    Ok(())
}

/// Apply the stored theme and wire the toggle button.
///
/// # Errors
///
/// Returns `Dom` if the initial attribute write or listener registration fails.
pub fn mount(window: &Window, document: &Document, config: &ThemeConfig) -> Result<Mount, PageError> {
    let Some(toggle) = document.get_element_by_id(&config.toggle_id) else {
        return Ok(Mount::Inactive);
    };
    let Some(root) = document.document_element() else {
        return Ok(Mount::Inactive);
    };

    let mut settings = ThemeSettings::new(browser_store(window), config.storage_key.clone());
    let initial = settings.load();
    apply(&root, &toggle, &config.icon_selector, initial)?;
    log::debug!("theme: applied {}", initial.as_str());

    let button = toggle.clone();
    let icon_selector = config.icon_selector.clone();
    listen(&toggle, "click", move |_| {
        let current = Theme::from_stored(root.get_attribute(THEME_ATTRIBUTE).as_deref());
        let next = settings.toggle(current);
        warn_on_err("theme: applying", apply(&root, &button, &icon_selector, next));
    })?;
    Ok(Mount::Active)
}

//! Page configuration: selectors, class hooks, and layout constants.
//!
//! SYSTEM CONTEXT
//! ==============
//! Defaults match the portfolio markup. A page may embed
//! `<script type="application/json" id="folio-config">` with a partial JSON
//! object; any field it names replaces the default, everything else is kept.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    CONTACT_NOTICE, HEADER_OFFSET_PX, REVEAL_THRESHOLD, SCROLL_TOP_THRESHOLD_PX, SECTION_MARGIN_PX,
    THEME_STORAGE_KEY,
};
use crate::error::ConfigError;

/// Suffixes of the carousel families present on the portfolio page.
pub const DEFAULT_CAROUSEL_SUFFIXES: [&str; 8] = ["", "-ai", "-uni", "-micro", "-ml", "-devops", "-ux", "-gym"];

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub theme: ThemeConfig,
    pub nav: NavConfig,
    pub scroll: ScrollConfig,
    pub reveal: RevealConfig,
    pub footer: FooterConfig,
    pub contact: ContactConfig,
    pub carousels: CarouselList,
    pub modal: ModalConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub toggle_id: String,
    pub icon_selector: String,
    pub storage_key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            toggle_id: "theme-toggle".into(),
            icon_selector: ".theme-icon".into(),
            storage_key: THEME_STORAGE_KEY.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub toggle_id: String,
    pub menu_id: String,
    /// Resolved inside the menu element.
    pub list_selector: String,
    pub link_selector: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            toggle_id: "nav-toggle".into(),
            menu_id: "nav-menu".into(),
            list_selector: ".nav-list".into(),
            link_selector: ".nav-link".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub section_selector: String,
    pub scroll_top_id: String,
    pub header_offset: f64,
    pub section_margin: f64,
    pub scroll_top_threshold: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            section_selector: "section[id]".into(),
            scroll_top_id: "scroll-top".into(),
            header_offset: HEADER_OFFSET_PX,
            section_margin: SECTION_MARGIN_PX,
            scroll_top_threshold: SCROLL_TOP_THRESHOLD_PX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selector: String,
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { selector: "[data-animate]".into(), threshold: REVEAL_THRESHOLD }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub year_id: String,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self { year_id: "year".into() }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub form_selector: String,
    pub notice: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self { form_selector: ".contact-form".into(), notice: CONTACT_NOTICE.into() }
    }
}

/// Selector family for one carousel. Slide and button selectors are resolved
/// inside the root element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CarouselSelectors {
    pub root: String,
    #[serde(default = "default_slide_selector")]
    pub slide: String,
    pub prev: String,
    pub next: String,
}

fn default_slide_selector() -> String {
    ".carousel-slide".into()
}

impl CarouselSelectors {
    /// Build the selector family used by the portfolio markup for `suffix`
    /// (e.g. `"-ai"` gives `[data-project-carousel-ai]`).
    #[must_use]
    pub fn family(suffix: &str) -> Self {
        Self {
            root: format!("[data-project-carousel{suffix}]"),
            slide: default_slide_selector(),
            prev: format!("[data-carousel-prev{suffix}]"),
            next: format!("[data-carousel-next{suffix}]"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct CarouselList(pub Vec<CarouselSelectors>);

impl Default for CarouselList {
    fn default() -> Self {
        Self(DEFAULT_CAROUSEL_SUFFIXES.into_iter().map(CarouselSelectors::family).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    pub modal_id: String,
    pub opener_selector: String,
    pub closer_selector: String,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            modal_id: "hashgraph-modal".into(),
            opener_selector: "[data-open-hashgraph-modal]".into(),
            closer_selector: "[data-close-hashgraph-modal]".into(),
        }
    }
}

impl PageConfig {
    /// Parse a partial JSON override and merge it over the defaults.
    ///
    /// # Errors
    ///
    /// Returns `Parse` for malformed JSON and the validation errors of
    /// [`PageConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants the features rely on.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.reveal.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::InvalidThreshold(threshold));
        }

        for (field, value) in [
            ("scroll.header_offset", self.scroll.header_offset),
            ("scroll.section_margin", self.scroll.section_margin),
            ("scroll.scroll_top_threshold", self.scroll.scroll_top_threshold),
        ] {
            if value.is_nan() || value < 0.0 {
                return Err(ConfigError::NegativeOffset { field, value });
            }
        }

        let required = [
            ("theme.storage_key", &self.theme.storage_key),
            ("nav.link_selector", &self.nav.link_selector),
            ("scroll.section_selector", &self.scroll.section_selector),
            ("reveal.selector", &self.reveal.selector),
            ("contact.notice", &self.contact.notice),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField(name));
            }
        }

        for carousel in &self.carousels.0 {
            if carousel.root.trim().is_empty() {
                return Err(ConfigError::EmptyField("carousels[].root"));
            }
            if carousel.slide.trim().is_empty() {
                return Err(ConfigError::EmptyField("carousels[].slide"));
            }
        }
        Ok(())
    }
}

//! Shared constants for the page controller.

// ── Layout ──────────────────────────────────────────────────────

/// Approximate fixed-header height subtracted from anchor scroll targets, in CSS pixels.
pub const HEADER_OFFSET_PX: f64 = 72.0;

/// Distance above a section's top at which it starts counting as current.
pub const SECTION_MARGIN_PX: f64 = 100.0;

/// Vertical offset past which the scroll-to-top control is shown (exclusive).
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 400.0;

/// Fraction of an element that must be visible before it animates in.
pub const REVEAL_THRESHOLD: f64 = 0.18;

// ── Storage ─────────────────────────────────────────────────────

/// localStorage key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Attribute on `<html>` carrying the applied theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

// ── Class names ─────────────────────────────────────────────────

pub const OPEN_CLASS: &str = "open";
pub const ACTIVE_CLASS: &str = "active";
pub const VISIBLE_CLASS: &str = "visible";
pub const ANIMATED_CLASS: &str = "animated";
pub const SLIDE_ACTIVE_CLASS: &str = "is-active";

// ── Copy ────────────────────────────────────────────────────────

pub const CONTACT_NOTICE: &str = "Thank you for your message! This demo form is not yet connected to a backend.";

/// Id of the inline JSON element that may override the default configuration.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn no_inline_config_uses_defaults() {
    assert_eq!(resolve_config(None), PageConfig::default());
}

#[test]
fn blank_inline_config_uses_defaults() {
    assert_eq!(resolve_config(Some("  \n ")), PageConfig::default());
}

#[test]
fn inline_override_is_applied() {
    let config = resolve_config(Some(r#"{"scroll": {"scroll_top_threshold": 250}}"#));
    assert_eq!(config.scroll.scroll_top_threshold, 250.0);
    assert_eq!(config.carousels.0.len(), 8);
}

#[test]
fn broken_inline_config_falls_back_to_defaults() {
    assert_eq!(resolve_config(Some("{oops")), PageConfig::default());
}

#[test]
fn invalid_inline_values_fall_back_to_defaults() {
    assert_eq!(resolve_config(Some(r#"{"reveal": {"threshold": 2}}"#)), PageConfig::default());
}

#[test]
fn carousel_names_are_indexed() {
    assert_eq!(carousel_name(0), "carousel[0]");
    assert_eq!(carousel_name(7), "carousel[7]");
}

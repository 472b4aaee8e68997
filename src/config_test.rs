#![allow(clippy::float_cmp)]

use super::*;

// --- Defaults ---

#[test]
fn default_config_is_valid() {
    assert!(PageConfig::default().validate().is_ok());
}

#[test]
fn default_layout_constants() {
    let config = PageConfig::default();
    assert_eq!(config.scroll.header_offset, 72.0);
    assert_eq!(config.scroll.section_margin, 100.0);
    assert_eq!(config.scroll.scroll_top_threshold, 400.0);
    assert_eq!(config.reveal.threshold, 0.18);
    assert_eq!(config.theme.storage_key, "theme");
}

#[test]
fn default_has_eight_carousel_families() {
    let config = PageConfig::default();
    assert_eq!(config.carousels.0.len(), 8);
    let roots: Vec<&str> = config.carousels.0.iter().map(|c| c.root.as_str()).collect();
    assert_eq!(roots[0], "[data-project-carousel]");
    assert_eq!(roots[7], "[data-project-carousel-gym]");
}

#[test]
fn carousel_family_builds_all_selectors() {
    let family = CarouselSelectors::family("-ml");
    assert_eq!(family.root, "[data-project-carousel-ml]");
    assert_eq!(family.slide, ".carousel-slide");
    assert_eq!(family.prev, "[data-carousel-prev-ml]");
    assert_eq!(family.next, "[data-carousel-next-ml]");
}

// --- JSON overrides ---

#[test]
fn empty_object_yields_defaults() {
    let config = PageConfig::from_json("{}").unwrap();
    assert_eq!(config, PageConfig::default());
}

#[test]
fn partial_override_keeps_other_fields() {
    let config = PageConfig::from_json(r#"{"scroll": {"header_offset": 90}}"#).unwrap();
    assert_eq!(config.scroll.header_offset, 90.0);
    assert_eq!(config.scroll.section_margin, 100.0);
    assert_eq!(config.theme, ThemeConfig::default());
}

#[test]
fn carousel_list_override_replaces_defaults() {
    let raw = r##"{"carousels": [{"root": "#gallery", "prev": ".back", "next": ".fwd"}]}"##;
    let config = PageConfig::from_json(raw).unwrap();
    assert_eq!(config.carousels.0.len(), 1);
    assert_eq!(config.carousels.0[0].slide, ".carousel-slide");
    assert_eq!(config.carousels.0[0].root, "#gallery");
}

#[test]
fn malformed_json_is_parse_error() {
    let err = PageConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

// --- Validation ---

#[test]
fn threshold_above_one_rejected() {
    let err = PageConfig::from_json(r#"{"reveal": {"threshold": 1.5}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidThreshold(t) if t == 1.5));
}

#[test]
fn threshold_bounds_are_inclusive() {
    assert!(PageConfig::from_json(r#"{"reveal": {"threshold": 0}}"#).is_ok());
    assert!(PageConfig::from_json(r#"{"reveal": {"threshold": 1}}"#).is_ok());
}

#[test]
fn negative_offset_rejected() {
    let err = PageConfig::from_json(r#"{"scroll": {"section_margin": -1}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::NegativeOffset { field: "scroll.section_margin", .. }));
}

#[test]
fn blank_storage_key_rejected() {
    let err = PageConfig::from_json(r#"{"theme": {"storage_key": "  "}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyField("theme.storage_key")));
}

#[test]
fn empty_carousel_root_rejected() {
    let raw = r#"{"carousels": [{"root": "", "prev": "a", "next": "b"}]}"#;
    let err = PageConfig::from_json(raw).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyField("carousels[].root")));
}

#[test]
fn error_messages_name_the_field() {
    let err = ConfigError::NegativeOffset { field: "scroll.header_offset", value: -3.0 };
    assert_eq!(err.to_string(), "`scroll.header_offset` must be non-negative, got -3");
}

#[test]
fn empty_contact_notice_rejected() {
    let err = PageConfig::from_json(r#"{"contact": {"notice": ""}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyField("contact.notice")));
}

#[test]
fn default_contact_notice_mentions_missing_backend() {
    assert!(PageConfig::default().contact.notice.contains("not yet connected to a backend"));
}

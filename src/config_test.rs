#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_matches_constants() {
    let config = PageConfig::default();
    assert_eq!(config.scroll.lookahead_px, 130.0);
    assert_eq!(config.scroll.header_scrolled_px, 10.0);
    assert_eq!(config.scroll.back_to_top_px, 420.0);
    assert_eq!(config.scroll.depth_ratio, 0.75);
    assert_eq!(config.anchor_gap_px, 8.0);
    assert_eq!(config.reveal_threshold, 0.16);
    assert_eq!(config.theme_storage_key, "theme");
    assert_eq!(config.whatsapp_number, "972569906492");
    assert!(config.locale.is_none());
}

#[test]
fn empty_object_yields_defaults() {
    let config = PageConfig::from_json("{}").unwrap();
    assert_eq!(config, PageConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = PageConfig::from_json(r#"{"whatsappNumber":"15551234567","scroll":{"lookaheadPx":96}}"#).unwrap();
    assert_eq!(config.whatsapp_number, "15551234567");
    assert_eq!(config.scroll.lookahead_px, 96.0);
    assert_eq!(config.scroll.back_to_top_px, 420.0);
}

#[test]
fn locale_override_wins_over_html_lang() {
    let config = PageConfig::from_json(r#"{"locale":"ar"}"#).unwrap();
    assert_eq!(config.resolve_locale("en"), Locale::Ar);
}

#[test]
fn html_lang_used_when_locale_absent() {
    let config = PageConfig::default();
    assert_eq!(config.resolve_locale("ar"), Locale::Ar);
    assert_eq!(config.resolve_locale("en"), Locale::En);
}

#[test]
fn malformed_json_is_json_error() {
    let err = PageConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn unknown_locale_is_json_error() {
    let err = PageConfig::from_json(r#"{"locale":"fr"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn non_digit_number_rejected() {
    let err = PageConfig::from_json(r#"{"whatsappNumber":"+97 256"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "whatsappNumber", .. }));
}

#[test]
fn negative_threshold_rejected() {
    let err = PageConfig::from_json(r#"{"scroll":{"backToTopPx":-1}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "scroll.backToTopPx", .. }));
}

#[test]
fn ratio_above_one_rejected() {
    let err = PageConfig::from_json(r#"{"scroll":{"depthRatio":1.5}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "scroll.depthRatio", .. }));
}

#[test]
fn empty_storage_key_rejected() {
    let err = PageConfig::from_json(r#"{"themeStorageKey":""}"#).unwrap_err();
    assert!(err.to_string().contains("themeStorageKey"));
}

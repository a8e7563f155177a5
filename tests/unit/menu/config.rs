use super::*;

#[test]
fn default_config_is_valid() {
    OverlayMenuConfig::default().validate().unwrap();
}

#[test]
fn blank_links_are_rejected() {
    let cfg = OverlayMenuConfig {
        links: vec![MenuLink::new("/", "Home"), MenuLink::new("/about", " ")],
        ..OverlayMenuConfig::default()
    };
    assert!(matches!(cfg.validate(), Err(ShutterError::Validation(_))));
}

#[test]
fn theme_colors_must_be_hex() {
    assert!(is_hex_color("#D6B978"));
    assert!(is_hex_color("#fff"));
    assert!(!is_hex_color("D6B978"));
    assert!(!is_hex_color("#D6B97"));
    assert!(!is_hex_color("#GGGGGG"));

    let mut cfg = OverlayMenuConfig::default();
    cfg.theme.accent = "gold".to_owned();
    assert!(cfg.validate().is_err());
}

#[test]
fn json_fills_missing_fields_with_defaults() {
    let cfg: OverlayMenuConfig = serde_json::from_str(
        r#"{
            "links": [{ "path": "/gallery", "label": "Gallery" }],
            "timing": { "stagger": 0.08, "clip_ease": "power2.inOut" }
        }"#,
    )
    .unwrap();
    cfg.validate().unwrap();
    assert_eq!(cfg.links.len(), 1);
    assert_eq!(cfg.timing.stagger, 0.08);
    assert_eq!(cfg.timing.clip_ease, Ease::InOutCubic);
    assert_eq!(cfg.timing.clip_secs, 1.35);
    assert_eq!(cfg.theme.accent, "#D6B978");
}

#[test]
fn negative_timing_is_rejected() {
    let mut cfg = OverlayMenuConfig::default();
    cfg.timing.clip_secs = -1.0;
    assert!(cfg.validate().is_err());
}

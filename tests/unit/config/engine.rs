use super::*;

#[test]
fn empty_document_uses_defaults() {
    let cfg = EngineConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, EngineConfig::default());
    assert_eq!(cfg.drag_gain, 2.0);
    assert_eq!(cfg.hero_interval(), Duration::from_millis(5000));
}

#[test]
fn partial_documents_keep_other_defaults() {
    let cfg = EngineConfig::from_json_str(r#"{ "dragGain": 3.5, "currencySymbol": "€" }"#)
        .unwrap();
    assert_eq!(cfg.drag_gain, 3.5);
    assert_eq!(cfg.currency_symbol, "€");
    assert_eq!(cfg.nav_scroll_fraction, 0.8);
}

#[test]
fn invalid_values_are_rejected() {
    assert!(EngineConfig::from_json_str(r#"{ "dragGain": 0 }"#).is_err());
    assert!(EngineConfig::from_json_str(r#"{ "navScrollFraction": 1.5 }"#).is_err());
    assert!(EngineConfig::from_json_str(r#"{ "heroIntervalMs": 0 }"#).is_err());
    assert!(
        EngineConfig::from_json_str(r#"{ "breakpoints": { "mobileMaxPx": 900, "tabletMaxPx": 800 } }"#)
            .is_err()
    );
}

#[test]
fn prices_use_symbol_and_fixed_decimals() {
    let cfg = EngineConfig::default();
    assert_eq!(cfg.format_price(19.5), "$19.50");
    assert_eq!(cfg.format_price(0.0), "$0.00");
}

#[test]
fn missing_file_is_an_error() {
    assert!(EngineConfig::from_path("does/not/exist.json").is_err());
}

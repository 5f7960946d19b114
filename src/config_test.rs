use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_config_matches_stock_deployment() {
    let config = WidgetConfig::default();
    assert_eq!(config.cookie_name, "shooterMode");
    assert_eq!(config.expiry_days, 365);
    assert_eq!(config.marker_class, "nav-button");
    assert_eq!(config.button_id, "navToggleBtn");
    assert_eq!(config.reload_delay_ms, 100);
    assert_eq!(config.retry_delays_ms, vec![100, 500]);
    assert!(config.observe_mutations);
    assert_eq!(config.log_level, log::Level::Info);
}

#[test]
fn default_config_is_valid() {
    assert!(WidgetConfig::default().validate().is_ok());
}

#[test]
fn marker_selector_prefixes_dot() {
    assert_eq!(WidgetConfig::default().marker_selector(), ".nav-button");
}

// =============================================================
// from_json
// =============================================================

#[test]
fn empty_object_yields_defaults() {
    let config = WidgetConfig::from_json("{}").expect("empty config");
    assert_eq!(config, WidgetConfig::default());
}

#[test]
fn partial_object_overrides_named_fields_only() {
    let config = WidgetConfig::from_json(r#"{"cookieName":"aimMode","retryDelaysMs":[50],"logLevel":"debug"}"#)
        .expect("partial config");
    assert_eq!(config.cookie_name, "aimMode");
    assert_eq!(config.retry_delays_ms, vec![50]);
    assert_eq!(config.log_level, log::Level::Debug);
    assert_eq!(config.button_id, "navToggleBtn");
    assert_eq!(config.reload_delay_ms, 100);
}

#[test]
fn malformed_json_is_parse_error() {
    let err = WidgetConfig::from_json("{cookieName:").expect_err("should fail");
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn wrong_field_type_is_parse_error() {
    let err = WidgetConfig::from_json(r#"{"expiryDays":"forever"}"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn from_json_runs_validation() {
    let err = WidgetConfig::from_json(r#"{"reloadDelayMs":0}"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::ZeroReloadDelay));
}

// =============================================================
// validate
// =============================================================

#[test]
fn cookie_name_with_reserved_characters_is_rejected() {
    for name in ["", "a=b", "a;b", "a b", "a,b"] {
        let config = WidgetConfig { cookie_name: name.to_owned(), ..WidgetConfig::default() };
        let err = config.validate().expect_err("should fail");
        assert!(matches!(err, ConfigError::CookieName(ref n) if n == name));
    }
}

#[test]
fn zero_expiry_is_rejected() {
    let config = WidgetConfig { expiry_days: 0, ..WidgetConfig::default() };
    assert!(matches!(config.validate(), Err(ConfigError::ZeroExpiry)));
}

#[test]
fn marker_class_must_be_single_identifier() {
    for class in ["", "   ", "nav button", ".nav-button", "1nav"] {
        let config = WidgetConfig { marker_class: class.to_owned(), ..WidgetConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::MarkerClass(_))), "{class:?}");
    }
}

#[test]
fn marker_class_accepts_hyphen_and_underscore() {
    let config = WidgetConfig { marker_class: "_nav-btn_2".to_owned(), ..WidgetConfig::default() };
    assert!(config.validate().is_ok());
}

#[test]
fn button_id_with_whitespace_is_rejected() {
    let config = WidgetConfig { button_id: "nav toggle".to_owned(), ..WidgetConfig::default() };
    assert!(matches!(config.validate(), Err(ConfigError::ButtonId(_))));
}

#[test]
fn empty_retry_schedule_is_allowed() {
    let config = WidgetConfig { retry_delays_ms: Vec::new(), ..WidgetConfig::default() };
    assert!(config.validate().is_ok());
}

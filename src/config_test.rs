use super::*;

#[test]
fn defaults_match_constants() {
    let cfg = AppConfig::default();
    assert_eq!(cfg.otp_delay_ms, DEFAULT_OTP_DELAY_MS);
    assert_eq!(cfg.scan_delay_ms, DEFAULT_SCAN_DELAY_MS);
    assert_eq!(cfg.invite_delay_ms, DEFAULT_INVITE_DELAY_MS);
    assert!(cfg.allow_skip_ahead);
    assert!(cfg.exit_at_first_step);
    assert_eq!(cfg.default_city, DEFAULT_CITY);
}

#[test]
fn from_json_keeps_defaults_for_missing_fields() {
    let cfg = AppConfig::from_json(r#"{ "otp_delay_ms": 250 }"#).unwrap();
    assert_eq!(cfg.otp_delay_ms, 250);
    assert_eq!(cfg.scan_delay_ms, DEFAULT_SCAN_DELAY_MS);
    assert_eq!(cfg.default_city, DEFAULT_CITY);
}

#[test]
fn from_json_parses_policy_overrides() {
    let cfg = AppConfig::from_json(r#"{ "allow_skip_ahead": false, "exit_at_first_step": false }"#).unwrap();
    let policy = cfg.wizard_policy();
    assert!(!policy.allow_skip_ahead);
    assert_eq!(policy.floor, FloorBehavior::Clamp);
}

#[test]
fn from_json_rejects_malformed_document() {
    let err = AppConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn from_json_rejects_blank_city() {
    let err = AppConfig::from_json(r#"{ "default_city": "  " }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn load_without_browser_returns_defaults() {
    assert_eq!(AppConfig::load(), AppConfig::default());
}

#[test]
fn delays_convert_to_durations() {
    let cfg = AppConfig { otp_delay_ms: 10, scan_delay_ms: 20, invite_delay_ms: 30, ..AppConfig::default() };
    assert_eq!(cfg.otp_delay(), Duration::from_millis(10));
    assert_eq!(cfg.scan_delay(), Duration::from_millis(20));
    assert_eq!(cfg.invite_delay(), Duration::from_millis(30));
}

#[test]
fn default_policy_allows_skip_and_exits_at_floor() {
    let policy = AppConfig::default().wizard_policy();
    assert!(policy.allow_skip_ahead);
    assert_eq!(policy.floor, FloorBehavior::Exit);
}

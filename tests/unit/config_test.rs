//! Tests for configuration validation and loading

use std::collections::HashMap;

use race_timeout::config::{AbandonPolicy, RaceConfig, ENV_ABANDON, ENV_DEFAULT_DEADLINE_MS};

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_default_config_is_valid() {
    let cfg = RaceConfig::default();
    assert_eq!(cfg.default_deadline_ms, 5_000);
    assert_eq!(cfg.abandon, AbandonPolicy::Drop);
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_zero_deadline_is_invalid() {
    let cfg = RaceConfig {
        default_deadline_ms: 0,
        abandon: AbandonPolicy::Drop,
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn test_config_from_json() {
    let json = r#"{
        "default_deadline_ms": 250,
        "abandon": "detach"
    }"#;

    let cfg = RaceConfig::from_json_str(json).unwrap();
    assert_eq!(cfg.default_deadline_ms, 250);
    assert_eq!(cfg.abandon, AbandonPolicy::Detach);
}

#[test]
fn test_config_from_json_defaults_abandon_policy() {
    let cfg = RaceConfig::from_json_str(r#"{ "default_deadline_ms": 10 }"#).unwrap();
    assert_eq!(cfg.abandon, AbandonPolicy::Drop);
}

#[test]
fn test_config_from_json_rejects_zero_deadline() {
    let err = RaceConfig::from_json_str(r#"{ "default_deadline_ms": 0 }"#).unwrap_err();
    assert!(err.contains("default_deadline_ms"));
}

#[test]
fn test_config_from_json_rejects_garbage() {
    let err = RaceConfig::from_json_str("not json").unwrap_err();
    assert!(err.starts_with("parse error"));
}

#[test]
fn test_config_from_lookup() {
    let cfg = RaceConfig::from_lookup(lookup_from(&[
        (ENV_DEFAULT_DEADLINE_MS, " 1500 "),
        (ENV_ABANDON, "Detach"),
    ]))
    .unwrap();
    assert_eq!(cfg.default_deadline_ms, 1500);
    assert_eq!(cfg.abandon, AbandonPolicy::Detach);
}

#[test]
fn test_config_from_empty_lookup_uses_defaults() {
    let cfg = RaceConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, RaceConfig::default());
}

#[test]
fn test_config_from_lookup_rejects_bad_values() {
    let err = RaceConfig::from_lookup(lookup_from(&[(ENV_DEFAULT_DEADLINE_MS, "soon")])).unwrap_err();
    assert!(err.starts_with(ENV_DEFAULT_DEADLINE_MS));

    let err = RaceConfig::from_lookup(lookup_from(&[(ENV_ABANDON, "ignore")])).unwrap_err();
    assert!(err.contains("unknown abandon policy"));
}

//! Tests for domain types.

use super::*;
use crate::config::load;
use serde_json::json;

// ==================== ModelProfile tests ====================

#[test]
fn test_profile_defaults() {
    let profile = ModelProfile::new("gpt-4");

    assert_eq!(profile.model_name, "gpt-4");
    assert_eq!(profile.temperature, 0.7);
    assert_eq!(profile.max_tokens, 1024);
    assert!(!profile.is_creative());
}

#[test]
fn test_profile_is_creative_threshold() {
    assert!(!ModelProfile::new("m").with_temperature(0.8).is_creative());
    assert!(ModelProfile::new("m").with_temperature(0.81).is_creative());
}

#[test]
fn test_profile_builder() {
    let profile = ModelProfile::new("m").with_temperature(1.2);

    assert_eq!(profile.model_name, "m");
    assert_eq!(profile.temperature, 1.2);
    assert_eq!(profile.max_tokens, 1024);
}

#[test]
fn test_profile_deserialize_applies_defaults() {
    let profile: ModelProfile = serde_json::from_value(json!({"model_name": "m"})).unwrap();
    assert_eq!(profile, ModelProfile::new("m"));

    let profile: ModelProfile =
        serde_json::from_value(json!({"model_name": "m", "max_tokens": 2048})).unwrap();
    assert_eq!(profile.max_tokens, 2048);
    assert_eq!(profile.temperature, 0.7);
}

#[test]
fn test_profile_from_settings() {
    let cfg = load(&json!({"models": [{"name": "gpt-4-turbo", "temperature": 0.9}]})).unwrap();

    let profile = ModelProfile::from(&cfg.models()[0]);
    assert_eq!(profile.model_name, "gpt-4-turbo");
    assert_eq!(profile.temperature, 0.9);
    assert_eq!(profile.max_tokens, 1024);
    assert!(profile.is_creative());
}

// ==================== Tag helper tests ====================

#[test]
fn test_process_tags_uppercases_in_order() {
    let tags = vec!["end".to_string(), "Error".to_string(), "stop".to_string()];

    assert_eq!(process_tags(&tags, false), ["END", "ERROR", "STOP"]);
    assert_eq!(process_tags(&tags, true), ["END", "ERROR", "STOP"]);
}

#[test]
fn test_process_tags_empty() {
    assert!(process_tags(&[], false).is_empty());
}

#[test]
fn test_process_data_none() {
    assert!(process_data(None).is_empty());
}

#[test]
fn test_process_data_keeps_order_and_duplicates() {
    let data = vec![
        ("zeta".to_string(), 2),
        ("alpha".to_string(), 1),
        ("zeta".to_string(), 0),
    ];

    assert_eq!(process_data(Some(data.as_slice())), ["zeta", "alpha", "zeta"]);
}

#[test]
fn test_process_data_empty_slice() {
    assert!(process_data(Some(&[][..])).is_empty());
}

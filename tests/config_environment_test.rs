// ABOUTME: Unit tests for environment-driven server configuration
// ABOUTME: Validates defaults, overrides, and rejection of unparseable values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::time::Duration;

use serial_test::serial;
use vitalmotion_server::config::environment::{Environment, ServerConfig};

const MANAGED_VARS: &[&str] = &[
    "HTTP_PORT",
    "HOST",
    "ENVIRONMENT",
    "DATABASE_URL",
    "CORS_ALLOWED_ORIGINS",
    "FIREBASE_PROJECT_ID",
    "FIREBASE_ENABLED",
    "FIREBASE_KEY_CACHE_TTL_SECS",
    "RECOMMENDATION_LOOKUP_TIMEOUT_MS",
    "RECOMMENDATION_PAIN_WINDOW_DAYS",
];

fn clear_env() {
    for key in MANAGED_VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.http_port, 5001);
    assert_eq!(config.environment, Environment::Development);
    assert!(!config.firebase.is_configured());
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_env();
    env::set_var("HTTP_PORT", "8088");
    env::set_var("HOST", "0.0.0.0");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("FIREBASE_PROJECT_ID", "vitalmotion-test");
    env::set_var("RECOMMENDATION_LOOKUP_TIMEOUT_MS", "250");
    env::set_var("RECOMMENDATION_PAIN_WINDOW_DAYS", "14");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.http_port, 8088);
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.environment, Environment::Production);
    assert!(config.database.is_memory());
    assert!(config.firebase.is_configured());
    assert_eq!(config.firebase.project_id.as_deref(), Some("vitalmotion-test"));
    assert_eq!(
        config.recommendation.lookup_timeout(),
        Duration::from_millis(250)
    );
    assert_eq!(config.recommendation.engine_config().pain_window.days, 14);
}

#[test]
#[serial]
fn test_firebase_can_be_disabled_explicitly() {
    clear_env();
    env::set_var("FIREBASE_PROJECT_ID", "vitalmotion-test");
    env::set_var("FIREBASE_ENABLED", "false");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert!(!config.firebase.is_configured());
}

#[test]
#[serial]
fn test_client_sdk_key_does_not_affect_config() {
    clear_env();
    env::set_var("FIREBASE_API_KEY", "client-sdk-key");

    let config = ServerConfig::from_env().unwrap();
    env::remove_var("FIREBASE_API_KEY");

    assert_eq!(config, ServerConfig::default());
}

#[test]
#[serial]
fn test_blank_project_id_is_ignored() {
    clear_env();
    env::set_var("FIREBASE_PROJECT_ID", "   ");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert!(config.firebase.project_id.is_none());
}

#[test]
#[serial]
fn test_invalid_values_are_rejected() {
    let cases = [
        ("HTTP_PORT", "not-a-port"),
        ("HTTP_PORT", "70000"),
        ("HTTP_PORT", "0"),
        ("RECOMMENDATION_LOOKUP_TIMEOUT_MS", "soon"),
        ("RECOMMENDATION_LOOKUP_TIMEOUT_MS", "0"),
        ("RECOMMENDATION_PAIN_WINDOW_DAYS", "-3"),
        ("DATABASE_URL", "postgresql://localhost/vitalmotion"),
    ];

    for (key, value) in cases {
        clear_env();
        env::set_var(key, value);
        let result = ServerConfig::from_env();
        clear_env();
        assert!(result.is_err(), "{key}={value} should be rejected");
    }
}

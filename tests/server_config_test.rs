// ABOUTME: Integration tests for environment-driven server configuration
// ABOUTME: Covers defaults, overrides, invalid values and the brewing section
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Indian Coffee Beans

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use indian_coffee_beans::config::{Environment, LogLevel, ServerConfig};
use serial_test::serial;

const VARS: [&str; 9] = [
    "HOST",
    "HTTP_PORT",
    "ENVIRONMENT",
    "LOG_LEVEL",
    "CORS_ALLOWED_ORIGINS",
    "BREW_MIN_VOLUME_ML",
    "BREW_MAX_VOLUME_ML",
    "BREW_DISPLAY_DECIMALS",
    "SERVICE_NAME",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults() {
    clear_env();
    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.bind_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.cors_allowed_origins, "*");
    assert!((config.brewing.min_volume_ml - 50.0).abs() < f64::EPSILON);
    assert!((config.brewing.max_volume_ml - 2000.0).abs() < f64::EPSILON);
    assert_eq!(config.brewing.display_decimals, 1);
}

#[test]
#[serial]
fn test_overrides() {
    clear_env();
    env::set_var("HOST", "0.0.0.0");
    env::set_var("HTTP_PORT", "9090");
    env::set_var("ENVIRONMENT", "prod");
    env::set_var("LOG_LEVEL", "debug");
    env::set_var("BREW_MAX_VOLUME_ML", "3000");
    let config = ServerConfig::from_env();
    clear_env();

    let config = config.unwrap();
    assert_eq!(config.bind_addr().to_string(), "0.0.0.0:9090");
    assert!(config.environment.is_production());
    assert_eq!(config.log_level, LogLevel::Debug);
    assert!((config.brewing.max_volume_ml - 3000.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_invalid_port_is_an_error() {
    clear_env();
    env::set_var("HTTP_PORT", "eighty");
    let result = ServerConfig::from_env();
    clear_env();

    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("HTTP_PORT"), "{message}");
}

#[test]
#[serial]
fn test_inverted_volume_range_is_an_error() {
    clear_env();
    env::set_var("BREW_MIN_VOLUME_ML", "900");
    env::set_var("BREW_MAX_VOLUME_ML", "100");
    let result = ServerConfig::from_env();
    clear_env();

    assert!(result.is_err());
}

#[test]
fn test_zero_port_fails_validation() {
    let config = ServerConfig {
        http_port: 0,
        ..ServerConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_summary_lists_volume_range() {
    let summary = ServerConfig::default().summary();
    assert!(summary.contains("127.0.0.1:8080"));
    assert!(summary.contains("Volume Range: 50-2000 ml"));
}

// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates env var overrides, defaults, parsing fallbacks, and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Study Planner Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use serial_test::serial;

use study_planner::config::environment::{DatabaseUrl, Environment, ServerConfig};

const CONFIG_ENV_VARS: &[&str] = &[
    "HTTP_PORT",
    "DATABASE_URL",
    "AUTO_MIGRATE",
    "JWT_SECRET",
    "TOKEN_EXPIRY_HOURS",
    "REMEMBER_ME_EXPIRY_HOURS",
    "DEFAULT_DAILY_STUDY_HOURS",
    "CORS_ALLOWED_ORIGINS",
    "ENVIRONMENT",
];

fn clear_config_env() {
    for var in CONFIG_ENV_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("production"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("testing"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("development"),
        Environment::Development
    );
    // Unknown values fall back to development
    assert_eq!(
        Environment::from_str_or_default("invalid"),
        Environment::Development
    );

    assert!(Environment::Production.is_production());
    assert!(!Environment::Production.is_development());
    assert_eq!(Environment::Testing.to_string(), "testing");
}

#[test]
fn test_database_url_parsing() {
    let memory = DatabaseUrl::parse_url("sqlite::memory:");
    assert!(memory.is_memory());
    assert_eq!(memory.to_connection_string(), "sqlite::memory:");

    let file = DatabaseUrl::parse_url("sqlite:./data/app.db");
    assert!(!file.is_memory());
    assert_eq!(file.to_connection_string(), "sqlite:./data/app.db");

    // Bare paths are treated as SQLite files
    let bare = DatabaseUrl::parse_url("./some/path.db");
    assert_eq!(bare.to_connection_string(), "sqlite:./some/path.db");
    assert_eq!(bare.to_string(), bare.to_connection_string());
}

#[test]
fn test_summary_never_prints_the_jwt_secret() {
    let mut config = ServerConfig::default();
    assert!(config.summary().contains("Generated at startup"));

    config.auth.jwt_secret = Some("super-secret-signing-key".into());
    let summary = config.summary();
    assert!(summary.contains("From environment"));
    assert!(!summary.contains("super-secret-signing-key"));
}

#[test]
fn test_validation_rules() {
    let mut config = ServerConfig::default();
    assert!(config.validate().is_ok());

    config.auth.token_expiry_hours = 0;
    assert!(config.validate().is_err());
    config.auth.token_expiry_hours = 24;

    config.auth.remember_me_expiry_hours = -5;
    assert!(config.validate().is_err());
    config.auth.remember_me_expiry_hours = 720;

    // A remember-me expiry below the standard expiry only warns
    config.auth.remember_me_expiry_hours = 10;
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_from_env_reads_overrides() {
    clear_config_env();
    env::set_var("HTTP_PORT", "9099");
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("TOKEN_EXPIRY_HOURS", "48");
    env::set_var("REMEMBER_ME_EXPIRY_HOURS", "960");
    env::set_var("DEFAULT_DAILY_STUDY_HOURS", "3.5");
    env::set_var("CORS_ALLOWED_ORIGINS", "http://localhost:5173");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("JWT_SECRET", "configured-secret");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 9099);
    assert!(config.database.url.is_memory());
    assert_eq!(config.auth.token_expiry_hours, 48);
    assert_eq!(config.auth.remember_me_expiry_hours, 960);
    assert!((config.planner.default_daily_study_hours - 3.5).abs() < f64::EPSILON);
    assert_eq!(config.cors.allowed_origins, "http://localhost:5173");
    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.auth.jwt_secret.as_deref(), Some("configured-secret"));

    clear_config_env();
}

#[test]
#[serial]
fn test_from_env_falls_back_to_defaults() {
    clear_config_env();

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 8081);
    assert_eq!(
        config.database.url.to_connection_string(),
        "sqlite:./data/study_planner.db"
    );
    assert!(config.database.auto_migrate);
    assert!(config.auth.jwt_secret.is_none());
    assert_eq!(config.auth.token_expiry_hours, 24);
    assert_eq!(config.auth.remember_me_expiry_hours, 720);
    assert!((config.planner.default_daily_study_hours - 2.0).abs() < f64::EPSILON);
    assert_eq!(config.cors.allowed_origins, "*");
    assert_eq!(config.environment, Environment::Development);
}

#[test]
#[serial]
fn test_unparseable_port_falls_back_to_default() {
    clear_config_env();
    env::set_var("HTTP_PORT", "not-a-port");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 8081);

    clear_config_env();
}

#[test]
#[serial]
fn test_invalid_auto_migrate_is_rejected() {
    clear_config_env();
    env::set_var("AUTO_MIGRATE", "definitely");

    let result = ServerConfig::from_env();
    assert!(result.is_err());

    clear_config_env();
}

// ABOUTME: System-wide constants and configuration values for the Study Planner API
// ABOUTME: Contains service identity, ports, limits, and environment-backed defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Study Planner Project

//! # Constants Module
//!
//! Application constants and environment-based configuration values.
//! This module provides both hardcoded constants and environment variable
//! configuration helpers used by [`crate::config`].

use std::env;

/// Service identity
pub mod service_names {
    /// Canonical service name used in logs and health responses
    pub const SERVER_NAME: &str = "study-planner-server";

    /// Server version from Cargo.toml
    pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Default listen ports
pub mod ports {
    /// Default `HTTP` server port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// Environment-based configuration
pub mod env_config {
    use super::env;

    /// Get `HTTP` server port from environment or default
    #[must_use]
    pub fn http_port() -> u16 {
        env::var("HTTP_PORT")
            .unwrap_or_else(|_| super::ports::DEFAULT_HTTP_PORT.to_string())
            .parse()
            .unwrap_or(super::ports::DEFAULT_HTTP_PORT)
    }

    /// Get database `URL` from environment or default
    #[must_use]
    pub fn database_url() -> String {
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:./data/study_planner.db".into())
    }

    /// Get `JWT` secret from environment, if set
    #[must_use]
    pub fn jwt_secret() -> Option<String> {
        env::var("JWT_SECRET").ok()
    }

    /// Get `JWT` expiry hours from environment or default
    #[must_use]
    pub fn token_expiry_hours() -> i64 {
        env::var("TOKEN_EXPIRY_HOURS")
            .unwrap_or_else(|_| super::limits::TOKEN_EXPIRY_HOURS.to_string())
            .parse()
            .unwrap_or(super::limits::TOKEN_EXPIRY_HOURS)
    }

    /// Get remember-me expiry hours from environment or default
    #[must_use]
    pub fn remember_me_expiry_hours() -> i64 {
        env::var("REMEMBER_ME_EXPIRY_HOURS")
            .unwrap_or_else(|_| super::limits::REMEMBER_ME_EXPIRY_HOURS.to_string())
            .parse()
            .unwrap_or(super::limits::REMEMBER_ME_EXPIRY_HOURS)
    }

    /// Get the default daily study budget in hours from environment or default
    #[must_use]
    pub fn default_daily_study_hours() -> f64 {
        env::var("DEFAULT_DAILY_STUDY_HOURS")
            .unwrap_or_else(|_| super::defaults::DAILY_STUDY_HOURS.to_string())
            .parse()
            .unwrap_or(super::defaults::DAILY_STUDY_HOURS)
    }
}

/// Numeric limits and thresholds
pub mod limits {
    /// Minimum accepted password length at registration
    pub const MIN_PASSWORD_LENGTH: usize = 8;

    /// Standard session token expiry
    pub const TOKEN_EXPIRY_HOURS: i64 = 24;

    /// Extended expiry for "remember me" logins (30 days)
    pub const REMEMBER_ME_EXPIRY_HOURS: i64 = 720;

    /// Quiz scores are percentages
    pub const MAX_QUIZ_SCORE: f64 = 100.0;
}

/// User and application defaults
pub mod defaults {
    /// Daily study budget in hours when a user never set one
    pub const DAILY_STUDY_HOURS: f64 = 2.0;

    /// Author recorded for quotes submitted without one
    pub const QUOTE_AUTHOR: &str = "Unknown";

    /// Category recorded for quotes submitted without one
    pub const QUOTE_CATEGORY: &str = "Motivation";
}

/// Cryptographic constants
pub mod crypto {
    /// Length of a generated `JWT` signing secret in bytes
    pub const JWT_SECRET_LENGTH: usize = 64;
}

/// Time conversion constants
pub mod time_constants {
    /// Seconds in one hour
    pub const SECONDS_PER_HOUR: u32 = 3600;

    /// Minutes in one hour
    pub const MINUTES_PER_HOUR: u32 = 60;

    /// Days in one week
    pub const DAYS_PER_WEEK: u32 = 7;
}

/// Error message fragments shared across routes
pub mod error_messages {
    /// Login and token failures use one generic message
    pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

    /// Registration rejects emails that do not look deliverable
    pub const INVALID_EMAIL_FORMAT: &str = "Invalid email format";

    /// Registration rejects passwords below the minimum length
    pub const PASSWORD_TOO_WEAK: &str = "Password must be at least 8 characters long";

    /// Duplicate registration attempts
    pub const USER_ALREADY_EXISTS: &str = "An account with this email already exists";
}

// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, validation, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Study Planner Project

//! Environment-based configuration management for production deployment

use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::constants::{defaults, env_config, limits};

/// Environment type for deployment-specific behavior
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a development environment
    #[must_use]
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database backed by a file
    SQLite {
        /// Path to the database file
        path: PathBuf,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from a connection string
    #[must_use]
    pub fn parse_url(s: &str) -> Self {
        let path_str = s.strip_prefix("sqlite:").unwrap_or(s);
        if path_str == ":memory:" {
            Self::Memory
        } else {
            Self::SQLite {
                path: PathBuf::from(path_str),
            }
        }
    }

    /// Convert to an `sqlx` connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/study_planner.db"),
        }
    }
}

impl Display for DatabaseUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Top-level server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// `HTTP` API port
    pub http_port: u16,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Authentication configuration
    pub auth: AuthConfig,
    /// Study planning behavior
    pub planner: PlannerConfig,
    /// Cross-origin request policy
    pub cors: CorsConfig,
    /// Deployment environment
    pub environment: Environment,
}

/// Database settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database location
    pub url: DatabaseUrl,
    /// Run schema migrations on startup
    pub auto_migrate: bool,
}

/// Authentication settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// `JWT` signing secret; generated at startup when unset
    pub jwt_secret: Option<String>,
    /// Standard session token expiry in hours
    pub token_expiry_hours: i64,
    /// Extended expiry for "remember me" logins in hours
    pub remember_me_expiry_hours: i64,
}

/// Study planning settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Daily study budget in hours for users who never set one
    pub default_daily_study_hours: f64,
}

/// `CORS` settings for browser clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origin list, or `*` to allow any origin
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".to_owned(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: crate::constants::ports::DEFAULT_HTTP_PORT,
            database: DatabaseConfig {
                url: DatabaseUrl::default(),
                auto_migrate: true,
            },
            auth: AuthConfig {
                jwt_secret: None,
                token_expiry_hours: limits::TOKEN_EXPIRY_HOURS,
                remember_me_expiry_hours: limits::REMEMBER_ME_EXPIRY_HOURS,
            },
            planner: PlannerConfig {
                default_daily_study_hours: defaults::DAILY_STUDY_HOURS,
            },
            cors: CorsConfig::default(),
            environment: Environment::Development,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error when an environment variable holds an unparseable
    /// value or the resulting configuration fails validation.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_port: env_config::http_port(),
            database: DatabaseConfig {
                url: DatabaseUrl::parse_url(&env_config::database_url()),
                auto_migrate: env_var_or("AUTO_MIGRATE", "true")
                    .parse()
                    .context("Invalid AUTO_MIGRATE value")?,
            },
            auth: AuthConfig {
                jwt_secret: env_config::jwt_secret(),
                token_expiry_hours: env_config::token_expiry_hours(),
                remember_me_expiry_hours: env_config::remember_me_expiry_hours(),
            },
            planner: PlannerConfig {
                default_daily_study_hours: env_config::default_daily_study_hours(),
            },
            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*"),
            },
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error for a zero port, non-positive token expiries, or a
    /// non-positive daily study budget.
    pub fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            return Err(anyhow::anyhow!("HTTP_PORT must not be 0"));
        }
        if self.auth.token_expiry_hours <= 0 {
            return Err(anyhow::anyhow!("TOKEN_EXPIRY_HOURS must be positive"));
        }
        if self.auth.remember_me_expiry_hours <= 0 {
            return Err(anyhow::anyhow!("REMEMBER_ME_EXPIRY_HOURS must be positive"));
        }
        if self.auth.remember_me_expiry_hours < self.auth.token_expiry_hours {
            warn!("Remember-me expiry is shorter than the standard token expiry");
        }
        if !self.planner.default_daily_study_hours.is_finite()
            || self.planner.default_daily_study_hours <= 0.0
        {
            return Err(anyhow::anyhow!(
                "DEFAULT_DAILY_STUDY_HOURS must be a positive number"
            ));
        }
        Ok(())
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Study Planner Server Configuration:\n\
             - HTTP Port: {}\n\
             - Database: {}\n\
             - Auto Migrate: {}\n\
             - Token Expiry: {}h (remember me: {}h)\n\
             - JWT Secret: {}\n\
             - Default Daily Study Hours: {}\n\
             - CORS Allowed Origins: {}\n\
             - Environment: {}",
            self.http_port,
            self.database.url,
            self.database.auto_migrate,
            self.auth.token_expiry_hours,
            self.auth.remember_me_expiry_hours,
            if self.auth.jwt_secret.is_some() {
                "From environment"
            } else {
                "Generated at startup"
            },
            self.planner.default_daily_study_hours,
            self.cors.allowed_origins,
            self.environment
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

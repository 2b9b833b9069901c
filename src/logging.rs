// ABOUTME: Logging configuration and structured logging setup for the Study Planner API
// ABOUTME: Configures log levels, formatters, and per-crate noise reduction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Study Planner Project

//! Structured logging configuration with environment overrides

use std::env;
use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::constants::service_names;

/// Per-crate directives applied on top of any `RUST_LOG` setting
const NOISE_DIRECTIVES: &[&str] = &["hyper=warn", "sqlx=info", "sqlx::query=info", "tower_http=info"];

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Base log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Emit source file and line numbers with each event
    pub include_location: bool,
    /// Emit thread ids and names with each event
    pub include_thread: bool,
    /// Emit span open/close events
    pub include_spans: bool,
    /// Service name reported at startup
    pub service_name: String,
    /// Service version reported at startup
    pub service_version: String,
    /// Deployment environment label
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            include_spans: false,
            service_name: service_names::SERVER_NAME.into(),
            service_version: service_names::SERVER_VERSION.to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        // Production runs want richer log context
        let verbose = environment == "production";

        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
            format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                Ok("compact") => LogFormat::Compact,
                _ => LogFormat::Pretty,
            },
            include_location: verbose || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: verbose || env::var("LOG_INCLUDE_THREAD").is_ok(),
            include_spans: verbose || env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::SERVER_NAME.into()),
            service_version: env::var("SERVICE_VERSION")
                .unwrap_or_else(|_| service_names::SERVER_VERSION.to_owned()),
            environment,
        }
    }

    /// Build the filter from `RUST_LOG` (or the configured level), with the
    /// noise directives layered on top either way
    fn build_filter(&self) -> EnvFilter {
        let mut filter =
            env::var("RUST_LOG").map_or_else(|_| EnvFilter::new(&self.level), EnvFilter::new);

        for directive in NOISE_DIRECTIVES {
            if let Ok(parsed) = directive.parse() {
                filter = filter.add_directive(parsed);
            }
        }

        // Keep our own crate at the configured level
        if let Ok(parsed) = format!("study_planner={}", self.level).parse() {
            filter = filter.add_directive(parsed);
        }

        filter
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if the tracing subscriber fails to initialize
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.build_filter());

        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_thread_names(self.include_thread)
                        .with_writer(io::stdout)
                        .with_span_events(span_events)
                        .json(),
                )
                .init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_thread_names(self.include_thread)
                        .with_writer(io::stdout)
                        .with_span_events(span_events),
                )
                .init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(io::stdout),
                )
                .init(),
        }

        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Study Planner server starting up"
        );

        Ok(())
    }
}

/// Initialize logging with default configuration
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_default() -> Result<()> {
    LoggingConfig::default().init()
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

/// Application-specific logging utilities
pub struct AppLogger;

impl AppLogger {
    /// Log user authentication events
    pub fn log_auth_event(user_id: &str, event: &str, success: bool, details: Option<&str>) {
        info!(
            user.id = %user_id,
            auth.event = %event,
            auth.success = %success,
            auth.details = details.unwrap_or(""),
            "Authentication event"
        );
    }

    /// Log study plan computations
    pub fn log_plan_computation(user_id: &str, subject_count: usize, recommendation_count: usize) {
        info!(
            user.id = %user_id,
            plan.subjects = %subject_count,
            plan.recommendations = %recommendation_count,
            "Study plan computed"
        );
    }
}

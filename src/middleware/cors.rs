// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Provides Cross-Origin Resource Sharing setup for web client access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Study Planner Project

use axum::http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::environment::ServerConfig;

/// Configure `CORS` settings for the study planner API
///
/// Origins come from the `CORS_ALLOWED_ORIGINS` configuration value.
/// A wildcard (`*`) or empty list allows any origin, which suits local
/// development; production deployments list their frontend origins
/// explicitly, comma-separated.
pub fn setup_cors(config: &ServerConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origins(&config.cors.allowed_origins))
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("authorization"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("x-requested-with"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
}

/// Translate the comma-separated origin list into an `AllowOrigin` policy
fn allowed_origins(configured: &str) -> AllowOrigin {
    if configured.is_empty() || configured == "*" {
        return AllowOrigin::any();
    }

    let origins: Vec<HeaderValue> = configured
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    if origins.is_empty() {
        // Nothing in the list parsed as a valid origin, stay open
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    }
}

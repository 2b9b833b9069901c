// ABOUTME: Health and readiness endpoints for deployment probes
// ABOUTME: Reports service identity and database connectivity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Study Planner Project

//! Health check routes
//!
//! This module provides health and readiness endpoints for monitoring
//! and load balancer health checks.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

use crate::constants::service_names;
use crate::resources::ServerResources;

/// Health check route handlers
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/health/ready", get(Self::handle_readiness))
            .with_state(resources)
    }

    /// Basic liveness check with service identity
    async fn handle_health(State(resources): State<Arc<ServerResources>>) -> Response {
        let database_ok = resources.database.get_user_count().await.is_ok();
        let body = json!({
            "status": if database_ok { "ok" } else { "degraded" },
            "service": service_names::SERVER_NAME,
            "version": service_names::SERVER_VERSION,
            "database": if database_ok { "connected" } else { "unavailable" },
            "timestamp": chrono::Utc::now().to_rfc3339(),
        });
        (StatusCode::OK, Json(body)).into_response()
    }

    /// Readiness check that fails when the database is unreachable
    async fn handle_readiness(State(resources): State<Arc<ServerResources>>) -> Response {
        match resources.database.get_user_count().await {
            Ok(_) => (StatusCode::OK, Json(json!({"status": "ready"}))).into_response(),
            Err(e) => {
                tracing::warn!("Readiness check failed: {}", e);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({"status": "degraded", "reason": "database unavailable"})),
                )
                    .into_response()
            }
        }
    }
}

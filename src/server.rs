// ABOUTME: HTTP server assembly wiring all route groups, CORS, and tracing
// ABOUTME: Owns the listener lifecycle including graceful shutdown on Ctrl-C
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Study Planner Project

//! Study planner HTTP server
//!
//! Assembles the domain routers behind one axum `Router`, layers CORS and
//! request tracing on top, and serves until a shutdown signal arrives.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::auth::AuthManager;
use crate::config::environment::ServerConfig;
use crate::database::Database;
use crate::middleware::setup_cors;
use crate::resources::ServerResources;
use crate::routes::{
    AuthRoutes, HealthRoutes, OAuthRoutes, QuizRoutes, QuoteRoutes, StudyPlanRoutes,
    SubjectRoutes, UserRoutes,
};

/// HTTP server for the study planner API
#[derive(Clone)]
pub struct StudyPlannerServer {
    resources: Arc<ServerResources>,
}

impl StudyPlannerServer {
    /// Create a new server with centralized resource management
    #[must_use]
    pub fn new(database: Database, auth_manager: AuthManager, config: Arc<ServerConfig>) -> Self {
        let resources = Arc::new(ServerResources::new(database, auth_manager, config));
        Self { resources }
    }

    /// Shared resources backing this server
    #[must_use]
    pub const fn resources(&self) -> &Arc<ServerResources> {
        &self.resources
    }

    /// Assemble the full API router
    ///
    /// Exposed so tests can serve the router on an ephemeral port without
    /// going through `run`.
    #[must_use]
    pub fn router(resources: Arc<ServerResources>) -> Router {
        let cors = setup_cors(&resources.config);

        Router::new()
            .merge(AuthRoutes::routes(Arc::clone(&resources)))
            .merge(OAuthRoutes::routes())
            .merge(SubjectRoutes::routes(Arc::clone(&resources)))
            .merge(QuizRoutes::routes(Arc::clone(&resources)))
            .merge(StudyPlanRoutes::routes(Arc::clone(&resources)))
            .merge(QuoteRoutes::routes(Arc::clone(&resources)))
            .merge(UserRoutes::routes(Arc::clone(&resources)))
            .merge(HealthRoutes::routes(resources))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Run the server until a shutdown signal arrives
    ///
    /// # Errors
    ///
    /// Returns an error if the listener fails to bind or the server loop
    /// terminates abnormally.
    pub async fn run(self) -> Result<()> {
        let port = self.resources.config.http_port;
        info!("Starting study planner server on port {}", port);

        let app = Self::router(self.resources);

        let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{port}"))
            .await
            .with_context(|| format!("Failed to bind HTTP listener on port {port}"))?;

        info!("HTTP server listening on http://127.0.0.1:{}", port);
        info!("  POST /api/signup, /api/check-email, /api/login, /api/logout");
        info!("  GET  /api/user-subjects, POST /api/update-subjects");
        info!("  POST /api/quiz-attempts");
        info!("  GET  /api/study-plan, /api/dashboard");
        info!("  GET  /api/random-quote, GET/POST /api/quotes");
        info!("  GET  /api/users, /api/users/{{id}}/subjects");
        info!("  GET  /health, /health/ready");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server terminated abnormally")?;

        info!("Server stopped");
        Ok(())
    }
}

/// Resolve when the process receives Ctrl-C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received, stopping server");
}

// ABOUTME: Centralized resource container for dependency injection in the HTTP server
// ABOUTME: Manages shared resources like the database pool, auth manager, and planners
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Study Planner Project

//! # Server Resources Module
//!
//! Centralized resource container for dependency injection. Route handlers
//! receive one `Arc<ServerResources>` instead of rebuilding expensive
//! objects per request.

use std::sync::Arc;

use crate::auth::AuthManager;
use crate::config::environment::ServerConfig;
use crate::database::Database;
use crate::intelligence::{RecommendationEngine, ScheduleAllocator};
use crate::middleware::AuthMiddleware;

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    pub database: Arc<Database>,
    pub auth_manager: Arc<AuthManager>,
    pub auth_middleware: Arc<AuthMiddleware>,
    pub recommendation_engine: Arc<RecommendationEngine>,
    pub schedule_allocator: Arc<ScheduleAllocator>,
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create new server resources with proper Arc sharing
    #[must_use]
    pub fn new(database: Database, auth_manager: AuthManager, config: Arc<ServerConfig>) -> Self {
        let database_arc = Arc::new(database);
        let auth_manager_arc = Arc::new(auth_manager);

        let auth_middleware = Arc::new(AuthMiddleware::new(
            auth_manager_arc.clone(),
            database_arc.clone(),
        ));

        // One engine and one allocator serve every request
        let recommendation_engine = Arc::new(RecommendationEngine::new());
        let schedule_allocator = Arc::new(ScheduleAllocator::new());

        Self {
            database: database_arc,
            auth_manager: auth_manager_arc,
            auth_middleware,
            recommendation_engine,
            schedule_allocator,
            config,
        }
    }
}

// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides common database, auth, and user creation helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Study Planner Project
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `study_planner`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use anyhow::Result;
use chrono::Utc;
use std::sync::{Arc, Once};
use study_planner::{
    auth::{generate_jwt_secret, AuthManager},
    config::environment::ServerConfig,
    database::Database,
    models::{SubjectConfidence, User},
    resources::ServerResources,
};
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Arc<Database>> {
    init_test_logging();
    let database = Arc::new(Database::new("sqlite::memory:").await?);
    Ok(database)
}

/// Create test authentication manager
pub fn create_test_auth_manager() -> Arc<AuthManager> {
    let jwt_secret = generate_jwt_secret().expect("Failed to generate JWT secret");
    Arc::new(AuthManager::new(&jwt_secret, 24, 720))
}

/// Create a standard test user
pub async fn create_test_user(database: &Database) -> Result<(Uuid, User)> {
    create_test_user_with_email(database, "student@example.com").await
}

/// Create a test user with custom email
pub async fn create_test_user_with_email(database: &Database, email: &str) -> Result<(Uuid, User)> {
    let user = User::new(
        "Test Student".to_owned(),
        email.to_owned(),
        "test_hash".to_owned(),
        "10".to_owned(),
    );

    let user_id = database.create_user(&user).await?;
    Ok((user_id, user))
}

/// Register subjects with confidence levels for a user
pub async fn register_subjects(
    database: &Database,
    user_id: Uuid,
    subjects: &[(&str, u8)],
) -> Result<()> {
    let rows: Vec<SubjectConfidence> = subjects
        .iter()
        .map(|(name, level)| SubjectConfidence {
            user_id,
            subject_name: (*name).to_owned(),
            confidence_level: *level,
            created_at: Utc::now(),
        })
        .collect();
    database.replace_user_subjects(user_id, &rows).await?;
    Ok(())
}

/// Create test `ServerResources` with all components properly initialized
pub async fn create_test_server_resources() -> Result<Arc<ServerResources>> {
    init_test_logging();
    let database = Database::new("sqlite::memory:").await?;

    let jwt_secret = generate_jwt_secret().expect("Failed to generate JWT secret");
    let auth_manager = AuthManager::new(&jwt_secret, 24, 720);

    let config = Arc::new(ServerConfig::default());

    Ok(Arc::new(ServerResources::new(
        database,
        auth_manager,
        config,
    )))
}

/// Lightweight test environment for simple tests
/// Returns (database, `user_id`)
pub async fn setup_simple_test_environment() -> Result<(Arc<Database>, Uuid)> {
    let database = create_test_database().await?;
    let (user_id, _user) = create_test_user(&database).await?;
    Ok((database, user_id))
}

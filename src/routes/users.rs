// ABOUTME: User directory route handlers for the overview pages
// ABOUTME: Lists registered users with their subject confidence ratings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Study Planner Project

//! User directory routes
//!
//! These endpoints back the overview pages that list registered students
//! and their subjects. They expose no password hashes or session data.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::routes::subjects::SubjectEntry;

/// One user in the directory listing
#[derive(Debug, Serialize)]
pub struct DirectoryEntry {
    pub id: String,
    pub name: String,
    pub email: String,
    pub grade: String,
    pub stream: Option<String>,
    pub subjects: Vec<SubjectEntry>,
}

/// Directory listing response
#[derive(Debug, Serialize)]
pub struct DirectoryResponse {
    pub users: Vec<DirectoryEntry>,
}

/// Summary identity for the per-user subjects view
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Subjects for one user
#[derive(Debug, Serialize)]
pub struct UserSubjectsView {
    pub user: UserSummary,
    pub subjects: Vec<SubjectEntry>,
}

/// User directory route handlers
pub struct UserRoutes;

impl UserRoutes {
    /// Create the user directory routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/users", get(Self::handle_list_users))
            .route("/api/users/{id}/subjects", get(Self::handle_user_subjects))
            .with_state(resources)
    }

    /// List all users with their subject confidences
    async fn handle_list_users(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let users = resources.database.get_users().await?;

        let mut entries = Vec::with_capacity(users.len());
        for user in users {
            let subjects = resources.database.get_user_subjects(user.id).await?;
            entries.push(DirectoryEntry {
                id: user.id.to_string(),
                name: user.name,
                email: user.email,
                grade: user.grade,
                stream: user.stream,
                subjects: subjects
                    .into_iter()
                    .map(|s| SubjectEntry {
                        subject_name: s.subject_name,
                        confidence_level: s.confidence_level,
                    })
                    .collect(),
            });
        }

        Ok((StatusCode::OK, Json(DirectoryResponse { users: entries })).into_response())
    }

    /// Show one user's subjects by user id
    async fn handle_user_subjects(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let user_id = Uuid::parse_str(&id)
            .map_err(|_| AppError::invalid_input("Invalid user ID format"))?;

        let user = resources
            .database
            .get_user(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {user_id}")))?;

        let subjects = resources.database.get_user_subjects(user_id).await?;

        Ok((
            StatusCode::OK,
            Json(UserSubjectsView {
                user: UserSummary {
                    id: user.id.to_string(),
                    name: user.name,
                    email: user.email,
                },
                subjects: subjects
                    .into_iter()
                    .map(|s| SubjectEntry {
                        subject_name: s.subject_name,
                        confidence_level: s.confidence_level,
                    })
                    .collect(),
            }),
        )
            .into_response())
    }
}

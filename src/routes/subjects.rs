// ABOUTME: Subject confidence route handlers for listing and updating enrollments
// ABOUTME: Lets authenticated students manage their per-subject confidence ratings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Study Planner Project

//! Subject confidence routes
//!
//! Students register subjects with a self-rated confidence from 1 to 10.
//! These routes expose the current enrollment and replace it wholesale.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::SubjectConfidence;
use crate::resources::ServerResources;

/// One subject with its confidence rating
#[derive(Debug, Serialize)]
pub struct SubjectEntry {
    pub subject_name: String,
    pub confidence_level: u8,
}

/// Response listing a student's subjects
#[derive(Debug, Serialize)]
pub struct UserSubjectsResponse {
    pub subjects: Vec<SubjectEntry>,
}

/// Request replacing a student's subject enrollment
#[derive(Debug, Deserialize)]
pub struct UpdateSubjectsRequest {
    /// Subject name to self-rated confidence (1-10)
    pub subjects: HashMap<String, u8>,
}

/// Confirmation for a subject update
#[derive(Debug, Serialize)]
pub struct UpdateSubjectsResponse {
    pub success: bool,
    pub message: String,
}

/// Subject management route handlers
pub struct SubjectRoutes;

impl SubjectRoutes {
    /// Create all subject management routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/user-subjects", get(Self::handle_list_subjects))
            .route("/api/update-subjects", post(Self::handle_update_subjects))
            .with_state(resources)
    }

    /// List the authenticated user's subjects with confidence ratings
    async fn handle_list_subjects(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let user = resources.auth_middleware.authenticate_request(&headers).await?;

        let subjects = resources.database.get_user_subjects(user.user_id).await?;
        let entries = subjects
            .into_iter()
            .map(|s| SubjectEntry {
                subject_name: s.subject_name,
                confidence_level: s.confidence_level,
            })
            .collect();

        Ok((StatusCode::OK, Json(UserSubjectsResponse { subjects: entries })).into_response())
    }

    /// Replace the authenticated user's subject enrollment
    async fn handle_update_subjects(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<UpdateSubjectsRequest>,
    ) -> Result<Response, AppError> {
        let user = resources.auth_middleware.authenticate_request(&headers).await?;

        Self::validate_subjects(&request.subjects)?;

        let rows: Vec<SubjectConfidence> = request
            .subjects
            .iter()
            .map(|(name, level)| SubjectConfidence {
                user_id: user.user_id,
                subject_name: name.trim().to_owned(),
                confidence_level: *level,
                created_at: Utc::now(),
            })
            .collect();
        resources
            .database
            .replace_user_subjects(user.user_id, &rows)
            .await?;

        tracing::info!(
            user_id = %user.user_id,
            subject_count = rows.len(),
            "Updated subject enrollment"
        );

        Ok((
            StatusCode::OK,
            Json(UpdateSubjectsResponse {
                success: true,
                message: "Subjects updated successfully".into(),
            }),
        )
            .into_response())
    }

    /// Reject empty enrollments, blank names, and out-of-scale ratings
    fn validate_subjects(subjects: &HashMap<String, u8>) -> AppResult<()> {
        if subjects.is_empty() {
            return Err(AppError::invalid_input("At least one subject is required"));
        }
        for (name, level) in subjects {
            if name.trim().is_empty() {
                return Err(AppError::invalid_input("Subject name must not be empty"));
            }
            if !(1..=10).contains(level) {
                return Err(AppError::invalid_input(format!(
                    "Confidence level {level} for '{name}' is outside the 1-10 scale"
                )));
            }
        }
        Ok(())
    }
}

// ABOUTME: Quiz attempt route handlers for recording practice scores
// ABOUTME: Validates scores and ties each attempt to a registered subject
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Study Planner Project

//! Quiz attempt routes
//!
//! Recorded attempts are the objective half of the planner: the per-subject
//! average and count they produce are compared against self-rated confidence
//! when recommendations are computed.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::constants::limits;
use crate::errors::AppError;
use crate::models::QuizAttempt;
use crate::resources::ServerResources;

/// Request recording one quiz attempt
#[derive(Debug, Deserialize)]
pub struct RecordAttemptRequest {
    pub subject_name: String,
    /// Score as a percentage (0-100)
    pub score: f64,
}

/// Confirmation for a recorded attempt
#[derive(Debug, Serialize)]
pub struct RecordAttemptResponse {
    pub success: bool,
    pub message: String,
    pub attempt_id: String,
}

/// Quiz attempt route handlers
pub struct QuizRoutes;

impl QuizRoutes {
    /// Create the quiz attempt routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/quiz-attempts", post(Self::handle_record_attempt))
            .with_state(resources)
    }

    /// Record a quiz attempt for one of the caller's subjects
    async fn handle_record_attempt(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<RecordAttemptRequest>,
    ) -> Result<Response, AppError> {
        let user = resources.auth_middleware.authenticate_request(&headers).await?;

        let subject_name = request.subject_name.trim().to_owned();
        if subject_name.is_empty() {
            return Err(AppError::invalid_input("Subject name must not be empty"));
        }
        // NaN fails the range check as well
        if !(0.0..=limits::MAX_QUIZ_SCORE).contains(&request.score) {
            return Err(AppError::invalid_input(format!(
                "Score {} is outside the 0-100 range",
                request.score
            )));
        }

        let registered = resources
            .database
            .subject_exists(user.user_id, &subject_name)
            .await?;
        if !registered {
            return Err(AppError::not_found(format!("Subject '{subject_name}'")));
        }

        let attempt = QuizAttempt::new(user.user_id, subject_name, request.score);
        resources.database.record_quiz_attempt(&attempt).await?;

        tracing::info!(
            user_id = %user.user_id,
            subject = %attempt.subject_name,
            score = attempt.score,
            "Recorded quiz attempt"
        );

        Ok((
            StatusCode::CREATED,
            Json(RecordAttemptResponse {
                success: true,
                message: "Quiz attempt recorded".into(),
                attempt_id: attempt.id.to_string(),
            }),
        )
            .into_response())
    }
}

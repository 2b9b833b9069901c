// ABOUTME: Study plan and dashboard route handlers driving the recommendation core
// ABOUTME: Aggregates performance data and runs the engine and allocator per request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Study Planner Project

//! Study plan routes
//!
//! `GET /api/study-plan` runs the full pipeline for the caller: load
//! per-subject performance aggregates, compute recommendations, and lay the
//! week out. `GET /api/dashboard` bundles the same plan with the user's
//! profile and a motivational quote for the landing page.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::errors::{AppError, AppResult};
use crate::intelligence::{Recommendation, WeeklySchedule};
use crate::logging::AppLogger;
use crate::models::{MotivationalQuote, User};
use crate::resources::ServerResources;
use crate::routes::auth::UserInfo;

/// A computed study plan
#[derive(Debug, Serialize)]
pub struct StudyPlanResponse {
    pub recommendations: Vec<Recommendation>,
    pub weekly_schedule: WeeklySchedule,
}

/// Dashboard payload combining profile, quote, and plan
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub user: UserInfo,
    pub quote: Option<MotivationalQuote>,
    pub study_plan: StudyPlanResponse,
}

/// Study plan computation service
#[derive(Clone)]
pub struct StudyPlanService {
    resources: Arc<ServerResources>,
}

impl StudyPlanService {
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Compute the full study plan for a user
    ///
    /// # Errors
    ///
    /// Returns an error when the performance aggregates fail validation or
    /// a database operation fails.
    pub async fn build_study_plan(&self, user: &User) -> AppResult<StudyPlanResponse> {
        let performances = self
            .resources
            .database
            .get_subject_performance(user.id)
            .await?;

        let recommendations = self
            .resources
            .recommendation_engine
            .compute_recommendations(&performances)?;

        let daily_study_hours = user
            .daily_study_hours
            .unwrap_or(self.resources.config.planner.default_daily_study_hours);
        let weekly_schedule = self.resources.schedule_allocator.build_weekly_schedule(
            &performances,
            &recommendations,
            daily_study_hours,
        )?;

        AppLogger::log_plan_computation(
            &user.id.to_string(),
            performances.len(),
            recommendations.len(),
        );

        Ok(StudyPlanResponse {
            recommendations,
            weekly_schedule,
        })
    }
}

/// Study plan route handlers
pub struct StudyPlanRoutes;

impl StudyPlanRoutes {
    /// Create the study plan and dashboard routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/study-plan", get(Self::handle_study_plan))
            .route("/api/dashboard", get(Self::handle_dashboard))
            .with_state(resources)
    }

    /// Compute and return the caller's weekly study plan
    async fn handle_study_plan(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let user = Self::load_user(&resources, &headers).await?;

        let service = StudyPlanService::new(resources);
        let plan = service.build_study_plan(&user).await?;

        Ok((StatusCode::OK, Json(plan)).into_response())
    }

    /// Return the dashboard bundle for the caller
    async fn handle_dashboard(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let user = Self::load_user(&resources, &headers).await?;

        let quote = resources.database.get_random_active_quote().await?;
        let service = StudyPlanService::new(Arc::clone(&resources));
        let study_plan = service.build_study_plan(&user).await?;

        Ok((
            StatusCode::OK,
            Json(DashboardResponse {
                user: UserInfo::from_user(&user),
                quote,
                study_plan,
            }),
        )
            .into_response())
    }

    /// Authenticate the request and load the full user record
    async fn load_user(
        resources: &Arc<ServerResources>,
        headers: &HeaderMap,
    ) -> Result<User, AppError> {
        let authenticated = resources.auth_middleware.authenticate_request(headers).await?;
        resources
            .database
            .get_user(authenticated.user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {}", authenticated.user_id)))
    }
}

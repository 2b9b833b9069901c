// ABOUTME: Placeholder endpoints for Google signup and login
// ABOUTME: Returns 501 Not Implemented until a real OAuth flow is wired in
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Study Planner Project

//! Google OAuth placeholder routes
//!
//! The product surfaces "Continue with Google" buttons, but the OAuth flow
//! itself is not implemented. These endpoints keep the API shape stable for
//! the frontend while returning an honest 501.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;

/// Google OAuth placeholder route handlers
pub struct OAuthRoutes;

impl OAuthRoutes {
    /// Create the OAuth placeholder routes
    pub fn routes() -> Router {
        Router::new()
            .route("/api/google-signup", post(Self::handle_google_signup))
            .route("/api/google-login", post(Self::handle_google_login))
    }

    async fn handle_google_signup() -> Response {
        (
            StatusCode::NOT_IMPLEMENTED,
            Json(json!({
                "message": "Google signup would be implemented here with OAuth",
                "status": "not_implemented",
            })),
        )
            .into_response()
    }

    async fn handle_google_login() -> Response {
        (
            StatusCode::NOT_IMPLEMENTED,
            Json(json!({
                "message": "Google login would be implemented here with OAuth",
                "status": "not_implemented",
            })),
        )
            .into_response()
    }
}

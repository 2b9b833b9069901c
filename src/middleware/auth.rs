// ABOUTME: Request authentication middleware for the HTTP API
// ABOUTME: Validates bearer tokens and resolves them to a known user account
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Study Planner Project

use std::sync::Arc;

use axum::http::HeaderMap;
use uuid::Uuid;

use crate::auth::AuthManager;
use crate::database::Database;
use crate::errors::{AppError, AppResult};

/// Identity extracted from a validated request
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The caller's user ID
    pub user_id: Uuid,
    /// The caller's email address
    pub email: String,
}

/// Middleware for bearer-token authentication
#[derive(Clone)]
pub struct AuthMiddleware {
    auth_manager: Arc<AuthManager>,
    database: Arc<Database>,
}

impl AuthMiddleware {
    /// Create new auth middleware
    #[must_use]
    pub const fn new(auth_manager: Arc<AuthManager>, database: Arc<Database>) -> Self {
        Self {
            auth_manager,
            database,
        }
    }

    /// Authenticate a request from its headers
    ///
    /// Expects an `Authorization: Bearer <token>` header. The token subject
    /// must resolve to an existing user account.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The authorization header is missing or not a bearer token
    /// - JWT validation fails (invalid signature, expired, malformed)
    /// - The token subject is not a valid user ID
    /// - The user no longer exists
    #[tracing::instrument(
        skip(self, headers),
        fields(user_id = tracing::field::Empty, success = tracing::field::Empty)
    )]
    pub async fn authenticate_request(&self, headers: &HeaderMap) -> AppResult<AuthenticatedUser> {
        let auth_header = headers.get("authorization").and_then(|h| h.to_str().ok());

        let Some(header) = auth_header else {
            tracing::warn!("Authentication failed: Missing authorization header");
            return Err(AppError::auth_required());
        };

        let Some(token) = header.strip_prefix("Bearer ") else {
            tracing::warn!("Authentication failed: Authorization header is not a bearer token");
            return Err(AppError::auth_invalid(
                "Invalid authorization header format - must be 'Bearer <token>'",
            ));
        };

        let claims = self.auth_manager.validate_token_detailed(token)?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::auth_invalid("Invalid user ID in token"))?;

        let user = self
            .database
            .get_user(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {user_id}")))?;

        tracing::Span::current()
            .record("user_id", user_id.to_string())
            .record("success", true);

        Ok(AuthenticatedUser {
            user_id,
            email: user.email,
        })
    }
}

// ABOUTME: User authentication route handlers for signup, login, and logout
// ABOUTME: Provides REST endpoints for account creation and JWT session management
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Study Planner Project

//! Authentication routes for user management
//!
//! This module handles student registration, login, and logout. Handlers
//! are thin wrappers that delegate business logic to `AuthService`.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::constants::{error_messages, limits};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::logging::AppLogger;
use crate::models::{SubjectConfidence, User};
use crate::resources::ServerResources;

/// User registration request
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub grade: String,
    pub stream: Option<String>,
    pub daily_study_hours: Option<f64>,
    pub hobbies: Option<String>,
    pub exams: Option<Vec<String>>,
    /// Subject name to self-rated confidence (1-10)
    pub subjects: HashMap<String, u8>,
}

/// User registration response
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    pub user_id: String,
}

/// Email availability request
#[derive(Debug, Deserialize)]
pub struct CheckEmailRequest {
    pub email: String,
}

/// Email availability response
#[derive(Debug, Serialize)]
pub struct CheckEmailResponse {
    pub exists: bool,
}

/// User login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    /// Extends the session expiry when set
    #[serde(default)]
    pub remember: bool,
}

/// User info for login and dashboard responses
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub grade: String,
    pub stream: Option<String>,
    pub daily_study_hours: Option<f64>,
}

impl UserInfo {
    /// Build the public view of a user account
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            grade: user.grade.clone(),
            stream: user.stream.clone(),
            daily_study_hours: user.daily_study_hours,
        }
    }
}

/// User login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub expires_at: String,
    pub user: UserInfo,
    /// Subject name to self-rated confidence (1-10)
    pub subjects: HashMap<String, u8>,
}

/// Logout confirmation
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
    pub message: String,
}

/// Authentication service for business logic
#[derive(Clone)]
pub struct AuthService {
    resources: Arc<ServerResources>,
}

impl AuthService {
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Handle user registration
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, the email is already taken,
    /// or a database operation fails.
    pub async fn register(&self, request: RegisterRequest) -> AppResult<RegisterResponse> {
        tracing::info!("User registration attempt for email: {}", request.email);

        Self::validate_registration(&request)?;

        // Check if user already exists
        if self.resources.database.email_exists(&request.email).await? {
            return Err(AppError::new(
                ErrorCode::ResourceAlreadyExists,
                error_messages::USER_ALREADY_EXISTS,
            ));
        }

        // Hash password
        let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        let mut user = User::new(
            request.name.trim().to_owned(),
            request.email.clone(),
            password_hash,
            request.grade.clone(),
        );
        user.stream = request.stream;
        user.daily_study_hours = request.daily_study_hours;
        user.hobbies = request.hobbies;
        user.exams = request.exams;

        let user_id = self.resources.database.create_user(&user).await?;

        let subject_rows: Vec<SubjectConfidence> = request
            .subjects
            .iter()
            .map(|(name, level)| SubjectConfidence {
                user_id,
                subject_name: name.trim().to_owned(),
                confidence_level: *level,
                created_at: Utc::now(),
            })
            .collect();
        self.resources
            .database
            .replace_user_subjects(user_id, &subject_rows)
            .await?;

        AppLogger::log_auth_event(&user_id.to_string(), "signup", true, None);
        tracing::info!(
            "User registered successfully: {} ({})",
            request.email,
            user_id
        );

        Ok(RegisterResponse {
            success: true,
            message: "Account created successfully".into(),
            user_id: user_id.to_string(),
        })
    }

    /// Handle user login
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are invalid or token generation
    /// fails.
    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        tracing::info!("User login attempt for email: {}", request.email);

        if !Self::is_valid_email(&request.email) {
            return Err(AppError::invalid_input(
                error_messages::INVALID_EMAIL_FORMAT,
            ));
        }

        let Some(user) = self
            .resources
            .database
            .get_user_by_email(&request.email)
            .await?
        else {
            AppLogger::log_auth_event(&request.email, "login", false, Some("unknown email"));
            return Err(AppError::auth_invalid(error_messages::INVALID_CREDENTIALS));
        };

        // Verify password using spawn_blocking to avoid blocking async executor
        let password = request.password.clone();
        let password_hash = user.password_hash.clone();
        let is_valid =
            tokio::task::spawn_blocking(move || bcrypt::verify(&password, &password_hash))
                .await
                .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))?
                .map_err(|e| AppError::internal(format!("Password verification error: {e}")))?;

        if !is_valid {
            tracing::error!("Invalid password for user: {}", request.email);
            AppLogger::log_auth_event(&user.id.to_string(), "login", false, Some("wrong password"));
            return Err(AppError::auth_invalid(error_messages::INVALID_CREDENTIALS));
        }

        // Update last active timestamp
        self.resources.database.update_last_active(user.id).await?;

        let token = self
            .resources
            .auth_manager
            .generate_token(&user, request.remember)?;
        let expires_at = self.resources.auth_manager.token_expires_at(request.remember);

        let subjects = self.subject_confidence_map(user.id).await?;

        AppLogger::log_auth_event(&user.id.to_string(), "login", true, None);
        tracing::info!("User logged in successfully: {} ({})", request.email, user.id);

        Ok(LoginResponse {
            success: true,
            message: "Login successful".into(),
            token,
            expires_at: expires_at.to_rfc3339(),
            user: UserInfo::from_user(&user),
            subjects,
        })
    }

    /// Load a user's subjects as a name-to-confidence map
    async fn subject_confidence_map(&self, user_id: uuid::Uuid) -> AppResult<HashMap<String, u8>> {
        let subjects = self.resources.database.get_user_subjects(user_id).await?;
        Ok(subjects
            .into_iter()
            .map(|s| (s.subject_name, s.confidence_level))
            .collect())
    }

    /// Validate the registration payload
    fn validate_registration(request: &RegisterRequest) -> AppResult<()> {
        if request.name.trim().is_empty() {
            return Err(AppError::invalid_input("Name must not be empty"));
        }
        if !Self::is_valid_email(&request.email) {
            return Err(AppError::invalid_input(
                error_messages::INVALID_EMAIL_FORMAT,
            ));
        }
        if !Self::is_valid_password(&request.password) {
            return Err(AppError::invalid_input(error_messages::PASSWORD_TOO_WEAK));
        }
        if request.grade.trim().is_empty() {
            return Err(AppError::invalid_input("Grade must not be empty"));
        }

        // Streams only exist for the senior grades
        let needs_stream = matches!(request.grade.trim(), "11" | "12");
        let has_stream = request
            .stream
            .as_ref()
            .is_some_and(|s| !s.trim().is_empty());
        if needs_stream && !has_stream {
            return Err(AppError::invalid_input(
                "Stream is required for grades 11 and 12",
            ));
        }

        if request.subjects.is_empty() {
            return Err(AppError::invalid_input("At least one subject is required"));
        }
        for (name, level) in &request.subjects {
            if name.trim().is_empty() {
                return Err(AppError::invalid_input("Subject name must not be empty"));
            }
            if !(1..=10).contains(level) {
                return Err(AppError::invalid_input(format!(
                    "Confidence level {level} for '{name}' is outside the 1-10 scale"
                )));
            }
        }

        if let Some(hours) = request.daily_study_hours {
            if !hours.is_finite() || hours <= 0.0 {
                return Err(AppError::invalid_input(
                    "daily_study_hours must be a positive number",
                ));
            }
        }

        Ok(())
    }

    /// Validate email format
    #[must_use]
    pub fn is_valid_email(email: &str) -> bool {
        // Simple email validation
        if email.len() <= 5 {
            return false;
        }
        let Some(at_pos) = email.find('@') else {
            return false;
        };
        if at_pos == 0 || at_pos == email.len() - 1 {
            return false; // @ at start or end
        }
        let domain_part = &email[at_pos + 1..];
        domain_part.contains('.')
    }

    /// Validate password strength
    #[must_use]
    pub const fn is_valid_password(password: &str) -> bool {
        password.len() >= limits::MIN_PASSWORD_LENGTH
    }
}

/// Authentication route handlers
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create all authentication routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/signup", post(Self::handle_signup))
            .route("/api/check-email", post(Self::handle_check_email))
            .route("/api/login", post(Self::handle_login))
            .route("/api/logout", post(Self::handle_logout))
            .with_state(resources)
    }

    /// Handle user registration
    async fn handle_signup(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<RegisterRequest>,
    ) -> Result<Response, AppError> {
        let service = AuthService::new(resources);
        let response = service.register(request).await?;
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Handle email availability checks for the signup form
    async fn handle_check_email(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<CheckEmailRequest>,
    ) -> Result<Response, AppError> {
        let exists = resources.database.email_exists(&request.email).await?;
        Ok((StatusCode::OK, Json(CheckEmailResponse { exists })).into_response())
    }

    /// Handle user login
    async fn handle_login(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<LoginRequest>,
    ) -> Result<Response, AppError> {
        let service = AuthService::new(resources);
        let response = service.login(request).await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle logout; tokens are stateless, so this confirms and touches activity
    async fn handle_logout(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let user = resources.auth_middleware.authenticate_request(&headers).await?;

        resources.database.update_last_active(user.user_id).await?;
        AppLogger::log_auth_event(&user.user_id.to_string(), "logout", true, None);

        Ok((
            StatusCode::OK,
            Json(LogoutResponse {
                success: true,
                message: "Logged out successfully".into(),
            }),
        )
            .into_response())
    }
}

// ABOUTME: Route module organization for the study planner HTTP API
// ABOUTME: Provides centralized route definitions organized by domain with clean separation of concerns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Study Planner Project

//! Route module for the study planner server
//!
//! This module organizes all HTTP routes by domain for better maintainability
//! and clear separation of concerns. Each domain module contains only route
//! definitions and thin handler functions that delegate to service layers.

/// Authentication and registration routes
pub mod auth;
/// Health check and system status routes
pub mod health;
/// Google OAuth placeholder routes
pub mod oauth;
/// Quiz attempt recording routes
pub mod quizzes;
/// Motivational quote routes
pub mod quotes;
/// Study plan and dashboard routes
pub mod study_plan;
/// Subject confidence management routes
pub mod subjects;
/// User directory routes
pub mod users;

// Re-export commonly used types from each domain

/// Authentication route handlers
pub use auth::AuthRoutes;
/// Authentication service
pub use auth::AuthService;
/// Login request payload
pub use auth::LoginRequest;
/// Login response with token
pub use auth::LoginResponse;
/// User registration request
pub use auth::RegisterRequest;
/// Registration response with user details
pub use auth::RegisterResponse;
/// User information
pub use auth::UserInfo;
/// Health check route handlers
pub use health::HealthRoutes;
/// OAuth placeholder route handlers
pub use oauth::OAuthRoutes;
/// Quiz attempt route handlers
pub use quizzes::QuizRoutes;
/// Quote route handlers
pub use quotes::QuoteRoutes;
/// Study plan route handlers
pub use study_plan::StudyPlanRoutes;
/// Study plan computation service
pub use study_plan::StudyPlanService;
/// Subject management route handlers
pub use subjects::SubjectRoutes;
/// User directory route handlers
pub use users::UserRoutes;

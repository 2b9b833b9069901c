// ABOUTME: HTTP middleware for request authentication and cross-origin policy
// ABOUTME: Provides bearer-token validation and CORS layer construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Study Planner Project

pub mod auth;
pub mod cors;

// Authentication middleware
pub use auth::{AuthMiddleware, AuthenticatedUser};

// CORS configuration
pub use cors::setup_cors;

// ABOUTME: Unit tests for auth functionality
// ABOUTME: Validates token lifecycle, validation errors, and the request middleware
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Study Planner Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Utc;
use study_planner::{
    auth::{generate_jwt_secret, AuthManager, JwtValidationError},
    errors::{AppError, ErrorCode},
    middleware::AuthMiddleware,
    models::User,
};

use axum::http::HeaderMap;
use std::sync::Arc;

fn create_test_user() -> User {
    User::new(
        "Test Student".into(),
        "student@example.com".into(),
        "hashed_password_123".into(),
        "10".into(),
    )
}

fn create_auth_manager() -> AuthManager {
    let secret = generate_jwt_secret().expect("Failed to generate JWT secret");
    AuthManager::new(&secret, 24, 720)
}

#[test]
fn test_generate_and_validate_token() {
    let auth_manager = create_auth_manager();
    let user = create_test_user();

    let token = auth_manager.generate_token(&user, false).unwrap();
    assert!(!token.is_empty());

    let claims = auth_manager.validate_token(&token).unwrap();
    assert_eq!(claims.email, "student@example.com");
    assert_eq!(claims.sub, user.id.to_string());
    assert!(claims.exp > Utc::now().timestamp());
}

#[test]
fn test_remember_me_uses_longer_expiry() {
    let auth_manager = create_auth_manager();

    assert_eq!(auth_manager.expiry_hours(false), 24);
    assert_eq!(auth_manager.expiry_hours(true), 720);
    assert!(auth_manager.token_expires_at(true) > auth_manager.token_expires_at(false));
}

#[test]
fn test_expired_token_reports_expiry_details() {
    // Negative expiry produces tokens that are already expired
    let secret = generate_jwt_secret().unwrap();
    let auth_manager = AuthManager::new(&secret, -1, -1);
    let user = create_test_user();

    let token = auth_manager.generate_token(&user, false).unwrap();
    match auth_manager.validate_token_detailed(&token) {
        Err(JwtValidationError::TokenExpired {
            expired_at,
            current_time,
        }) => {
            assert!(expired_at < current_time);
            let message = JwtValidationError::TokenExpired {
                expired_at,
                current_time,
            }
            .to_string();
            assert!(message.contains("expired"));
        }
        other => panic!("Expected TokenExpired error, got {other:?}"),
    }
}

#[test]
fn test_token_signed_with_wrong_secret_is_invalid() {
    let issuing_manager = create_auth_manager();
    let verifying_manager = create_auth_manager();
    let user = create_test_user();

    let token = issuing_manager.generate_token(&user, false).unwrap();
    match verifying_manager.validate_token_detailed(&token) {
        Err(JwtValidationError::TokenInvalid { reason }) => {
            assert!(reason.contains("signature"));
        }
        other => panic!("Expected TokenInvalid error, got {other:?}"),
    }
}

#[test]
fn test_malformed_tokens_are_reported_as_malformed() {
    let auth_manager = create_auth_manager();

    for garbage in ["", "no-dots-here", "a.b.c.d.e", "not.a.jwt"] {
        match auth_manager.validate_token_detailed(garbage) {
            Err(JwtValidationError::TokenMalformed { .. }) => {}
            other => panic!("Expected TokenMalformed for {garbage:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_validation_errors_map_to_auth_error_codes() {
    let now = Utc::now();

    let expired: AppError = JwtValidationError::TokenExpired {
        expired_at: now - chrono::Duration::hours(2),
        current_time: now,
    }
    .into();
    assert_eq!(expired.code, ErrorCode::AuthExpired);

    let invalid: AppError = JwtValidationError::TokenInvalid {
        reason: "Token signature verification failed".into(),
    }
    .into();
    assert_eq!(invalid.code, ErrorCode::AuthInvalid);

    let malformed: AppError = JwtValidationError::TokenMalformed {
        details: "Token format is invalid".into(),
    }
    .into();
    assert_eq!(malformed.code, ErrorCode::AuthMalformed);
}

#[test]
fn test_generated_secrets_are_unique_and_full_length() {
    let first = generate_jwt_secret().unwrap();
    let second = generate_jwt_secret().unwrap();

    assert_eq!(first.len(), 64);
    assert_eq!(second.len(), 64);
    assert_ne!(first, second);
}

#[test]
fn test_tokens_for_same_user_are_unique() {
    let auth_manager = create_auth_manager();
    let user = create_test_user();

    // Issued-at carries a uniqueness counter, so back-to-back tokens differ
    let first = auth_manager.generate_token(&user, false).unwrap();
    let second = auth_manager.generate_token(&user, false).unwrap();
    assert_ne!(first, second);
}

#[tokio::test]
async fn test_middleware_accepts_valid_bearer_token() {
    let database = common::create_test_database().await.unwrap();
    let (user_id, user) = common::create_test_user(&database).await.unwrap();
    let auth_manager = common::create_test_auth_manager();
    let middleware = AuthMiddleware::new(auth_manager.clone(), database);

    let token = auth_manager.generate_token(&user, false).unwrap();
    let mut headers = HeaderMap::new();
    headers.insert("authorization", format!("Bearer {token}").parse().unwrap());

    let authenticated = middleware.authenticate_request(&headers).await.unwrap();
    assert_eq!(authenticated.user_id, user_id);
    assert_eq!(authenticated.email, user.email);
}

#[tokio::test]
async fn test_middleware_rejects_missing_header() {
    let database = common::create_test_database().await.unwrap();
    let middleware = AuthMiddleware::new(common::create_test_auth_manager(), database);

    let result = middleware.authenticate_request(&HeaderMap::new()).await;
    match result {
        Err(e) => assert_eq!(e.code, ErrorCode::AuthRequired),
        Ok(_) => panic!("Expected missing header to be rejected"),
    }
}

#[tokio::test]
async fn test_middleware_rejects_non_bearer_header() {
    let database = common::create_test_database().await.unwrap();
    let middleware = AuthMiddleware::new(common::create_test_auth_manager(), database);

    let mut headers = HeaderMap::new();
    headers.insert("authorization", "Basic dXNlcjpwYXNz".parse().unwrap());

    let result = middleware.authenticate_request(&headers).await;
    match result {
        Err(e) => assert_eq!(e.code, ErrorCode::AuthInvalid),
        Ok(_) => panic!("Expected non-bearer header to be rejected"),
    }
}

#[tokio::test]
async fn test_middleware_rejects_token_for_unknown_user() {
    let database = common::create_test_database().await.unwrap();
    let auth_manager = common::create_test_auth_manager();
    let middleware = AuthMiddleware::new(auth_manager.clone(), database);

    // Valid signature, but the subject was never written to the database
    let ghost = create_test_user();
    let token = auth_manager.generate_token(&ghost, false).unwrap();
    let mut headers = HeaderMap::new();
    headers.insert("authorization", format!("Bearer {token}").parse().unwrap());

    let result = middleware.authenticate_request(&headers).await;
    match result {
        Err(e) => assert_eq!(e.code, ErrorCode::ResourceNotFound),
        Ok(_) => panic!("Expected unknown user to be rejected"),
    }
}

#[tokio::test]
async fn test_middleware_rejects_expired_token() {
    let database = common::create_test_database().await.unwrap();
    let (_, user) = common::create_test_user(&database).await.unwrap();

    let secret = generate_jwt_secret().unwrap();
    let expired_manager = Arc::new(AuthManager::new(&secret, -1, -1));
    let middleware = AuthMiddleware::new(expired_manager.clone(), database);

    let token = expired_manager.generate_token(&user, false).unwrap();
    let mut headers = HeaderMap::new();
    headers.insert("authorization", format!("Bearer {token}").parse().unwrap());

    let result = middleware.authenticate_request(&headers).await;
    match result {
        Err(e) => assert_eq!(e.code, ErrorCode::AuthExpired),
        Ok(_) => panic!("Expected expired token to be rejected"),
    }
}

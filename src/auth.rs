// ABOUTME: JWT-based user authentication and token lifecycle management
// ABOUTME: Handles token generation, validation, and detailed expiry diagnostics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Study Planner Project

//! # Authentication and Session Management
//!
//! This module provides `JWT`-based authentication for the Study Planner
//! server. Tokens are signed with `HS256` using a per-deployment secret;
//! login can request an extended "remember me" expiry.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::constants::{
    crypto::JWT_SECRET_LENGTH,
    time_constants::{MINUTES_PER_HOUR, SECONDS_PER_HOUR},
};
use crate::errors::AppError;
use crate::models::User;

/// Convert a duration to a human-readable format
fn humanize_duration(duration: Duration) -> String {
    let secs = duration.num_seconds().abs();
    let hours = secs / i64::from(SECONDS_PER_HOUR);
    let minutes = (secs / 60) % i64::from(MINUTES_PER_HOUR);

    match (hours, minutes) {
        (0, 0) => format!("{secs} seconds"),
        (0, m) => format!("{m} minutes"),
        (h, _) => format!("{h} hours"),
    }
}

/// `JWT` validation error with detailed information
#[derive(Debug, Clone)]
pub enum JwtValidationError {
    /// Token has expired
    TokenExpired {
        /// When the token expired
        expired_at: DateTime<Utc>,
        /// Current time for reference
        current_time: DateTime<Utc>,
    },
    /// Token signature is invalid
    TokenInvalid {
        /// Reason for invalidity
        reason: String,
    },
    /// Token is malformed (not proper `JWT` format)
    TokenMalformed {
        /// Details about malformation
        details: String,
    },
}

impl std::fmt::Display for JwtValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TokenExpired {
                expired_at,
                current_time,
            } => {
                let over = current_time.signed_duration_since(*expired_at);
                write!(
                    f,
                    "JWT token expired {} ago at {}",
                    humanize_duration(over),
                    expired_at.format("%Y-%m-%d %H:%M:%S UTC")
                )
            }
            Self::TokenInvalid { reason } => {
                write!(f, "JWT token signature is invalid: {reason}")
            }
            Self::TokenMalformed { details } => {
                write!(f, "JWT token is malformed: {details}")
            }
        }
    }
}

impl std::error::Error for JwtValidationError {}

impl From<JwtValidationError> for AppError {
    fn from(error: JwtValidationError) -> Self {
        let message = error.to_string();
        match error {
            JwtValidationError::TokenExpired { .. } => Self::auth_expired(message),
            JwtValidationError::TokenInvalid { .. } => Self::auth_invalid(message),
            JwtValidationError::TokenMalformed { .. } => Self::auth_malformed(message),
        }
    }
}

/// `JWT` claims for user authentication
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User `ID`
    pub sub: String,
    /// User email
    pub email: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

/// Authentication manager for `JWT` tokens
pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry_hours: i64,
    remember_me_expiry_hours: i64,
    /// Monotonic counter to ensure unique timestamps for tokens
    token_counter: AtomicU64,
}

impl AuthManager {
    /// Create a new authentication manager from a signing secret
    #[must_use]
    pub fn new(jwt_secret: &[u8], token_expiry_hours: i64, remember_me_expiry_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(jwt_secret),
            decoding_key: DecodingKey::from_secret(jwt_secret),
            token_expiry_hours,
            remember_me_expiry_hours,
            token_counter: AtomicU64::new(0),
        }
    }

    /// Expiry horizon in hours for the requested session kind
    #[must_use]
    pub const fn expiry_hours(&self, remember: bool) -> i64 {
        if remember {
            self.remember_me_expiry_hours
        } else {
            self.token_expiry_hours
        }
    }

    /// When a token generated now would expire
    #[must_use]
    pub fn token_expires_at(&self, remember: bool) -> DateTime<Utc> {
        Utc::now() + Duration::hours(self.expiry_hours(remember))
    }

    /// Generate a signed `JWT` token for a user
    ///
    /// # Errors
    ///
    /// Returns an error if `JWT` encoding fails
    pub fn generate_token(&self, user: &User, remember: bool) -> Result<String> {
        let now = Utc::now();
        let expiry = now + Duration::hours(self.expiry_hours(remember));

        // Use atomic counter to ensure unique issued-at times
        let counter = self.token_counter.fetch_add(1, Ordering::Relaxed);
        let unique_iat = now.timestamp() * 1000 + i64::try_from(counter % 1000).unwrap_or(0);

        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            iat: unique_iat,
            exp: expiry.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Validate a `JWT` token
    ///
    /// # Errors
    ///
    /// Returns an error if the signature is invalid, the token has expired,
    /// or the token is malformed
    pub fn validate_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)?;
        Ok(token_data.claims)
    }

    /// Validate a `JWT` token with detailed error information
    ///
    /// Expiry is checked separately from decoding so the caller learns when
    /// the token expired, not just that it did.
    ///
    /// # Errors
    ///
    /// Returns a [`JwtValidationError`] distinguishing expired, invalid,
    /// and malformed tokens
    pub fn validate_token_detailed(&self, token: &str) -> Result<Claims, JwtValidationError> {
        let mut relaxed = Validation::new(Algorithm::HS256);
        relaxed.validate_exp = false;

        let claims = decode::<Claims>(token, &self.decoding_key, &relaxed)
            .map(|data| data.claims)
            .map_err(|e| Self::classify_jwt_error(&e))?;

        let current_time = Utc::now();
        if current_time.timestamp() > claims.exp {
            let expired_at = DateTime::from_timestamp(claims.exp, 0).unwrap_or(current_time);
            tracing::warn!(
                "JWT token expired for user {} ({} ago)",
                claims.sub,
                humanize_duration(current_time.signed_duration_since(expired_at))
            );
            return Err(JwtValidationError::TokenExpired {
                expired_at,
                current_time,
            });
        }

        tracing::debug!("JWT token validation successful for user: {}", claims.sub);
        Ok(claims)
    }

    /// Sort `JWT` library errors into signature, format, and catch-all buckets
    fn classify_jwt_error(e: &jsonwebtoken::errors::Error) -> JwtValidationError {
        use jsonwebtoken::errors::ErrorKind;
        tracing::warn!("JWT token validation failed: {e:?}");

        match e.kind() {
            ErrorKind::InvalidSignature => JwtValidationError::TokenInvalid {
                reason: "Token signature verification failed".into(),
            },
            ErrorKind::InvalidToken
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_) => JwtValidationError::TokenMalformed {
                details: format!("Token format is invalid: {e}"),
            },
            _ => JwtValidationError::TokenInvalid {
                reason: format!("Token validation failed: {e}"),
            },
        }
    }
}

/// Generate a cryptographically secure `JWT` signing secret
///
/// # Errors
///
/// Returns an error if the system random number generator fails
pub fn generate_jwt_secret() -> Result<[u8; JWT_SECRET_LENGTH]> {
    use ring::rand::{SecureRandom, SystemRandom};

    let rng = SystemRandom::new();
    let mut secret = [0u8; JWT_SECRET_LENGTH];

    rng.fill(&mut secret).map_err(|e| {
        tracing::error!("Failed to generate cryptographically secure JWT secret: {e}");
        anyhow::anyhow!("JWT secret generation failed")
    })?;

    Ok(secret)
}

// ABOUTME: Core domain models for users, subjects, quiz attempts, and quotes
// ABOUTME: Defines the persistent data structures shared across database and routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Study Planner Project

//! # Data Models
//!
//! This module contains the persistent data structures used throughout the
//! Study Planner server. The study-plan computation types (performance
//! snapshots, recommendations, schedules) live in [`crate::intelligence`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::defaults;

/// A registered student account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: Uuid,
    /// Display name shown on the dashboard
    pub name: String,
    /// Email address, unique across accounts
    pub email: String,
    /// Bcrypt-hashed password, never sent to clients
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// School grade, e.g. "10", "11", "12"
    pub grade: String,
    /// Academic stream, required for grades 11 and 12
    pub stream: Option<String>,
    /// Hours available for study per day
    pub daily_study_hours: Option<f64>,
    /// Free-text hobbies, used for profile display only
    pub hobbies: Option<String>,
    /// Target exams the student is preparing for
    pub exams: Option<Vec<String>>,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
    /// Timestamp of the most recent login
    pub last_active: DateTime<Utc>,
}

impl User {
    /// Create a new user with a generated id and current timestamps
    #[must_use]
    pub fn new(name: String, email: String, password_hash: String, grade: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            grade,
            stream: None,
            daily_study_hours: None,
            hobbies: None,
            exams: None,
            created_at: now,
            last_active: now,
        }
    }

    /// Daily study budget in hours, falling back to the application default
    #[must_use]
    pub fn daily_study_hours_or_default(&self) -> f64 {
        self.daily_study_hours
            .unwrap_or(defaults::DAILY_STUDY_HOURS)
    }
}

/// A subject the student is enrolled in, with their self-rated confidence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectConfidence {
    /// Owning user
    pub user_id: Uuid,
    /// Subject name, unique per user
    pub subject_name: String,
    /// Self-rated confidence on a 1-10 scale
    pub confidence_level: u8,
    /// When the subject was registered
    pub created_at: DateTime<Utc>,
}

/// A single recorded quiz result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizAttempt {
    /// Unique attempt identifier
    pub id: Uuid,
    /// User who took the quiz
    pub user_id: Uuid,
    /// Subject the quiz belongs to
    pub subject_name: String,
    /// Score as a percentage, 0-100
    pub score: f64,
    /// When the attempt was recorded
    pub recorded_at: DateTime<Utc>,
}

impl QuizAttempt {
    /// Create a new attempt with a generated id and current timestamp
    #[must_use]
    pub fn new(user_id: Uuid, subject_name: String, score: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            subject_name,
            score,
            recorded_at: Utc::now(),
        }
    }
}

/// A motivational quote shown on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotivationalQuote {
    /// Database row id
    pub id: i64,
    /// The quote itself
    pub quote_text: String,
    /// Attributed author, "Unknown" when unattributed
    pub author: String,
    /// Thematic category, e.g. "Motivation", "Learning"
    pub category: String,
    /// Inactive quotes are excluded from random selection
    pub is_active: bool,
    /// When the quote was added
    pub created_at: DateTime<Utc>,
}

// ABOUTME: Study intelligence module with performance analysis and schedule planning
// ABOUTME: Defines the core types shared by the recommendation engine and allocator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Study Planner Project

//! # Intelligence Module
//!
//! Adaptive study-plan analysis. The [`RecommendationEngine`] compares each
//! subject's self-rated confidence against recorded quiz performance and
//! emits targeted recommendations; the [`ScheduleAllocator`] turns those
//! recommendations into a concrete weekly timetable.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

pub mod heuristics;
pub mod recommendation_engine;
pub mod schedule_allocator;

pub use recommendation_engine::{RecommendationConfig, RecommendationEngine};
pub use schedule_allocator::{AllocatorConfig, ScheduleAllocator};

/// Aggregated performance snapshot for one subject
///
/// This is the engine's input record, typically produced by joining a
/// student's registered subjects against their quiz history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectPerformance {
    /// Subject name, unique within one student's snapshot
    pub subject_name: String,
    /// Self-rated confidence on a 1-10 scale
    pub confidence_level: u8,
    /// Mean quiz score as a percentage, 0 when no quizzes were taken
    pub avg_score: f64,
    /// Number of quiz attempts backing `avg_score`
    pub quiz_count: u32,
}

impl SubjectPerformance {
    /// Self-rated confidence projected onto the 0-100 score scale
    #[must_use]
    pub fn normalized_confidence(&self) -> f64 {
        f64::from(self.confidence_level) * heuristics::confidence::CONFIDENCE_SCALE
    }

    /// Whether any quiz attempts back this snapshot
    #[must_use]
    pub const fn has_quiz_history(&self) -> bool {
        self.quiz_count > 0
    }

    /// Check the snapshot against the accepted input ranges
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error when the subject name is blank, the
    /// confidence level falls outside the 1-10 scale, or the average score
    /// falls outside 0-100 (a `NaN` score fails the range check as well).
    pub fn validate(&self) -> AppResult<()> {
        if self.subject_name.trim().is_empty() {
            return Err(AppError::invalid_input("subject name must not be empty"));
        }
        let confidence_range = heuristics::confidence::MIN_CONFIDENCE_LEVEL
            ..=heuristics::confidence::MAX_CONFIDENCE_LEVEL;
        if !confidence_range.contains(&self.confidence_level) {
            return Err(AppError::invalid_input(format!(
                "confidence level {} for '{}' is outside the 1-10 scale",
                self.confidence_level, self.subject_name
            )));
        }
        let score_range = heuristics::performance::MIN_SCORE..=heuristics::performance::MAX_SCORE;
        if !score_range.contains(&self.avg_score) {
            return Err(AppError::invalid_input(format!(
                "average score {} for '{}' is outside the 0-100 range",
                self.avg_score, self.subject_name
            )));
        }
        Ok(())
    }
}

/// The rule that produced a recommendation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationType {
    /// Self-rated confidence far above measured performance
    ConfidenceMismatch,
    /// Measured performance far above self-rated confidence
    ConfidenceBoost,
    /// Quiz average below the passing threshold
    WeakPerformance,
    /// No quiz history and low self-rated confidence
    LowConfidence,
}

impl Display for RecommendationType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::ConfidenceMismatch => write!(f, "confidence_mismatch"),
            Self::ConfidenceBoost => write!(f, "confidence_boost"),
            Self::WeakPerformance => write!(f, "weak_performance"),
            Self::LowConfidence => write!(f, "low_confidence"),
        }
    }
}

/// Urgency of a recommendation
///
/// Ordering follows declaration order, so sorting ascending puts
/// high-priority work first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Needs attention this week
    High,
    /// Worth adjusting soon
    Medium,
    /// Informational
    Low,
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// A single study recommendation for one subject
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    /// Subject this recommendation applies to
    pub subject: String,
    /// Rule that fired
    pub recommendation_type: RecommendationType,
    /// Urgency of acting on it
    pub priority: Priority,
    /// One-sentence explanation of what the data shows
    pub reason: String,
    /// Concrete next step for the student
    pub action: String,
    /// Prescribed study sessions per week
    pub sessions_per_week: u32,
    /// Prescribed length of each session in minutes
    pub session_duration_minutes: u32,
}

/// Kind of work a scheduled session should contain
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    /// Active problem solving, prescribed for high-priority subjects
    Practice,
    /// Review of existing material
    Revision,
}

impl Display for SessionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Practice => write!(f, "practice"),
            Self::Revision => write!(f, "revision"),
        }
    }
}

/// Day of the week used as a schedule key
///
/// Ordering follows declaration order so that schedule maps iterate
/// Monday through Sunday.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    /// First day of the study week
    Monday,
    /// Second day
    Tuesday,
    /// Third day
    Wednesday,
    /// Fourth day
    Thursday,
    /// Fifth day
    Friday,
    /// Sixth day
    Saturday,
    /// Last day of the study week
    Sunday,
}

impl Weekday {
    /// All days in schedule order, Monday first
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Day name as it appears in schedule JSON keys
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// One scheduled study session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Subject to study in this session
    pub subject: String,
    /// Session length in minutes
    pub duration_minutes: u32,
    /// Whether the session is practice or revision
    pub session_type: SessionType,
}

/// A full week of planned study sessions
///
/// Every day key is always present, even when no sessions landed on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklySchedule {
    /// Sessions keyed by day, Monday through Sunday
    pub days: BTreeMap<Weekday, Vec<ScheduleEntry>>,
    /// The student's weekly time budget in minutes, for display alongside
    /// the plan; the allocator does not cap sessions against it
    pub total_weekly_minutes: f64,
}

impl WeeklySchedule {
    /// Sum of all scheduled session minutes across the week
    #[must_use]
    pub fn scheduled_minutes(&self) -> u64 {
        self.days
            .values()
            .flatten()
            .map(|entry| u64::from(entry.duration_minutes))
            .sum()
    }

    /// Total number of sessions across the week
    #[must_use]
    pub fn session_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }
}

// ABOUTME: Study heuristic constants used by the recommendation and scheduling engines
// ABOUTME: Centralizes confidence scales, mismatch gaps, and per-rule session prescriptions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Study Planner Project

//! Study heuristic constants
//!
//! This module contains the tuning values behind the study-plan analysis.
//! Keeping them in one place makes the rule thresholds auditable and lets
//! [`RecommendationConfig`](crate::intelligence::RecommendationConfig)
//! override them per engine instance.

/// Confidence scale handling
pub mod confidence {
    /// Lowest self-rating a student can give a subject
    pub const MIN_CONFIDENCE_LEVEL: u8 = 1;

    /// Highest self-rating a student can give a subject
    pub const MAX_CONFIDENCE_LEVEL: u8 = 10;

    /// Multiplier mapping the 1-10 confidence scale onto the 0-100 score scale
    pub const CONFIDENCE_SCALE: f64 = 10.0;

    /// Self-ratings at or below this level count as low confidence
    pub const LOW_CONFIDENCE_CEILING: u8 = 5;
}

/// Confidence-versus-performance mismatch thresholds
pub mod mismatch {
    /// Normalized confidence exceeding the quiz average by more than this
    /// many points signals overconfidence
    pub const OVERCONFIDENCE_GAP: f64 = 30.0;

    /// Normalized confidence falling below the quiz average by more than this
    /// many points signals underconfidence
    pub const UNDERCONFIDENCE_GAP: f64 = -20.0;
}

/// Quiz performance thresholds
pub mod performance {
    /// Quiz averages below this percentage indicate a struggling subject
    pub const WEAK_SCORE_THRESHOLD: f64 = 50.0;

    /// Lower bound of a valid quiz score
    pub const MIN_SCORE: f64 = 0.0;

    /// Upper bound of a valid quiz score
    pub const MAX_SCORE: f64 = 100.0;
}

/// Session prescriptions attached to each recommendation rule
pub mod sessions {
    /// Weekly sessions prescribed for an overconfident subject
    pub const MISMATCH_SESSIONS_PER_WEEK: u32 = 3;

    /// Session length in minutes for an overconfident subject
    pub const MISMATCH_SESSION_MINUTES: u32 = 45;

    /// Weekly sessions prescribed for an underconfident subject
    pub const BOOST_SESSIONS_PER_WEEK: u32 = 2;

    /// Session length in minutes for an underconfident subject
    pub const BOOST_SESSION_MINUTES: u32 = 30;

    /// Weekly sessions prescribed for a weak-performance subject, one per day
    pub const WEAK_PERFORMANCE_SESSIONS_PER_WEEK: u32 = 7;

    /// Session length in minutes for a weak-performance subject
    pub const WEAK_PERFORMANCE_SESSION_MINUTES: u32 = 20;

    /// Weekly sessions prescribed for an untested low-confidence subject
    pub const LOW_CONFIDENCE_SESSIONS_PER_WEEK: u32 = 2;

    /// Session length in minutes for an untested low-confidence subject
    pub const LOW_CONFIDENCE_SESSION_MINUTES: u32 = 40;
}

/// Scheduling defaults for subjects with no active recommendation
pub mod allocation {
    /// Maintenance sessions per week for a subject that triggered no rule
    pub const DEFAULT_SESSIONS_PER_WEEK: u32 = 2;

    /// Maintenance session length in minutes
    pub const DEFAULT_SESSION_MINUTES: u32 = 30;
}

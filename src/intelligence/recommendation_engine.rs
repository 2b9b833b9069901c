// ABOUTME: Study recommendation engine comparing self-rated confidence with quiz results
// ABOUTME: Emits per-subject recommendations for miscalibration and weak performance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Study Planner Project

//! Adaptive study recommendation engine
//!
//! Each subject snapshot is checked against a small set of rules. Subjects
//! with quiz history are screened for calibration problems (confidence far
//! from measured performance) and for weak results; subjects without quiz
//! history are screened for low self-rated confidence. A subject can
//! trigger zero, one, or two recommendations.

use super::heuristics::{confidence, mismatch, performance, sessions};
use super::{Priority, Recommendation, RecommendationType, SubjectPerformance};
use crate::errors::AppResult;

/// Threshold overrides for the recommendation rules
#[derive(Debug, Clone)]
pub struct RecommendationConfig {
    /// Confidence-minus-score gap above which a subject counts as overconfident
    pub overconfidence_gap: f64,
    /// Confidence-minus-score gap below which a subject counts as underconfident
    pub underconfidence_gap: f64,
    /// Quiz average below which a subject counts as weak
    pub weak_score_threshold: f64,
    /// Self-rating at or below which an untested subject counts as low confidence
    pub low_confidence_ceiling: u8,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            overconfidence_gap: mismatch::OVERCONFIDENCE_GAP,
            underconfidence_gap: mismatch::UNDERCONFIDENCE_GAP,
            weak_score_threshold: performance::WEAK_SCORE_THRESHOLD,
            low_confidence_ceiling: confidence::LOW_CONFIDENCE_CEILING,
        }
    }
}

/// Rule-based engine producing study recommendations from subject snapshots
pub struct RecommendationEngine {
    config: RecommendationConfig,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationEngine {
    /// Create an engine with the standard thresholds
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: RecommendationConfig::default(),
        }
    }

    /// Create an engine with custom thresholds
    #[must_use]
    pub const fn with_config(config: RecommendationConfig) -> Self {
        Self { config }
    }

    /// Generate recommendations for a student's subject snapshots
    ///
    /// Output order follows input order; recommendations for one subject
    /// appear in rule order (calibration before weak performance).
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error when any snapshot fails validation;
    /// no partial results are produced.
    pub fn compute_recommendations(
        &self,
        performances: &[SubjectPerformance],
    ) -> AppResult<Vec<Recommendation>> {
        for subject in performances {
            subject.validate()?;
        }

        let mut recommendations = Vec::new();
        for subject in performances {
            recommendations.extend(self.recommendations_for_subject(subject));
        }
        Ok(recommendations)
    }

    /// Apply every rule to a single validated snapshot
    fn recommendations_for_subject(&self, subject: &SubjectPerformance) -> Vec<Recommendation> {
        let mut out = Vec::new();
        if subject.has_quiz_history() {
            if let Some(rec) = self.calibration_recommendation(subject) {
                out.push(rec);
            }
            if let Some(rec) = self.weak_performance_recommendation(subject) {
                out.push(rec);
            }
        } else if let Some(rec) = self.low_confidence_recommendation(subject) {
            out.push(rec);
        }
        out
    }

    /// Compare self-rated confidence against the quiz average
    ///
    /// Overconfidence and underconfidence are mutually exclusive; a gap
    /// inside the tolerated band yields nothing.
    fn calibration_recommendation(&self, subject: &SubjectPerformance) -> Option<Recommendation> {
        let normalized = subject.normalized_confidence();
        let gap = normalized - subject.avg_score;

        if gap > self.config.overconfidence_gap {
            return Some(Recommendation {
                subject: subject.subject_name.clone(),
                recommendation_type: RecommendationType::ConfidenceMismatch,
                priority: Priority::High,
                reason: format!(
                    "Self-rated confidence ({normalized}%) is far above the quiz average ({:.1}%)",
                    subject.avg_score
                ),
                action: "Focus on fundamentals with regular practice tests".into(),
                sessions_per_week: sessions::MISMATCH_SESSIONS_PER_WEEK,
                session_duration_minutes: sessions::MISMATCH_SESSION_MINUTES,
            });
        }

        if gap < self.config.underconfidence_gap {
            return Some(Recommendation {
                subject: subject.subject_name.clone(),
                recommendation_type: RecommendationType::ConfidenceBoost,
                priority: Priority::Medium,
                reason: format!(
                    "Quiz average ({:.1}%) is well above self-rated confidence ({normalized}%)",
                    subject.avg_score
                ),
                action: "Trust your preparation and attempt harder problems".into(),
                sessions_per_week: sessions::BOOST_SESSIONS_PER_WEEK,
                session_duration_minutes: sessions::BOOST_SESSION_MINUTES,
            });
        }

        None
    }

    /// Flag subjects whose quiz average sits below the passing threshold
    fn weak_performance_recommendation(
        &self,
        subject: &SubjectPerformance,
    ) -> Option<Recommendation> {
        if subject.avg_score >= self.config.weak_score_threshold {
            return None;
        }
        Some(Recommendation {
            subject: subject.subject_name.clone(),
            recommendation_type: RecommendationType::WeakPerformance,
            priority: Priority::High,
            reason: format!(
                "Quiz average ({:.1}%) is below the passing threshold",
                subject.avg_score
            ),
            action: "Schedule short daily practice sessions".into(),
            sessions_per_week: sessions::WEAK_PERFORMANCE_SESSIONS_PER_WEEK,
            session_duration_minutes: sessions::WEAK_PERFORMANCE_SESSION_MINUTES,
        })
    }

    /// Flag untested subjects the student already doubts
    fn low_confidence_recommendation(
        &self,
        subject: &SubjectPerformance,
    ) -> Option<Recommendation> {
        if subject.confidence_level > self.config.low_confidence_ceiling {
            return None;
        }
        Some(Recommendation {
            subject: subject.subject_name.clone(),
            recommendation_type: RecommendationType::LowConfidence,
            priority: Priority::High,
            reason: "No quiz attempts yet and self-rated confidence is low".into(),
            action: "Start with guided revision to build confidence".into(),
            sessions_per_week: sessions::LOW_CONFIDENCE_SESSIONS_PER_WEEK,
            session_duration_minutes: sessions::LOW_CONFIDENCE_SESSION_MINUTES,
        })
    }
}

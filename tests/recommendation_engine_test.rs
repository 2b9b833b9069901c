// ABOUTME: Integration tests for the study recommendation engine
// ABOUTME: Validates rule firing, boundaries, ordering, and input validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Study Planner Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use study_planner::intelligence::{
    Priority, RecommendationEngine, RecommendationType, SubjectPerformance,
};

fn snapshot(name: &str, confidence_level: u8, avg_score: f64, quiz_count: u32) -> SubjectPerformance {
    SubjectPerformance {
        subject_name: name.to_owned(),
        confidence_level,
        avg_score,
        quiz_count,
    }
}

#[test]
fn test_overconfident_failing_subject_triggers_both_rules() {
    let engine = RecommendationEngine::new();
    // Confidence 9 normalizes to 90; the 20% average leaves a 70 point gap
    // and also sits below the passing threshold
    let recs = engine
        .compute_recommendations(&[snapshot("Mathematics", 9, 20.0, 5)])
        .unwrap();

    assert_eq!(recs.len(), 2);

    assert_eq!(recs[0].subject, "Mathematics");
    assert_eq!(
        recs[0].recommendation_type,
        RecommendationType::ConfidenceMismatch
    );
    assert_eq!(recs[0].priority, Priority::High);
    assert_eq!(recs[0].sessions_per_week, 3);
    assert_eq!(recs[0].session_duration_minutes, 45);

    assert_eq!(recs[1].subject, "Mathematics");
    assert_eq!(
        recs[1].recommendation_type,
        RecommendationType::WeakPerformance
    );
    assert_eq!(recs[1].priority, Priority::High);
    assert_eq!(recs[1].sessions_per_week, 7);
    assert_eq!(recs[1].session_duration_minutes, 20);
}

#[test]
fn test_underconfident_strong_subject_gets_confidence_boost() {
    let engine = RecommendationEngine::new();
    // Confidence 2 normalizes to 20; the 85% average is 65 points above it
    let recs = engine
        .compute_recommendations(&[snapshot("English", 2, 85.0, 3)])
        .unwrap();

    assert_eq!(recs.len(), 1);
    assert_eq!(
        recs[0].recommendation_type,
        RecommendationType::ConfidenceBoost
    );
    assert_eq!(recs[0].priority, Priority::Medium);
    assert_eq!(recs[0].sessions_per_week, 2);
    assert_eq!(recs[0].session_duration_minutes, 30);
}

#[test]
fn test_calibrated_passing_subject_gets_no_recommendations() {
    let engine = RecommendationEngine::new();
    // Confidence 5 normalizes to 50 against a 60% average: inside the
    // tolerated band and above the passing threshold
    let recs = engine
        .compute_recommendations(&[snapshot("Geography", 5, 60.0, 2)])
        .unwrap();

    assert!(recs.is_empty());
}

#[test]
fn test_untested_confident_subject_gets_no_recommendations() {
    let engine = RecommendationEngine::new();
    let recs = engine
        .compute_recommendations(&[snapshot("Biology", 8, 0.0, 0)])
        .unwrap();

    assert!(recs.is_empty());
}

#[test]
fn test_untested_low_confidence_subject_gets_low_confidence() {
    let engine = RecommendationEngine::new();
    let recs = engine
        .compute_recommendations(&[snapshot("Chemistry", 3, 0.0, 0)])
        .unwrap();

    assert_eq!(recs.len(), 1);
    assert_eq!(
        recs[0].recommendation_type,
        RecommendationType::LowConfidence
    );
    assert_eq!(recs[0].priority, Priority::High);
    assert_eq!(recs[0].sessions_per_week, 2);
    assert_eq!(recs[0].session_duration_minutes, 40);
}

#[test]
fn test_low_confidence_ceiling_is_inclusive() {
    let engine = RecommendationEngine::new();

    // Confidence 5 with no quiz history still counts as low
    let at_ceiling = engine
        .compute_recommendations(&[snapshot("Physics", 5, 0.0, 0)])
        .unwrap();
    assert_eq!(at_ceiling.len(), 1);
    assert_eq!(
        at_ceiling[0].recommendation_type,
        RecommendationType::LowConfidence
    );

    // Confidence 6 sits above the ceiling
    let above_ceiling = engine
        .compute_recommendations(&[snapshot("Physics", 6, 0.0, 0)])
        .unwrap();
    assert!(above_ceiling.is_empty());
}

#[test]
fn test_overconfidence_gap_is_strict() {
    let engine = RecommendationEngine::new();

    // 9 * 10 - 60 = 30 exactly: not strictly greater, so no mismatch
    let at_gap = engine
        .compute_recommendations(&[snapshot("History", 9, 60.0, 4)])
        .unwrap();
    assert!(at_gap.is_empty());

    // 9 * 10 - 59 = 31: just past the threshold
    let past_gap = engine
        .compute_recommendations(&[snapshot("History", 9, 59.0, 4)])
        .unwrap();
    assert_eq!(past_gap.len(), 1);
    assert_eq!(
        past_gap[0].recommendation_type,
        RecommendationType::ConfidenceMismatch
    );
}

#[test]
fn test_underconfidence_gap_is_strict() {
    let engine = RecommendationEngine::new();

    // 4 * 10 - 60 = -20 exactly: not strictly below, so no boost
    let at_gap = engine
        .compute_recommendations(&[snapshot("Economics", 4, 60.0, 2)])
        .unwrap();
    assert!(at_gap.is_empty());

    // 4 * 10 - 61 = -21: just past the threshold
    let past_gap = engine
        .compute_recommendations(&[snapshot("Economics", 4, 61.0, 2)])
        .unwrap();
    assert_eq!(past_gap.len(), 1);
    assert_eq!(
        past_gap[0].recommendation_type,
        RecommendationType::ConfidenceBoost
    );
}

#[test]
fn test_weak_performance_threshold_is_strict() {
    let engine = RecommendationEngine::new();

    // An average of exactly 50 passes
    let at_threshold = engine
        .compute_recommendations(&[snapshot("Civics", 5, 50.0, 3)])
        .unwrap();
    assert!(at_threshold.is_empty());

    // Just below 50 fails
    let below_threshold = engine
        .compute_recommendations(&[snapshot("Civics", 5, 49.5, 3)])
        .unwrap();
    assert_eq!(below_threshold.len(), 1);
    assert_eq!(
        below_threshold[0].recommendation_type,
        RecommendationType::WeakPerformance
    );
}

#[test]
fn test_output_order_follows_input_order() {
    let engine = RecommendationEngine::new();
    let recs = engine
        .compute_recommendations(&[
            snapshot("Mathematics", 9, 20.0, 5), // mismatch + weak
            snapshot("Geography", 5, 60.0, 2),   // nothing
            snapshot("English", 2, 85.0, 3),     // boost
            snapshot("Chemistry", 3, 0.0, 0),    // low confidence
        ])
        .unwrap();

    let subjects: Vec<&str> = recs.iter().map(|r| r.subject.as_str()).collect();
    assert_eq!(
        subjects,
        vec!["Mathematics", "Mathematics", "English", "Chemistry"]
    );
}

#[test]
fn test_any_invalid_snapshot_rejects_the_whole_batch() {
    let engine = RecommendationEngine::new();

    // A valid snapshot alongside an out-of-scale confidence level
    let result = engine.compute_recommendations(&[
        snapshot("Mathematics", 9, 20.0, 5),
        snapshot("Physics", 0, 40.0, 1),
    ]);
    assert!(result.is_err());

    // NaN scores fail the range check
    let result = engine.compute_recommendations(&[snapshot("Physics", 5, f64::NAN, 1)]);
    assert!(result.is_err());

    // Scores above 100 are rejected
    let result = engine.compute_recommendations(&[snapshot("Physics", 5, 101.0, 1)]);
    assert!(result.is_err());

    // Blank subject names are rejected
    let result = engine.compute_recommendations(&[snapshot("   ", 5, 60.0, 1)]);
    assert!(result.is_err());
}

#[test]
fn test_empty_input_produces_empty_output() {
    let engine = RecommendationEngine::new();
    let recs = engine.compute_recommendations(&[]).unwrap();
    assert!(recs.is_empty());
}

#[test]
fn test_recommendation_messages_mention_the_numbers() {
    let engine = RecommendationEngine::new();
    let recs = engine
        .compute_recommendations(&[snapshot("Mathematics", 9, 20.0, 5)])
        .unwrap();

    // The mismatch reason carries both sides of the comparison
    assert!(recs[0].reason.contains("90"));
    assert!(recs[0].reason.contains("20.0"));
    assert!(!recs[0].action.is_empty());
}

#[test]
fn test_serialized_recommendation_uses_snake_case_tags() {
    let engine = RecommendationEngine::new();
    let recs = engine
        .compute_recommendations(&[snapshot("Mathematics", 9, 20.0, 5)])
        .unwrap();

    let json = serde_json::to_string(&recs[0]).unwrap();
    assert!(json.contains("\"confidence_mismatch\""));
    assert!(json.contains("\"high\""));
}

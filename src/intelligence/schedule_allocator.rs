// ABOUTME: Weekly schedule allocator distributing study sessions across the week
// ABOUTME: Seeds per-subject session plans from recommendations and round-robins them over days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Study Planner Project

//! Weekly study schedule allocator
//!
//! Each subject gets a session plan, either from its first recommendation
//! or from maintenance defaults, and the plans are laid out over the week
//! highest priority first. A single day cursor walks Monday through Sunday
//! and wraps, so sessions spread evenly instead of piling onto Monday.

use std::collections::{BTreeMap, HashMap};

use super::heuristics::allocation;
use super::{
    Priority, Recommendation, ScheduleEntry, SessionType, SubjectPerformance, Weekday,
    WeeklySchedule,
};
use crate::constants::time_constants::{DAYS_PER_WEEK, MINUTES_PER_HOUR};
use crate::errors::AppResult;

/// Fallback session plan for subjects with no active recommendation
#[derive(Debug, Clone)]
pub struct AllocatorConfig {
    /// Maintenance sessions per week
    pub default_sessions_per_week: u32,
    /// Maintenance session length in minutes
    pub default_session_minutes: u32,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            default_sessions_per_week: allocation::DEFAULT_SESSIONS_PER_WEEK,
            default_session_minutes: allocation::DEFAULT_SESSION_MINUTES,
        }
    }
}

/// Builds a weekly timetable from subject snapshots and recommendations
pub struct ScheduleAllocator {
    config: AllocatorConfig,
}

impl Default for ScheduleAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleAllocator {
    /// Create an allocator with the standard maintenance defaults
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: AllocatorConfig::default(),
        }
    }

    /// Create an allocator with custom maintenance defaults
    #[must_use]
    pub const fn with_config(config: AllocatorConfig) -> Self {
        Self { config }
    }

    /// Lay a week of study sessions out across Monday through Sunday
    ///
    /// Subjects carrying a recommendation use its session plan; when several
    /// recommendations target one subject, the first occurrence in
    /// `recommendations` wins. Subjects without any use the maintenance
    /// defaults at medium priority. Higher-priority subjects are placed
    /// first, ties keeping snapshot order. All seven day keys are present
    /// in the result even when a day receives no sessions.
    ///
    /// The `daily_study_hours` budget is recorded on the schedule for
    /// display but never caps the generated sessions.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error when any snapshot fails validation.
    pub fn build_weekly_schedule(
        &self,
        performances: &[SubjectPerformance],
        recommendations: &[Recommendation],
        daily_study_hours: f64,
    ) -> AppResult<WeeklySchedule> {
        for subject in performances {
            subject.validate()?;
        }

        let mut allocations = self.subject_allocations(performances, recommendations);
        allocations.sort_by_key(|subject| subject.priority);

        let mut days: BTreeMap<Weekday, Vec<ScheduleEntry>> =
            Weekday::ALL.iter().map(|day| (*day, Vec::new())).collect();

        let mut cursor = 0usize;
        for subject in &allocations {
            let session_type = if subject.priority == Priority::High {
                SessionType::Practice
            } else {
                SessionType::Revision
            };
            for _ in 0..subject.sessions_per_week {
                let day = Weekday::ALL[cursor];
                days.entry(day).or_default().push(ScheduleEntry {
                    subject: subject.name.clone(),
                    duration_minutes: subject.session_minutes,
                    session_type,
                });
                cursor = (cursor + 1) % Weekday::ALL.len();
            }
        }

        let total_weekly_minutes =
            daily_study_hours * f64::from(MINUTES_PER_HOUR) * f64::from(DAYS_PER_WEEK);

        Ok(WeeklySchedule {
            days,
            total_weekly_minutes,
        })
    }

    /// Resolve each subject's session plan in snapshot order
    fn subject_allocations(
        &self,
        performances: &[SubjectPerformance],
        recommendations: &[Recommendation],
    ) -> Vec<SubjectAllocation> {
        let mut leading: HashMap<&str, &Recommendation> = HashMap::new();
        for rec in recommendations {
            leading.entry(rec.subject.as_str()).or_insert(rec);
        }

        performances
            .iter()
            .map(|subject| {
                leading.get(subject.subject_name.as_str()).map_or_else(
                    || SubjectAllocation {
                        name: subject.subject_name.clone(),
                        sessions_per_week: self.config.default_sessions_per_week,
                        session_minutes: self.config.default_session_minutes,
                        priority: Priority::Medium,
                    },
                    |rec| SubjectAllocation {
                        name: subject.subject_name.clone(),
                        sessions_per_week: rec.sessions_per_week,
                        session_minutes: rec.session_duration_minutes,
                        priority: rec.priority,
                    },
                )
            })
            .collect()
    }
}

/// A subject's resolved session plan before placement on days
#[derive(Debug)]
struct SubjectAllocation {
    name: String,
    sessions_per_week: u32,
    session_minutes: u32,
    priority: Priority,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intelligence::RecommendationType;

    fn snapshot(name: &str, confidence_level: u8, avg_score: f64, quiz_count: u32) -> SubjectPerformance {
        SubjectPerformance {
            subject_name: name.to_owned(),
            confidence_level,
            avg_score,
            quiz_count,
        }
    }

    fn recommendation(subject: &str, priority: Priority, sessions: u32, minutes: u32) -> Recommendation {
        Recommendation {
            subject: subject.to_owned(),
            recommendation_type: RecommendationType::WeakPerformance,
            priority,
            reason: "test".into(),
            action: "test".into(),
            sessions_per_week: sessions,
            session_duration_minutes: minutes,
        }
    }

    #[test]
    fn empty_input_yields_seven_empty_days() {
        let allocator = ScheduleAllocator::new();
        let schedule = allocator.build_weekly_schedule(&[], &[], 2.0).unwrap();

        assert_eq!(schedule.days.len(), 7);
        assert!(schedule.days.values().all(Vec::is_empty));
        assert!((schedule.total_weekly_minutes - 840.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unrecommended_subject_gets_maintenance_sessions() {
        let allocator = ScheduleAllocator::new();
        let schedule = allocator
            .build_weekly_schedule(&[snapshot("Maths", 7, 75.0, 2)], &[], 2.0)
            .unwrap();

        assert_eq!(schedule.session_count(), 2);
        let monday = &schedule.days[&Weekday::Monday];
        assert_eq!(monday.len(), 1);
        assert_eq!(monday[0].duration_minutes, 30);
        assert_eq!(monday[0].session_type, SessionType::Revision);
    }

    #[test]
    fn high_priority_subjects_are_placed_first_as_practice() {
        let allocator = ScheduleAllocator::new();
        let performances = [snapshot("Maths", 7, 75.0, 2), snapshot("Physics", 9, 40.0, 3)];
        let recommendations = [recommendation("Physics", Priority::High, 2, 45)];

        let schedule = allocator
            .build_weekly_schedule(&performances, &recommendations, 2.0)
            .unwrap();

        // Physics sorts ahead of the medium-priority default, so it lands on Monday
        let monday = &schedule.days[&Weekday::Monday];
        assert_eq!(monday[0].subject, "Physics");
        assert_eq!(monday[0].session_type, SessionType::Practice);
    }

    #[test]
    fn day_cursor_is_shared_across_subjects() {
        let allocator = ScheduleAllocator::new();
        let performances = [snapshot("A", 7, 75.0, 2), snapshot("B", 7, 75.0, 2)];

        let schedule = allocator
            .build_weekly_schedule(&performances, &[], 2.0)
            .unwrap();

        // Two subjects at two sessions each fill Monday through Thursday
        assert_eq!(schedule.days[&Weekday::Monday].len(), 1);
        assert_eq!(schedule.days[&Weekday::Tuesday].len(), 1);
        assert_eq!(schedule.days[&Weekday::Wednesday].len(), 1);
        assert_eq!(schedule.days[&Weekday::Thursday].len(), 1);
        assert!(schedule.days[&Weekday::Friday].is_empty());
        assert_eq!(schedule.days[&Weekday::Wednesday][0].subject, "B");
    }

    #[test]
    fn first_recommendation_for_a_subject_wins() {
        let allocator = ScheduleAllocator::new();
        let performances = [snapshot("Physics", 9, 40.0, 3)];
        let recommendations = [
            recommendation("Physics", Priority::High, 3, 45),
            recommendation("Physics", Priority::High, 7, 20),
        ];

        let schedule = allocator
            .build_weekly_schedule(&performances, &recommendations, 2.0)
            .unwrap();

        assert_eq!(schedule.session_count(), 3);
        assert_eq!(schedule.days[&Weekday::Monday][0].duration_minutes, 45);
    }

    #[test]
    fn sessions_wrap_past_sunday() {
        let allocator = ScheduleAllocator::new();
        let performances = [snapshot("Maths", 2, 35.0, 4)];
        let recommendations = [recommendation("Maths", Priority::High, 9, 20)];

        let schedule = allocator
            .build_weekly_schedule(&performances, &recommendations, 2.0)
            .unwrap();

        assert_eq!(schedule.session_count(), 9);
        assert_eq!(schedule.days[&Weekday::Monday].len(), 2);
        assert_eq!(schedule.days[&Weekday::Tuesday].len(), 2);
        assert_eq!(schedule.days[&Weekday::Wednesday].len(), 1);
    }

    #[test]
    fn invalid_snapshot_is_rejected() {
        let allocator = ScheduleAllocator::new();
        let result = allocator.build_weekly_schedule(&[snapshot("", 5, 50.0, 1)], &[], 2.0);
        assert!(result.is_err());
    }
}

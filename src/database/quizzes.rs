// ABOUTME: Quiz attempt database operations
// ABOUTME: Records attempt scores and aggregates per-subject performance snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Study Planner Project

use super::Database;
use crate::intelligence::SubjectPerformance;
use crate::models::QuizAttempt;
use anyhow::Result;
use sqlx::Row;
use uuid::Uuid;

impl Database {
    /// Create the quiz_attempts table and its indexes
    pub(super) async fn migrate_quizzes(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS quiz_attempts (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                subject_name TEXT NOT NULL,
                score REAL NOT NULL,
                recorded_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_quiz_attempts_user_subject ON quiz_attempts(user_id, subject_name)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Record a quiz attempt
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn record_quiz_attempt(&self, attempt: &QuizAttempt) -> Result<()> {
        sqlx::query(
            r"
            INSERT INTO quiz_attempts (id, user_id, subject_name, score, recorded_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(attempt.id.to_string())
        .bind(attempt.user_id.to_string())
        .bind(&attempt.subject_name)
        .bind(attempt.score)
        .bind(attempt.recorded_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Aggregate a user's subjects with their quiz history
    ///
    /// Every registered subject produces one snapshot, with the average
    /// score and attempt count folded in from the quiz_attempts table.
    /// Subjects with no attempts come back with a zero average and a zero
    /// count so the planner can tell "untested" apart from "failing".
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_subject_performance(&self, user_id: Uuid) -> Result<Vec<SubjectPerformance>> {
        let rows = sqlx::query(
            r"
            SELECT s.subject_name AS subject_name,
                   s.confidence_level AS confidence_level,
                   COALESCE(AVG(q.score), 0.0) AS avg_score,
                   COUNT(q.score) AS quiz_count
            FROM user_subjects s
            LEFT JOIN quiz_attempts q
              ON q.user_id = s.user_id AND q.subject_name = s.subject_name
            WHERE s.user_id = $1
            GROUP BY s.subject_name, s.confidence_level
            ORDER BY s.subject_name
            ",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                let confidence_level: i64 = row.try_get("confidence_level")?;
                let quiz_count: i64 = row.try_get("quiz_count")?;

                Ok(SubjectPerformance {
                    subject_name: row.try_get("subject_name")?,
                    confidence_level: u8::try_from(confidence_level)?,
                    avg_score: row.try_get("avg_score")?,
                    quiz_count: u32::try_from(quiz_count)?,
                })
            })
            .collect()
    }
}

// ABOUTME: Per-subject confidence database operations
// ABOUTME: Handles transactional subject replacement and ordered subject lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Study Planner Project

use super::Database;
use crate::models::SubjectConfidence;
use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::Row;
use uuid::Uuid;

impl Database {
    /// Create the user_subjects table
    pub(super) async fn migrate_subjects(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS user_subjects (
                user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                subject_name TEXT NOT NULL,
                confidence_level INTEGER NOT NULL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
                PRIMARY KEY (user_id, subject_name)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Replace a user's subject list atomically
    ///
    /// The previous rows are deleted and the new set inserted inside a
    /// single transaction, so a failed update never leaves the user with
    /// a partial subject list.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started or committed,
    /// or if any statement inside it fails.
    pub async fn replace_user_subjects(
        &self,
        user_id: Uuid,
        subjects: &[SubjectConfidence],
    ) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM user_subjects WHERE user_id = $1")
            .bind(user_id.to_string())
            .execute(&mut *tx)
            .await?;

        for subject in subjects {
            sqlx::query(
                r"
                INSERT INTO user_subjects (user_id, subject_name, confidence_level, created_at)
                VALUES ($1, $2, $3, $4)
                ",
            )
            .bind(user_id.to_string())
            .bind(&subject.subject_name)
            .bind(i64::from(subject.confidence_level))
            .bind(subject.created_at)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    /// Get a user's subjects ordered by name
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_user_subjects(&self, user_id: Uuid) -> Result<Vec<SubjectConfidence>> {
        let rows = sqlx::query(
            r"
            SELECT user_id, subject_name, confidence_level, created_at
            FROM user_subjects
            WHERE user_id = $1
            ORDER BY subject_name
            ",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_subject).collect()
    }

    /// Check whether a user has registered a subject
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn subject_exists(&self, user_id: Uuid, subject_name: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM user_subjects WHERE user_id = $1 AND subject_name = $2",
        )
        .bind(user_id.to_string())
        .bind(subject_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(count > 0)
    }

    /// Convert a database row to a `SubjectConfidence` struct
    fn row_to_subject(row: &sqlx::sqlite::SqliteRow) -> Result<SubjectConfidence> {
        let user_id: String = row.try_get("user_id")?;
        let confidence_level: i64 = row.try_get("confidence_level")?;
        let created_at: DateTime<Utc> = row.try_get("created_at")?;

        Ok(SubjectConfidence {
            user_id: Uuid::parse_str(&user_id)?,
            subject_name: row.try_get("subject_name")?,
            confidence_level: u8::try_from(confidence_level)?,
            created_at,
        })
    }
}

// ABOUTME: User account database operations
// ABOUTME: Handles registration rows, lookup by id or email, and activity tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Study Planner Project

use super::Database;
use crate::models::User;
use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use sqlx::Row;
use uuid::Uuid;

impl Database {
    /// Create the users table and its indexes
    pub(super) async fn migrate_users(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT UNIQUE NOT NULL,
                password_hash TEXT NOT NULL,
                grade TEXT NOT NULL,
                stream TEXT,
                daily_study_hours REAL,
                hobbies TEXT,
                exams_json TEXT,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
                last_active DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_email ON users(email)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Create a new user
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The email is already in use by another user
    /// - The database operation fails
    pub async fn create_user(&self, user: &User) -> Result<Uuid> {
        let existing = self.get_user_by_email(&user.email).await?;
        if existing.is_some() {
            return Err(anyhow!("Email already in use by another user"));
        }

        let exams_json = user.exams.as_ref().map(serde_json::to_string).transpose()?;

        sqlx::query(
            r"
            INSERT INTO users (
                id, name, email, password_hash, grade, stream,
                daily_study_hours, hobbies, exams_json, created_at, last_active
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(user.id.to_string())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.grade)
        .bind(&user.stream)
        .bind(user.daily_study_hours)
        .bind(&user.hobbies)
        .bind(exams_json)
        .bind(user.created_at)
        .bind(user.last_active)
        .execute(&self.pool)
        .await?;

        Ok(user.id)
    }

    /// Get a user by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_user(&self, user_id: Uuid) -> Result<Option<User>> {
        self.get_user_impl("id", &user_id.to_string()).await
    }

    /// Get a user by email
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_impl("email", email).await
    }

    /// Check whether an email address is already registered
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn email_exists(&self, email: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    /// Get all users ordered by grade, then name
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_users(&self) -> Result<Vec<User>> {
        let rows = sqlx::query("SELECT * FROM users ORDER BY grade, name")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_user).collect()
    }

    /// Update user's last active timestamp
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn update_last_active(&self, user_id: Uuid) -> Result<()> {
        sqlx::query("UPDATE users SET last_active = CURRENT_TIMESTAMP WHERE id = $1")
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Get total user count
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_user_count(&self) -> Result<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Internal implementation for getting a user by a unique column
    async fn get_user_impl(&self, field: &str, value: &str) -> Result<Option<User>> {
        let query = format!("SELECT * FROM users WHERE {field} = $1");

        let row = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    /// Convert a database row to a `User` struct
    fn row_to_user(row: &sqlx::sqlite::SqliteRow) -> Result<User> {
        let id: String = row.try_get("id")?;
        let exams_json: Option<String> = row.try_get("exams_json")?;
        let exams = match exams_json {
            Some(raw) => Some(serde_json::from_str(&raw)?),
            None => None,
        };
        let created_at: DateTime<Utc> = row.try_get("created_at")?;
        let last_active: DateTime<Utc> = row.try_get("last_active")?;

        Ok(User {
            id: Uuid::parse_str(&id)?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            password_hash: row.try_get("password_hash")?,
            grade: row.try_get("grade")?,
            stream: row.try_get("stream")?,
            daily_study_hours: row.try_get("daily_study_hours")?,
            hobbies: row.try_get("hobbies")?,
            exams,
            created_at,
            last_active,
        })
    }
}

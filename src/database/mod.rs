// ABOUTME: SQLite-backed persistence for users, subjects, quiz attempts, and quotes
// ABOUTME: Owns the connection pool, schema migrations, and row mapping helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Study Planner Project

//! # Database Management
//!
//! This module provides `SQLite` storage for the Study Planner server. It
//! handles user accounts, per-subject confidence levels, quiz attempts, and
//! the motivational quote pool.
//!
//! Identifiers are stored as text so rows stay readable when inspected with
//! the `sqlite3` shell, and every migration statement is idempotent.

mod quizzes;
mod quotes;
mod subjects;
mod users;

use anyhow::Result;
use sqlx::SqlitePool;

/// Database manager for study planner storage
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create a new database connection and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or the
    /// schema migration fails.
    pub async fn new(database_url: &str) -> Result<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        let pool = SqlitePool::connect(&connection_options).await?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if any table or index creation fails.
    pub async fn migrate(&self) -> Result<()> {
        self.migrate_users().await?;
        self.migrate_subjects().await?;
        self.migrate_quizzes().await?;
        self.migrate_quotes().await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn new_runs_migrations() {
        let db = Database::new("sqlite::memory:").await.unwrap();

        assert_eq!(db.get_user_count().await.unwrap(), 0);
        assert_eq!(db.get_quote_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn migrate_is_idempotent() {
        let db = Database::new("sqlite::memory:").await.unwrap();

        // A second pass must not fail on existing tables or indexes
        db.migrate().await.unwrap();
        assert_eq!(db.get_user_count().await.unwrap(), 0);
    }
}

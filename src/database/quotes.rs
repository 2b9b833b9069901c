// ABOUTME: Motivational quote database operations
// ABOUTME: Handles quote insertion, listing, counting, and random selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Study Planner Project

use super::Database;
use crate::models::MotivationalQuote;
use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::Row;

impl Database {
    /// Create the motivation_quotes table
    pub(super) async fn migrate_quotes(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS motivation_quotes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                quote_text TEXT NOT NULL,
                author TEXT NOT NULL,
                category TEXT NOT NULL,
                is_active BOOLEAN NOT NULL DEFAULT 1,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert a quote, returning its row id
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn create_quote(&self, quote_text: &str, author: &str, category: &str) -> Result<i64> {
        let result = sqlx::query(
            r"
            INSERT INTO motivation_quotes (quote_text, author, category, is_active)
            VALUES ($1, $2, $3, 1)
            ",
        )
        .bind(quote_text)
        .bind(author)
        .bind(category)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Get all quotes, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_quotes(&self) -> Result<Vec<MotivationalQuote>> {
        let rows = sqlx::query("SELECT * FROM motivation_quotes ORDER BY id DESC")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_quote).collect()
    }

    /// Get one random active quote, if any exist
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_random_active_quote(&self) -> Result<Option<MotivationalQuote>> {
        let row = sqlx::query(
            "SELECT * FROM motivation_quotes WHERE is_active = 1 ORDER BY RANDOM() LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(Self::row_to_quote(&row)?)),
            None => Ok(None),
        }
    }

    /// Get total quote count
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_quote_count(&self) -> Result<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM motivation_quotes")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Convert a database row to a `MotivationalQuote` struct
    fn row_to_quote(row: &sqlx::sqlite::SqliteRow) -> Result<MotivationalQuote> {
        let created_at: DateTime<Utc> = row.try_get("created_at")?;

        Ok(MotivationalQuote {
            id: row.try_get("id")?,
            quote_text: row.try_get("quote_text")?,
            author: row.try_get("author")?,
            category: row.try_get("category")?,
            is_active: row.try_get("is_active")?,
            created_at,
        })
    }
}

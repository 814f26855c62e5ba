// ABOUTME: Database management with connection pooling and startup migrations
// ABOUTME: Owns the SqlitePool and exposes the favorites manager and liveness probe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

//! # Database Management
//!
//! One long-lived [`Database`] handle is created at process start and shared
//! across requests. Migrations are inline `CREATE TABLE IF NOT EXISTS`
//! statements run on startup.

/// Favorites persistence operations
pub mod favorites;

pub use favorites::{
    AddFavoriteRequest, DeleteOutcome, FavoriteWriteOutcome, FavoritesManager,
};

use anyhow::Result;
use sqlx::{Pool, Sqlite, SqlitePool};
use tracing::error;

/// Database manager for favorite recipe storage
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or a
    /// migration statement fails.
    pub async fn new(database_url: &str) -> Result<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:")
            && !database_url.contains(":memory:")
        {
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
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Create a favorites manager backed by this database
    #[must_use]
    pub fn favorites(&self) -> FavoritesManager {
        FavoritesManager::new(self.pool.clone())
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if a migration statement fails.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS favorite_recipes (
                id INTEGER PRIMARY KEY,
                title TEXT,
                image TEXT,
                added_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Lightweight liveness probe; true on success, false on any failure.
    ///
    /// Failures are logged, never raised.
    pub async fn test_connection(&self) -> bool {
        match sqlx::query_scalar::<_, i64>("SELECT 1").fetch_one(&self.pool).await {
            Ok(_) => true,
            Err(e) => {
                error!("database connection test failed: {e}");
                false
            }
        }
    }
}

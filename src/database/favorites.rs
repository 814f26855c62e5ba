// ABOUTME: Database operations for the user's favorite recipes
// ABOUTME: Handles idempotent upsert, capped newest-first reads, and delete by id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

//! Favorites store
//!
//! CRUD wrapper over the `favorite_recipes` table. The upstream recipe id is
//! the primary key, so adding the same recipe twice refreshes the stored row
//! (including its `added_at` stamp) instead of duplicating it.

use crate::errors::AppResult;
use crate::models::FavoriteRecipe;
use crate::utils::ids::parse_recipe_id;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{Row, SqlitePool};
use tracing::{error, info, warn};

/// Default cap on bulk favorite reads
pub const DEFAULT_FAVORITES_LIMIT: i64 = 50;

/// Incoming favorite payload with a loosely typed id.
///
/// Callers send the id either as a JSON number (straight from a search
/// result) or as a string; validation happens in [`FavoritesManager::add_favorite`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddFavoriteRequest {
    /// Recipe id as supplied by the caller, number or string
    pub id: serde_json::Value,
    /// Recipe title
    #[serde(default)]
    pub title: Option<String>,
    /// Image URL
    #[serde(default)]
    pub image: Option<String>,
}

/// Outcome of an add-favorite write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteWriteOutcome {
    /// A new row was inserted
    Inserted,
    /// An existing row was refreshed
    Updated,
}

impl FavoriteWriteOutcome {
    /// Message reported to the caller for this outcome
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Inserted => "Recipe added to favorites.",
            Self::Updated => "Recipe is already a favorite.",
        }
    }
}

/// Outcome of a delete-favorite operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The row existed and was removed
    Deleted,
    /// No row matched the id
    NotFound,
}

/// Manager for favorite recipe persistence
#[derive(Clone)]
pub struct FavoritesManager {
    pool: SqlitePool,
}

impl FavoritesManager {
    /// Create a new favorites manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Add a recipe to the favorites, or refresh it if already present.
    ///
    /// The `added_at` stamp is set to the current UTC time on every call,
    /// updates included.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` when the id does not parse as an integer (no
    /// row is written), or `DatabaseError` on an unexpected write failure.
    pub async fn add_favorite(
        &self,
        request: &AddFavoriteRequest,
    ) -> AppResult<FavoriteWriteOutcome> {
        let recipe_id = parse_recipe_id(&request.id).inspect_err(|_| {
            error!("invalid recipe ID received for saving: {}", request.id);
        })?;

        // Fixed-width stamps keep the added_at ordering lexicographic
        let added_at = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

        // The insert claims the id atomically; its affected-row count is the
        // Inserted/Updated classification, so concurrent adds of the same id
        // report exactly one insert.
        let inserted = sqlx::query(
            r"
            INSERT INTO favorite_recipes (id, title, image, added_at)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(id) DO NOTHING
            ",
        )
        .bind(recipe_id)
        .bind(request.title.as_deref())
        .bind(request.image.as_deref())
        .bind(&added_at)
        .execute(&self.pool)
        .await?
        .rows_affected()
            > 0;

        if inserted {
            info!("recipe {recipe_id} added to favorites");
            return Ok(FavoriteWriteOutcome::Inserted);
        }

        sqlx::query(
            r"
            UPDATE favorite_recipes
            SET title = ?2, image = ?3, added_at = ?4
            WHERE id = ?1
            ",
        )
        .bind(recipe_id)
        .bind(request.title.as_deref())
        .bind(request.image.as_deref())
        .bind(&added_at)
        .execute(&self.pool)
        .await?;

        info!("recipe {recipe_id} is already a favorite, refreshed");
        Ok(FavoriteWriteOutcome::Updated)
    }

    /// Retrieve favorites sorted newest-first, truncated to `limit`.
    ///
    /// On underlying failure this returns an empty list rather than
    /// propagating the error; callers cannot distinguish "no favorites" from
    /// "store unreachable" on this path.
    pub async fn get_favorites(&self, limit: i64) -> Vec<FavoriteRecipe> {
        let rows = sqlx::query(
            r"
            SELECT id, title, image, added_at
            FROM favorite_recipes
            ORDER BY added_at DESC
            LIMIT ?1
            ",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await;

        match rows {
            Ok(rows) => rows
                .into_iter()
                .filter_map(|row| {
                    let added_at_raw: String = row.try_get("added_at").ok()?;
                    let added_at = DateTime::parse_from_rfc3339(&added_at_raw)
                        .map(|dt| dt.with_timezone(&Utc))
                        .ok()?;
                    Some(FavoriteRecipe {
                        id: row.try_get("id").ok()?,
                        title: row.try_get("title").ok()?,
                        image: row.try_get("image").ok()?,
                        added_at,
                    })
                })
                .collect(),
            Err(e) => {
                error!("error retrieving favorite recipes: {e}");
                Vec::new()
            }
        }
    }

    /// Delete a favorite by its id (supplied as a string, e.g. a path segment).
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` when the id does not parse as an integer, or
    /// `DatabaseError` on an unexpected delete failure.
    pub async fn delete_favorite(&self, raw_id: &str) -> AppResult<DeleteOutcome> {
        let recipe_id = crate::utils::ids::parse_recipe_id_str(raw_id).inspect_err(|_| {
            error!("invalid recipe ID format for delete: {raw_id}");
        })?;

        let result = sqlx::query("DELETE FROM favorite_recipes WHERE id = ?1")
            .bind(recipe_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() > 0 {
            info!("recipe {recipe_id} removed from favorites");
            Ok(DeleteOutcome::Deleted)
        } else {
            warn!("recipe {recipe_id} not found in favorites for deletion");
            Ok(DeleteOutcome::NotFound)
        }
    }
}

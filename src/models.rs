// ABOUTME: Core data models for recipe search results and persisted favorites
// ABOUTME: Defines RecipeSummary (derived projection) and FavoriteRecipe (stored record)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

//! Core data models shared across the provider, database, and route layers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Simplified projection of an upstream recipe-search result used for display.
///
/// Constructed fresh per lookup response and never persisted unless the user
/// promotes it to a favorite.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeSummary {
    /// Recipe identifier assigned by the upstream search service
    pub id: i64,
    /// Recipe title
    pub title: String,
    /// Image URL if the upstream provided one
    pub image: Option<String>,
    /// Number of requested ingredients the recipe uses
    pub used_ingredients_count: usize,
    /// Number of additional ingredients the recipe needs
    pub missed_ingredients_count: usize,
}

/// A user-saved recipe reference persisted for later retrieval.
///
/// The upstream recipe id doubles as the primary key, so re-adding the same
/// recipe updates the stored row instead of duplicating it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteRecipe {
    /// Recipe identifier, primary key in the favorites table
    pub id: i64,
    /// Recipe title as supplied by the caller
    pub title: Option<String>,
    /// Image URL as supplied by the caller
    pub image: Option<String>,
    /// Server-side timestamp of the most recent add/refresh, UTC
    pub added_at: DateTime<Utc>,
}

// ABOUTME: Favorite recipe route handlers for add, list, and delete operations
// ABOUTME: Maps store outcomes onto the success/message JSON shape and HTTP statuses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

//! Favorite recipe routes

use crate::{
    database::favorites::DEFAULT_FAVORITES_LIMIT,
    database::{AddFavoriteRequest, DeleteOutcome},
    errors::AppError,
    models::FavoriteRecipe,
    server::ServerResources,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

/// Outcome shape passed through from the favorites store
#[derive(Debug, Serialize, Deserialize)]
pub struct FavoriteOutcomeResponse {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable outcome message
    pub message: String,
}

/// Response listing stored favorites
#[derive(Debug, Serialize, Deserialize)]
pub struct FavoritesListResponse {
    /// Always `true`
    pub success: bool,
    /// Stored favorites, newest first
    pub favorites: Vec<FavoriteRecipe>,
}

/// Favorites route handlers
pub struct FavoritesRoutes;

impl FavoritesRoutes {
    /// Create all favorites routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/favorites", post(Self::handle_add_favorite))
            .route("/api/favorites", get(Self::handle_get_favorites))
            .route("/api/favorites/:recipe_id", delete(Self::handle_delete_favorite))
            .with_state(resources)
    }

    /// Handle POST /api/favorites
    async fn handle_add_favorite(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<AddFavoriteRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        // A body missing the id (or not JSON at all) gets the same failure
        // shape as every other rejection
        let Json(request) = payload.map_err(|e| {
            warn!("rejected malformed favorite payload: {e}");
            AppError::invalid_input("Invalid recipe data.")
        })?;

        let outcome = resources
            .database()?
            .favorites()
            .add_favorite(&request)
            .await?;

        Ok((
            StatusCode::OK,
            Json(FavoriteOutcomeResponse {
                success: true,
                message: outcome.message().to_owned(),
            }),
        )
            .into_response())
    }

    /// Handle GET /api/favorites
    async fn handle_get_favorites(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        // Read failures degrade to an empty list inside the store
        let favorites = resources
            .database()?
            .favorites()
            .get_favorites(DEFAULT_FAVORITES_LIMIT)
            .await;

        Ok((
            StatusCode::OK,
            Json(FavoritesListResponse {
                success: true,
                favorites,
            }),
        )
            .into_response())
    }

    /// Handle DELETE /api/favorites/{id}
    async fn handle_delete_favorite(
        State(resources): State<Arc<ServerResources>>,
        Path(recipe_id): Path<String>,
    ) -> Result<Response, AppError> {
        let outcome = resources
            .database()?
            .favorites()
            .delete_favorite(&recipe_id)
            .await?;

        match outcome {
            DeleteOutcome::Deleted => Ok((
                StatusCode::OK,
                Json(FavoriteOutcomeResponse {
                    success: true,
                    message: "Recipe removed from favorites.".to_owned(),
                }),
            )
                .into_response()),
            DeleteOutcome::NotFound => {
                Err(AppError::not_found("Recipe not found in favorites."))
            }
        }
    }
}

// ABOUTME: Recipe search route handlers mapping HTTP requests to the lookup client
// ABOUTME: Validates the ingredient list and serializes lookup results to JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

//! Recipe search routes

use crate::{
    errors::AppError,
    models::RecipeSummary,
    providers::spoonacular::DEFAULT_RESULT_COUNT,
    server::ServerResources,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// Fixed ingredient set served by the debug lookup route
const TEST_INGREDIENTS: [&str; 3] = ["chicken", "rice", "tomato"];

/// Request body for ingredient-based recipe search
#[derive(Debug, Deserialize)]
pub struct FindRecipesRequest {
    /// Ingredients to search with; must be non-empty
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// Successful search response
#[derive(Debug, Serialize, Deserialize)]
pub struct FindRecipesResponse {
    /// Always `true`
    pub success: bool,
    /// Matching recipes
    pub recipes: Vec<RecipeSummary>,
}

/// Recipe search route handlers
pub struct RecipesRoutes;

impl RecipesRoutes {
    /// Create all recipe search routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/find_recipes", post(Self::handle_find_recipes))
            .route("/api/test-recipes", get(Self::handle_test_recipes))
            .with_state(resources)
    }

    /// Handle POST /api/find_recipes
    async fn handle_find_recipes(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<FindRecipesRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = payload.map_err(|e| {
            warn!("rejected malformed recipe search payload: {e}");
            AppError::invalid_input("Invalid recipe data.")
        })?;

        // Reject before any outbound call is made
        if request.ingredients.is_empty() {
            return Err(AppError::invalid_input("No ingredients provided."));
        }

        let client = resources.recipe_client()?;

        info!("fetching recipes for: {}", request.ingredients.join(", "));
        let recipes = client
            .find_by_ingredients(&request.ingredients, DEFAULT_RESULT_COUNT)
            .await?;

        Ok((
            StatusCode::OK,
            Json(FindRecipesResponse {
                success: true,
                recipes,
            }),
        )
            .into_response())
    }

    /// Handle GET /api/test-recipes
    ///
    /// Debug lookup with a fixed ingredient set, useful for verifying the
    /// upstream connection without crafting a request body.
    async fn handle_test_recipes(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let client = resources.recipe_client()?;

        let ingredients: Vec<String> = TEST_INGREDIENTS.iter().map(|s| (*s).to_owned()).collect();
        info!("running fixed-ingredient test lookup");
        let recipes = client
            .find_by_ingredients(&ingredients, DEFAULT_RESULT_COUNT)
            .await?;

        Ok((
            StatusCode::OK,
            Json(FindRecipesResponse {
                success: true,
                recipes,
            }),
        )
            .into_response())
    }
}

// ABOUTME: Recipe lookup client wrapping the Spoonacular findByIngredients endpoint
// ABOUTME: Translates upstream JSON into RecipeSummary values with a bounded timeout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

//! Recipe lookup client
//!
//! Wraps outbound HTTP calls to a Spoonacular-compatible recipe-search
//! service. The client is constructed once at startup with its own pooled
//! `reqwest::Client` and injected wherever lookups are needed.
//!
//! Failure taxonomy: upstream 401 is an authentication rejection, any other
//! error status is a request error, and transport failures (connect errors,
//! timeouts) are network errors. All three surface as 5xx lookup failures;
//! there is a single attempt per lookup with no retry or caching.

use crate::config::environment::RecipeApiConfig;
use crate::errors::{AppError, AppResult};
use crate::models::RecipeSummary;
use reqwest::{Client, ClientBuilder, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Fixed ranking mode: maximize used ingredients first
const RANKING_MODE: u8 = 1;

/// Default number of recipes requested per lookup
pub const DEFAULT_RESULT_COUNT: u32 = 10;

/// Raw upstream recipe shape from `findByIngredients`
#[derive(Debug, Deserialize)]
struct UpstreamRecipe {
    id: i64,
    title: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default, rename = "usedIngredients")]
    used_ingredients: Vec<serde_json::Value>,
    #[serde(default, rename = "missedIngredients")]
    missed_ingredients: Vec<serde_json::Value>,
}

impl From<UpstreamRecipe> for RecipeSummary {
    fn from(raw: UpstreamRecipe) -> Self {
        Self {
            id: raw.id,
            title: raw.title,
            image: raw.image,
            used_ingredients_count: raw.used_ingredients.len(),
            missed_ingredients_count: raw.missed_ingredients.len(),
        }
    }
}

/// Client for the recipe-search service
#[derive(Debug, Clone)]
pub struct RecipeApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl RecipeApiClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorCode::ConfigError`](crate::errors::ErrorCode::ConfigError)
    /// if no API key is configured or the HTTP client cannot be constructed.
    pub fn new(config: &RecipeApiConfig) -> AppResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| AppError::config("SPOONACULAR_API_KEY is not set"))?;

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Search for recipes matching the given ingredients.
    ///
    /// Joins the ingredients into a comma-separated term and issues a single
    /// GET request. Callers are responsible for rejecting empty ingredient
    /// lists before reaching this method.
    ///
    /// # Errors
    ///
    /// Returns an external-service error for any upstream or transport
    /// failure; see the module docs for the taxonomy.
    #[instrument(skip(self, ingredients), fields(ingredient_count = ingredients.len()))]
    pub async fn find_by_ingredients(
        &self,
        ingredients: &[String],
        limit: u32,
    ) -> AppResult<Vec<RecipeSummary>> {
        let ingredients_term = ingredients.join(",");
        let endpoint = format!("{}/recipes/findByIngredients", self.base_url);

        let response = self
            .client
            .get(&endpoint)
            .query(&[
                ("apiKey", self.api_key.as_str()),
                ("ingredients", ingredients_term.as_str()),
                ("number", &limit.to_string()),
                ("ranking", &RANKING_MODE.to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                error!("network error while fetching recipe data: {e}");
                AppError::external_unavailable(format!("Recipe service unreachable: {e}"))
                    .with_source(e)
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            error!("recipe service rejected the API key (HTTP 401)");
            return Err(AppError::external_auth_failed(
                "Recipe service rejected the configured API key",
            ));
        }
        if !status.is_success() {
            error!("recipe service returned HTTP {status}");
            return Err(AppError::external_service(format!(
                "Recipe service returned HTTP {status}"
            )));
        }

        let raw: Vec<UpstreamRecipe> = response.json().await.map_err(|e| {
            error!("failed to decode recipe service response: {e}");
            AppError::external_service(format!("Invalid recipe service response: {e}"))
                .with_source(e)
        })?;

        debug!("decoded {} upstream recipes", raw.len());
        let recipes: Vec<RecipeSummary> = raw.into_iter().map(RecipeSummary::from).collect();
        info!("successfully fetched {} recipes", recipes.len());
        Ok(recipes)
    }
}

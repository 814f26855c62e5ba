// ABOUTME: Long-lived server dependencies constructed once at process start
// ABOUTME: Models missing dependencies as an explicit unavailable state instead of null checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

//! Shared server resources
//!
//! The database handle and the recipe client are created during startup and
//! shared across all requests. A dependency that failed to initialize stays
//! `None`; the accessor methods turn that absence into a single
//! `ResourceUnavailable` error instead of scattering null checks per route.

use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::providers::RecipeApiClient;

/// Shared resources injected into every route handler
pub struct ServerResources {
    database: Option<Database>,
    recipe_client: Option<RecipeApiClient>,
}

impl ServerResources {
    /// Create resources from whatever dependencies initialized successfully
    #[must_use]
    pub const fn new(database: Option<Database>, recipe_client: Option<RecipeApiClient>) -> Self {
        Self {
            database,
            recipe_client,
        }
    }

    /// Access the database, or fail with an unavailable-dependency error
    ///
    /// # Errors
    ///
    /// Returns `ResourceUnavailable` when the database did not initialize.
    pub fn database(&self) -> AppResult<&Database> {
        self.database
            .as_ref()
            .ok_or_else(|| AppError::resource_unavailable("Database not connected."))
    }

    /// Access the recipe client, or fail with an unavailable-dependency error
    ///
    /// # Errors
    ///
    /// Returns `ResourceUnavailable` when the client did not initialize.
    pub fn recipe_client(&self) -> AppResult<&RecipeApiClient> {
        self.recipe_client
            .as_ref()
            .ok_or_else(|| AppError::resource_unavailable("Recipe API not initialized."))
    }

    /// Whether the database dependency is available
    #[must_use]
    pub const fn database_available(&self) -> bool {
        self.database.is_some()
    }

    /// Whether the recipe client dependency is available
    #[must_use]
    pub const fn recipe_client_available(&self) -> bool {
        self.recipe_client.is_some()
    }
}

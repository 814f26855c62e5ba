// ABOUTME: Route module organization for the Pantry Chef HTTP endpoints
// ABOUTME: Provides route definitions organized by domain with thin handler functions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

//! Route module for the Pantry Chef server
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the provider client or the favorites store.

/// Favorite recipe CRUD routes
pub mod favorites;
/// Health check and system status routes
pub mod health;
/// Recipe search routes
pub mod recipes;

/// Favorites route handlers
pub use favorites::FavoritesRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
/// Recipe search route handlers
pub use recipes::RecipesRoutes;

// ABOUTME: Outbound provider integrations for external recipe services
// ABOUTME: Hosts the Spoonacular-compatible recipe lookup client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

//! Outbound provider clients

/// Spoonacular-compatible recipe-search client
pub mod spoonacular;

pub use spoonacular::RecipeApiClient;

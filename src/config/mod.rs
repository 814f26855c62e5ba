// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Re-exports the environment-based configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

//! Configuration management

/// Environment-based configuration
pub mod environment;

pub use environment::{
    DatabaseConfig, DatabaseUrl, Environment, LogLevel, RecipeApiConfig, ServerConfig,
};

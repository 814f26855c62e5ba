// ABOUTME: Main library entry point for the Pantry Chef recipe backend
// ABOUTME: Exposes the provider client, favorites store, and HTTP route layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

#![deny(unsafe_code)]

//! # Pantry Chef Server
//!
//! A small web backend that searches for recipes by ingredients through a
//! Spoonacular-compatible recipe-search API and persists a personal list of
//! favorite recipes in SQLite.
//!
//! ## Architecture
//!
//! - **Providers**: outbound recipe-search client with a bounded timeout
//! - **Database**: favorites store with idempotent upsert-by-id writes
//! - **Routes**: thin axum handlers mapping requests onto the two components
//! - **Server**: long-lived dependencies constructed once and injected
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pantry_chef::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Pantry Chef configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Configuration management and environment variable handling
pub mod config;

/// Database management and the favorites store
pub mod database;

/// Unified error handling system
pub mod errors;

/// Logging configuration and initialization
pub mod logging;

/// Core data models
pub mod models;

/// Outbound provider clients
pub mod providers;

/// `HTTP` route handlers
pub mod routes;

/// Server assembly and shared resources
pub mod server;

/// Shared utilities
pub mod utils;

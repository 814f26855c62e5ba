// ABOUTME: HTTP server assembly, binding the route tree to shared resources
// ABOUTME: Provides ServerResources for dependency injection and HttpServer for serving
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

//! HTTP server
//!
//! [`ServerResources`] holds the long-lived dependencies (database handle,
//! recipe client) constructed once at process start. [`HttpServer`] assembles
//! the axum router and serves it.

/// Shared server resources for dependency injection
pub mod resources;

pub use resources::ServerResources;

use crate::routes::{FavoritesRoutes, HealthRoutes, RecipesRoutes};
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// HTTP server for the Pantry Chef API
pub struct HttpServer {
    resources: Arc<ServerResources>,
}

impl HttpServer {
    /// Create a new server with centralized resource management
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Build the full route tree with ambient middleware
    #[must_use]
    pub fn router(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .merge(RecipesRoutes::routes(resources.clone()))
            .merge(FavoritesRoutes::routes(resources.clone()))
            .merge(HealthRoutes::routes(resources))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
    }

    /// Bind and serve until the process is stopped
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot bind or the server fails.
    pub async fn run(self, port: u16) -> Result<()> {
        let router = Self::router(self.resources);
        let listener = TcpListener::bind(("0.0.0.0", port)).await?;
        info!("HTTP server listening on port {port}");
        axum::serve(listener, router).await?;
        Ok(())
    }
}

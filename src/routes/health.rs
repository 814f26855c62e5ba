// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Reports process liveness and dependency availability including a database probe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

//! Health check routes for service monitoring

use crate::server::ServerResources;
use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::health_handler))
            .with_state(resources)
    }

    async fn health_handler(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<serde_json::Value> {
        let database_connected = match resources.database() {
            Ok(db) => db.test_connection().await,
            Err(_) => false,
        };

        Json(serde_json::json!({
            "status": "healthy",
            "database_connected": database_connected,
            "recipe_api_configured": resources.recipe_client_available(),
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }))
    }
}

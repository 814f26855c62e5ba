// ABOUTME: Server binary wiring configuration, logging, and dependencies together
// ABOUTME: Initializes the database and recipe client once and serves the HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

//! # Pantry Chef Server Binary
//!
//! Starts the HTTP API. Dependencies that fail to initialize are logged and
//! left unavailable; the affected routes report 503 instead of aborting
//! startup.

use anyhow::Result;
use clap::Parser;
use pantry_chef::{
    config::environment::ServerConfig,
    database::Database,
    logging,
    providers::RecipeApiClient,
    server::{HttpServer, ServerResources},
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "pantry-chef-server")]
#[command(about = "Pantry Chef - recipe search by ingredients with persistent favorites")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting Pantry Chef server");
    info!("{}", config.summary());

    let database = match Database::new(&config.database.url.to_connection_string()).await {
        Ok(db) => {
            if db.test_connection().await {
                info!("Database connection established successfully");
            }
            Some(db)
        }
        Err(e) => {
            error!("Failed to connect to database: {e}");
            None
        }
    };

    let recipe_client = match RecipeApiClient::new(&config.recipe_api) {
        Ok(client) => {
            info!("Recipe API client initialized successfully");
            Some(client)
        }
        Err(e) => {
            error!("Failed to initialize recipe API client: {e}");
            None
        }
    };

    let resources = Arc::new(ServerResources::new(database, recipe_client));
    let server = HttpServer::new(resources);

    display_available_endpoints(&config);

    if let Err(e) = server.run(config.http_port).await {
        error!("Server error: {e}");
        return Err(e);
    }

    Ok(())
}

/// Display all available API endpoints
fn display_available_endpoints(config: &ServerConfig) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    info!("   Find Recipes:    POST   http://{host}:{port}/api/find_recipes");
    info!("   Test Recipes:    GET    http://{host}:{port}/api/test-recipes");
    info!("   Add Favorite:    POST   http://{host}:{port}/api/favorites");
    info!("   List Favorites:  GET    http://{host}:{port}/api/favorites");
    info!("   Delete Favorite: DELETE http://{host}:{port}/api/favorites/{{id}}");
    info!("   Health Check:    GET    http://{host}:{port}/health");
    info!("=== End of Endpoint List ===");
}

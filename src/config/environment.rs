// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

//! Environment-based configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Default HTTP port for the API server
const DEFAULT_HTTP_PORT: u16 = 8080;

/// Default SQLite database location
const DEFAULT_DATABASE_URL: &str = "sqlite:./data/pantry_chef.db";

/// Default base URL of the recipe-search service
const DEFAULT_RECIPE_API_BASE_URL: &str = "https://api.spoonacular.com";

/// Fixed bound on outbound recipe lookups, in seconds
const DEFAULT_RECIPE_API_TIMEOUT_SECS: u64 = 10;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Environment type for logging and other configurations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// SQLite database with file path
    SQLite {
        /// Path to the database file
        path: PathBuf,
    },
    /// In-memory SQLite (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from a connection string
    #[must_use]
    pub fn parse_url(s: &str) -> Self {
        let path_str = s.strip_prefix("sqlite:").unwrap_or(s);
        if path_str == ":memory:" {
            Self::Memory
        } else {
            Self::SQLite {
                path: PathBuf::from(path_str),
            }
        }
    }

    /// Convert to a sqlx connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::parse_url(DEFAULT_DATABASE_URL)
    }
}

impl std::fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DatabaseConfig {
    /// Database location
    pub url: DatabaseUrl,
}

/// Recipe-search service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeApiConfig {
    /// API key for the recipe-search service; lookups are unavailable without it
    pub api_key: Option<String>,
    /// Base URL of the recipe-search service
    pub base_url: String,
    /// Request timeout in seconds for outbound lookups
    pub timeout_secs: u64,
}

impl Default for RecipeApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_RECIPE_API_BASE_URL.to_owned(),
            timeout_secs: DEFAULT_RECIPE_API_TIMEOUT_SECS,
        }
    }
}

/// Top-level server configuration assembled from environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Recipe-search service configuration
    pub recipe_api: RecipeApiConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with sensible defaults
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is present but unparseable.
    pub fn from_env() -> Result<Self> {
        let http_port = match env::var("HTTP_PORT") {
            Ok(v) => v
                .parse::<u16>()
                .with_context(|| format!("invalid HTTP_PORT value: {v}"))?,
            Err(_) => DEFAULT_HTTP_PORT,
        };

        let timeout_secs = match env::var("RECIPE_API_TIMEOUT_SECS") {
            Ok(v) => v
                .parse::<u64>()
                .with_context(|| format!("invalid RECIPE_API_TIMEOUT_SECS value: {v}"))?,
            Err(_) => DEFAULT_RECIPE_API_TIMEOUT_SECS,
        };

        let database_url = env::var("DATABASE_URL")
            .map_or_else(|_| DatabaseUrl::default(), |v| DatabaseUrl::parse_url(&v));

        Ok(Self {
            http_port,
            log_level: LogLevel::from_str_or_default(
                &env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
            ),
            environment: Environment::from_str_or_default(
                &env::var("ENVIRONMENT").unwrap_or_default(),
            ),
            database: DatabaseConfig { url: database_url },
            recipe_api: RecipeApiConfig {
                api_key: env::var("SPOONACULAR_API_KEY").ok().filter(|k| !k.is_empty()),
                base_url: env::var("SPOONACULAR_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_RECIPE_API_BASE_URL.to_owned()),
                timeout_secs,
            },
        })
    }

    /// One-line summary for startup logging; never includes the API key
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "http_port={} environment={} database={} recipe_api={} api_key_configured={}",
            self.http_port,
            self.environment,
            self.database.url,
            self.recipe_api.base_url,
            self.recipe_api.api_key.is_some()
        )
    }
}
